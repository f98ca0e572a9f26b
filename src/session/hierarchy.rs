use crate::foundation::error::{Ui4Error, Ui4Result};
use crate::foundation::ids::ViewId;
use crate::session::Session;

impl Session {
    pub(crate) fn structural_parent_of(&self, id: ViewId) -> Option<ViewId> {
        self.views
            .get(&id)
            .and_then(|v| v.hierarchy.structural_parent)
    }

    /// Parent the author asked for.
    pub fn parent(&self, view: ViewId) -> Ui4Result<Option<ViewId>> {
        Ok(self.view(view)?.hierarchy.parent)
    }

    /// Parent in the rendered tree; the parent's container when one is active.
    pub fn structural_parent(&self, view: ViewId) -> Ui4Result<Option<ViewId>> {
        Ok(self.view(view)?.hierarchy.structural_parent)
    }

    /// Rendered children. A view with a container lists the container (and
    /// any chrome) rather than the views placed in it.
    pub fn children(&self, view: ViewId) -> Ui4Result<Vec<ViewId>> {
        Ok(self.view(view)?.hierarchy.children.clone())
    }

    /// Children as the author added them, looking through a container.
    pub fn visual_children(&self, view: ViewId) -> Ui4Result<Vec<ViewId>> {
        let v = self.view(view)?;
        let holder = match v.hierarchy.container {
            Some(c) => self.view(c)?,
            None => v,
        };
        Ok(holder
            .hierarchy
            .children
            .iter()
            .copied()
            .filter(|c| {
                self.views
                    .get(c)
                    .is_some_and(|cv| cv.hierarchy.parent == Some(view))
            })
            .collect())
    }

    pub fn container(&self, view: ViewId) -> Ui4Result<Option<ViewId>> {
        Ok(self.view(view)?.hierarchy.container)
    }

    /// Whether `ancestor` is `view` or above it in the rendered tree.
    pub fn is_ancestor_or_self(&self, ancestor: ViewId, view: ViewId) -> bool {
        let mut cursor = Some(view);
        while let Some(v) = cursor {
            if v == ancestor {
                return true;
            }
            cursor = self.structural_parent_of(v);
        }
        false
    }

    /// Rendered subtree below `view`, depth-first, excluding `view` itself.
    pub fn descendants(&self, view: ViewId) -> Vec<ViewId> {
        let mut out = Vec::new();
        let mut stack: Vec<ViewId> = match self.views.get(&view) {
            Some(v) => v.hierarchy.children.iter().rev().copied().collect(),
            None => return out,
        };
        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some(v) = self.views.get(&id) {
                stack.extend(v.hierarchy.children.iter().rev().copied());
            }
        }
        out
    }

    /// Where a child of `parent` actually lands.
    fn placement(&self, child: ViewId, parent: ViewId) -> Ui4Result<ViewId> {
        let is_chrome = self.view(child)?.hierarchy.is_chrome;
        let p = self.view(parent)?;
        Ok(match p.hierarchy.container {
            Some(c) if !is_chrome && c != child => c,
            _ => parent,
        })
    }

    /// Move `child` under `parent`, or detach it with `None`.
    pub fn set_parent(&mut self, child: ViewId, parent: Option<ViewId>) -> Ui4Result<()> {
        self.view(child)?;
        let structural = match parent {
            Some(p) => {
                let s = self.placement(child, p)?;
                if self.is_ancestor_or_self(child, s) {
                    return Err(Ui4Error::validation(format!(
                        "cannot place {child} under its own descendant {p}"
                    )));
                }
                Some(s)
            }
            None => None,
        };

        let before = {
            let h = &self.view(child)?.hierarchy;
            (h.parent, h.structural_parent)
        };
        self.detach(child);
        if let Some(s) = structural {
            self.view_mut(s)?.hierarchy.children.push(child);
            self.mark_dirty(s);
        }
        let h = &mut self.view_mut(child)?.hierarchy;
        h.parent = parent;
        h.structural_parent = structural;

        // Anchors on a containered parent always name the container.
        if let (Some(visual), Some(old)) = before
            && visual != old
        {
            self.rebase_anchors(child, old, visual);
        }
        if let (Some(visual), Some(new)) = (parent, structural)
            && visual != new
        {
            self.rebase_anchors(child, visual, new);
        }
        tracing::debug!(view = %child, parent = ?parent, structural = ?structural, "reparented");
        Ok(())
    }

    fn detach(&mut self, child: ViewId) {
        let Some(old) = self.structural_parent_of(child) else {
            return;
        };
        if let Some(v) = self.views.get_mut(&old) {
            v.hierarchy.children.retain(|c| *c != child);
        }
        if let Some(v) = self.views.get_mut(&child) {
            v.hierarchy.parent = None;
            v.hierarchy.structural_parent = None;
        }
        self.mark_dirty(old);
    }

    pub fn add_child(&mut self, parent: ViewId, child: ViewId) -> Ui4Result<()> {
        self.set_parent(child, Some(parent))
    }

    pub fn add_children(&mut self, parent: ViewId, children: &[ViewId]) -> Ui4Result<()> {
        for child in children {
            self.set_parent(*child, Some(parent))?;
        }
        Ok(())
    }

    /// Chrome views stay direct children of their parent even when it has
    /// a container.
    pub fn set_chrome(&mut self, view: ViewId, is_chrome: bool) -> Ui4Result<()> {
        let v = self.view_mut(view)?;
        if v.hierarchy.is_chrome == is_chrome {
            return Ok(());
        }
        v.hierarchy.is_chrome = is_chrome;
        let parent = v.hierarchy.parent;
        match parent {
            Some(p) => self.set_parent(view, Some(p)),
            None => Ok(()),
        }
    }

    /// Route future and current non-chrome children of `view` into
    /// `container`, or back out with `None`.
    pub fn set_container(&mut self, view: ViewId, container: Option<ViewId>) -> Ui4Result<()> {
        self.view(view)?;
        if let Some(c) = container {
            self.view(c)?;
            if c == view || self.is_ancestor_or_self(c, view) {
                return Err(Ui4Error::validation(format!(
                    "{c} cannot contain its own ancestor {view}"
                )));
            }
        }

        let moved = self.visual_children(view)?;
        let old = self.view(view)?.hierarchy.container;
        self.view_mut(view)?.hierarchy.container = None;
        let target = match container {
            Some(c) => {
                self.view_mut(c)?.hierarchy.is_chrome = true;
                self.set_parent(c, Some(view))?;
                self.view_mut(view)?.hierarchy.container = Some(c);
                c
            }
            None => view,
        };

        for child in moved {
            if child == target || self.view(child)?.hierarchy.is_chrome {
                continue;
            }
            self.set_parent(child, Some(view))?;
        }
        if let Some(old) = old {
            self.mark_dirty(old);
        }
        self.mark_dirty(view);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/hierarchy.rs"]
mod tests;
