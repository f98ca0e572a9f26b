use crate::constraint::attribute::{Attribute, Composite, Target};
use crate::constraint::dock::{Dock, DockParent, DockTarget};
use crate::constraint::rule::{Constraint, ConstraintInput};
use crate::constraint::store::ConstraintState;
use crate::foundation::error::{Ui4Error, Ui4Result};
use crate::foundation::ids::ViewId;
use crate::session::Session;

/// Size-to-content request. The value is extra space added to the fit size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fit {
    Width(f64),
    Height(f64),
    Both(f64),
}

impl Session {
    pub fn constraints(&self, view: ViewId) -> Ui4Result<&ConstraintState> {
        Ok(&self.view(view)?.constraints)
    }

    /// Constrain one attribute of `view`.
    ///
    /// `None` clears the attribute. A `=` replaces earlier equalities on the
    /// attribute, bounds accumulate, and a third equality on an axis drops
    /// the lowest-priority other one. Nothing is stored when any part of
    /// `value` is rejected.
    pub fn set(
        &mut self,
        view: ViewId,
        attribute: Attribute,
        value: impl Into<ConstraintInput>,
    ) -> Ui4Result<()> {
        let value = value.into();
        self.view(view)?;
        if matches!(value, ConstraintInput::Clear) {
            return self.clear(view, attribute);
        }
        let batch = self.prepare(view, attribute, value)?;
        self.store(view, attribute, batch)
    }

    /// Dynamic entry point: `name` may be any attribute or composite name.
    /// Composites take a `ConstraintInput::Many` with one item per part.
    pub fn set_named(&mut self, view: ViewId, name: &str, value: ConstraintInput) -> Ui4Result<()> {
        match Target::from_name(name)? {
            Target::Single(attribute) => self.set(view, attribute, value),
            Target::Composite(composite) => match value {
                ConstraintInput::Many(items) => self.set_composite(view, composite, items),
                other => Err(Ui4Error::unsupported(composite.name(), other)),
            },
        }
    }

    /// Set every part of a composite (`center`, `size`, ...) from one value
    /// per part, all or nothing.
    pub fn set_composite(
        &mut self,
        view: ViewId,
        composite: Composite,
        values: Vec<ConstraintInput>,
    ) -> Ui4Result<()> {
        let attributes = composite.attributes();
        if values.len() != attributes.len() {
            return Err(Ui4Error::unsupported(composite.name(), &values));
        }
        self.view(view)?;
        let mut prepared = Vec::with_capacity(values.len());
        for (attribute, value) in attributes.iter().zip(values) {
            let batch = match value {
                ConstraintInput::Clear => None,
                value => Some(self.prepare(view, *attribute, value)?),
            };
            prepared.push((*attribute, batch));
        }
        for (attribute, batch) in prepared {
            match batch {
                Some(batch) => self.store(view, attribute, batch)?,
                None => self.clear(view, attribute)?,
            }
        }
        Ok(())
    }

    pub fn clear(&mut self, view: ViewId, attribute: Attribute) -> Ui4Result<()> {
        self.view_mut(view)?.constraints.clear_attribute(attribute);
        self.mark_dirty(view);
        Ok(())
    }

    /// Drop every constraint on `view`.
    pub fn release(&mut self, view: ViewId) -> Ui4Result<()> {
        self.view_mut(view)?.constraints.clear_all();
        self.mark_dirty(view);
        Ok(())
    }

    /// Place `view` relative to a parent or sibling.
    ///
    /// Parent docks move `view` under the reference; sibling docks move it
    /// next to the reference, under the reference's parent.
    pub fn dock(&mut self, view: ViewId, target: DockTarget) -> Ui4Result<()> {
        self.view(view)?;
        self.view(target.view)?;
        let new_parent = match target.dock.parent() {
            DockParent::Reference => target.view,
            DockParent::ReferenceParent => self.parent(target.view)?.ok_or_else(|| {
                Ui4Error::validation(format!(
                    "cannot dock {view} next to {}, which has no parent",
                    target.view
                ))
            })?,
        };
        if view == target.view || self.is_ancestor_or_self(view, new_parent) {
            return Err(Ui4Error::validation(format!(
                "cannot dock {view} inside its own subtree"
            )));
        }

        let animation = self.current_animation().cloned();
        let mut prepared = Vec::new();
        for (attribute, expr) in target.expand() {
            let batch = ConstraintInput::Value(expr).expand(attribute, animation.as_ref())?;
            prepared.push((attribute, batch));
        }

        self.set_parent(view, Some(new_parent))?;
        tracing::debug!(view = %view, dock = ?target.dock, reference = %target.view, "docked");
        for (attribute, batch) in prepared {
            let batch = self.through_container(view, batch);
            self.store(view, attribute, batch)?;
        }
        Ok(())
    }

    pub fn dock_named(&mut self, view: ViewId, reference: ViewId, keyword: &str) -> Ui4Result<()> {
        self.dock(view, DockTarget::new(reference, Dock::from_name(keyword)?))
    }

    /// Size `view` to its content plus `extra`.
    pub fn fit(&mut self, view: ViewId, fit: Fit) -> Ui4Result<()> {
        let (width, height) = match fit {
            Fit::Width(extra) => (Some(extra), None),
            Fit::Height(extra) => (None, Some(extra)),
            Fit::Both(extra) => (Some(extra), Some(extra)),
        };
        let mut values = Vec::new();
        if let Some(extra) = width {
            values.push((Attribute::Width, view.fit_width() + extra));
        }
        if let Some(extra) = height {
            values.push((Attribute::Height, view.fit_height() + extra));
        }
        self.view(view)?;
        let mut prepared = Vec::new();
        for (attribute, expr) in values {
            prepared.push((attribute, self.prepare(view, attribute, expr.into())?));
        }
        for (attribute, batch) in prepared {
            self.store(view, attribute, batch)?;
        }
        Ok(())
    }

    /// Validate and expand without touching any state.
    fn prepare(
        &self,
        view: ViewId,
        attribute: Attribute,
        value: ConstraintInput,
    ) -> Ui4Result<Vec<Constraint>> {
        let batch = value.expand(attribute, self.current_animation())?;
        for c in &batch {
            for anchor in c.value.anchors() {
                self.view(anchor.view)?;
            }
        }
        Ok(self.through_container(view, batch))
    }

    /// Anchors on the author-visible parent point at the parent that is
    /// actually rendered around `view`.
    fn through_container(&self, view: ViewId, mut batch: Vec<Constraint>) -> Vec<Constraint> {
        let Some(v) = self.views.get(&view) else {
            return batch;
        };
        let (Some(visual), Some(structural)) =
            (v.hierarchy.parent, v.hierarchy.structural_parent)
        else {
            return batch;
        };
        if visual != structural {
            for c in &mut batch {
                c.value.map_anchors(&mut |a| {
                    if a.view == visual {
                        a.view = structural;
                    }
                });
            }
        }
        batch
    }

    fn store(&mut self, view: ViewId, attribute: Attribute, batch: Vec<Constraint>) -> Ui4Result<()> {
        let dropped = self.view_mut(view)?.constraints.assign(attribute, batch);
        if !dropped.is_empty() {
            tracing::debug!(view = %view, set = %attribute, dropped = ?dropped, "pruned constraints");
        }
        self.mark_dirty(view);
        Ok(())
    }

    /// Point anchors on `from` at `to` after `view` moved between them.
    pub(crate) fn rebase_anchors(&mut self, view: ViewId, from: ViewId, to: ViewId) {
        let Some(v) = self.views.get_mut(&view) else {
            return;
        };
        let mut changed = false;
        for c in v.constraints.iter_mut() {
            c.value.map_anchors(&mut |a| {
                if a.view == from {
                    a.view = to;
                    changed = true;
                }
            });
        }
        if changed {
            self.mark_dirty(view);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/layout.rs"]
mod tests;
