use std::collections::BTreeSet;

use crate::foundation::ids::ViewId;
use crate::session::Session;

/// Views whose rendered output changed since the last patch.
#[derive(Debug, Default)]
pub(crate) struct DirtySet {
    views: BTreeSet<ViewId>,
}

impl DirtySet {
    pub(crate) fn insert(&mut self, id: ViewId) -> bool {
        self.views.insert(id)
    }

    pub(crate) fn remove(&mut self, id: ViewId) -> bool {
        self.views.remove(&id)
    }

    pub(crate) fn contains(&self, id: ViewId) -> bool {
        self.views.contains(&id)
    }
}

impl Session {
    pub fn mark_dirty(&mut self, view: ViewId) {
        if self.dirty.insert(view) {
            tracing::trace!(view = %view, "marked dirty");
        }
    }

    pub fn is_dirty(&self, view: ViewId) -> bool {
        self.dirty.contains(view)
    }

    /// Dirty views in ascending id order.
    pub fn dirty_views(&self) -> Vec<ViewId> {
        self.dirty.views.iter().copied().collect()
    }

    /// Topmost dirty views: a dirty view with a dirty ancestor is covered by
    /// that ancestor. Clears the dirty set. Roots come out in ascending id
    /// order and never overlap.
    pub fn get_roots(&mut self) -> Vec<ViewId> {
        let dirty = std::mem::take(&mut self.dirty.views);
        dirty
            .iter()
            .copied()
            .filter(|id| self.contains(*id))
            .filter(|id| {
                let mut cursor = self.structural_parent_of(*id);
                while let Some(p) = cursor {
                    if dirty.contains(&p) {
                        return false;
                    }
                    cursor = self.structural_parent_of(p);
                }
                true
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/dirty.rs"]
mod tests;
