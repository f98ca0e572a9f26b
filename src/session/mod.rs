//! Per-user view tree and everything scoped to it: id allocation, dirty
//! tracking, suspended handlers and the animation context.

pub(crate) mod continuation;
pub(crate) mod dirty;
pub(crate) mod dispatch;
pub(crate) mod hierarchy;
pub(crate) mod layout;
pub(crate) mod opts;

use std::collections::{HashMap, HashSet};

use serde_json::Value;

use crate::animation::spec::AnimationSpec;
use crate::foundation::error::{Ui4Error, Ui4Result};
use crate::foundation::ids::ViewId;
use crate::view::View;
use crate::view::props::{StyleProp, StyleValue};

use continuation::ContinuationTable;
use dirty::DirtySet;
pub use opts::SessionOpts;

/// One user's views. Requests against a session are handled one at a time.
pub struct Session {
    opts: SessionOpts,
    views: HashMap<ViewId, View>,
    next_id: u32,
    root: ViewId,
    pub(crate) dirty: DirtySet,
    pub(crate) continuations: ContinuationTable,
    animation: Vec<AnimationSpec>,
}

impl Session {
    /// Create a session with its root view already registered and dirty, so
    /// the first render ships the whole page.
    pub fn new(opts: SessionOpts) -> Self {
        let mut session = Self {
            opts,
            views: HashMap::new(),
            next_id: 1,
            root: ViewId(1),
            dirty: DirtySet::default(),
            continuations: ContinuationTable::default(),
            animation: Vec::new(),
        };
        session.root = session.create_view_with_tag("body");
        session.mark_dirty(session.root);
        session
    }

    pub fn opts(&self) -> &SessionOpts {
        &self.opts
    }

    pub fn root(&self) -> ViewId {
        self.root
    }

    pub fn create_view(&mut self) -> ViewId {
        self.create_view_with_tag("div")
    }

    pub fn create_view_with_tag(&mut self, tag: impl Into<String>) -> ViewId {
        let id = ViewId(self.next_id);
        self.next_id += 1;
        self.views.insert(id, View::new(id, tag));
        tracing::trace!(view = %id, "registered view");
        id
    }

    /// Create a view and attach it under `parent` in one step.
    pub fn create_child(&mut self, parent: ViewId) -> Ui4Result<ViewId> {
        self.view(parent)?;
        let id = self.create_view();
        self.set_parent(id, Some(parent))?;
        Ok(id)
    }

    pub fn view(&self, id: ViewId) -> Ui4Result<&View> {
        self.views.get(&id).ok_or_else(|| Ui4Error::unknown_view(id))
    }

    pub(crate) fn view_mut(&mut self, id: ViewId) -> Ui4Result<&mut View> {
        self.views.get_mut(&id).ok_or_else(|| Ui4Error::unknown_view(id))
    }

    pub fn contains(&self, id: ViewId) -> bool {
        self.views.contains_key(&id)
    }

    /// Resolve a wire id (`id7`) to a registered view.
    pub fn lookup(&self, wire_id: &str) -> Ui4Result<ViewId> {
        let id = ViewId::parse(wire_id)?;
        self.view(id)?;
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Drop every view not reachable from the root, with its dirty flag and
    /// continuations. Returns how many were removed.
    pub fn sweep(&mut self) -> usize {
        let mut reachable: HashSet<ViewId> = self.descendants(self.root).into_iter().collect();
        reachable.insert(self.root);
        let doomed: Vec<ViewId> = self
            .views
            .keys()
            .copied()
            .filter(|id| !reachable.contains(id))
            .collect();
        for id in &doomed {
            self.views.remove(id);
            self.dirty.remove(*id);
            self.continuations.discard_view(*id);
        }
        if !doomed.is_empty() {
            tracing::debug!(removed = doomed.len(), "swept unreachable views");
        }
        doomed.len()
    }

    /// Run `f` with `spec` layered on top of the active animation context.
    /// Constraint and style changes made inside are animated. A context
    /// without a duration gets the session's default one.
    pub fn animate<R>(&mut self, spec: AnimationSpec, f: impl FnOnce(&mut Self) -> R) -> R {
        let mut merged = match self.animation.last() {
            Some(outer) => outer.merge(&spec),
            None => spec,
        };
        if merged.duration.is_none() {
            merged.duration = Some(self.opts.default_animation_duration);
        }
        self.animation.push(merged);
        let out = f(self);
        self.animation.pop();
        out
    }

    pub fn current_animation(&self) -> Option<&AnimationSpec> {
        self.animation.last()
    }

    /// Set a free-form property. `Value::Null` removes it.
    pub fn set_property(
        &mut self,
        view: ViewId,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Ui4Result<()> {
        self.view_mut(view)?
            .props
            .set_property(name.into(), value.into());
        self.mark_dirty(view);
        Ok(())
    }

    pub fn property(&self, view: ViewId, name: &str) -> Ui4Result<Option<&Value>> {
        Ok(self.view(view)?.props.property(name))
    }

    /// Set a CSS-backed style property; queued as a transition when an
    /// animation context is active.
    pub fn set_style(
        &mut self,
        view: ViewId,
        prop: StyleProp,
        value: impl Into<StyleValue>,
    ) -> Ui4Result<()> {
        let value = value.into();
        let css = prop.convert(&value)?;
        let animation = self.animation.last().cloned();
        self.view_mut(view)?
            .props
            .apply(prop.css_name(), css, animation.as_ref());
        self.mark_dirty(view);
        Ok(())
    }

    pub fn set_style_by_name(
        &mut self,
        view: ViewId,
        name: &str,
        value: impl Into<StyleValue>,
    ) -> Ui4Result<()> {
        self.set_style(view, StyleProp::from_name(name)?, value)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionOpts::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/mod.rs"]
mod tests;
