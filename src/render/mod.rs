//! Serializer: turns session state into wire attributes and patches.

pub(crate) mod patch;

use indexmap::IndexMap;

use crate::foundation::error::Ui4Result;
use crate::foundation::ids::ViewId;
use crate::session::Session;

pub use patch::{Patch, RenderedView};

pub const ATTR_CONSTRAINTS: &str = "ui4";
pub const ATTR_STYLE: &str = "style";
pub const ATTR_TRANSITIONS: &str = "ui4css";
pub const ATTR_POST: &str = "hx-post";
pub const ATTR_TRIGGER: &str = "hx-trigger";
pub const ATTR_CONTINUATION: &str = "ui4anim";

impl Session {
    /// Wire attributes of a single view; empty values are left out.
    pub fn render_attributes(&self, id: ViewId) -> Ui4Result<IndexMap<String, String>> {
        let view = self.view(id)?;
        let mut attributes = IndexMap::new();

        let constraints = view.constraints.serialize();
        if !constraints.is_empty() {
            attributes.insert(ATTR_CONSTRAINTS.to_owned(), constraints);
        }
        let style = view.props.render_style();
        if !style.is_empty() {
            attributes.insert(ATTR_STYLE.to_owned(), style);
        }
        if let Some(transitions) = view.props.render_transitions()? {
            attributes.insert(ATTR_TRANSITIONS.to_owned(), transitions);
        }
        if let Some(trigger) = view.events.render_trigger(self.opts().debounce_delay) {
            attributes.insert(ATTR_POST.to_owned(), self.opts().event_endpoint.clone());
            attributes.insert(ATTR_TRIGGER.to_owned(), trigger);
        }
        if let Some(continuation) = self.continuations.pending_for(id) {
            attributes.insert(ATTR_CONTINUATION.to_owned(), continuation.to_string());
        }
        Ok(attributes)
    }

    /// Render `id` and its rendered subtree.
    pub fn render_view(&self, id: ViewId) -> Ui4Result<RenderedView> {
        let view = self.view(id)?;
        let children = view
            .hierarchy
            .children
            .iter()
            .map(|c| self.render_view(*c))
            .collect::<Ui4Result<Vec<_>>>()?;
        Ok(RenderedView {
            id,
            tag: view.tag().to_owned(),
            attributes: self.render_attributes(id)?,
            children,
            oob: false,
        })
    }

    /// Render the minimal set of changed subtrees and clear the dirty set.
    /// Transitions shipped here settle into plain styles afterwards.
    #[tracing::instrument(skip(self))]
    pub fn render_updates(&mut self) -> Ui4Result<Patch> {
        let roots = self.get_roots();
        let mut rendered = Vec::with_capacity(roots.len());
        for root in roots {
            let mut view = self.render_view(root)?;
            view.oob = true;
            rendered.push(view);
        }
        for id in rendered.iter().flat_map(RenderedView::ids) {
            if let Ok(v) = self.view_mut(id) {
                v.props.settle();
            }
        }
        tracing::debug!(roots = rendered.len(), "rendered updates");
        Ok(Patch {
            roots: rendered,
            continuation: None,
        })
    }

    /// Full page render from the root, e.g. for an initial load. Clears the
    /// dirty set.
    pub fn render_page(&mut self) -> Ui4Result<RenderedView> {
        self.get_roots();
        let page = self.render_view(self.root())?;
        for id in page.ids() {
            if let Ok(v) = self.view_mut(id) {
                v.props.settle();
            }
        }
        Ok(page)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/mod.rs"]
mod tests;
