use indexmap::IndexMap;

use crate::foundation::error::Ui4Result;
use crate::foundation::ids::{ContinuationId, ViewId};

/// One view and its subtree as shipped to the client.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RenderedView {
    pub id: ViewId,
    pub tag: String,
    /// Wire attributes, only the non-empty ones, in a fixed order.
    pub attributes: IndexMap<String, String>,
    pub children: Vec<RenderedView>,
    /// Swapped in out-of-band, i.e. the root of an update.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub oob: bool,
}

impl RenderedView {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Find `id` in this subtree.
    pub fn find(&self, id: ViewId) -> Option<&RenderedView> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    /// Ids in this subtree, depth-first.
    pub fn ids(&self) -> Vec<ViewId> {
        let mut out = vec![self.id];
        for child in &self.children {
            out.extend(child.ids());
        }
        out
    }
}

/// Response to a page load, event or continuation request.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct Patch {
    pub roots: Vec<RenderedView>,
    /// Present while a suspendable handler waits for its follow-up request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuation: Option<ContinuationId>,
}

impl Patch {
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty() && self.continuation.is_none()
    }

    pub fn root_ids(&self) -> Vec<ViewId> {
        self.roots.iter().map(|r| r.id).collect()
    }

    pub fn find(&self, id: ViewId) -> Option<&RenderedView> {
        self.roots.iter().find_map(|r| r.find(id))
    }

    pub fn to_json(&self) -> Ui4Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Ui4Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
