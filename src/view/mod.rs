//! A view is a plain record composed of independent concerns. Everything that
//! needs more than one view at a time lives on [`crate::session::Session`].

pub(crate) mod events;
pub(crate) mod props;

use crate::constraint::store::ConstraintState;
use crate::foundation::ids::ViewId;

pub use events::EventState;
pub use props::PropState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityState {
    pub id: ViewId,
    /// HTML tag the client renders the view as.
    pub tag: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HierarchyState {
    /// Parent as requested by the author.
    pub(crate) parent: Option<ViewId>,
    /// Parent in the rendered tree; differs from `parent` under a container.
    pub(crate) structural_parent: Option<ViewId>,
    /// Rendered children, in order.
    pub(crate) children: Vec<ViewId>,
    pub(crate) container: Option<ViewId>,
    pub(crate) is_chrome: bool,
}

#[derive(Debug, Clone)]
pub struct View {
    pub(crate) identity: IdentityState,
    pub(crate) hierarchy: HierarchyState,
    pub(crate) constraints: ConstraintState,
    pub(crate) props: PropState,
    pub(crate) events: EventState,
}

impl View {
    pub(crate) fn new(id: ViewId, tag: impl Into<String>) -> Self {
        Self {
            identity: IdentityState {
                id,
                tag: tag.into(),
            },
            hierarchy: HierarchyState::default(),
            constraints: ConstraintState::default(),
            props: PropState::default(),
            events: EventState::default(),
        }
    }

    pub fn id(&self) -> ViewId {
        self.identity.id
    }

    pub fn tag(&self) -> &str {
        &self.identity.tag
    }

    pub fn is_chrome(&self) -> bool {
        self.hierarchy.is_chrome
    }

    pub fn container(&self) -> Option<ViewId> {
        self.hierarchy.container
    }

    pub fn constraints(&self) -> &ConstraintState {
        &self.constraints
    }

    pub fn props(&self) -> &PropState {
        &self.props
    }

    pub fn events(&self) -> &EventState {
        &self.events
    }
}
