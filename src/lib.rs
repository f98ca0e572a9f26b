//! ui4 builds constraint-laid-out web views on the server.
//!
//! Geometry is never assigned directly. Each view carries constraints on its
//! edges and size, expressed against other views, which a client-side solver
//! resolves. The public API is session-oriented:
//!
//! - Create a [`Session`] (or look one up in a [`SessionRegistry`])
//! - Build views, constrain and dock them, bind event handlers
//! - Ship [`Patch`]es of the changed subtrees after every request
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod color;
pub(crate) mod constraint;
/// Process-wide session registry.
pub mod registry;
/// Serializer for wire attributes and patches.
pub mod render;
/// Per-user view trees.
pub mod session;
pub(crate) mod view;
/// Reader for the `ui4` constraint attribute.
pub mod wire;

pub use crate::foundation::error::{Ui4Error, Ui4Result};
pub use crate::foundation::ids::{ContinuationId, SessionKey, ViewId};

pub use crate::animation::ease::Ease;
pub use crate::animation::spec::{AnimationRecord, AnimationSpec, Direction, Iterations};
pub use crate::color::Color;
pub use crate::constraint::attribute::{Attribute, Axis, Composite, Target};
pub use crate::constraint::condition::{
    Condition, Guarded, landscape, landscape_of, portrait, portrait_of,
};
pub use crate::constraint::dock::{Dock, DockParent, DockTarget};
pub use crate::constraint::expr::{AnchorRef, BinaryOp, Expr, Func, maximum, minimum};
pub use crate::constraint::record::AnchorRecord;
pub use crate::constraint::rule::{Bounds, Comparison, Constraint, ConstraintInput, at_least, at_most};
pub use crate::constraint::store::ConstraintState;
pub use crate::registry::SessionRegistry;
pub use crate::render::{Patch, RenderedView};
pub use crate::session::layout::Fit;
pub use crate::session::{Session, SessionOpts};
pub use crate::view::events::{
    Binding, BindingOptions, EventContext, EventName, EventState, Handler, ResumePoint, Step,
    StepSequence, Suspendable,
};
pub use crate::view::props::{PropState, StyleProp, StyleValue, Transition};
pub use crate::view::{HierarchyState, IdentityState, View};
pub use crate::wire::parse_ui4;
