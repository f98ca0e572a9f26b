pub(crate) mod attribute;
pub(crate) mod condition;
pub(crate) mod dock;
pub(crate) mod expr;
pub(crate) mod record;
pub(crate) mod rule;
pub(crate) mod store;
