//! Reader for the `ui4` constraint attribute, the inverse of
//! [`crate::constraint::store::ConstraintState::serialize`].

pub(crate) mod lexer;
pub(crate) mod parser;

pub use parser::parse_ui4;
