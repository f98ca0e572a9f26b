use std::fmt;
use std::ops::BitAnd;

use crate::constraint::expr::{AnchorRef, Expr};
use crate::constraint::rule::Comparison;
use crate::foundation::ids::ViewId;

/// Boolean guard evaluated by the client against live geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Viewport (or the given view) is taller than it is wide.
    Portrait(Option<ViewId>),
    Landscape(Option<ViewId>),
    Compare {
        lhs: Expr,
        comparison: Comparison,
        rhs: Expr,
    },
    All(Vec<Condition>),
}

pub fn portrait() -> Condition {
    Condition::Portrait(None)
}

pub fn landscape() -> Condition {
    Condition::Landscape(None)
}

pub fn portrait_of(view: ViewId) -> Condition {
    Condition::Portrait(Some(view))
}

pub fn landscape_of(view: ViewId) -> Condition {
    Condition::Landscape(Some(view))
}

impl Condition {
    /// Stable text used both on the wire and as the slot key in the store.
    pub fn key(&self) -> String {
        self.to_string()
    }

    fn parts(self) -> Vec<Condition> {
        match self {
            Self::All(parts) => parts,
            other => vec![other],
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Portrait(None) => f.write_str("portrait"),
            Self::Landscape(None) => f.write_str("landscape"),
            Self::Portrait(Some(v)) => write!(f, "portrait({v})"),
            Self::Landscape(Some(v)) => write!(f, "landscape({v})"),
            Self::Compare {
                lhs,
                comparison,
                rhs,
            } => write!(f, "{lhs}{}{rhs}", comparison.symbol()),
            Self::All(parts) => {
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        f.write_str("&")?;
                    }
                    write!(f, "{part}")?;
                }
                Ok(())
            }
        }
    }
}

/// A value that only applies while its guard holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Guarded {
    pub condition: Condition,
    pub value: Expr,
}

impl BitAnd<Condition> for Condition {
    type Output = Condition;

    fn bitand(self, rhs: Condition) -> Condition {
        let mut parts = self.parts();
        parts.extend(rhs.parts());
        Condition::All(parts)
    }
}

macro_rules! impl_guard {
    ($($rhs:ty),*) => {
        $(
            impl BitAnd<$rhs> for Condition {
                type Output = Guarded;

                fn bitand(self, rhs: $rhs) -> Guarded {
                    Guarded {
                        condition: self,
                        value: rhs.into(),
                    }
                }
            }
        )*
    };
}

impl_guard!(Expr, AnchorRef, f64);

impl fmt::Display for Guarded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Expr {
    pub fn gt(self, rhs: impl Into<Expr>) -> Condition {
        Condition::Compare {
            lhs: self,
            comparison: Comparison::Gt,
            rhs: rhs.into(),
        }
    }

    pub fn lt(self, rhs: impl Into<Expr>) -> Condition {
        Condition::Compare {
            lhs: self,
            comparison: Comparison::Lt,
            rhs: rhs.into(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/constraint/condition.rs"]
mod tests;
