use std::fmt;
use std::ops::BitAnd;

use crate::animation::spec::AnimationSpec;
use crate::constraint::attribute::Attribute;
use crate::constraint::condition::{Condition, Guarded};
use crate::constraint::expr::{AnchorRef, Expr};
use crate::foundation::error::{Ui4Error, Ui4Result};

/// Comparison between a target attribute and its value. Declaration order
/// is the order clauses are emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Comparison {
    Eq,
    Lt,
    Gt,
}

impl Comparison {
    pub fn symbol(self) -> char {
        match self {
            Self::Eq => '=',
            Self::Lt => '<',
            Self::Gt => '>',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '=' => Some(Self::Eq),
            '<' => Some(Self::Lt),
            '>' => Some(Self::Gt),
            _ => None,
        }
    }
}

/// One stored rule for one attribute of one view.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub target: Attribute,
    pub comparison: Comparison,
    pub value: Expr,
    pub condition: Option<Condition>,
    pub animation: Option<AnimationSpec>,
}

impl Constraint {
    pub fn new(target: Attribute, comparison: Comparison, value: Expr) -> Self {
        Self {
            target,
            comparison,
            value,
            condition: None,
            animation: None,
        }
    }

    pub fn with_condition(mut self, condition: Option<Condition>) -> Self {
        self.condition = condition;
        self
    }

    pub fn with_animation(mut self, animation: Option<AnimationSpec>) -> Self {
        self.animation = animation;
        self
    }

    /// `[condition?]target<cmp>value[:animation]`
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        if let Some(condition) = &self.condition {
            out.push_str(&condition.to_string());
            out.push('?');
        }
        out.push_str(self.target.wire_name());
        out.push(self.comparison.symbol());
        out.push_str(&self.value.to_string());
        if let Some(animation) = &self.animation {
            let rendered = animation.render();
            if !rendered.is_empty() {
                out.push(':');
                out.push_str(&rendered);
            }
        }
        out
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl Expr {
    /// Render as an equality clause against `target`.
    pub fn serialize(&self, target: &str) -> String {
        format!("{target}={self}")
    }
}

/// One-or-more inequality bounds against the same target.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    pub comparison: Comparison,
    pub values: Vec<Expr>,
    pub condition: Option<Condition>,
}

/// Target must be greater than every given expression.
pub fn at_least<E: Into<Expr>>(values: impl IntoIterator<Item = E>) -> Bounds {
    Bounds {
        comparison: Comparison::Gt,
        values: values.into_iter().map(Into::into).collect(),
        condition: None,
    }
}

/// Target must be less than every given expression.
pub fn at_most<E: Into<Expr>>(values: impl IntoIterator<Item = E>) -> Bounds {
    Bounds {
        comparison: Comparison::Lt,
        values: values.into_iter().map(Into::into).collect(),
        condition: None,
    }
}

impl Bounds {
    pub fn serialize(&self, target: &str) -> String {
        self.values
            .iter()
            .map(|v| format!("{target}{}{v}", self.comparison.symbol()))
            .collect::<Vec<_>>()
            .join(";")
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize(""))
    }
}

impl BitAnd<Bounds> for Condition {
    type Output = Bounds;

    fn bitand(self, mut rhs: Bounds) -> Bounds {
        rhs.condition = Some(self);
        rhs
    }
}

/// Anything that can be assigned to an attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstraintInput {
    /// Remove the attribute's constraints.
    Clear,
    Value(Expr),
    Guarded(Guarded),
    Bounds(Bounds),
    /// Several independent constraints for the same target.
    Many(Vec<ConstraintInput>),
}

impl ConstraintInput {
    /// Expand into concrete constraints for `target`, validating every part
    /// before anything is stored.
    pub(crate) fn expand(
        self,
        target: Attribute,
        animation: Option<&AnimationSpec>,
    ) -> Ui4Result<Vec<Constraint>> {
        if !target.is_settable() {
            return Err(Ui4Error::unsupported(target.snake_name(), &self));
        }
        let mut out = Vec::new();
        self.expand_into(target, animation, true, &mut out)?;
        Ok(out)
    }

    fn expand_into(
        self,
        target: Attribute,
        animation: Option<&AnimationSpec>,
        top_level: bool,
        out: &mut Vec<Constraint>,
    ) -> Ui4Result<()> {
        let animation = animation.cloned();
        match self {
            Self::Clear => {
                return Err(Ui4Error::unsupported(target.snake_name(), "None in a list"));
            }
            Self::Value(value) => {
                check_finite(target, &value)?;
                out.push(Constraint::new(target, Comparison::Eq, value).with_animation(animation));
            }
            Self::Guarded(Guarded { condition, value }) => {
                check_finite(target, &value)?;
                out.push(
                    Constraint::new(target, Comparison::Eq, value)
                        .with_condition(Some(condition))
                        .with_animation(animation),
                );
            }
            Self::Bounds(bounds) => {
                if bounds.values.is_empty() {
                    return Err(Ui4Error::unsupported(target.snake_name(), &bounds));
                }
                for value in bounds.values {
                    check_finite(target, &value)?;
                    out.push(
                        Constraint::new(target, bounds.comparison, value)
                            .with_condition(bounds.condition.clone())
                            .with_animation(animation.clone()),
                    );
                }
            }
            Self::Many(items) => {
                if !top_level {
                    return Err(Ui4Error::unsupported(target.snake_name(), &items));
                }
                for item in items {
                    item.expand_into(target, animation.as_ref(), false, out)?;
                }
            }
        }
        Ok(())
    }
}

fn check_finite(target: Attribute, value: &Expr) -> Ui4Result<()> {
    fn finite(e: &Expr) -> bool {
        match e {
            Expr::Num(v) => v.is_finite(),
            Expr::Binary { lhs, rhs, .. } => finite(lhs) && finite(rhs),
            Expr::Call { args, .. } => !args.is_empty() && args.iter().all(finite),
            Expr::Gap | Expr::Anchor(_) => true,
        }
    }
    if finite(value) {
        Ok(())
    } else {
        Err(Ui4Error::unsupported(target.snake_name(), value))
    }
}

impl From<Expr> for ConstraintInput {
    fn from(e: Expr) -> Self {
        Self::Value(e)
    }
}

impl From<f64> for ConstraintInput {
    fn from(v: f64) -> Self {
        Self::Value(Expr::Num(v))
    }
}

impl From<i32> for ConstraintInput {
    fn from(v: i32) -> Self {
        Self::Value(Expr::from(v))
    }
}

impl From<AnchorRef> for ConstraintInput {
    fn from(a: AnchorRef) -> Self {
        Self::Value(Expr::Anchor(a))
    }
}

impl From<Guarded> for ConstraintInput {
    fn from(g: Guarded) -> Self {
        Self::Guarded(g)
    }
}

impl From<Bounds> for ConstraintInput {
    fn from(b: Bounds) -> Self {
        Self::Bounds(b)
    }
}

impl<T: Into<ConstraintInput>> From<Option<T>> for ConstraintInput {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Clear, Into::into)
    }
}

impl From<Vec<ConstraintInput>> for ConstraintInput {
    fn from(items: Vec<ConstraintInput>) -> Self {
        Self::Many(items)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/constraint/rule.rs"]
mod tests;
