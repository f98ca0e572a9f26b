use crate::animation::spec::AnimationRecord;
use crate::constraint::expr::{BinaryOp, Expr};
use crate::constraint::rule::Constraint;
use crate::foundation::error::Ui4Result;
use crate::foundation::num::serialize_opt_num;

/// Positional, sparse encoding of a linear constraint
/// (`target <cmp> source.attr * multiplier + modifier`). Only defined fields
/// are emitted, each under a fixed key.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct AnchorRecord {
    #[serde(rename = "a0", skip_serializing_if = "Option::is_none")]
    pub target_attribute: Option<String>,
    #[serde(rename = "a1", skip_serializing_if = "Option::is_none")]
    pub comparison: Option<String>,
    #[serde(rename = "a2", skip_serializing_if = "Option::is_none")]
    pub source_view: Option<String>,
    #[serde(rename = "a3", skip_serializing_if = "Option::is_none")]
    pub source_attribute: Option<String>,
    #[serde(
        rename = "a4",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_opt_num"
    )]
    pub multiplier: Option<f64>,
    #[serde(
        rename = "a5",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_opt_num"
    )]
    pub modifier: Option<f64>,
    #[serde(rename = "a6", skip_serializing_if = "Option::is_none")]
    pub require: Option<String>,
    #[serde(flatten)]
    pub animation: AnimationRecord,
}

impl AnchorRecord {
    pub fn target(attribute: impl Into<String>) -> Self {
        Self {
            target_attribute: Some(attribute.into()),
            ..Self::default()
        }
    }

    pub fn modifier(mut self, modifier: f64) -> Self {
        self.modifier = Some(modifier);
        self
    }

    pub fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = Some(multiplier);
        self
    }

    pub fn as_dict(&self) -> Ui4Result<serde_json::Map<String, serde_json::Value>> {
        match serde_json::to_value(self)? {
            serde_json::Value::Object(map) => Ok(map),
            _ => Ok(serde_json::Map::new()),
        }
    }

    pub fn as_json(&self) -> Ui4Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Constraint {
    /// Structured form of a linear constraint; `None` for `min`/`max`, `gap`
    /// and other shapes that only the text grammar can carry.
    pub fn record(&self) -> Option<AnchorRecord> {
        let mut record = AnchorRecord::target(self.target.wire_name());
        record.comparison = Some(self.comparison.symbol().to_string());
        record.require = self.condition.as_ref().map(ToString::to_string);
        if let Some(animation) = &self.animation {
            record.animation = animation.record();
        }

        let (source, multiplier, modifier) = linear_parts(&self.value)?;
        if let Some(anchor) = source {
            record.source_view = Some(anchor.view.to_string());
            record.source_attribute = Some(anchor.attribute.wire_name().to_owned());
        }
        record.multiplier = multiplier;
        record.modifier = modifier;
        Some(record)
    }
}

type Linear = (
    Option<crate::constraint::expr::AnchorRef>,
    Option<f64>,
    Option<f64>,
);

fn linear_parts(value: &Expr) -> Option<Linear> {
    match value {
        Expr::Num(c) => Some((None, None, Some(*c))),
        Expr::Anchor(a) => Some((Some(*a), None, None)),
        Expr::Binary { op, lhs, rhs } => {
            let Expr::Num(c) = **rhs else {
                return None;
            };
            let (anchor, multiplier, modifier) = linear_parts(lhs)?;
            match op {
                BinaryOp::Add | BinaryOp::Sub => {
                    let c = if *op == BinaryOp::Sub { -c } else { c };
                    Some((anchor, multiplier, Some(modifier.unwrap_or(0.0) + c)))
                }
                BinaryOp::Mul | BinaryOp::Div if modifier.is_none() && anchor.is_some() => {
                    if *op == BinaryOp::Div && c == 0.0 {
                        return None;
                    }
                    let c = if *op == BinaryOp::Div { 1.0 / c } else { c };
                    Some((anchor, Some(multiplier.unwrap_or(1.0) * c), None))
                }
                _ => None,
            }
        }
        Expr::Gap | Expr::Call { .. } => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/constraint/record.rs"]
mod tests;
