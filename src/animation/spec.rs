use std::fmt;

use crate::animation::ease::Ease;
use crate::foundation::num::{fmt_num, serialize_num, serialize_opt_num};

/// CSS `animation-direction`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Normal,
    Reverse,
    Alternate,
    AlternateReverse,
}

impl Direction {
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Reverse => "reverse",
            Self::Alternate => "alternate",
            Self::AlternateReverse => "alternate-reverse",
        }
    }

    pub fn from_css_name(name: &str) -> Option<Self> {
        Some(match name {
            "normal" => Self::Normal,
            "reverse" => Self::Reverse,
            "alternate" => Self::Alternate,
            "alternate-reverse" => Self::AlternateReverse,
            _ => return None,
        })
    }
}

impl serde::Serialize for Direction {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.css_name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Iterations {
    Count(f64),
    Infinite,
}

impl fmt::Display for Iterations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => f.write_str(&fmt_num(*n)),
            Self::Infinite => f.write_str("inf"),
        }
    }
}

// JSON has no infinity literal.
impl serde::Serialize for Iterations {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Count(n) => serialize_num(*n, serializer),
            Self::Infinite => serializer.serialize_str("infinite"),
        }
    }
}

/// Seconds used when a spec leaves its duration undefined.
pub const DEFAULT_DURATION: f64 = 0.3;

/// Timing attached to a constraint or style change. Every field is optional;
/// undefined fields fall back to the client's defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationSpec {
    /// Seconds.
    pub duration: Option<f64>,
    pub ease: Option<Ease>,
    /// Seconds before the animation starts.
    pub start_delay: Option<f64>,
    /// Seconds held after the animation ends.
    pub end_delay: Option<f64>,
    pub direction: Option<Direction>,
    pub iterations: Option<Iterations>,
}

impl AnimationSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duration(mut self, secs: f64) -> Self {
        self.duration = Some(secs);
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = Some(ease);
        self
    }

    pub fn start_delay(mut self, secs: f64) -> Self {
        self.start_delay = Some(secs);
        self
    }

    pub fn end_delay(mut self, secs: f64) -> Self {
        self.end_delay = Some(secs);
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn iterations(mut self, iterations: Iterations) -> Self {
        self.iterations = Some(iterations);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.duration.is_none()
            && self.ease.is_none()
            && self.start_delay.is_none()
            && self.end_delay.is_none()
            && self.direction.is_none()
            && self.iterations.is_none()
    }

    /// Overlay `other`'s defined fields on top of `self`.
    pub fn merge(&self, other: &AnimationSpec) -> AnimationSpec {
        AnimationSpec {
            duration: other.duration.or(self.duration),
            ease: other.ease.clone().or_else(|| self.ease.clone()),
            start_delay: other.start_delay.or(self.start_delay),
            end_delay: other.end_delay.or(self.end_delay),
            direction: other.direction.or(self.direction),
            iterations: other.iterations.or(self.iterations),
        }
    }

    /// Comma-joined wire form: duration, ease, direction, start delay,
    /// end delay, iterations. Undefined fields are skipped, except that a
    /// delay always brings the earlier time values with it since times are
    /// told apart by position only.
    pub fn render(&self) -> String {
        let start_delay = self.start_delay.or(self.end_delay.map(|_| 0.0));
        let duration = self
            .duration
            .or(start_delay.map(|_| DEFAULT_DURATION));

        let mut parts: Vec<String> = Vec::with_capacity(6);
        if let Some(d) = duration {
            parts.push(format!("{}s", fmt_num(d)));
        }
        if let Some(e) = &self.ease {
            parts.push(e.css_name().to_owned());
        }
        if let Some(d) = self.direction {
            parts.push(d.css_name().to_owned());
        }
        if let Some(d) = start_delay {
            parts.push(format!("{}s", fmt_num(d)));
        }
        if let Some(d) = self.end_delay {
            parts.push(format!("{}s", fmt_num(d)));
        }
        if let Some(i) = self.iterations {
            parts.push(i.to_string());
        }
        parts.join(",")
    }

    /// Positional record (`a7`..`a12`) embedded in structured wire values.
    pub fn record(&self) -> AnimationRecord {
        AnimationRecord {
            duration: self.duration,
            ease: self.ease.clone(),
            start_delay: self.start_delay,
            end_delay: self.end_delay,
            direction: self.direction,
            iterations: self.iterations,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct AnimationRecord {
    #[serde(
        rename = "a7",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_opt_num"
    )]
    pub duration: Option<f64>,
    #[serde(rename = "a8", skip_serializing_if = "Option::is_none")]
    pub ease: Option<Ease>,
    #[serde(
        rename = "a9",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_opt_num"
    )]
    pub start_delay: Option<f64>,
    #[serde(
        rename = "a10",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_opt_num"
    )]
    pub end_delay: Option<f64>,
    #[serde(rename = "a11", skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(rename = "a12", skip_serializing_if = "Option::is_none")]
    pub iterations: Option<Iterations>,
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spec.rs"]
mod tests;
