/// CSS timing function names understood by the client.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Ease {
    /// Constant speed.
    Linear,
    /// CSS default curve.
    Ease,
    /// Slow start.
    EaseIn,
    /// Slow end.
    EaseOut,
    /// Slow start and end.
    EaseInOut,
    /// Any other timing function text (`cubic-bezier(...)`, `steps(4)`).
    Custom(String),
}

impl Ease {
    /// Name rendered on the wire.
    pub fn css_name(&self) -> &str {
        match self {
            Self::Linear => "linear",
            Self::Ease => "ease",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
            Self::Custom(name) => name,
        }
    }

    /// Map a wire name back to a variant; unknown names become `Custom`.
    pub fn from_css_name(name: &str) -> Self {
        match name {
            "linear" => Self::Linear,
            "ease" => Self::Ease,
            "ease-in" => Self::EaseIn,
            "ease-out" => Self::EaseOut,
            "ease-in-out" => Self::EaseInOut,
            other => Self::Custom(other.to_owned()),
        }
    }
}

impl serde::Serialize for Ease {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.css_name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
