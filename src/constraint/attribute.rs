use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use crate::foundation::error::{Ui4Error, Ui4Result};

/// A single geometric attribute of a view.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Left,
    Right,
    Top,
    Bottom,
    Width,
    Height,
    CenterX,
    CenterY,
    /// Width needed to fit the children, resolved client-side. Read-only.
    FitWidth,
    /// Height needed to fit the children, resolved client-side. Read-only.
    FitHeight,
}

/// Layout axis an attribute belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// How a dock modifier applies to an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Edge {
    Leading,
    Trailing,
    Neutral,
}

impl Attribute {
    pub const ALL: [Self; 10] = [
        Self::Left,
        Self::Right,
        Self::Top,
        Self::Bottom,
        Self::Width,
        Self::Height,
        Self::CenterX,
        Self::CenterY,
        Self::FitWidth,
        Self::FitHeight,
    ];

    /// Name used in the `ui4` wire attribute.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Width => "width",
            Self::Height => "height",
            Self::CenterX => "centerX",
            Self::CenterY => "centerY",
            Self::FitWidth => "fitWidth",
            Self::FitHeight => "fitHeight",
        }
    }

    pub fn snake_name(self) -> &'static str {
        match self {
            Self::CenterX => "center_x",
            Self::CenterY => "center_y",
            Self::FitWidth => "fit_width",
            Self::FitHeight => "fit_height",
            other => other.wire_name(),
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right | Self::Width | Self::CenterX | Self::FitWidth => {
                Axis::Horizontal
            }
            Self::Top | Self::Bottom | Self::Height | Self::CenterY | Self::FitHeight => {
                Axis::Vertical
            }
        }
    }

    pub(crate) fn edge(self) -> Edge {
        match self {
            Self::Left | Self::Top => Edge::Leading,
            Self::Right | Self::Bottom => Edge::Trailing,
            _ => Edge::Neutral,
        }
    }

    /// `fit_*` attributes are computed by the client and cannot be constrained.
    pub fn is_settable(self) -> bool {
        !matches!(self, Self::FitWidth | Self::FitHeight)
    }

    /// Resolve a snake name, wire name or alias through the static name table.
    pub fn from_name(name: &str) -> Ui4Result<Self> {
        match NAME_TABLE.get(name) {
            Some(Target::Single(attr)) => Ok(*attr),
            _ => Err(Ui4Error::UnknownAttribute {
                name: name.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl Axis {
    /// Pruning priority for the axis, highest first.
    pub(crate) fn priority(self) -> [Attribute; 4] {
        match self {
            Self::Horizontal => [
                Attribute::Width,
                Attribute::Left,
                Attribute::CenterX,
                Attribute::Right,
            ],
            Self::Vertical => [
                Attribute::Height,
                Attribute::Top,
                Attribute::CenterY,
                Attribute::Bottom,
            ],
        }
    }
}

/// Multi-attribute shorthands that set several attributes from one sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Composite {
    Center,
    Position,
    Size,
    Frame,
}

impl Composite {
    pub fn attributes(self) -> &'static [Attribute] {
        match self {
            Self::Center => &[Attribute::CenterX, Attribute::CenterY],
            Self::Position => &[Attribute::Left, Attribute::Top],
            Self::Size => &[Attribute::Width, Attribute::Height],
            Self::Frame => &[
                Attribute::Left,
                Attribute::Top,
                Attribute::Width,
                Attribute::Height,
            ],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Position => "position",
            Self::Size => "size",
            Self::Frame => "frame",
        }
    }
}

/// What a settable name resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Single(Attribute),
    Composite(Composite),
}

impl Target {
    pub fn from_name(name: &str) -> Ui4Result<Self> {
        NAME_TABLE
            .get(name)
            .copied()
            .ok_or_else(|| Ui4Error::UnknownAttribute {
                name: name.to_owned(),
            })
    }
}

static NAME_TABLE: LazyLock<HashMap<&'static str, Target>> = LazyLock::new(|| {
    let mut table = HashMap::new();
    for attr in Attribute::ALL {
        table.insert(attr.snake_name(), Target::Single(attr));
        table.insert(attr.wire_name(), Target::Single(attr));
    }
    table.insert("x", Target::Single(Attribute::Left));
    table.insert("y", Target::Single(Attribute::Top));
    for composite in [
        Composite::Center,
        Composite::Position,
        Composite::Size,
        Composite::Frame,
    ] {
        table.insert(composite.name(), Target::Composite(composite));
    }
    table.insert("box", Target::Composite(Composite::Frame));
    table
});

#[cfg(test)]
#[path = "../../tests/unit/constraint/attribute.rs"]
mod tests;
