use std::ops::{Add, Sub};

use crate::constraint::attribute::Attribute;
use crate::constraint::attribute::Edge;
use crate::constraint::expr::{BinaryOp, Expr};
use crate::foundation::error::{Ui4Error, Ui4Result};
use crate::foundation::ids::ViewId;

/// Declarative placement relative to a parent or a sibling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dock {
    Top,
    Left,
    Bottom,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Center,
    TopCenter,
    BottomCenter,
    LeftCenter,
    RightCenter,
    Sides,
    TopAndBottom,
    All,
    Above,
    Below,
    LeftOf,
    RightOf,
}

/// Where a docked view ends up in the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockParent {
    /// Under the reference view itself.
    Reference,
    /// Next to the reference view, under its parent.
    ReferenceParent,
}

impl Dock {
    pub fn from_name(name: &str) -> Ui4Result<Self> {
        Ok(match name {
            "top" => Self::Top,
            "left" => Self::Left,
            "bottom" => Self::Bottom,
            "right" => Self::Right,
            "top_left" => Self::TopLeft,
            "top_right" => Self::TopRight,
            "bottom_left" => Self::BottomLeft,
            "bottom_right" => Self::BottomRight,
            "center" => Self::Center,
            "top_center" => Self::TopCenter,
            "bottom_center" => Self::BottomCenter,
            "left_center" => Self::LeftCenter,
            "right_center" => Self::RightCenter,
            "sides" => Self::Sides,
            "top_and_bottom" => Self::TopAndBottom,
            "all" => Self::All,
            "above" => Self::Above,
            "below" => Self::Below,
            "left_of" => Self::LeftOf,
            "right_of" => Self::RightOf,
            other => {
                return Err(Ui4Error::UnknownDock {
                    keyword: other.to_owned(),
                });
            }
        })
    }

    pub fn parent(self) -> DockParent {
        match self {
            Self::Above | Self::Below | Self::LeftOf | Self::RightOf => DockParent::ReferenceParent,
            _ => DockParent::Reference,
        }
    }

    fn parent_attributes(self) -> &'static [Attribute] {
        use Attribute::*;
        match self {
            Self::Top => &[Top, Left, Right],
            Self::Left => &[Left, Top, Bottom],
            Self::Bottom => &[Bottom, Left, Right],
            Self::Right => &[Right, Top, Bottom],
            Self::TopLeft => &[Top, Left],
            Self::TopRight => &[Top, Right],
            Self::BottomLeft => &[Bottom, Left],
            Self::BottomRight => &[Bottom, Right],
            Self::Center => &[CenterX, CenterY],
            Self::TopCenter => &[Top, CenterX],
            Self::BottomCenter => &[Bottom, CenterX],
            Self::LeftCenter => &[Left, CenterY],
            Self::RightCenter => &[Right, CenterY],
            Self::Sides => &[Left, Right],
            Self::TopAndBottom => &[Top, Bottom],
            Self::All => &[Top, Left, Right, Bottom],
            Self::Above | Self::Below | Self::LeftOf | Self::RightOf => &[],
        }
    }
}

/// A dock keyword bound to its reference view, optionally offset.
#[derive(Debug, Clone, PartialEq)]
pub struct DockTarget {
    pub view: ViewId,
    pub dock: Dock,
    pub modifier: Option<(BinaryOp, Expr)>,
}

impl DockTarget {
    pub fn new(view: ViewId, dock: Dock) -> Self {
        Self {
            view,
            dock,
            modifier: None,
        }
    }

    fn offset(&self, base: Expr, invert: bool) -> Expr {
        match &self.modifier {
            None => base,
            Some((op, m)) => {
                let e = Expr::binary(*op, base, m.clone());
                if invert { e.invert_operator() } else { e }
            }
        }
    }

    /// Attribute assignments this dock stands for, in emission order.
    pub fn expand(&self) -> Vec<(Attribute, Expr)> {
        use Attribute::*;
        let anchor = |a: Attribute| Expr::anchor(self.view, a);
        let sibling = |target: Attribute, source: Attribute, invert: bool, cross: [Attribute; 2]| {
            vec![
                (target, self.offset(anchor(source), invert)),
                (cross[0], anchor(cross[0])),
                (cross[1], anchor(cross[1])),
            ]
        };
        match self.dock {
            Dock::Above => sibling(Bottom, Top, true, [CenterX, Width]),
            Dock::Below => sibling(Top, Bottom, false, [CenterX, Width]),
            Dock::LeftOf => sibling(Right, Left, true, [CenterY, Height]),
            Dock::RightOf => sibling(Left, Right, false, [CenterY, Height]),
            parent_dock => parent_dock
                .parent_attributes()
                .iter()
                .map(|a| (*a, self.offset(anchor(*a), a.edge() == Edge::Trailing)))
                .collect(),
        }
    }
}

impl ViewId {
    /// `view.dock(Dock::Top) + 16.0` reads like the layout it describes.
    pub fn dock(self, dock: Dock) -> DockTarget {
        DockTarget::new(self, dock)
    }
}

impl<R: Into<Expr>> Add<R> for DockTarget {
    type Output = DockTarget;

    fn add(mut self, rhs: R) -> DockTarget {
        self.modifier = Some((BinaryOp::Add, rhs.into()));
        self
    }
}

impl<R: Into<Expr>> Sub<R> for DockTarget {
    type Output = DockTarget;

    fn sub(mut self, rhs: R) -> DockTarget {
        self.modifier = Some((BinaryOp::Sub, rhs.into()));
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/constraint/dock.rs"]
mod tests;
