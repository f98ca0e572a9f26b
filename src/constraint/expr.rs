use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use crate::constraint::attribute::Attribute;
use crate::foundation::ids::ViewId;
use crate::foundation::num::fmt_num;

/// Reference to one attribute of one view, usable as an expression operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorRef {
    pub view: ViewId,
    pub attribute: Attribute,
}

impl AnchorRef {
    pub fn new(view: ViewId, attribute: Attribute) -> Self {
        Self { view, attribute }
    }
}

impl fmt::Display for AnchorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.view, self.attribute)
    }
}

macro_rules! anchor_accessors {
    ($($name:ident => $attr:ident),* $(,)?) => {
        impl ViewId {
            pub fn anchor(self, attribute: Attribute) -> AnchorRef {
                AnchorRef::new(self, attribute)
            }

            $(
                pub fn $name(self) -> AnchorRef {
                    AnchorRef::new(self, Attribute::$attr)
                }
            )*
        }
    };
}

anchor_accessors!(
    left => Left,
    right => Right,
    top => Top,
    bottom => Bottom,
    width => Width,
    height => Height,
    center_x => CenterX,
    center_y => CenterY,
    fit_width => FitWidth,
    fit_height => FitHeight,
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Func {
    Min,
    Max,
}

impl Func {
    pub fn name(self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

/// Value side of a constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Num(f64),
    /// Spacing token substituted per container by the client.
    Gap,
    Anchor(AnchorRef),
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Call {
        func: Func,
        args: Vec<Expr>,
    },
}

impl Expr {
    pub fn num(v: f64) -> Self {
        Self::Num(v)
    }

    pub fn gap() -> Self {
        Self::Gap
    }

    pub fn anchor(view: ViewId, attribute: Attribute) -> Self {
        Self::Anchor(AnchorRef::new(view, attribute))
    }

    pub fn binary(op: BinaryOp, lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self::Binary {
            op,
            lhs: Box::new(lhs.into()),
            rhs: Box::new(rhs.into()),
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Binary { .. })
    }

    /// Flip a top-level `+`/`-`. Anything else is returned unchanged.
    pub fn invert_operator(&self) -> Self {
        match self {
            Self::Binary { op, lhs, rhs } => {
                let op = match op {
                    BinaryOp::Add => BinaryOp::Sub,
                    BinaryOp::Sub => BinaryOp::Add,
                    other => *other,
                };
                Self::Binary {
                    op,
                    lhs: lhs.clone(),
                    rhs: rhs.clone(),
                }
            }
            other => other.clone(),
        }
    }

    /// First anchor reference found depth-first, or `None` when the
    /// expression only contains constants.
    pub fn get_anchor(&self) -> Option<AnchorRef> {
        match self {
            Self::Anchor(a) => Some(*a),
            Self::Binary { lhs, rhs, .. } => lhs.get_anchor().or_else(|| rhs.get_anchor()),
            Self::Call { args, .. } => args.iter().find_map(Expr::get_anchor),
            Self::Num(_) | Self::Gap => None,
        }
    }

    pub fn anchors(&self) -> Vec<AnchorRef> {
        let mut out = Vec::new();
        self.collect_anchors(&mut out);
        out
    }

    fn collect_anchors(&self, out: &mut Vec<AnchorRef>) {
        match self {
            Self::Anchor(a) => out.push(*a),
            Self::Binary { lhs, rhs, .. } => {
                lhs.collect_anchors(out);
                rhs.collect_anchors(out);
            }
            Self::Call { args, .. } => args.iter().for_each(|a| a.collect_anchors(out)),
            Self::Num(_) | Self::Gap => {}
        }
    }

    /// Rewrite every anchor in place.
    pub fn map_anchors(&mut self, f: &mut impl FnMut(&mut AnchorRef)) {
        match self {
            Self::Anchor(a) => f(a),
            Self::Binary { lhs, rhs, .. } => {
                lhs.map_anchors(f);
                rhs.map_anchors(f);
            }
            Self::Call { args, .. } => args.iter_mut().for_each(|a| a.map_anchors(f)),
            Self::Num(_) | Self::Gap => {}
        }
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_composite() {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(v) => f.write_str(&fmt_num(*v)),
            Self::Gap => f.write_str("gap"),
            Self::Anchor(a) => write!(f, "{a}"),
            Self::Binary { op, lhs, rhs } => {
                lhs.fmt_operand(f)?;
                write!(f, "{}", op.symbol())?;
                rhs.fmt_operand(f)
            }
            Self::Call { func, args } => {
                write!(f, "{}(", func.name())?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl From<f64> for Expr {
    fn from(v: f64) -> Self {
        Self::Num(v)
    }
}

impl From<i32> for Expr {
    fn from(v: i32) -> Self {
        Self::Num(f64::from(v))
    }
}

impl From<AnchorRef> for Expr {
    fn from(a: AnchorRef) -> Self {
        Self::Anchor(a)
    }
}

/// `min(...)` over the given expressions.
pub fn minimum<E: Into<Expr>>(args: impl IntoIterator<Item = E>) -> Expr {
    Expr::Call {
        func: Func::Min,
        args: args.into_iter().map(Into::into).collect(),
    }
}

/// `max(...)` over the given expressions.
pub fn maximum<E: Into<Expr>>(args: impl IntoIterator<Item = E>) -> Expr {
    Expr::Call {
        func: Func::Max,
        args: args.into_iter().map(Into::into).collect(),
    }
}

macro_rules! impl_arith {
    ($trait:ident, $method:ident, $op:expr) => {
        impl<R: Into<Expr>> $trait<R> for Expr {
            type Output = Expr;

            fn $method(self, rhs: R) -> Expr {
                Expr::binary($op, self, rhs)
            }
        }

        impl<R: Into<Expr>> $trait<R> for AnchorRef {
            type Output = Expr;

            fn $method(self, rhs: R) -> Expr {
                Expr::binary($op, self, rhs)
            }
        }

        impl $trait<Expr> for f64 {
            type Output = Expr;

            fn $method(self, rhs: Expr) -> Expr {
                Expr::binary($op, self, rhs)
            }
        }
    };
}

impl_arith!(Add, add, BinaryOp::Add);
impl_arith!(Sub, sub, BinaryOp::Sub);
impl_arith!(Mul, mul, BinaryOp::Mul);
impl_arith!(Div, div, BinaryOp::Div);

#[cfg(test)]
#[path = "../../tests/unit/constraint/expr.rs"]
mod tests;
