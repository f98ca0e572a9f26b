use std::collections::HashMap;
use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::animation::spec::{AnimationRecord, AnimationSpec};
use crate::color::Color;
use crate::foundation::error::{Ui4Error, Ui4Result};
use crate::foundation::num::fmt_num;

/// Value handed to a style property before conversion to CSS text.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Bool(bool),
    Num(f64),
    Text(String),
    Color(Color),
    List(Vec<String>),
    /// Per-side numbers, e.g. vertical and horizontal padding.
    Nums(Vec<f64>),
}

impl From<bool> for StyleValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for StyleValue {
    fn from(v: f64) -> Self {
        Self::Num(v)
    }
}

impl From<i32> for StyleValue {
    fn from(v: i32) -> Self {
        Self::Num(f64::from(v))
    }
}

impl From<&str> for StyleValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for StyleValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Color> for StyleValue {
    fn from(v: Color) -> Self {
        Self::Color(v)
    }
}

impl From<Vec<f64>> for StyleValue {
    fn from(v: Vec<f64>) -> Self {
        Self::Nums(v)
    }
}

impl From<Vec<i32>> for StyleValue {
    fn from(v: Vec<i32>) -> Self {
        Self::Nums(v.into_iter().map(f64::from).collect())
    }
}

impl From<Vec<&str>> for StyleValue {
    fn from(v: Vec<&str>) -> Self {
        Self::List(v.into_iter().map(str::to_owned).collect())
    }
}

/// Result of converting a [`StyleValue`] for one property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Css {
    Set(String),
    /// The value means "no declaration" (e.g. `bold = false`).
    Unset,
}

type Converter = fn(&StyleValue) -> Option<Css>;

/// Style-like properties that map onto one CSS declaration each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProp {
    Align,
    BackgroundColor,
    Bold,
    BorderColor,
    BorderStyle,
    BorderWidth,
    CornerRadius,
    Alpha,
    Padding,
    Scrollable,
    Shadow,
    TextColor,
    Z,
    Font,
}

impl StyleProp {
    pub const ALL: [Self; 14] = [
        Self::Align,
        Self::BackgroundColor,
        Self::Bold,
        Self::BorderColor,
        Self::BorderStyle,
        Self::BorderWidth,
        Self::CornerRadius,
        Self::Alpha,
        Self::Padding,
        Self::Scrollable,
        Self::Shadow,
        Self::TextColor,
        Self::Z,
        Self::Font,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Align => "align",
            Self::BackgroundColor => "background_color",
            Self::Bold => "bold",
            Self::BorderColor => "border_color",
            Self::BorderStyle => "border_style",
            Self::BorderWidth => "border_width",
            Self::CornerRadius => "corner_radius",
            Self::Alpha => "alpha",
            Self::Padding => "padding",
            Self::Scrollable => "scrollable",
            Self::Shadow => "shadow",
            Self::TextColor => "text_color",
            Self::Z => "z",
            Self::Font => "font",
        }
    }

    pub fn from_name(name: &str) -> Ui4Result<Self> {
        STYLE_TABLE
            .get(name)
            .copied()
            .ok_or_else(|| Ui4Error::UnknownAttribute {
                name: name.to_owned(),
            })
    }

    pub fn css_name(self) -> &'static str {
        match self {
            Self::Align => "text-align",
            Self::BackgroundColor => "background-color",
            Self::Bold => "font-weight",
            Self::BorderColor => "border-color",
            Self::BorderStyle => "border-style",
            Self::BorderWidth => "border-width",
            Self::CornerRadius => "border-radius",
            Self::Alpha => "opacity",
            Self::Padding => "padding",
            Self::Scrollable => "overflow",
            Self::Shadow => "box-shadow",
            Self::TextColor => "color",
            Self::Z => "z-index",
            Self::Font => "font-family",
        }
    }

    fn converter(self) -> Converter {
        match self {
            Self::Align | Self::BorderStyle | Self::Shadow => text,
            Self::BackgroundColor | Self::BorderColor | Self::TextColor => color,
            Self::Bold => bold,
            Self::BorderWidth | Self::CornerRadius | Self::Padding => px,
            Self::Alpha | Self::Z => unitless,
            Self::Scrollable => scroll,
            Self::Font => list,
        }
    }

    /// Convert `value` to CSS text, or fail naming the property.
    pub(crate) fn convert(self, value: &StyleValue) -> Ui4Result<Css> {
        (self.converter())(value).ok_or_else(|| Ui4Error::unsupported(self.name(), value))
    }
}

static STYLE_TABLE: LazyLock<HashMap<&'static str, StyleProp>> =
    LazyLock::new(|| StyleProp::ALL.into_iter().map(|p| (p.name(), p)).collect());

fn text(v: &StyleValue) -> Option<Css> {
    match v {
        StyleValue::Text(s) => Some(Css::Set(s.clone())),
        _ => None,
    }
}

fn color(v: &StyleValue) -> Option<Css> {
    match v {
        StyleValue::Color(c) => Some(Css::Set(c.css())),
        StyleValue::Text(s) => Color::parse(s).ok().map(|c| Css::Set(c.css())),
        _ => None,
    }
}

fn bold(v: &StyleValue) -> Option<Css> {
    match v {
        StyleValue::Bool(true) => Some(Css::Set("bold".to_owned())),
        StyleValue::Bool(false) => Some(Css::Unset),
        _ => None,
    }
}

fn px(v: &StyleValue) -> Option<Css> {
    fn one(n: f64) -> Option<String> {
        n.is_finite().then(|| format!("{}px", fmt_num(n)))
    }
    let parts = match v {
        StyleValue::Num(n) => return one(*n).map(Css::Set),
        StyleValue::Text(s) => return Some(Css::Set(s.clone())),
        StyleValue::Nums(ns) => ns.iter().map(|n| one(*n)).collect::<Option<Vec<_>>>()?,
        // Numeric items get units, keywords like `auto` pass through.
        StyleValue::List(items) => items
            .iter()
            .map(|item| match item.trim().parse::<f64>() {
                Ok(n) => one(n),
                Err(_) => Some(item.trim().to_owned()),
            })
            .collect::<Option<Vec<_>>>()?,
        _ => return None,
    };
    (!parts.is_empty()).then(|| Css::Set(parts.join(" ")))
}

fn unitless(v: &StyleValue) -> Option<Css> {
    match v {
        StyleValue::Num(n) if n.is_finite() => Some(Css::Set(fmt_num(*n))),
        _ => None,
    }
}

fn scroll(v: &StyleValue) -> Option<Css> {
    match v {
        StyleValue::Bool(true) => Some(Css::Set("auto".to_owned())),
        StyleValue::Bool(false) => Some(Css::Unset),
        StyleValue::Text(s) if s == "horizontal" => Some(Css::Set("auto hidden".to_owned())),
        StyleValue::Text(s) if s == "vertical" => Some(Css::Set("hidden auto".to_owned())),
        _ => None,
    }
}

fn list(v: &StyleValue) -> Option<Css> {
    match v {
        StyleValue::List(items) if !items.is_empty() => Some(Css::Set(items.join(","))),
        StyleValue::Text(s) => Some(Css::Set(s.clone())),
        _ => None,
    }
}

/// A style change queued under an animation context, shipped as `ui4css`.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Transition {
    pub key: String,
    pub value: String,
    pub animation: AnimationRecord,
}

/// Free-form properties, settled CSS declarations and pending transitions.
#[derive(Debug, Clone, Default)]
pub struct PropState {
    properties: IndexMap<String, serde_json::Value>,
    style: IndexMap<String, String>,
    transitions: Vec<Transition>,
}

impl PropState {
    pub fn property(&self, name: &str) -> Option<&serde_json::Value> {
        self.properties.get(name)
    }

    pub fn properties(&self) -> &IndexMap<String, serde_json::Value> {
        &self.properties
    }

    pub(crate) fn set_property(&mut self, name: String, value: serde_json::Value) {
        if value.is_null() {
            self.properties.shift_remove(&name);
        } else {
            self.properties.insert(name, value);
        }
    }

    pub fn style(&self, css_name: &str) -> Option<&str> {
        self.style.get(css_name).map(String::as_str)
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Apply a converted declaration, either at once or as a transition.
    pub(crate) fn apply(&mut self, css_name: &str, css: Css, animation: Option<&AnimationSpec>) {
        match (css, animation) {
            (Css::Unset, _) => {
                self.style.shift_remove(css_name);
                self.transitions.retain(|t| t.key != css_name);
            }
            (Css::Set(value), Some(animation)) => {
                self.transitions.retain(|t| t.key != css_name);
                self.transitions.push(Transition {
                    key: css_name.to_owned(),
                    value,
                    animation: animation.record(),
                });
            }
            (Css::Set(value), None) => {
                self.transitions.retain(|t| t.key != css_name);
                self.style.insert(css_name.to_owned(), value);
            }
        }
    }

    /// Fold shipped transitions into the plain style map.
    pub(crate) fn settle(&mut self) -> bool {
        if self.transitions.is_empty() {
            return false;
        }
        for t in self.transitions.drain(..) {
            self.style.insert(t.key, t.value);
        }
        true
    }

    /// `name:value;name:value`
    pub fn render_style(&self) -> String {
        self.style
            .iter()
            .map(|(k, v)| format!("{k}:{v}"))
            .collect::<Vec<_>>()
            .join(";")
    }

    pub fn render_transitions(&self) -> Ui4Result<Option<String>> {
        if self.transitions.is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::to_string(&self.transitions)?))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/props.rs"]
mod tests;
