use std::fmt;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{Ui4Error, Ui4Result};

/// RGBA color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    pub const fn gray(level: f64) -> Self {
        Self::rgb(level, level, level)
    }

    pub fn with_alpha(mut self, a: f64) -> Self {
        self.a = a;
        self
    }

    /// Accepts `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `transparent` and a handful of
    /// basic CSS names.
    pub fn parse(s: &str) -> Ui4Result<Self> {
        let s = s.trim();
        let named = match s.to_ascii_lowercase().as_str() {
            "transparent" => Some(Self::TRANSPARENT),
            "black" => Some(Self::BLACK),
            "white" => Some(Self::WHITE),
            "red" => Some(Self::rgb(1.0, 0.0, 0.0)),
            "green" => Some(Self::rgb(0.0, 128.0 / 255.0, 0.0)),
            "blue" => Some(Self::rgb(0.0, 0.0, 1.0)),
            "gray" | "grey" => Some(Self::gray(128.0 / 255.0)),
            _ => None,
        };
        if let Some(c) = named {
            return Ok(c);
        }
        parse_hex(s).map_err(Ui4Error::validation)
    }

    /// CSS form with integer channels, alpha included: `rgba(255,0,0,255)`.
    pub fn css(&self) -> String {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        format!(
            "rgba({},{},{},{})",
            to_u8(self.r),
            to_u8(self.g),
            to_u8(self.b),
            to_u8(self.a)
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Obj {
                r: f64,
                g: f64,
                b: f64,
                #[serde(default = "one")]
                a: f64,
            },
            Arr(Vec<f64>),
        }

        fn one() -> f64 {
            1.0
        }

        match Repr::deserialize(deserializer)? {
            Repr::Text(s) => Color::parse(&s).map_err(serde::de::Error::custom),
            Repr::Obj { r, g, b, a } => Ok(Self::rgba(r, g, b, a)),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self::rgb(*r, *g, *b)),
                [r, g, b, a] => Ok(Self::rgba(*r, *g, *b, *a)),
                _ => Err(serde::de::Error::custom(
                    "color array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

fn parse_hex(s: &str) -> Result<Color, String> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if !hex.is_ascii() {
        return Err(format!("invalid color \"{s}\""));
    }

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    let (r, g, b, a) = match hex.len() {
        3 => {
            let digit = |i: usize| hex_byte(&hex[i..i + 1].repeat(2));
            (digit(0)?, digit(1)?, digit(2)?, 255)
        }
        6 => (
            hex_byte(&hex[0..2])?,
            hex_byte(&hex[2..4])?,
            hex_byte(&hex[4..6])?,
            255,
        ),
        8 => (
            hex_byte(&hex[0..2])?,
            hex_byte(&hex[2..4])?,
            hex_byte(&hex[4..6])?,
            hex_byte(&hex[6..8])?,
        ),
        _ => return Err(format!("invalid color \"{s}\", expected #RGB, #RRGGBB or #RRGGBBAA")),
    };

    Ok(Color::rgba(
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
        f64::from(a) / 255.0,
    ))
}

#[cfg(test)]
#[path = "../tests/unit/color.rs"]
mod tests;
