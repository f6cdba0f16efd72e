use crossterm::style::{Color, StyledContent, Stylize, style};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::ConfigError;

#[cfg(test)]
#[path = "./colors.tests.rs"]
mod colors_tests;

/// Color used to paint spinner glyphs and labels.\
/// Parses from a color name, a `#rrggbb` value or an ANSI number.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SpinColor(Color);

impl SpinColor {
    /// Returns new [`SpinColor`] instance.
    pub const fn new(color: Color) -> Self {
        Self(color)
    }

    /// Wraps content in terminal escape sequences for this color.
    pub fn paint<D: Display>(self, content: D) -> StyledContent<D> {
        style(content).with(self.0)
    }
}

impl From<Color> for SpinColor {
    fn from(value: Color) -> Self {
        Self(value)
    }
}

impl FromStr for SpinColor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();

        if let Some(hex) = value.strip_prefix('#') {
            return parse_hex(hex).map(SpinColor).ok_or_else(|| ConfigError::InvalidColor(s.to_owned()));
        }

        if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
            return match value.parse::<u8>() {
                Ok(index) => Ok(SpinColor(Color::AnsiValue(index))),
                Err(_) => Err(ConfigError::InvalidColor(s.to_owned())),
            };
        }

        match Color::try_from(value) {
            Ok(color) => Ok(SpinColor(color)),
            Err(()) => Err(ConfigError::InvalidColor(s.to_owned())),
        }
    }
}

impl fmt::Display for SpinColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Color::Rgb { r, g, b } => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            Color::AnsiValue(index) => write!(f, "{index}"),
            color => f.write_str(color_name(color)),
        }
    }
}

impl Serialize for SpinColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SpinColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SpinColorVisitor;

        impl Visitor<'_> for SpinColorVisitor {
            type Value = SpinColor;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string with a color name, '#rrggbb' value or ANSI number")
            }

            fn visit_str<E>(self, value: &str) -> Result<SpinColor, E>
            where
                E: de::Error,
            {
                SpinColor::from_str(value).map_err(|_| de::Error::custom(format_args!("invalid color value: {value}")))
            }
        }

        deserializer.deserialize_str(SpinColorVisitor)
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color::Rgb { r, g, b })
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::Black => "black",
        Color::DarkGrey => "dark_grey",
        Color::Red => "red",
        Color::DarkRed => "dark_red",
        Color::Green => "green",
        Color::DarkGreen => "dark_green",
        Color::Yellow => "yellow",
        Color::DarkYellow => "dark_yellow",
        Color::Blue => "blue",
        Color::DarkBlue => "dark_blue",
        Color::Magenta => "magenta",
        Color::DarkMagenta => "dark_magenta",
        Color::Cyan => "cyan",
        Color::DarkCyan => "dark_cyan",
        Color::White => "white",
        Color::Grey => "grey",
        _ => "reset",
    }
}
