mod codec;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

pub use codec::{clamp, format_hex, parse_hex};

/// Opaque sRGB color. Serialized as its canonical `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `#rgb` (case-insensitive).
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        parse_hex(input)
    }

    /// Whether `input` would parse. Used for inline validation of typed input.
    pub fn is_valid_hex(input: &str) -> bool {
        parse_hex(input).is_ok()
    }

    /// Canonical lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format_hex(self)
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Build a color from real-valued channels, rounding and clamping each.
    pub fn from_channels_f64(channels: [f64; 3]) -> Self {
        let [r, g, b] = channels.map(clamp);
        Self { r, g, b }
    }

    /// Move each channel `factor` of the way toward 255.
    pub fn lighten(self, factor: f64) -> Self {
        Self::from_channels_f64(
            self.channels()
                .map(|c| f64::from(c) + (255.0 - f64::from(c)) * factor),
        )
    }

    /// Scale each channel toward 0 by `factor`.
    pub fn darken(self, factor: f64) -> Self {
        Self::from_channels_f64(self.channels().map(|c| f64::from(c) * (1.0 - factor)))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_hex(&value)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_hex()
    }
}
