//! RGBA colour type and the game palette.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// An 8-bit-per-channel RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Error returned when a colour string is not `#rrggbb` or `#rrggbbaa`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid colour '{0}': expected #rrggbb or #rrggbbaa")]
pub struct ParseColorError(String);

impl Color {
    /// An opaque colour.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
    ///
    /// # Errors
    ///
    /// Returns [`ParseColorError`] unless the text is six or eight hex digits.
    pub fn from_hex(text: &str) -> Result<Self, ParseColorError> {
        let invalid = || ParseColorError(text.to_string());
        let digits = text.strip_prefix('#').unwrap_or(text);
        if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        let alpha = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a: alpha,
        })
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

/// Named colours used across the map, HUD and player setup.
pub mod palette {
    use super::Color;

    pub const BACKGROUND: Color = Color::rgb(0x0d, 0x1b, 0x2a);
    pub const GRID_LINES: Color = Color::rgb(0x1b, 0x26, 0x3b);
    pub const TEXT: Color = Color::rgb(0xe0, 0xe1, 0xdd);
    pub const HIGHLIGHT: Color = Color::rgb(0xfc, 0xa3, 0x11);

    pub const PLAYER_ONE: Color = Color::rgb(0xe6, 0x39, 0x46);
    pub const PLAYER_TWO: Color = Color::rgb(0xa8, 0xda, 0xdc);
    pub const PLAYER_THREE: Color = Color::rgb(0x45, 0x7b, 0x9d);
    pub const PLAYER_FOUR: Color = Color::rgb(0xf1, 0xfa, 0xee);

    /// Default player colours in seat order.
    pub const PLAYERS: [Color; 4] = [PLAYER_ONE, PLAYER_TWO, PLAYER_THREE, PLAYER_FOUR];

    /// Fill for provinces nobody owns.
    pub const PROVINCE_NEUTRAL: Color = Color::rgb(0x77, 0x8d, 0xa9);
}
