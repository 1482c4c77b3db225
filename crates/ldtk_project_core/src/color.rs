//! `#RRGGBB` color codec for project-level colors

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when decoding a `#RRGGBB` string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("incorrect color string '{0}': expected 7 characters")]
    Length(String),
    #[error("incorrect color string '{0}': expected leading '#'")]
    MissingHash(String),
}

/// An 8-bit-per-channel RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a fully opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Decode a `#RRGGBB` string. Alpha is always `0xFF`.
    ///
    /// Only the length and the leading `#` are checked. Digits are not
    /// validated: a character outside `0-9`, `A-F` and `a-f` decodes to its
    /// byte distance from `'0'`, truncated to the channel.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let bytes = s.as_bytes();
        if bytes.len() != 7 {
            return Err(ColorError::Length(s.to_string()));
        }
        if bytes[0] != b'#' {
            return Err(ColorError::MissingHash(s.to_string()));
        }

        let nib = |i: usize| -> u8 {
            let c = bytes[i + 1];
            match c {
                b'A'..=b'F' => c - b'A' + 10,
                b'a'..=b'f' => c - b'a' + 10,
                _ => c.wrapping_sub(b'0'),
            }
        };
        let byte = |i: usize| (nib(i) << 4).wrapping_add(nib(i + 1));

        Ok(Self::rgb(byte(0), byte(2), byte(4)))
    }

    /// Encode the color channels as lowercase `#rrggbb` (alpha is dropped)
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(feature = "bevy")]
impl From<Rgba> for bevy::color::Color {
    fn from(c: Rgba) -> Self {
        bevy::color::Color::srgba_u8(c.r, c.g, c.b, c.a)
    }
}
