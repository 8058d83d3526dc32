//! RGBA colors in yEd's hex notation.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// An 8-bit-per-channel RGBA color.
///
/// Encodes as `#RRGGBB` when fully opaque and `#RRGGBBAA` otherwise, which is what yEd reads and
/// writes for every color-valued attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const GRAY: Color = Color::rgb(0x80, 0x80, 0x80);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 0xFF
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(value: &str) -> Result<Self> {
        let invalid = |reason| Error::InvalidColor {
            value: value.to_string(),
            reason,
        };

        let digits = value
            .strip_prefix('#')
            .ok_or_else(|| invalid("expected a leading '#'"))?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid("expected hexadecimal digits"));
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
        match digits.len() {
            6 => Ok(Self::rgb(
                channel(0).map_err(|_| invalid("bad red channel"))?,
                channel(2).map_err(|_| invalid("bad green channel"))?,
                channel(4).map_err(|_| invalid("bad blue channel"))?,
            )),
            8 => Ok(Self::rgba(
                channel(0).map_err(|_| invalid("bad red channel"))?,
                channel(2).map_err(|_| invalid("bad green channel"))?,
                channel(4).map_err(|_| invalid("bad blue channel"))?,
                channel(6).map_err(|_| invalid("bad alpha channel"))?,
            )),
            _ => Err(invalid("expected 6 or 8 hexadecimal digits")),
        }
    }

    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if !self.is_opaque() {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s.trim())
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn opaque_colors_drop_the_alpha_channel() {
        assert_eq!(Color::rgb(0x99, 0xCC, 0x00).to_hex(), "#99CC00");
        assert_eq!(Color::rgba(0x99, 0xCC, 0x00, 0x80).to_hex(), "#99CC0080");
    }

    #[test]
    fn decodes_both_hex_forms() {
        assert_eq!(Color::from_hex("#f5f5f5").unwrap(), Color::rgb(0xF5, 0xF5, 0xF5));
        assert_eq!(
            Color::from_hex("#B3A69180").unwrap(),
            Color::rgba(0xB3, 0xA6, 0x91, 0x80)
        );
    }

    #[test]
    fn rejects_malformed_hex() {
        for raw in ["99CC00", "#99CC0", "#99CC00F", "#GG0000", ""] {
            let err = Color::from_hex(raw).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::IllegalArgument, "{raw}");
        }
    }

    #[test]
    fn serde_uses_the_hex_string() {
        let json = serde_json::to_string(&Color::rgb(0, 0, 0xFF)).unwrap();
        assert_eq!(json, "\"#0000FF\"");
        let back: Color = serde_json::from_str("\"#0000ff\"").unwrap();
        assert_eq!(back, Color::rgb(0, 0, 0xFF));
        assert!(serde_json::from_str::<Color>("\"blue\"").is_err());
    }
}
