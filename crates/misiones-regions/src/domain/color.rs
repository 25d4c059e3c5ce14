//! Hex color parsing and tinting.

use std::fmt;

use thiserror::Error;

/// Raised when a region color is not `#rrggbb` or `#rrggbbaa`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color {0:?}")]
pub struct InvalidColor(pub String);

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parses `#rrggbb` or `#rrggbbaa`. A trailing alpha pair is accepted and
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns `InvalidColor` for any other shape.
    pub fn parse_hex(hex: &str) -> Result<Self, InvalidColor> {
        let invalid = || InvalidColor(hex.to_owned());
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
            return Err(invalid());
        }
        let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).map_err(|_| invalid());
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Formats the color as a CSS `rgba()` with the given opacity.
    #[must_use]
    pub fn with_opacity(self, opacity: f64) -> String {
        format!("rgba({}, {}, {}, {opacity})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
