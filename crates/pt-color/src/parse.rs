//! Hex color notation.
//!
//! Accepted forms, case-insensitive and whitespace-trimmed:
//!
//! | Form | Alpha |
//! |------|-------|
//! | `#RRGGBB`, `0xRRGGBB`, `RRGGBB` | opaque |
//! | `#AARRGGBB`, `0xAARRGGBB`, `AARRGGBB` | as given |
//!
//! The packed value goes through [`Color::from_hex`], so the text names a
//! display-encoded color and the result is linear.
//!
//! ```
//! use pt_color::Color;
//!
//! let c: Color = "#ff8000".parse().unwrap();
//! assert_eq!(c, Color::from_hex(0xFFFF8000));
//! assert_eq!(c.to_hex(), "#ffff8000");
//! ```

use std::str::FromStr;

use tracing::debug;

use crate::color::{Color, HEX_GAMMA};
use crate::error::{ParseColorError, Result};

/// Parses hex notation into a packed `0xAARRGGBB` value.
pub fn parse_packed(input: &str) -> Result<u32> {
    let s = input.trim();
    let digits = s
        .strip_prefix('#')
        .or_else(|| s.strip_prefix("0x"))
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);

    if digits.is_empty() {
        return Err(ParseColorError::Empty);
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        debug!(input, "rejected non-hex color");
        return Err(ParseColorError::invalid_digit(input));
    }

    let opaque = match digits.len() {
        6 => 0xFF00_0000,
        8 => 0,
        len => {
            debug!(input, len, "rejected color with wrong digit count");
            return Err(ParseColorError::InvalidLength { len });
        }
    };
    let value =
        u32::from_str_radix(digits, 16).map_err(|_| ParseColorError::invalid_digit(input))?;
    Ok(opaque | value)
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self> {
        parse_packed(s).map(Color::from_hex)
    }
}

impl Color {
    /// Encodes as `#aarrggbb`, the inverse of [`Color::from_hex`].
    ///
    /// Channels are raised to `1/2.2`, clamped into `[0, 1]` and rounded to
    /// the nearest byte.
    pub fn to_hex(self) -> String {
        let enc = self.pow(HEX_GAMMA.recip());
        let byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            byte(enc.a),
            byte(enc.r),
            byte(enc.g),
            byte(enc.b)
        )
    }
}
