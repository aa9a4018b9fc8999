//! Error types for pt-color.
//!
//! Color arithmetic, construction and quantization are total functions and
//! never fail: degenerate input follows IEEE-754 semantics and out-of-range
//! values are clamped only when exporting to integer pixels.
//!
//! The only fallible surface is textual notation, handled by
//! [`crate::parse`]. Its failures are reported through [`ParseColorError`].
//!
//! # Usage
//!
//! ```rust
//! use pt_color::{Color, ParseColorError};
//!
//! let err = "#12345".parse::<Color>().unwrap_err();
//! assert_eq!(err, ParseColorError::InvalidLength { len: 5 });
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`ParseColorError`] as the error type.
pub type Result<T> = std::result::Result<T, ParseColorError>;

/// Errors that can occur while parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Nothing left after trimming whitespace and the `#` / `0x` prefix.
    #[error("empty color string")]
    Empty,

    /// Digit count is neither 6 (`RRGGBB`) nor 8 (`AARRGGBB`).
    #[error("expected 6 or 8 hex digits, got {len}")]
    InvalidLength {
        /// Number of digits found after the prefix
        len: usize,
    },

    /// Input contains a character that is not a hex digit.
    #[error("invalid hex digit in color {input:?}")]
    InvalidDigit {
        /// The rejected input, as given
        input: String,
    },
}

impl ParseColorError {
    /// Creates a [`ParseColorError::InvalidDigit`] error.
    #[inline]
    pub fn invalid_digit(input: impl Into<String>) -> Self {
        Self::InvalidDigit {
            input: input.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_length_message() {
        let err = ParseColorError::InvalidLength { len: 7 };
        let msg = err.to_string();
        assert!(msg.contains("6 or 8"));
        assert!(msg.contains('7'));
    }

    #[test]
    fn test_invalid_digit_keeps_input() {
        let err = ParseColorError::invalid_digit("#zz0000");
        assert!(err.to_string().contains("#zz0000"));
    }
}
