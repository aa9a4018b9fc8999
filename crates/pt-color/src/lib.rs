//! # pt-color
//!
//! Linear floating-point color values for a path tracer.
//!
//! This crate provides the color primitive a renderer accumulates light with:
//!
//! - [`Color`] - Four unbounded `f64` channels with per-channel arithmetic
//! - [`Color::from_hex`], [`Color::from_temperature`], [`Color::from_quantized`] - Construction
//! - [`Rgba8`], [`Rgba16`] - Quantized export for display and file writers
//! - [`QuantizedColor`] - Seam for reading external integer pixels
//!
//! ## Design
//!
//! Colors are plain `Copy` values. Every operation returns a new color and
//! none of them can fail: division by zero and overflow follow IEEE-754, and
//! channels are clamped only when quantized to integers.
//!
//! ```
//! use pt_color::prelude::*;
//!
//! let sky = Color::from_temperature(10000.0);
//! let sun = Color::from_temperature(5500.0) * 8.0;
//! let radiance: Color = [sky, sun].iter().sum::<Color>() / 2.0;
//!
//! let px: Rgba8 = radiance.to_rgba8();
//! assert_eq!(px.r, 255);
//! ```
//!
//! ## Gamma
//!
//! [`Color::from_hex`] raises all four channels to [`HEX_GAMMA`], while
//! [`Color::from_quantized`] applies no decode. Use
//! [`Color::from_hex_gamma`] to choose a different exponent.
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for [`Color`], [`Rgba8`], [`Rgba16`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod error;
pub mod kelvin;
pub mod parse;
pub mod quantize;

pub use color::{Color, HEX_GAMMA};
pub use error::{ParseColorError, Result};
pub use kelvin::{
    KELVIN_BLUE_START, KELVIN_BOUNDARY, KELVIN_GREEN_START, KELVIN_MAX, KELVIN_MIN,
};
pub use quantize::{QuantizedColor, Rgba16, Rgba8};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use pt_color::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{Color, HEX_GAMMA};
    pub use crate::error::ParseColorError;
    pub use crate::quantize::{QuantizedColor, Rgba16, Rgba8};
}
