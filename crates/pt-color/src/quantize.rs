//! Conversion between linear [`Color`] and integer pixel formats.
//!
//! # Export
//!
//! [`Color::to_rgba8`] and [`Color::to_rgba16`] scale each channel by the
//! format maximum, clamp into `[0, max]` and truncate. This is the only place
//! where channels are clamped. NaN quantizes to `0`.
//!
//! # Import
//!
//! [`Color::from_quantized`] reads any [`QuantizedColor`], normalizes the
//! color channels by `1/65535` and sets alpha to `1.0`. Unlike
//! [`Color::from_hex`], no gamma decode is applied.
//!
//! ```
//! use pt_color::{Color, Rgba8};
//!
//! let px = Color::new(1.5, -0.3, 0.25, 2.0).to_rgba8();
//! assert_eq!(px, Rgba8::new(255, 0, 63, 255));
//!
//! let back = Color::from_quantized(&px);
//! assert_eq!(back.r, 1.0);
//! assert_eq!(back.a, 1.0);
//! ```
//!
//! # Half Float
//!
//! [`Color::to_rgba_f16`] hands unclamped HDR values to half-float writers.

use crate::color::Color;
use half::f16;

/// A pixel that can report its channels scaled to the 16-bit range.
///
/// Implementors with lower bit depth replicate their bits so that full scale
/// maps to `65535` (an 8-bit `0xAB` becomes `0xABAB`).
pub trait QuantizedColor {
    /// Channels as `[r, g, b, a]`, each in `0..=65535`.
    fn rgba16(&self) -> [u16; 4];
}

/// 8-bit per channel RGBA pixel.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Create a new pixel.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Get values as `[r, g, b, a]`.
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from `[r, g, b, a]`.
    #[inline]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}

/// 16-bit per channel RGBA pixel.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba16 {
    /// Red channel.
    pub r: u16,
    /// Green channel.
    pub g: u16,
    /// Blue channel.
    pub b: u16,
    /// Alpha channel.
    pub a: u16,
}

impl Rgba16 {
    /// Create a new pixel.
    #[inline]
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// Get values as `[r, g, b, a]`.
    #[inline]
    pub const fn to_array(self) -> [u16; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from `[r, g, b, a]`.
    #[inline]
    pub const fn from_array(arr: [u16; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}

#[inline]
fn widen(v: u8) -> u16 {
    u16::from(v) * 257
}

impl QuantizedColor for Rgba8 {
    #[inline]
    fn rgba16(&self) -> [u16; 4] {
        self.to_array().map(widen)
    }
}

impl QuantizedColor for Rgba16 {
    #[inline]
    fn rgba16(&self) -> [u16; 4] {
        self.to_array()
    }
}

impl QuantizedColor for [u8; 4] {
    #[inline]
    fn rgba16(&self) -> [u16; 4] {
        self.map(widen)
    }
}

impl QuantizedColor for [u16; 4] {
    #[inline]
    fn rgba16(&self) -> [u16; 4] {
        *self
    }
}

impl<T: QuantizedColor + ?Sized> QuantizedColor for &T {
    #[inline]
    fn rgba16(&self) -> [u16; 4] {
        (**self).rgba16()
    }
}

/// Scale, clamp into `[0, max]`, truncate. NaN maps to `0.0`.
#[inline]
fn quantize(v: f64, max: f64) -> f64 {
    let scaled = (v * max).clamp(0.0, max);
    if scaled.is_nan() { 0.0 } else { scaled }
}

impl Color {
    /// Reads an external quantized pixel.
    ///
    /// Color channels are divided by `65535`. The source alpha is discarded
    /// and the result is opaque.
    pub fn from_quantized<Q: QuantizedColor + ?Sized>(px: &Q) -> Self {
        let [r, g, b, _] = px.rgba16();
        let norm = |v: u16| f64::from(v) / 65535.0;
        Self::new(norm(r), norm(g), norm(b), 1.0)
    }

    /// Quantizes to 8 bits per channel, clamping into `[0, 255]`.
    #[inline]
    pub fn to_rgba8(self) -> Rgba8 {
        let q = |v: f64| quantize(v, 255.0) as u8;
        Rgba8::new(q(self.r), q(self.g), q(self.b), q(self.a))
    }

    /// Quantizes to 16 bits per channel, clamping into `[0, 65535]`.
    #[inline]
    pub fn to_rgba16(self) -> Rgba16 {
        let q = |v: f64| quantize(v, 65535.0) as u16;
        Rgba16::new(q(self.r), q(self.g), q(self.b), q(self.a))
    }

    /// Converts to half floats without clamping.
    ///
    /// Values beyond the `f16` range become infinities.
    #[inline]
    pub fn to_rgba_f16(self) -> [f16; 4] {
        self.to_array().map(f16::from_f64)
    }

    /// Reads half floats as-is, alpha included.
    #[inline]
    pub fn from_rgba_f16(px: [f16; 4]) -> Self {
        Self::from_array(px.map(f16::to_f64))
    }
}

impl From<Color> for Rgba8 {
    #[inline]
    fn from(c: Color) -> Self {
        c.to_rgba8()
    }
}

impl From<Color> for Rgba16 {
    #[inline]
    fn from(c: Color) -> Self {
        c.to_rgba16()
    }
}
