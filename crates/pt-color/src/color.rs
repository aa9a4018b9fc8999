//! The linear [`Color`] value type and its per-channel arithmetic.
//!
//! A [`Color`] holds four unbounded `f64` channels. Values above `1.0` carry
//! high-dynamic-range light intensity and negative values are legal
//! intermediates; nothing is clamped until the color is quantized
//! (see [`crate::quantize`]).
//!
//! # Operations
//!
//! | Operation | Spelling | Alpha |
//! |-----------|----------|-------|
//! | add / sub / mul | `a + b`, `a - b`, `a * b` | per channel |
//! | scale | `a * s`, `s * a`, [`Color::mul_scalar`] | per channel |
//! | divide | `a / s`, [`Color::div_scalar`] | per channel |
//! | [`Color::min`] | per-channel minimum | minimum |
//! | [`Color::max`] | per-channel maximum | **minimum** |
//! | [`Color::pow`] | `channel^e` | per channel |
//! | [`Color::mix`] | linear interpolation | per channel |
//!
//! Every operation takes `self` by value and returns a new color.
//!
//! ```
//! use pt_color::Color;
//!
//! let light = Color::new(4.0, 3.0, 2.0, 1.0);
//! let albedo = Color::new(0.5, 0.5, 0.5, 1.0);
//! let shaded = light * albedo * 0.25;
//! assert_eq!(shaded, Color::new(0.5, 0.375, 0.25, 0.25));
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Sub};

/// Exponent applied by [`Color::from_hex`] to every channel, alpha included.
pub const HEX_GAMMA: f64 = 2.2;

/// Minimum that propagates NaN.
///
/// `-inf` wins over NaN and `-0.0` is smaller than `+0.0`.
#[inline]
pub(crate) fn min_nan(a: f64, b: f64) -> f64 {
    if a == f64::NEG_INFINITY || b == f64::NEG_INFINITY {
        f64::NEG_INFINITY
    } else if a.is_nan() || b.is_nan() {
        f64::NAN
    } else if a == 0.0 && b == 0.0 {
        if a.is_sign_negative() { a } else { b }
    } else {
        a.min(b)
    }
}

/// Maximum that propagates NaN.
///
/// `+inf` wins over NaN and `+0.0` is larger than `-0.0`.
#[inline]
pub(crate) fn max_nan(a: f64, b: f64) -> f64 {
    if a == f64::INFINITY || b == f64::INFINITY {
        f64::INFINITY
    } else if a.is_nan() || b.is_nan() {
        f64::NAN
    } else if a == 0.0 && b == 0.0 {
        if a.is_sign_positive() { a } else { b }
    } else {
        a.max(b)
    }
}

/// Four-channel linear color with `f64` components.
///
/// # Memory Layout
///
/// Uses `#[repr(C)]` for predictable layout: `[R, G, B, A]`
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel.
    pub a: f64,
}

impl Color {
    /// Opaque black `(0, 0, 0, 1)`.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Opaque white `(1, 1, 1, 1)`.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// All zeros, alpha included. The identity for `+`.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a new color.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque gray with `v` in every color channel.
    #[inline]
    pub const fn gray(v: f64) -> Self {
        Self::new(v, v, v, 1.0)
    }

    /// Creates from an `[r, g, b, a]` array.
    #[inline]
    pub const fn from_array(arr: [f64; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Returns the channels as `[r, g, b, a]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Decodes a packed `0xAARRGGBB` value.
    ///
    /// Each byte is normalized by `1/255` and the resulting color is raised to
    /// [`HEX_GAMMA`]. The exponent is applied to alpha as well, so this is a
    /// plain power law and not an sRGB decode. Fully opaque and fully
    /// transparent alpha are unaffected since `0^2.2 = 0` and `1^2.2 = 1`.
    ///
    /// # Example
    ///
    /// ```
    /// use pt_color::Color;
    ///
    /// assert_eq!(Color::from_hex(0xFFFFFFFF), Color::WHITE);
    /// assert_eq!(Color::from_hex(0xFF000000), Color::BLACK);
    ///
    /// let mid = Color::from_hex(0xFF808080);
    /// assert!((mid.r - (128.0f64 / 255.0).powf(2.2)).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn from_hex(packed: u32) -> Self {
        Self::from_hex_gamma(packed, HEX_GAMMA)
    }

    /// Decodes a packed `0xAARRGGBB` value with an explicit exponent.
    ///
    /// `gamma = 1.0` yields the raw normalized bytes.
    pub fn from_hex_gamma(packed: u32, gamma: f64) -> Self {
        let channel = |shift: u32| f64::from((packed >> shift) & 0xff) / 255.0;
        Self::new(channel(16), channel(8), channel(0), channel(24)).pow(gamma)
    }

    /// Applies `f` to every channel including alpha.
    #[inline]
    pub fn map<F: Fn(f64) -> f64>(self, f: F) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b), f(self.a))
    }

    /// Applies `f` channel-wise to `self` and `other`.
    #[inline]
    pub fn zip_map<F: Fn(f64, f64) -> f64>(self, other: Self, f: F) -> Self {
        Self::new(
            f(self.r, other.r),
            f(self.g, other.g),
            f(self.b, other.b),
            f(self.a, other.a),
        )
    }

    /// Scales every channel, alpha included. Same as `self * s`.
    #[inline]
    pub fn mul_scalar(self, s: f64) -> Self {
        self.map(|v| v * s)
    }

    /// Divides every channel, alpha included. Same as `self / s`.
    ///
    /// There is no zero guard: dividing by `0.0` yields infinities or NaN.
    #[inline]
    pub fn div_scalar(self, s: f64) -> Self {
        self.map(|v| v / s)
    }

    /// Per-channel minimum, alpha included. NaN in either operand wins.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        self.zip_map(other, min_nan)
    }

    /// Per-channel maximum of the color channels.
    ///
    /// Alpha takes the **minimum** of the two operands, not the maximum.
    ///
    /// ```
    /// use pt_color::Color;
    ///
    /// let a = Color::new(0.1, 0.9, 0.5, 0.2);
    /// let b = Color::new(0.4, 0.3, 0.5, 0.8);
    /// assert_eq!(a.max(b), Color::new(0.4, 0.9, 0.5, 0.2));
    /// ```
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(
            max_nan(self.r, other.r),
            max_nan(self.g, other.g),
            max_nan(self.b, other.b),
            min_nan(self.a, other.a),
        )
    }

    /// Smallest of `r`, `g`, `b`. Alpha is ignored.
    #[inline]
    pub fn min_component(self) -> f64 {
        min_nan(min_nan(self.r, self.g), self.b)
    }

    /// Largest of `r`, `g`, `b`. Alpha is ignored.
    #[inline]
    pub fn max_component(self) -> f64 {
        max_nan(max_nan(self.r, self.g), self.b)
    }

    /// Raises every channel, alpha included, to `exp`.
    #[inline]
    pub fn pow(self, exp: f64) -> Self {
        self.map(|v| v.powf(exp))
    }

    /// Linear interpolation `self * (1 - pct) + other * pct`.
    ///
    /// `pct` is not restricted to `[0, 1]`; values outside extrapolate.
    #[inline]
    pub fn mix(self, other: Self, pct: f64) -> Self {
        self.mul_scalar(1.0 - pct) + other.mul_scalar(pct)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl From<[f64; 4]> for Color {
    #[inline]
    fn from(arr: [f64; 4]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Color> for [f64; 4] {
    #[inline]
    fn from(c: Color) -> Self {
        c.to_array()
    }
}

// ============================================================================
// Arithmetic Operations
// ============================================================================

impl Add for Color {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, |a, b| a + b)
    }
}

impl Sub for Color {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, |a, b| a - b)
    }
}

impl Mul for Color {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, |a, b| a * b)
    }
}

impl Mul<f64> for Color {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        self.mul_scalar(rhs)
    }
}

impl Mul<Color> for f64 {
    type Output = Color;

    #[inline]
    fn mul(self, rhs: Color) -> Self::Output {
        rhs.mul_scalar(self)
    }
}

impl Div<f64> for Color {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        self.div_scalar(rhs)
    }
}

impl Sum for Color {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::TRANSPARENT, Add::add)
    }
}

impl<'a> Sum<&'a Color> for Color {
    fn sum<I: Iterator<Item = &'a Color>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
