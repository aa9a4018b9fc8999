//! Blackbody color from a Kelvin temperature.
//!
//! Approximates the visible color of an ideal thermal radiator with the
//! widely used piecewise fit of the CIE 1964 10° blackbody locus. Each
//! channel is either saturated, zero, or a log-polynomial
//! `a + b*x + c*ln(x)` in a shifted temperature `x = K/100 - offset`.
//!
//! | Channel | `K < 1000` | `1000..2000` | `2000..6600` | `K >= 6600` |
//! |---------|-----------|--------------|--------------|-------------|
//! | Red     | 255       | 255          | 255          | fit, `x = K/100 - 55` |
//! | Green   | 0         | fit, `x = K/100 - 2` | fit, `x = K/100 - 2` | fit, `x = K/100 - 50` |
//! | Blue    | 0         | 0            | fit, `x = K/100 - 10` | 255 |
//!
//! Results are scaled by `1/255` and capped at `1.0`. There is no lower cap.
//!
//! # Range
//!
//! The fit is calibrated for [`KELVIN_MIN`]..=[`KELVIN_MAX`]. Temperatures
//! outside still evaluate the nearest branch.

use crate::color::{min_nan, Color};
use tracing::debug;

/// Lower end of the calibrated temperature range.
pub const KELVIN_MIN: f64 = 1000.0;

/// Upper end of the calibrated temperature range.
pub const KELVIN_MAX: f64 = 40000.0;

/// Temperature at which red stops saturating and blue starts.
pub const KELVIN_BOUNDARY: f64 = 6600.0;

/// Temperature at which green leaves zero and follows the warm fit.
pub const KELVIN_GREEN_START: f64 = 1000.0;

/// Temperature at which blue leaves zero and follows the warm fit.
pub const KELVIN_BLUE_START: f64 = 2000.0;

/// One `a + b*x + c*ln(x)` segment with `x = K/100 - offset`.
#[derive(Debug, Clone, Copy)]
struct LogFit {
    a: f64,
    b: f64,
    c: f64,
    offset: f64,
}

impl LogFit {
    #[inline]
    fn eval(&self, kelvin: f64) -> f64 {
        let x = kelvin / 100.0 - self.offset;
        self.a + self.b * x + self.c * x.ln()
    }
}

const RED_HOT: LogFit = LogFit {
    a: 351.97690566805693,
    b: 0.114206453784165,
    c: -40.25366309332127,
    offset: 55.0,
};

const GREEN_WARM: LogFit = LogFit {
    a: -155.25485562709179,
    b: -0.44596950469579133,
    c: 104.49216199393888,
    offset: 2.0,
};

const GREEN_HOT: LogFit = LogFit {
    a: 325.4494125711974,
    b: 0.07943456536662342,
    c: -28.0852963507957,
    offset: 50.0,
};

const BLUE_WARM: LogFit = LogFit {
    a: -254.76935184120902,
    b: 0.8274096064007395,
    c: 115.67994401066147,
    offset: 10.0,
};

impl Color {
    /// Approximate color of a blackbody radiator at `kelvin`.
    ///
    /// Alpha is always `1.0`.
    ///
    /// # Example
    ///
    /// ```
    /// use pt_color::Color;
    ///
    /// let candle = Color::from_temperature(1850.0);
    /// assert_eq!(candle.r, 1.0);
    /// assert_eq!(candle.b, 0.0);
    ///
    /// let daylight = Color::from_temperature(6600.0);
    /// assert_eq!(daylight.r, 1.0);
    /// assert_eq!(daylight.b, 1.0);
    /// ```
    pub fn from_temperature(kelvin: f64) -> Self {
        if !(KELVIN_MIN..=KELVIN_MAX).contains(&kelvin) {
            debug!(kelvin, "blackbody temperature outside calibrated range");
        }

        let red = if kelvin >= KELVIN_BOUNDARY {
            RED_HOT.eval(kelvin)
        } else {
            255.0
        };

        let green = if kelvin >= KELVIN_BOUNDARY {
            GREEN_HOT.eval(kelvin)
        } else if kelvin >= KELVIN_GREEN_START {
            GREEN_WARM.eval(kelvin)
        } else {
            0.0
        };

        let blue = if kelvin >= KELVIN_BOUNDARY {
            255.0
        } else if kelvin >= KELVIN_BLUE_START {
            BLUE_WARM.eval(kelvin)
        } else {
            0.0
        };

        let norm = |v: f64| min_nan(v / 255.0, 1.0);
        Self::new(norm(red), norm(green), norm(blue), 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_boundary_uses_hot_branch() {
        let c = Color::from_temperature(6600.0);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.b, 1.0);
        assert_eq!(c.a, 1.0);
        assert_abs_diff_eq!(c.g, GREEN_HOT.eval(6600.0) / 255.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.g, 0.975888, epsilon = 1e-5);
    }

    #[test]
    fn test_green_drops_across_boundary() {
        let below = Color::from_temperature(6599.0);
        let at = Color::from_temperature(6600.0);
        assert_abs_diff_eq!(below.g, 0.983380, epsilon = 1e-5);
        assert!(at.g < below.g);
    }

    #[test]
    fn test_cold_radiator_is_red() {
        let c = Color::from_temperature(500.0);
        assert_eq!(c, Color::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_warm_range() {
        let c = Color::from_temperature(1000.0);
        assert_eq!(c.r, 1.0);
        assert_abs_diff_eq!(c.g, 0.229266, epsilon = 1e-5);
        assert_eq!(c.b, 0.0);

        let c = Color::from_temperature(2700.0);
        assert_abs_diff_eq!(c.g, 0.666444, epsilon = 1e-5);
        assert_abs_diff_eq!(c.b, 0.341343, epsilon = 1e-5);
    }

    #[test]
    fn test_hot_range() {
        let c = Color::from_temperature(10000.0);
        assert_abs_diff_eq!(c.r, 0.799545, epsilon = 1e-5);
        assert_abs_diff_eq!(c.g, 0.860984, epsilon = 1e-5);
        assert_eq!(c.b, 1.0);

        let c = Color::from_temperature(KELVIN_MAX);
        assert_abs_diff_eq!(c.r, 0.612369, epsilon = 1e-5);
        assert_abs_diff_eq!(c.g, 0.740117, epsilon = 1e-5);
    }

    #[test]
    fn test_branch_thresholds() {
        assert_eq!(Color::from_temperature(KELVIN_GREEN_START - 1.0).g, 0.0);
        assert!(Color::from_temperature(KELVIN_GREEN_START).g > 0.0);
        assert_eq!(Color::from_temperature(KELVIN_BLUE_START - 1.0).b, 0.0);
        assert!(Color::from_temperature(KELVIN_BLUE_START).b > 0.0);
    }

    #[test]
    fn test_positive_infinity_keeps_nan() {
        // inf - inf in the hot fits
        let c = Color::from_temperature(f64::INFINITY);
        assert!(c.r.is_nan());
        assert!(c.g.is_nan());
        assert_eq!(c.b, 1.0);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_nan_and_negative_infinity_are_cold() {
        for k in [f64::NAN, f64::NEG_INFINITY] {
            assert_eq!(Color::from_temperature(k), Color::new(1.0, 0.0, 0.0, 1.0));
        }
    }

    #[test]
    fn test_channels_capped_at_one() {
        for k in (1000..=40000).step_by(100) {
            let c = Color::from_temperature(k as f64);
            assert!(c.r <= 1.0 && c.g <= 1.0 && c.b <= 1.0, "K={}: {}", k, c);
        }
    }
}
