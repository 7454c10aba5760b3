//! # Unit Types
//!
//! Type-safe wrappers for the lengths and areas the engine deals in, plus the
//! fixed-decimal formatting used for cut-list measurements.
//!
//! ## Metric Units
//!
//! - Length: millimetres (mm) for geometry, metres (m) for profile stock
//! - Area: square metres (m²) for glazing
//!
//! ## Example
//!
//! ```rust
//! use balkon_core::units::{Metres, Millimetres};
//!
//! let rail = Millimetres(2450.0);
//! let stock: Metres = rail.into();
//! assert_eq!(stock.0, 2.45);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimetres(pub f64);

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metres(pub f64);

impl From<Millimetres> for Metres {
    fn from(mm: Millimetres) -> Self {
        Metres(mm.0 / 1000.0)
    }
}

impl From<Metres> for Millimetres {
    fn from(m: Metres) -> Self {
        Millimetres(m.0 * 1000.0)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMetres(pub f64);

impl SquareMetres {
    /// Area of a `width × height` rectangle given in millimetres
    pub fn from_mm(width: Millimetres, height: Millimetres) -> Self {
        SquareMetres(width.0 * height.0 / 1_000_000.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Millimetres);
impl_arithmetic!(Metres);
impl_arithmetic!(SquareMetres);

// ============================================================================
// Fixed-decimal formatting
// ============================================================================

/// Round to the nearest integer, ties toward positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round to `decimals` places, ties toward positive infinity.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    round_half_up(value * scale) / scale
}

/// Format with exactly `decimals` fractional digits.
///
/// Exact decimal ties (e.g. `1862.25` at one decimal) round away from zero;
/// everything else rounds to the nearest representable digit string. This is
/// the rounding every measurement on the cut list goes through.
///
/// ```rust
/// use balkon_core::units::format_fixed;
///
/// assert_eq!(format_fixed(1862.0, 1), "1862.0");
/// assert_eq!(format_fixed(0.25, 1), "0.3");
/// assert_eq!(format_fixed(-0.25, 1), "-0.3");
/// ```
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    let magnitude = value.abs();
    let digits = if is_decimal_tie(magnitude, decimals) {
        // Nudge past the tie so the formatter rounds the magnitude up.
        let nudge = 10f64.powi(-(decimals as i32) - 3);
        format!("{:.*}", decimals, magnitude + nudge)
    } else {
        format!("{:.*}", decimals, magnitude)
    };
    if value < 0.0 {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Round through the fixed-decimal string and parse back.
pub fn round_fixed(value: f64, decimals: usize) -> f64 {
    format_fixed(value, decimals).parse().unwrap_or(value)
}

fn is_decimal_tie(magnitude: f64, decimals: usize) -> bool {
    // The exact binary expansion of any f64 in range terminates well before 80 digits.
    let exact = format!("{:.80}", magnitude);
    let Some(dot) = exact.find('.') else {
        return false;
    };
    let fraction = &exact[dot + 1..];
    match fraction.as_bytes().get(decimals) {
        Some(b'5') => fraction[decimals + 1..].bytes().all(|b| b == b'0'),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm_to_metres() {
        let mm = Millimetres(3724.0);
        let m: Metres = mm.into();
        assert!((m.0 - 3.724).abs() < 1e-12);
    }

    #[test]
    fn test_area_from_mm() {
        let area = SquareMetres::from_mm(Millimetres(500.0), Millimetres(1808.0));
        assert!((area.0 - 0.904).abs() < 1e-12);
    }

    #[test]
    fn test_arithmetic() {
        let a = Millimetres(10.0);
        let b = Millimetres(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_round_to_two_decimals() {
        assert_eq!(round_to(8.284271247, 2), 8.28);
        assert_eq!(round_to(20.0, 2), 20.0);
        assert_eq!(round_to(0.125, 2), 0.13);
    }

    #[test]
    fn test_format_fixed_ties_round_up() {
        assert_eq!(format_fixed(1862.25, 1), "1862.3");
        assert_eq!(format_fixed(1862.75, 1), "1862.8");
        assert_eq!(format_fixed(2.125, 2), "2.13");
    }

    #[test]
    fn test_format_fixed_non_ties_use_exact_value() {
        // 1.15 is stored as 1.149999..., so it rounds down.
        assert_eq!(format_fixed(1.15, 1), "1.1");
        assert_eq!(format_fixed(459.3333333, 1), "459.3");
        assert_eq!(format_fixed(0.0, 1), "0.0");
    }

    #[test]
    fn test_format_fixed_negative_values() {
        assert_eq!(format_fixed(-0.01, 1), "-0.0");
        assert_eq!(format_fixed(-0.0, 1), "0.0");
        assert_eq!(format_fixed(-12.5, 0), "-13");
    }

    #[test]
    fn test_round_fixed() {
        assert_eq!(round_fixed(29.796, 2), 29.8);
        assert_eq!(round_fixed(3.005, 2), 3.0);
    }

    #[test]
    fn test_serialization() {
        let mm = Millimetres(12.5);
        let json = serde_json::to_string(&mm).unwrap();
        assert_eq!(json, "12.5");

        let roundtrip: Millimetres = serde_json::from_str(&json).unwrap();
        assert_eq!(mm, roundtrip);
    }
}
