//! # Geometry Primitives
//!
//! The two leaf functions everything else is built on:
//!
//! - [`turn_piece`] sizes the triangular filler where two arms meet at an angle
//! - [`profile_dimensions`] maps a glass thickness label to its profile set
//!
//! Both are total: malformed angles fall back to 90° and unknown thickness
//! labels fall back to the 24 mm profile set.
//!
//! ## Example
//!
//! ```rust
//! use balkon_core::geometry::{profile_dimensions, turn_piece};
//!
//! assert_eq!(turn_piece(Some(90.0)), 20.0);
//! assert_eq!(turn_piece(Some(180.0)), 0.0);
//!
//! let dims = profile_dimensions("28mm", None);
//! assert_eq!(dims.glass_spacing, 22.0);
//! assert_eq!(dims.right_profile_width, dims.left_profile_width);
//! ```

use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::{
    FALLBACK_TURN_ANGLE_DEG, HORIZONTAL_PROFILE_MM, JUNCTION_PROFILE_BASE_MM, TURN_PIECE_LEG_MM,
};
use crate::errors::{BalkonError, BalkonResult};
use crate::units::round_to;

/// Length (mm) of the filler piece for a junction of `angle` degrees.
///
/// A missing, zero, non-finite, negative or > 360° angle is replaced by 90°.
/// Angles above 180° are mirrored to `360 − angle`. The result is
/// `|20 · tan((180 − angle) / 2)|` rounded to two decimals, so it is never
/// negative.
pub fn turn_piece(angle: Option<f64>) -> f64 {
    let angle = match angle {
        Some(a) if a.is_finite() && a > 0.0 && a <= 360.0 => a,
        _ => FALLBACK_TURN_ANGLE_DEG,
    };
    let folded = if angle > 180.0 { 360.0 - angle } else { angle };
    let radians = folded * PI / 180.0;
    let raw = TURN_PIECE_LEG_MM * (FRAC_PI_2 - radians / 2.0).tan();
    round_to(raw, 2).abs()
}

/// True when a junction angle should widen the adjacent side profile.
pub(crate) fn is_turn(angle: Option<f64>) -> bool {
    matches!(angle, Some(a) if a != 0.0 && !a.is_nan())
}

/// Width of a side profile sitting on an angled junction.
pub fn junction_profile_width(angle: Option<f64>) -> f64 {
    JUNCTION_PROFILE_BASE_MM + turn_piece(angle)
}

// ============================================================================
// Glass thickness
// ============================================================================

/// Supported glass thicknesses, each with its own profile set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GlassThickness {
    /// 8 mm single glazing
    Mm8,
    /// 24 mm insulated glazing
    #[default]
    Mm24,
    /// 28 mm insulated glazing
    Mm28,
    /// 32 mm insulated glazing
    Mm32,
    /// 40 mm insulated glazing
    Mm40,
}

impl GlassThickness {
    /// All thickness variants for UI selection
    pub const ALL: [GlassThickness; 5] = [
        GlassThickness::Mm8,
        GlassThickness::Mm24,
        GlassThickness::Mm28,
        GlassThickness::Mm32,
        GlassThickness::Mm40,
    ];

    /// Parse a label such as `"24mm"`, `"24"` or `" 24 MM "`; unknown labels
    /// resolve to 24 mm.
    pub fn from_label(label: &str) -> Self {
        Self::from_str_strict(label).unwrap_or_default()
    }

    /// Parse a label, rejecting anything outside the known thicknesses.
    pub fn from_str_strict(label: &str) -> BalkonResult<Self> {
        let normalized = label.trim().to_lowercase();
        let number = normalized.trim_end_matches("mm").trim();
        match number {
            "8" => Ok(GlassThickness::Mm8),
            "24" => Ok(GlassThickness::Mm24),
            "28" => Ok(GlassThickness::Mm28),
            "32" => Ok(GlassThickness::Mm32),
            "40" => Ok(GlassThickness::Mm40),
            _ => Err(BalkonError::unknown_label("glass thickness", label)),
        }
    }

    /// Thickness in millimetres
    pub fn mm(&self) -> f64 {
        match self {
            GlassThickness::Mm8 => 8.0,
            GlassThickness::Mm24 => 24.0,
            GlassThickness::Mm28 => 28.0,
            GlassThickness::Mm32 => 32.0,
            GlassThickness::Mm40 => 40.0,
        }
    }

    /// Canonical label, e.g. `"24mm"`
    pub fn label(&self) -> &'static str {
        match self {
            GlassThickness::Mm8 => "8mm",
            GlassThickness::Mm24 => "24mm",
            GlassThickness::Mm28 => "28mm",
            GlassThickness::Mm32 => "32mm",
            GlassThickness::Mm40 => "40mm",
        }
    }

    /// Vertical side profile width for this thickness
    fn base_profile_width(&self) -> f64 {
        match self {
            GlassThickness::Mm8 => 24.0,
            GlassThickness::Mm24 => 25.0,
            GlassThickness::Mm28 => 28.0,
            GlassThickness::Mm32 => 32.0,
            GlassThickness::Mm40 => 40.0,
        }
    }

    /// Glass-to-glass profile spacing between neighbouring panels
    fn glass_spacing(&self) -> f64 {
        match self {
            GlassThickness::Mm8 => 9.0,
            GlassThickness::Mm24 => 19.0,
            GlassThickness::Mm28 => 22.0,
            GlassThickness::Mm32 => 25.0,
            GlassThickness::Mm40 => 30.0,
        }
    }

    /// Profile dimensions for this thickness, with the right profile widened
    /// when a non-zero turn angle to the next arm is given.
    pub fn dimensions(&self, turn_angle: Option<f64>) -> ProfileDimensions {
        let base = self.base_profile_width();
        let right = if is_turn(turn_angle) {
            junction_profile_width(turn_angle)
        } else {
            base
        };
        ProfileDimensions {
            left_profile_width: base,
            right_profile_width: right,
            glass_spacing: self.glass_spacing(),
            horizontal_profile_width: HORIZONTAL_PROFILE_MM,
            glass_thickness: self.mm(),
        }
    }
}

impl std::fmt::Display for GlassThickness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for GlassThickness {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for GlassThickness {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::String(s) => GlassThickness::from_label(&s),
            serde_json::Value::Number(n) => GlassThickness::from_label(&n.to_string()),
            _ => GlassThickness::default(),
        })
    }
}

// ============================================================================
// Profile dimensions
// ============================================================================

/// Profile widths derived from the glass thickness (all mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileDimensions {
    /// Left vertical frame profile width
    pub left_profile_width: f64,
    /// Right vertical frame profile width (angle dependent)
    pub right_profile_width: f64,
    /// Glass-to-glass spacing between ordinary neighbours
    pub glass_spacing: f64,
    /// Horizontal top/bottom frame profile width
    pub horizontal_profile_width: f64,
    /// Glass thickness
    pub glass_thickness: f64,
}

/// Profile dimensions for a thickness label; unknown labels use 24 mm.
pub fn profile_dimensions(label: &str, turn_angle: Option<f64>) -> ProfileDimensions {
    GlassThickness::from_label(label).dimensions(turn_angle)
}
