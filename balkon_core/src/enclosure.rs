//! # Enclosure Description
//!
//! The input of one computation: the arms of a glazed balcony enclosure and
//! the options that apply to all of them (height, glass, profile color).
//!
//! ## Structure
//!
//! ```text
//! Enclosure
//! ├── height, glass_thickness, glass_color, profile_color, position_no
//! ├── sliding_adjacency_total / fixed_sliding_adjacency_total (from the preview)
//! └── arms: Vec<Arm> (left to right)
//! ```
//!
//! Decoding is lenient the way form input is: numbers may arrive as strings,
//! blanks and garbage fall back to the field default, and the Turkish form
//! keys and direction labels (`sol`, `sag`, `sagsol`) are accepted next to the
//! English ones. Decoding only fails on malformed JSON.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "height": 2000,
//!   "glass_thickness": "24mm",
//!   "arms": [
//!     { "width": 3000, "wing_count": 6, "exit_count": 1, "exit_direction": "left" },
//!     { "width": 2000, "wing_count": 4, "turn_angle": 90 }
//!   ]
//! }
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::ProfileColor;
use crate::errors::BalkonResult;
use crate::geometry::{GlassThickness, ProfileDimensions};

/// Side on which the exit (hinged) sashes of an arm sit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExitDirection {
    /// One exit sash at the left end of the sliding run
    Left,
    /// One exit sash at the right end of the sliding run
    #[default]
    Right,
    /// Exit sashes at both ends
    Both,
}

impl ExitDirection {
    /// Parse a direction label; empty or unknown labels resolve to `Right`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "left" | "sol" => ExitDirection::Left,
            "both" | "sagsol" | "solsag" => ExitDirection::Both,
            _ => ExitDirection::Right,
        }
    }

    /// True when an exit sash sits at the left end
    pub fn has_left(&self) -> bool {
        matches!(self, ExitDirection::Left | ExitDirection::Both)
    }

    /// True when an exit sash sits at the right end
    pub fn has_right(&self) -> bool {
        matches!(self, ExitDirection::Right | ExitDirection::Both)
    }
}

/// Side on which the fixed panes of an arm are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FixedPaneDirection {
    /// Fixed panes at the left end of the arm
    Left,
    /// Fixed panes at the right end of the arm
    #[default]
    Right,
}

impl FixedPaneDirection {
    /// Parse a direction label; empty or unknown labels resolve to `Right`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "left" | "sol" => FixedPaneDirection::Left,
            _ => FixedPaneDirection::Right,
        }
    }
}

impl<'de> Deserialize<'de> for ExitDirection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value.as_str().map(ExitDirection::from_label).unwrap_or_default())
    }
}

impl<'de> Deserialize<'de> for FixedPaneDirection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value.as_str().map(FixedPaneDirection::from_label).unwrap_or_default())
    }
}

/// One straight run of the enclosure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arm {
    /// Arm width (mm)
    #[serde(default, alias = "genislik", deserialize_with = "lenient::number")]
    pub width: f64,

    /// Total sashes in the arm (fixed + exit + sliding)
    #[serde(default = "default_wing_count", alias = "kanat", deserialize_with = "lenient::wing_count")]
    pub wing_count: u32,

    /// Hinged exit sashes
    #[serde(default, alias = "cikis_sayisi", deserialize_with = "lenient::count")]
    pub exit_count: u32,

    /// Where the exit sashes sit
    #[serde(default, alias = "cikis_yonu")]
    pub exit_direction: ExitDirection,

    /// Non-operable panes
    #[serde(default, alias = "sabitCamAdedi", deserialize_with = "lenient::count")]
    pub fixed_pane_count: u32,

    /// Width of each fixed pane (mm)
    #[serde(default, alias = "sabitCamGenisligi", deserialize_with = "lenient::number")]
    pub fixed_pane_width: f64,

    /// Where the fixed panes sit
    #[serde(default, alias = "sabitCamYonu")]
    pub fixed_pane_direction: FixedPaneDirection,

    /// Junction angle (degrees) between the previous arm and this one.
    /// Ignored for the first arm's side profile.
    #[serde(default, alias = "aci", deserialize_with = "lenient::angle")]
    pub turn_angle: Option<f64>,
}

fn default_wing_count() -> u32 {
    1
}

impl Default for Arm {
    fn default() -> Self {
        Arm::new(0.0, 1)
    }
}

impl Arm {
    /// Create an arm with only sliding sashes.
    pub fn new(width: f64, wing_count: u32) -> Self {
        Arm {
            width,
            wing_count,
            exit_count: 0,
            exit_direction: ExitDirection::default(),
            fixed_pane_count: 0,
            fixed_pane_width: 0.0,
            fixed_pane_direction: FixedPaneDirection::default(),
            turn_angle: None,
        }
    }

    /// Add exit sashes (builder pattern)
    pub fn with_exits(mut self, count: u32, direction: ExitDirection) -> Self {
        self.exit_count = count;
        self.exit_direction = direction;
        self
    }

    /// Add fixed panes (builder pattern)
    pub fn with_fixed_panes(mut self, count: u32, width: f64, direction: FixedPaneDirection) -> Self {
        self.fixed_pane_count = count;
        self.fixed_pane_width = width;
        self.fixed_pane_direction = direction;
        self
    }

    /// Set the junction angle to the previous arm (builder pattern)
    pub fn with_turn_angle(mut self, angle: f64) -> Self {
        self.turn_angle = Some(angle);
        self
    }

    /// Arms without a positive width produce no panels and no material.
    pub fn is_active(&self) -> bool {
        self.width > 0.0
    }

    /// Sliding sashes: wings left after fixed and exit sashes, never negative.
    pub fn sliding_count(&self) -> u32 {
        self.wing_count
            .saturating_sub(self.fixed_pane_count)
            .saturating_sub(self.exit_count)
    }

    /// Total width taken by fixed panes (mm)
    pub fn fixed_total_width(&self) -> f64 {
        self.fixed_pane_count as f64 * self.fixed_pane_width
    }

    /// True when this arm's junction angle is present and positive.
    pub fn has_positive_turn(&self) -> bool {
        matches!(self.turn_angle, Some(a) if a > 0.0)
    }

    /// True when this arm's junction angle is present and above 180°.
    pub fn has_reflex_turn(&self) -> bool {
        matches!(self.turn_angle, Some(a) if a > 180.0)
    }
}

/// A complete glazed enclosure: the input of one computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enclosure {
    /// Arms from left to right
    #[serde(default, alias = "kolBilgileri")]
    pub arms: Vec<Arm>,

    /// Total enclosure height (mm)
    #[serde(default, deserialize_with = "lenient::number")]
    pub height: f64,

    /// Glass thickness (also selects the profile set)
    #[serde(default, alias = "camKalinligi")]
    pub glass_thickness: GlassThickness,

    /// Glass tint label, carried onto the pane list
    #[serde(default = "default_glass_color", alias = "camRengi", deserialize_with = "lenient::glass_color")]
    pub glass_color: String,

    /// Profile color of the aluminium system
    #[serde(default, alias = "color")]
    pub profile_color: ProfileColor,

    /// Offer position number stamped on every material line
    #[serde(default, alias = "pozNo", skip_serializing_if = "Option::is_none")]
    pub position_no: Option<String>,

    /// Sliding adjacency total reported by the live preview; trusted verbatim
    #[serde(default, alias = "toplamHareketliCamArasi", deserialize_with = "lenient::optional_count")]
    pub sliding_adjacency_total: Option<u32>,

    /// Fixed/sliding adjacency total reported by the live preview; trusted verbatim
    #[serde(default, alias = "toplamSabitHareketliCamArasi", deserialize_with = "lenient::optional_count")]
    pub fixed_sliding_adjacency_total: Option<u32>,
}

/// Tint used when no glass color is given.
pub const DEFAULT_GLASS_COLOR: &str = "Şeffaf";

fn default_glass_color() -> String {
    DEFAULT_GLASS_COLOR.to_string()
}

impl Default for Enclosure {
    fn default() -> Self {
        Enclosure::new(0.0, GlassThickness::default())
    }
}

impl Enclosure {
    /// Create an enclosure without arms.
    pub fn new(height: f64, glass_thickness: GlassThickness) -> Self {
        Enclosure {
            arms: Vec::new(),
            height,
            glass_thickness,
            glass_color: default_glass_color(),
            profile_color: ProfileColor::default(),
            position_no: None,
            sliding_adjacency_total: None,
            fixed_sliding_adjacency_total: None,
        }
    }

    /// Append an arm (builder pattern)
    pub fn with_arm(mut self, arm: Arm) -> Self {
        self.arms.push(arm);
        self
    }

    /// Decode from JSON.
    pub fn from_json(json: &str) -> BalkonResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode as pretty JSON.
    pub fn to_json(&self) -> BalkonResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of arms, including inactive ones (indices stay stable).
    pub fn arm_count(&self) -> usize {
        self.arms.len()
    }

    /// Angle at the left edge of arm `index` (its own junction angle).
    pub fn left_angle(&self, index: usize) -> Option<f64> {
        self.arms.get(index).and_then(|arm| arm.turn_angle)
    }

    /// Angle at the right edge of arm `index` (the next arm's junction angle).
    pub fn right_angle(&self, index: usize) -> Option<f64> {
        self.arms.get(index + 1).and_then(|arm| arm.turn_angle)
    }

    /// Arms that contribute panels and material, with their stable index.
    pub fn active_arms(&self) -> impl Iterator<Item = (usize, &Arm)> {
        self.arms.iter().enumerate().filter(|(_, arm)| arm.is_active())
    }

    /// Profile dimensions of the selected glass, without a turn adjustment.
    pub fn profile_dimensions(&self) -> ProfileDimensions {
        self.glass_thickness.dimensions(None)
    }

    /// Active arms, from the second onward, whose junction angle is positive.
    pub fn junction_turn_count(&self) -> u32 {
        self.active_arms()
            .filter(|(index, arm)| *index > 0 && arm.has_positive_turn())
            .count() as u32
    }

    /// Exit sashes across all active arms.
    pub fn total_exit_count(&self) -> u32 {
        self.active_arms()
            .fold(0, |total, (_, arm)| total.saturating_add(arm.exit_count))
    }

    /// Sliding (rolling) sashes across all active arms; exits are hinged.
    pub fn total_sliding_count(&self) -> u32 {
        self.active_arms()
            .fold(0, |total, (_, arm)| total.saturating_add(arm.sliding_count()))
    }
}

/// Form-style coercion: numbers may arrive as strings, and anything that is
/// not a usable number falls back to the field default.
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use crate::constants::MAX_DECODED_COUNT;

    /// `Number(x)`: NaN when the value has no numeric reading.
    fn coerce(value: &Value) -> f64 {
        match value {
            Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
            Value::String(s) => parse_form_number(s.trim()),
            Value::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Null => 0.0,
            _ => f64::NAN,
        }
    }

    /// Only the spelled-out `Infinity` forms and overflowing literals are
    /// infinite; the word spellings `str::parse` also accepts (`inf`, `NaN`,
    /// ...) are NaN.
    fn parse_form_number(text: &str) -> f64 {
        if text.is_empty() {
            return 0.0;
        }
        match text.parse::<f64>() {
            Ok(n) if n.is_finite() || text.bytes().any(|b| b.is_ascii_digit()) => n,
            _ => match text {
                "Infinity" | "+Infinity" => f64::INFINITY,
                "-Infinity" => f64::NEG_INFINITY,
                _ => f64::NAN,
            },
        }
    }

    /// `Number(x) || fallback`
    fn or_default(value: &Value, fallback: f64) -> f64 {
        let n = coerce(value);
        if n.is_nan() || n == 0.0 {
            fallback
        } else {
            n
        }
    }

    /// Counts are never negative; a fractional count rounds up the way a
    /// panel loop over it would. Counts are capped at `MAX_DECODED_COUNT`.
    fn to_count(n: f64) -> u32 {
        if n.is_finite() && n > 0.0 {
            n.ceil().min(MAX_DECODED_COUNT as f64) as u32
        } else {
            0
        }
    }

    pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(or_default(&value, 0.0))
    }

    pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(to_count(or_default(&value, 0.0)))
    }

    pub fn wing_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(to_count(or_default(&value, 1.0)))
    }

    pub fn optional_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(None);
        }
        let n = coerce(&value);
        Ok(if n.is_nan() { None } else { Some(to_count(n)) })
    }

    pub fn angle<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let n = or_default(&value, 0.0);
        Ok(if n == 0.0 { None } else { Some(n) })
    }

    pub fn glass_color<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(s) if !s.trim().is_empty() => s,
            _ => super::default_glass_color(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_DECODED_COUNT;

    #[test]
    fn test_sliding_count_is_clamped() {
        let arm = Arm::new(2000.0, 2)
            .with_exits(2, ExitDirection::Both)
            .with_fixed_panes(1, 500.0, FixedPaneDirection::Left);
        assert_eq!(arm.sliding_count(), 0);

        let arm = Arm::new(2000.0, 6).with_exits(1, ExitDirection::Right);
        assert_eq!(arm.sliding_count(), 5);
    }

    #[test]
    fn test_direction_labels() {
        assert_eq!(ExitDirection::from_label("sol"), ExitDirection::Left);
        assert_eq!(ExitDirection::from_label("sagsol"), ExitDirection::Both);
        assert_eq!(ExitDirection::from_label("BOTH"), ExitDirection::Both);
        assert_eq!(ExitDirection::from_label(""), ExitDirection::Right);
        assert_eq!(FixedPaneDirection::from_label("left"), FixedPaneDirection::Left);
        assert_eq!(FixedPaneDirection::from_label("sag"), FixedPaneDirection::Right);
    }

    #[test]
    fn test_decoded_counts_are_capped() {
        let enclosure = Enclosure::from_json(
            r#"{
                "arms": [{ "width": 2000, "wing_count": 4, "exit_count": 2000000000 }],
                "fixed_sliding_adjacency_total": 4294967295
            }"#,
        )
        .unwrap();
        assert_eq!(enclosure.arms[0].exit_count, MAX_DECODED_COUNT);
        assert_eq!(enclosure.fixed_sliding_adjacency_total, Some(MAX_DECODED_COUNT));
        assert_eq!(enclosure.arms[0].sliding_count(), 0);
    }

    #[test]
    fn test_totals_saturate() {
        let enclosure = Enclosure::new(2000.0, GlassThickness::Mm24)
            .with_arm(Arm::new(2000.0, 2).with_exits(u32::MAX, ExitDirection::Both))
            .with_arm(Arm::new(2000.0, 2).with_exits(u32::MAX, ExitDirection::Both));
        assert_eq!(enclosure.total_exit_count(), u32::MAX);
    }

    #[test]
    fn test_word_infinity_spellings() {
        let arm: Arm = serde_json::from_str(r#"{ "width": "inf", "wing_count": "NaN" }"#).unwrap();
        assert_eq!(arm.width, 0.0);
        assert_eq!(arm.wing_count, 1);
        assert!(!arm.is_active());

        let arm: Arm = serde_json::from_str(r#"{ "width": "+infinity" }"#).unwrap();
        assert_eq!(arm.width, 0.0);

        let arm: Arm = serde_json::from_str(r#"{ "width": "Infinity" }"#).unwrap();
        assert_eq!(arm.width, f64::INFINITY);
    }

    #[test]
    fn test_lenient_arm_decoding() {
        let json = r#"{
            "genislik": "2500",
            "kanat": "",
            "cikis_sayisi": "abc",
            "cikis_yonu": "sol",
            "sabitCamAdedi": -2,
            "aci": "90"
        }"#;
        let arm: Arm = serde_json::from_str(json).unwrap();
        assert_eq!(arm.width, 2500.0);
        assert_eq!(arm.wing_count, 1);
        assert_eq!(arm.exit_count, 0);
        assert_eq!(arm.exit_direction, ExitDirection::Left);
        assert_eq!(arm.fixed_pane_count, 0);
        assert_eq!(arm.turn_angle, Some(90.0));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let arm: Arm = serde_json::from_str("{}").unwrap();
        assert_eq!(arm, Arm::default());
        assert!(!arm.is_active());

        let enclosure = Enclosure::from_json("{}").unwrap();
        assert_eq!(enclosure.glass_color, DEFAULT_GLASS_COLOR);
        assert_eq!(enclosure.glass_thickness, GlassThickness::Mm24);
        assert_eq!(enclosure.sliding_adjacency_total, None);
    }

    #[test]
    fn test_zero_angle_means_no_turn() {
        let arm: Arm = serde_json::from_str(r#"{ "width": 1000, "turn_angle": 0 }"#).unwrap();
        assert_eq!(arm.turn_angle, None);
    }

    #[test]
    fn test_preview_totals_keep_zero() {
        let enclosure =
            Enclosure::from_json(r#"{ "sliding_adjacency_total": 0, "fixed_sliding_adjacency_total": "3" }"#)
                .unwrap();
        assert_eq!(enclosure.sliding_adjacency_total, Some(0));
        assert_eq!(enclosure.fixed_sliding_adjacency_total, Some(3));
    }

    #[test]
    fn test_neighbour_angles() {
        let enclosure = Enclosure::new(2000.0, GlassThickness::Mm24)
            .with_arm(Arm::new(2000.0, 4))
            .with_arm(Arm::new(1500.0, 3).with_turn_angle(90.0))
            .with_arm(Arm::new(1500.0, 3).with_turn_angle(135.0));
        assert_eq!(enclosure.left_angle(1), Some(90.0));
        assert_eq!(enclosure.right_angle(0), Some(90.0));
        assert_eq!(enclosure.right_angle(1), Some(135.0));
        assert_eq!(enclosure.right_angle(2), None);
        assert_eq!(enclosure.junction_turn_count(), 2);
    }

    #[test]
    fn test_inactive_arms_are_skipped_in_totals() {
        let enclosure = Enclosure::new(2000.0, GlassThickness::Mm24)
            .with_arm(Arm::new(2000.0, 4).with_exits(1, ExitDirection::Right))
            .with_arm(Arm::new(0.0, 4).with_exits(2, ExitDirection::Both).with_turn_angle(90.0));
        assert_eq!(enclosure.total_exit_count(), 1);
        assert_eq!(enclosure.total_sliding_count(), 3);
        assert_eq!(enclosure.junction_turn_count(), 0);
        assert_eq!(enclosure.active_arms().count(), 1);
    }

    #[test]
    fn test_json_roundtrip() {
        let enclosure = Enclosure::new(2100.0, GlassThickness::Mm32)
            .with_arm(Arm::new(3000.0, 6).with_exits(1, ExitDirection::Left));
        let json = enclosure.to_json().unwrap();
        let roundtrip = Enclosure::from_json(&json).unwrap();
        assert_eq!(enclosure, roundtrip);
    }
}
