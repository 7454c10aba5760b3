//! # Panel Sequencer
//!
//! Partitions one arm into its ordered glazed panels.
//!
//! ## Order
//!
//! Panels always follow `fixed-left*, exit-left?, sliding*, exit-right?,
//! fixed-right*`.
//!
//! ## Spacing
//!
//! Each panel carries the profile width inserted after it:
//!
//! | current     | next        | spacing              |
//! |-------------|-------------|----------------------|
//! | exit-left   | exit-right  | 98 (two exit profiles)|
//! | exit-left   | anything    | 49                   |
//! | anything    | exit-right  | 49                   |
//! | otherwise   |             | glass spacing (19 @ 24 mm) |
//! | last panel  |             | 0                    |
//!
//! A leading exit-right panel reserves another 49 mm before the sequence and a
//! trailing exit-left one 49 mm after it. Fixed panes keep their configured
//! width; whatever width is left is shared evenly by the sliding and exit
//! panels.
//!
//! ## Example
//!
//! ```rust
//! use balkon_core::enclosure::{Arm, Enclosure, ExitDirection};
//! use balkon_core::geometry::GlassThickness;
//! use balkon_core::panels::PanelKind;
//!
//! let enclosure = Enclosure::new(2000.0, GlassThickness::Mm24)
//!     .with_arm(Arm::new(2000.0, 4).with_exits(1, ExitDirection::Right));
//!
//! let sequence = enclosure.panel_sequence(0);
//! let kinds: Vec<PanelKind> = sequence.panels.iter().map(|p| p.kind).collect();
//! assert_eq!(kinds.last(), Some(&PanelKind::ExitRight));
//! assert_eq!(sequence.panels[2].spacing_after, 49.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{EXIT_PROFILE_MM, FRAME_PROFILE_HEIGHT_MM, OUTER_SIDE_PROFILE_MM, WING_RAIL_HEIGHT_MM};
use crate::enclosure::{Arm, Enclosure, FixedPaneDirection};
use crate::geometry::{is_turn, junction_profile_width, ProfileDimensions};

/// Type of a glazed panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    /// Fixed pane grouped at the left end
    FixedLeft,
    /// Fixed pane grouped at the right end
    FixedRight,
    /// Hinged exit sash at the left end of the sliding run
    ExitLeft,
    /// Hinged exit sash at the right end of the sliding run
    ExitRight,
    /// Sliding sash
    Sliding,
}

impl PanelKind {
    /// Fixed (non-operable) pane
    pub fn is_fixed(&self) -> bool {
        matches!(self, PanelKind::FixedLeft | PanelKind::FixedRight)
    }

    /// Hinged exit sash
    pub fn is_exit(&self) -> bool {
        matches!(self, PanelKind::ExitLeft | PanelKind::ExitRight)
    }

    /// Panels that share the free width: sliding and exit sashes
    pub fn is_sliding_like(&self) -> bool {
        !self.is_fixed()
    }
}

/// One glazed bay of an arm (all mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub kind: PanelKind,
    pub width: f64,
    pub height: f64,
    /// Profile width between this panel and the next; 0 for the last panel
    pub spacing_after: f64,
}

/// Where an arm sits in the enclosure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmPosition {
    /// 0-based arm index
    pub index: usize,
    /// Total number of arms
    pub count: usize,
}

impl ArmPosition {
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.count
    }
}

/// Junction angles on both sides of an arm.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NeighborAngles {
    /// Angle to the previous arm (left profile)
    pub left: Option<f64>,
    /// Angle to the next arm (right profile)
    pub right: Option<f64>,
}

/// Panels of one arm plus the frame widths around them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSequence {
    pub panels: Vec<Panel>,
    /// Side profile on the arm's left edge (mm)
    pub left_side_profile: f64,
    /// Side profile on the arm's right edge (mm)
    pub right_side_profile: f64,
    /// Exit profile reserved before a leading exit-right panel (mm)
    pub leading_extra: f64,
    /// Exit profile reserved after a trailing exit-left panel (mm)
    pub trailing_extra: f64,
}

/// A panel with its resolved horizontal offset from the arm's left edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelPlacement {
    pub kind: PanelKind,
    /// Distance from the arm's left edge to the panel's left edge (mm)
    pub offset: f64,
    pub width: f64,
    pub spacing_after: f64,
}

impl PanelSequence {
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Sum of the per-panel spacings (boundary extras excluded)
    pub fn panel_spacing_total(&self) -> f64 {
        self.panels.iter().map(|p| p.spacing_after).sum()
    }

    /// Boundary extras before/after the sequence
    pub fn boundary_extras(&self) -> f64 {
        self.leading_extra + self.trailing_extra
    }

    /// Panels sharing the free width
    pub fn sliding_like_count(&self) -> usize {
        self.panels.iter().filter(|p| p.kind.is_sliding_like()).count()
    }

    pub fn count_of(&self, kind: PanelKind) -> usize {
        self.panels.iter().filter(|p| p.kind == kind).count()
    }

    /// Width accounted for by panels, spacings, extras and side profiles.
    /// Equals the arm width whenever a sliding-like panel exists.
    pub fn occupied_width(&self) -> f64 {
        let glass: f64 = self.panels.iter().map(|p| p.width).sum();
        glass + self.panel_spacing_total() + self.boundary_extras() + self.left_side_profile + self.right_side_profile
    }

    /// Left-to-right offsets of every panel, folded from the left side profile.
    pub fn layout(&self) -> Vec<PanelPlacement> {
        let start = self.left_side_profile + self.leading_extra;
        self.panels
            .iter()
            .scan(start, |offset, panel| {
                let placement = PanelPlacement {
                    kind: panel.kind,
                    offset: *offset,
                    width: panel.width,
                    spacing_after: panel.spacing_after,
                };
                *offset += panel.width + panel.spacing_after;
                Some(placement)
            })
            .collect()
    }
}

/// Clear glass height for an enclosure height.
pub fn pane_height(total_height: f64) -> f64 {
    total_height - FRAME_PROFILE_HEIGHT_MM * 2.0 - WING_RAIL_HEIGHT_MM * 2.0
}

fn side_profile(is_outer_edge: bool, angle: Option<f64>) -> f64 {
    if !is_outer_edge && is_turn(angle) {
        junction_profile_width(angle)
    } else {
        OUTER_SIDE_PROFILE_MM
    }
}

/// Panel types in their fixed order.
fn kind_sequence(arm: &Arm) -> Vec<PanelKind> {
    let fixed = arm.fixed_pane_count as usize;
    let mut kinds = Vec::new();

    if arm.fixed_pane_direction == FixedPaneDirection::Left {
        kinds.extend(std::iter::repeat(PanelKind::FixedLeft).take(fixed));
    }
    if arm.exit_count > 0 && arm.exit_direction.has_left() {
        kinds.push(PanelKind::ExitLeft);
    }
    kinds.extend(std::iter::repeat(PanelKind::Sliding).take(arm.sliding_count() as usize));
    if arm.exit_count > 0 && arm.exit_direction.has_right() {
        kinds.push(PanelKind::ExitRight);
    }
    if arm.fixed_pane_direction == FixedPaneDirection::Right {
        kinds.extend(std::iter::repeat(PanelKind::FixedRight).take(fixed));
    }
    kinds
}

/// Profile width between two neighbouring panels.
fn spacing_between(current: PanelKind, next: PanelKind, glass_spacing: f64) -> f64 {
    match (current, next) {
        (PanelKind::ExitLeft, PanelKind::ExitRight) => EXIT_PROFILE_MM * 2.0,
        (PanelKind::ExitLeft, _) => EXIT_PROFILE_MM,
        (_, PanelKind::ExitRight) => EXIT_PROFILE_MM,
        _ => glass_spacing,
    }
}

/// Build the panel sequence of one arm.
///
/// Arms without a positive width yield no panels. Structurally impossible
/// counts (more fixed and exit panes than wings) leave zero sliding panels.
pub fn build_panel_sequence(
    arm: &Arm,
    total_height: f64,
    dims: &ProfileDimensions,
    position: ArmPosition,
    angles: NeighborAngles,
) -> PanelSequence {
    let left_side_profile = side_profile(position.is_first(), angles.left);
    let right_side_profile = side_profile(position.is_last(), angles.right);

    if !arm.is_active() {
        return PanelSequence {
            panels: Vec::new(),
            left_side_profile,
            right_side_profile,
            leading_extra: 0.0,
            trailing_extra: 0.0,
        };
    }

    let kinds = kind_sequence(arm);
    let spacings: Vec<f64> = kinds
        .iter()
        .enumerate()
        .map(|(i, current)| match kinds.get(i + 1) {
            Some(next) => spacing_between(*current, *next, dims.glass_spacing),
            None => 0.0,
        })
        .collect();

    let leading_extra = match kinds.first() {
        Some(PanelKind::ExitRight) => EXIT_PROFILE_MM,
        _ => 0.0,
    };
    let trailing_extra = match kinds.last() {
        Some(PanelKind::ExitLeft) => EXIT_PROFILE_MM,
        _ => 0.0,
    };

    let spacing_total: f64 = leading_extra + trailing_extra + spacings.iter().sum::<f64>();
    let sliding_like = kinds.iter().filter(|k| k.is_sliding_like()).count();
    let usable_width =
        arm.width - left_side_profile - right_side_profile - spacing_total - arm.fixed_total_width();
    let sliding_width = if sliding_like > 0 {
        usable_width / sliding_like as f64
    } else {
        0.0
    };

    debug!(
        arm = position.index + 1,
        left_side_profile,
        right_side_profile,
        spacing_total,
        sliding_like,
        sliding_width,
        "built panel sequence"
    );

    let height = pane_height(total_height);
    let panels = kinds
        .into_iter()
        .zip(spacings)
        .map(|(kind, spacing_after)| Panel {
            kind,
            width: if kind.is_fixed() { arm.fixed_pane_width } else { sliding_width },
            height,
            spacing_after,
        })
        .collect();

    PanelSequence {
        panels,
        left_side_profile,
        right_side_profile,
        leading_extra,
        trailing_extra,
    }
}

impl Enclosure {
    /// Position of arm `index` within this enclosure.
    pub fn arm_position(&self, index: usize) -> ArmPosition {
        ArmPosition {
            index,
            count: self.arm_count(),
        }
    }

    /// Junction angles around arm `index`.
    pub fn neighbor_angles(&self, index: usize) -> NeighborAngles {
        NeighborAngles {
            left: self.left_angle(index),
            right: self.right_angle(index),
        }
    }

    /// Panel sequence of arm `index`; an out-of-range index yields no panels.
    pub fn panel_sequence(&self, index: usize) -> PanelSequence {
        let dims = self.profile_dimensions();
        match self.arms.get(index) {
            Some(arm) => build_panel_sequence(
                arm,
                self.height,
                &dims,
                self.arm_position(index),
                self.neighbor_angles(index),
            ),
            None => PanelSequence {
                panels: Vec::new(),
                left_side_profile: 0.0,
                right_side_profile: 0.0,
                leading_extra: 0.0,
                trailing_extra: 0.0,
            },
        }
    }

    /// Panel sequences of every active arm, left to right, with arm index.
    pub fn panel_sequences(&self) -> Vec<(usize, PanelSequence)> {
        self.active_arms()
            .map(|(index, _)| (index, self.panel_sequence(index)))
            .collect()
    }
}
