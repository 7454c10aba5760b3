//! Fixed engineering constants of the balcony profile system (all millimetres).

/// Top/bottom frame profile height.
pub const FRAME_PROFILE_HEIGHT_MM: f64 = 63.5;

/// Wing rail height above/below the pane.
pub const WING_RAIL_HEIGHT_MM: f64 = 32.5;

/// Side profile on the outward edge of the first and last arm, and on any
/// junction without a usable angle.
pub const OUTER_SIDE_PROFILE_MM: f64 = 25.0;

/// Base width of a junction side profile before the turn piece is added.
pub const JUNCTION_PROFILE_BASE_MM: f64 = 16.0;

/// Profile width reserved next to an exit (hinged) sash.
pub const EXIT_PROFILE_MM: f64 = 49.0;

/// Leg length the turn-piece formula is scaled by.
pub const TURN_PIECE_LEG_MM: f64 = 20.0;

/// Angle substituted for a missing or implausible junction angle.
pub const FALLBACK_TURN_ANGLE_DEG: f64 = 90.0;

/// Horizontal frame profile width, shared by every glass thickness.
pub const HORIZONTAL_PROFILE_MM: f64 = 192.0;

/// Side/tab profile cut: total height minus this allowance.
pub const SIDE_TAB_ALLOWANCE_MM: f64 = 127.0;

/// Vertical sash profile cut (lock, telescoping, corner, ara): height minus this.
pub const VERTICAL_PROFILE_ALLOWANCE_MM: f64 = 138.0;

/// Wing profile cut: pane width minus this.
pub const WING_PROFILE_ALLOWANCE_MM: f64 = 18.0;

/// Outer side tabs on every enclosure (far left + far right).
pub const SIDE_TAB_COUNT: u32 = 2;

/// Roller sets per sliding sash.
pub const ROLLER_SETS_PER_SLIDING_SASH: u32 = 4;

/// Caps per exit sash.
pub const CAPS_PER_EXIT_SASH: u32 = 3;

/// Brush seal runs per metre of rail (two faces on top and bottom rails).
pub const HORIZONTAL_SEAL_RUNS: f64 = 4.0;

/// Grouping tolerance for pane dimensions.
pub const PANE_MATCH_TOLERANCE_MM: f64 = 0.1;

/// Upper bound for any count decoded from a form document.
pub const MAX_DECODED_COUNT: u32 = 10_000;
