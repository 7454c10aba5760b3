//! Aluminium profile contributors.
//!
//! Rail and wing profiles become metre lines directly, one row per arm and
//! one row per pane. Vertical profiles are produced as [`ProfileCut`]s and
//! converted after grouping.

use tracing::debug;

use super::{MaterialLine, ProfileCut, Unit};
use crate::adjacency::AdjacencyTotals;
use crate::catalog::StockItem;
use crate::constants::{
    SIDE_TAB_ALLOWANCE_MM, SIDE_TAB_COUNT, VERTICAL_PROFILE_ALLOWANCE_MM, WING_PROFILE_ALLOWANCE_MM,
};
use crate::enclosure::Enclosure;
use crate::geometry::turn_piece;
use crate::units::format_fixed;

/// Extra rail consumed by a reflex junction (> 180°) on one side of an arm.
fn reflex_allowance(angle: Option<f64>) -> f64 {
    match angle {
        Some(a) if a > 180.0 => 2.0 * turn_piece(Some(a)),
        _ => 0.0,
    }
}

/// Rail length of every active arm (mm), with its arm index.
///
/// A reflex junction adds rail on both arms it joins: the arm whose own angle
/// is reflex, and the arm before it. The middle arm of two consecutive reflex
/// junctions receives both corrections.
pub fn rail_lengths(enclosure: &Enclosure) -> Vec<(usize, f64)> {
    enclosure
        .active_arms()
        .map(|(index, arm)| {
            let length = arm.width
                + reflex_allowance(enclosure.left_angle(index))
                + reflex_allowance(enclosure.right_angle(index));
            debug!(arm = index, width = arm.width, length, "rail length");
            (index, length)
        })
        .collect()
}

/// One rail line per active arm, top and bottom.
pub fn rail_lines(enclosure: &Enclosure) -> Vec<MaterialLine> {
    rail_lengths(enclosure)
        .into_iter()
        .map(|(_, length)| {
            MaterialLine::new(
                StockItem::RailProfile,
                format_fixed(length, 1),
                length * 2.0 / 1000.0,
                Unit::Metre,
            )
        })
        .collect()
}

/// One wing-profile line per pane, top and bottom.
pub fn wing_lines(enclosure: &Enclosure) -> Vec<MaterialLine> {
    enclosure
        .panel_sequences()
        .iter()
        .flat_map(|(_, sequence)| sequence.panels.iter())
        .map(|panel| {
            let length = panel.width - WING_PROFILE_ALLOWANCE_MM;
            MaterialLine::new(
                StockItem::WingProfile,
                format_fixed(length, 1),
                length * 2.0 / 1000.0,
                Unit::Metre,
            )
        })
        .collect()
}

/// Cap profile pieces: both outer tabs, one per exit sash and one per
/// fixed/sliding junction.
pub fn sash_cap_count(enclosure: &Enclosure, adjacency: &AdjacencyTotals) -> u32 {
    SIDE_TAB_COUNT
        .saturating_add(enclosure.total_exit_count())
        .saturating_add(adjacency.fixed_sliding)
}

/// Vertical profile pieces before grouping. Items with no pieces are left out.
pub fn vertical_profile_cuts(enclosure: &Enclosure, adjacency: &AdjacencyTotals) -> Vec<ProfileCut> {
    let side_length = enclosure.height - SIDE_TAB_ALLOWANCE_MM;
    let vertical_length = enclosure.height - VERTICAL_PROFILE_ALLOWANCE_MM;
    let exits = enclosure.total_exit_count();
    let turns = enclosure.junction_turn_count();

    let cuts = [
        ProfileCut::new(StockItem::SideTabProfile, side_length, SIDE_TAB_COUNT),
        ProfileCut::new(StockItem::LockProfile, vertical_length, exits),
        ProfileCut::new(StockItem::TelescopingOuter, vertical_length, adjacency.sliding),
        ProfileCut::new(StockItem::TelescopingInner, vertical_length, adjacency.sliding),
        ProfileCut::new(StockItem::SashCapProfile, vertical_length, sash_cap_count(enclosure, adjacency)),
        ProfileCut::new(StockItem::CornerPassive, vertical_length, turns),
        ProfileCut::new(StockItem::CornerActive, vertical_length, turns),
        ProfileCut::new(StockItem::CornerTube, vertical_length, turns),
    ];

    debug!(exits, turns, telescoping = adjacency.sliding, "vertical profile counts");

    cuts.into_iter().filter(|cut| cut.pieces > 0).collect()
}
