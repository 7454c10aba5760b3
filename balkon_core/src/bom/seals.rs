//! Brush seals.
//!
//! Both seals are sold by the metre and appear as a single uncut line with a
//! two-decimal quantity. A seal with no length is left off the list.

use tracing::debug;

use super::profiles::{rail_lengths, sash_cap_count};
use super::{MaterialLine, Unit};
use crate::adjacency::AdjacencyTotals;
use crate::catalog::StockItem;
use crate::constants::{HORIZONTAL_SEAL_RUNS, VERTICAL_PROFILE_ALLOWANCE_MM};
use crate::enclosure::Enclosure;
use crate::units::round_fixed;

fn seal_line(item: StockItem, metres: f64) -> Option<MaterialLine> {
    if metres > 0.0 {
        Some(MaterialLine::new(item, "", round_fixed(metres, 2), Unit::Metre))
    } else {
        None
    }
}

/// Horizontal seal (4.8×10): four runs along both rails of every arm.
pub fn horizontal_seal_metres(enclosure: &Enclosure) -> f64 {
    let total_rail: f64 = rail_lengths(enclosure).iter().map(|(_, length)| length).sum();
    total_rail * 2.0 * HORIZONTAL_SEAL_RUNS / 1000.0
}

/// Vertical seal (4.8×550) lining every vertical profile.
///
/// Cap profiles and locks take one run each, both telescoping halves take two
/// runs per side, and the passive and active corner profiles one run each.
pub fn vertical_seal_metres(enclosure: &Enclosure, adjacency: &AdjacencyTotals) -> f64 {
    let length = enclosure.height - VERTICAL_PROFILE_ALLOWANCE_MM;
    let caps = sash_cap_count(enclosure, adjacency) as f64;
    let locks = enclosure.total_exit_count() as f64;
    let telescoping = adjacency.sliding as f64;
    let turns = enclosure.junction_turn_count() as f64;

    let total_mm = length * caps
        + length * locks
        + length * telescoping * 2.0
        + length * telescoping * 2.0
        + length * turns
        + length * turns;

    debug!(caps, locks, telescoping, turns, total_mm, "vertical seal length");

    total_mm / 1000.0
}

pub fn horizontal_seal_line(enclosure: &Enclosure) -> Option<MaterialLine> {
    seal_line(StockItem::BrushSealHorizontal, horizontal_seal_metres(enclosure))
}

pub fn vertical_seal_line(enclosure: &Enclosure, adjacency: &AdjacencyTotals) -> Option<MaterialLine> {
    seal_line(StockItem::BrushSealVertical, vertical_seal_metres(enclosure, adjacency))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enclosure::{Arm, ExitDirection};
    use crate::geometry::GlassThickness;

    #[test]
    fn test_horizontal_seal() {
        let enclosure = Enclosure::new(2000.0, GlassThickness::Mm24)
            .with_arm(Arm::new(2000.0, 4))
            .with_arm(Arm::new(1234.5, 3).with_turn_angle(90.0));
        let line = horizontal_seal_line(&enclosure).unwrap();
        // 3234.5 * 8 / 1000 = 25.876
        assert_eq!(line.quantity, 25.88);
        assert_eq!(line.measurement, "");
        assert_eq!(line.unit, Unit::Metre);
    }

    #[test]
    fn test_horizontal_seal_omitted_without_rail() {
        let enclosure = Enclosure::new(2000.0, GlassThickness::Mm24).with_arm(Arm::new(0.0, 4));
        assert!(horizontal_seal_line(&enclosure).is_none());
    }

    #[test]
    fn test_vertical_seal() {
        let enclosure = Enclosure::new(2000.0, GlassThickness::Mm24)
            .with_arm(Arm::new(2000.0, 4).with_exits(1, ExitDirection::Right));
        let adjacency = AdjacencyTotals::resolve(&enclosure);
        // caps 3, locks 1, telescoping 2 (x4), no turns: 12 runs of 1862 mm
        let metres = vertical_seal_metres(&enclosure, &adjacency);
        assert!((metres - 1862.0 * 12.0 / 1000.0).abs() < 1e-9);
        let line = vertical_seal_line(&enclosure, &adjacency).unwrap();
        assert_eq!(line.quantity, 22.34);
    }

    #[test]
    fn test_vertical_seal_omitted_for_short_enclosure() {
        let enclosure = Enclosure::new(100.0, GlassThickness::Mm24).with_arm(Arm::new(2000.0, 4));
        let adjacency = AdjacencyTotals::resolve(&enclosure);
        assert!(vertical_seal_line(&enclosure, &adjacency).is_none());
    }
}
