//! Hardware counted in pieces.

use tracing::debug;

use super::MaterialLine;
use crate::catalog::StockItem;
use crate::constants::{CAPS_PER_EXIT_SASH, ROLLER_SETS_PER_SLIDING_SASH, SIDE_TAB_COUNT};
use crate::enclosure::Enclosure;

/// Accessory lines; items whose driving count is zero are left out.
///
/// Rollers go on sliding sashes only: exit sashes are hinged.
pub fn accessory_lines(enclosure: &Enclosure) -> Vec<MaterialLine> {
    let exits = enclosure.total_exit_count();
    let sliding = enclosure.total_sliding_count();
    let turns = enclosure.junction_turn_count();

    debug!(exits, sliding, turns, "accessory counts");

    [
        (StockItem::CornerWedge, SIDE_TAB_COUNT.div_ceil(2)),
        (StockItem::RollerSet, sliding.saturating_mul(ROLLER_SETS_PER_SLIDING_SASH)),
        (StockItem::Bakla5, exits),
        (StockItem::HingedWingSet, exits),
        (StockItem::HingeHolder, exits),
        (StockItem::LatchKit, exits),
        (StockItem::PinSet, exits),
        (StockItem::Cap, exits.saturating_mul(CAPS_PER_EXIT_SASH)),
        (StockItem::ZamakCorner, turns),
    ]
    .into_iter()
    .filter(|(_, count)| *count > 0)
    .map(|(item, count)| MaterialLine::pieces(item, count))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enclosure::{Arm, ExitDirection, FixedPaneDirection};
    use crate::geometry::GlassThickness;

    fn quantity_of(lines: &[MaterialLine], item: StockItem) -> Option<f64> {
        lines
            .iter()
            .find(|l| l.stock_code == item.code())
            .map(|l| l.quantity)
    }

    #[test]
    fn test_sliding_only() {
        let enclosure =
            Enclosure::new(2000.0, GlassThickness::Mm24).with_arm(Arm::new(2000.0, 4));
        let lines = accessory_lines(&enclosure);
        assert_eq!(lines.len(), 2);
        assert_eq!(quantity_of(&lines, StockItem::CornerWedge), Some(1.0));
        assert_eq!(quantity_of(&lines, StockItem::RollerSet), Some(16.0));
        assert_eq!(quantity_of(&lines, StockItem::Cap), None);
    }

    #[test]
    fn test_exits_fixed_and_turns() {
        let enclosure = Enclosure::new(2000.0, GlassThickness::Mm24)
            .with_arm(
                Arm::new(3000.0, 6)
                    .with_exits(2, ExitDirection::Both)
                    .with_fixed_panes(1, 400.0, FixedPaneDirection::Left),
            )
            .with_arm(Arm::new(2000.0, 3).with_turn_angle(90.0));
        let lines = accessory_lines(&enclosure);
        // 3 + 3 rolling sashes
        assert_eq!(quantity_of(&lines, StockItem::RollerSet), Some(24.0));
        assert_eq!(quantity_of(&lines, StockItem::Bakla5), Some(2.0));
        assert_eq!(quantity_of(&lines, StockItem::HingedWingSet), Some(2.0));
        assert_eq!(quantity_of(&lines, StockItem::HingeHolder), Some(2.0));
        assert_eq!(quantity_of(&lines, StockItem::LatchKit), Some(2.0));
        assert_eq!(quantity_of(&lines, StockItem::PinSet), Some(2.0));
        assert_eq!(quantity_of(&lines, StockItem::Cap), Some(6.0));
        assert_eq!(quantity_of(&lines, StockItem::ZamakCorner), Some(1.0));
    }

    #[test]
    fn test_huge_counts_saturate() {
        let enclosure = Enclosure::new(2000.0, GlassThickness::Mm24)
            .with_arm(Arm::new(2000.0, 4).with_exits(u32::MAX, ExitDirection::Both))
            .with_arm(Arm::new(2000.0, u32::MAX).with_turn_angle(90.0));
        let lines = accessory_lines(&enclosure);
        assert_eq!(quantity_of(&lines, StockItem::Cap), Some(u32::MAX as f64));
        assert_eq!(quantity_of(&lines, StockItem::RollerSet), Some(u32::MAX as f64));
        assert_eq!(quantity_of(&lines, StockItem::Bakla5), Some(u32::MAX as f64));
    }

    #[test]
    fn test_first_arm_angle_is_not_a_turn() {
        let enclosure = Enclosure::new(2000.0, GlassThickness::Mm24)
            .with_arm(Arm::new(2000.0, 2).with_turn_angle(90.0));
        let lines = accessory_lines(&enclosure);
        assert_eq!(quantity_of(&lines, StockItem::ZamakCorner), None);
    }
}
