//! # Glass-Pane List
//!
//! One pane per panel, grouped by size **within each arm only**. Two arms
//! never share a row even when their panes coincide: panes are cut, packed
//! and delivered per arm.
//!
//! Rows of one arm are ordered by width; arms follow each other left to
//! right.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bom::{MaterialLine, Unit};
use crate::catalog::Category;
use crate::constants::PANE_MATCH_TOLERANCE_MM;
use crate::enclosure::Enclosure;
use crate::panels::Panel;
use crate::units::{format_fixed, Millimetres, SquareMetres};

/// A group of identical panes within one arm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlassPane {
    /// 0-based index of the arm the panes belong to
    pub arm_index: usize,
    /// Pane width (mm)
    pub width: f64,
    /// Pane height (mm)
    pub height: f64,
    /// Glass thickness (mm)
    pub thickness_mm: f64,
    /// Number of identical panes
    pub count: u32,
    /// Total area of the group (m²)
    pub area_m2: f64,
}

impl GlassPane {
    fn single(arm_index: usize, panel: &Panel, thickness_mm: f64) -> Self {
        GlassPane {
            arm_index,
            width: panel.width,
            height: panel.height,
            thickness_mm,
            count: 1,
            area_m2: SquareMetres::from_mm(Millimetres(panel.width), Millimetres(panel.height)).0,
        }
    }

    fn matches(&self, panel: &Panel, thickness_mm: f64) -> bool {
        (self.width - panel.width).abs() < PANE_MATCH_TOLERANCE_MM
            && (self.height - panel.height).abs() < PANE_MATCH_TOLERANCE_MM
            && self.thickness_mm == thickness_mm
    }

    fn add_one(&mut self) {
        self.count += 1;
        self.area_m2 = self.width * self.height * self.count as f64 / 1_000_000.0;
    }
}

/// The pane table of an enclosure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlassPaneList {
    /// Glass tint label
    pub glass_color: String,
    /// Pane groups, arm by arm
    pub panes: Vec<GlassPane>,
    /// Total glazing area (m²)
    pub total_area_m2: f64,
}

impl GlassPaneList {
    /// Number of physical panes
    pub fn pane_count(&self) -> u32 {
        self.panes.iter().map(|p| p.count).sum()
    }

    /// The pane table as glass lines (m²), one per row, for export.
    ///
    /// Glass is priced per m² by thickness and tint, so these lines carry no
    /// stock code; the catalogue does not resolve them.
    pub fn material_lines(&self, position_no: Option<&str>) -> Vec<MaterialLine> {
        self.panes
            .iter()
            .map(|pane| MaterialLine {
                category: Category::Glass,
                stock_code: String::new(),
                description: format!("CAM {}mm {}", pane.thickness_mm, self.glass_color),
                measurement: format!("{} x {}", format_fixed(pane.width, 1), format_fixed(pane.height, 1)),
                quantity: pane.area_m2,
                unit: Unit::SquareMetre,
                position_no: position_no.map(str::to_string),
            })
            .collect()
    }
}

/// Group the panes of one arm.
fn group_arm_panes(arm_index: usize, panels: &[Panel], thickness_mm: f64) -> Vec<GlassPane> {
    let mut groups: Vec<GlassPane> = Vec::new();
    for panel in panels {
        match groups.iter_mut().find(|g| g.matches(panel, thickness_mm)) {
            Some(group) => group.add_one(),
            None => groups.push(GlassPane::single(arm_index, panel, thickness_mm)),
        }
    }
    groups.sort_by(|a, b| a.width.total_cmp(&b.width));
    groups
}

/// Build the pane table for every active arm of the enclosure.
pub fn build_glass_pane_list(enclosure: &Enclosure) -> GlassPaneList {
    let thickness_mm = enclosure.glass_thickness.mm();
    let panes: Vec<GlassPane> = enclosure
        .panel_sequences()
        .iter()
        .flat_map(|(index, sequence)| group_arm_panes(*index, &sequence.panels, thickness_mm))
        .collect();
    let total_area_m2 = panes.iter().map(|p| p.area_m2).sum();

    debug!(rows = panes.len(), total_area_m2, "built glass pane list");

    GlassPaneList {
        glass_color: enclosure.glass_color.clone(),
        panes,
        total_area_m2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enclosure::{Arm, ExitDirection, FixedPaneDirection};
    use crate::geometry::GlassThickness;

    #[test]
    fn test_identical_panes_group_within_arm() {
        let enclosure =
            Enclosure::new(2000.0, GlassThickness::Mm24).with_arm(Arm::new(2000.0, 4));
        let list = build_glass_pane_list(&enclosure);
        assert_eq!(list.panes.len(), 1);
        let pane = &list.panes[0];
        assert_eq!(pane.count, 4);
        assert_eq!(pane.thickness_mm, 24.0);
        // 473.25 x 1808 x 4
        assert!((pane.area_m2 - 473.25 * 1808.0 * 4.0 / 1e6).abs() < 1e-9);
        assert!((list.total_area_m2 - pane.area_m2).abs() < 1e-12);
    }

    #[test]
    fn test_identical_arms_stay_separate() {
        let enclosure = Enclosure::new(2000.0, GlassThickness::Mm24)
            .with_arm(Arm::new(2000.0, 4))
            .with_arm(Arm::new(2000.0, 4));
        let list = build_glass_pane_list(&enclosure);
        assert_eq!(list.panes.len(), 2);
        assert_eq!(list.panes[0].arm_index, 0);
        assert_eq!(list.panes[1].arm_index, 1);
        assert_eq!(list.panes[0].width, list.panes[1].width);
        assert_eq!(list.pane_count(), 8);
    }

    #[test]
    fn test_rows_sorted_by_width_within_arm() {
        let enclosure = Enclosure::new(2000.0, GlassThickness::Mm24).with_arm(
            Arm::new(3000.0, 5)
                .with_fixed_panes(2, 300.0, FixedPaneDirection::Right)
                .with_exits(1, ExitDirection::Left),
        );
        let list = build_glass_pane_list(&enclosure);
        assert_eq!(list.panes.len(), 2);
        assert_eq!(list.panes[0].width, 300.0);
        assert_eq!(list.panes[0].count, 2);
        assert!(list.panes[1].width > 300.0);
        assert_eq!(list.panes[1].count, 3);
    }

    #[test]
    fn test_inactive_arm_has_no_panes() {
        let enclosure = Enclosure::new(2000.0, GlassThickness::Mm24)
            .with_arm(Arm::new(0.0, 4))
            .with_arm(Arm::new(1000.0, 2).with_turn_angle(90.0));
        let list = build_glass_pane_list(&enclosure);
        assert_eq!(list.panes.len(), 1);
        assert_eq!(list.panes[0].arm_index, 1);
    }

    #[test]
    fn test_glass_lines() {
        let mut enclosure =
            Enclosure::new(2000.0, GlassThickness::Mm24).with_arm(Arm::new(2000.0, 4));
        enclosure.glass_color = "Füme".to_string();
        let list = build_glass_pane_list(&enclosure);
        let lines = list.material_lines(Some("3"));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].category, Category::Glass);
        assert_eq!(lines[0].unit, Unit::SquareMetre);
        assert_eq!(lines[0].measurement, "473.3 x 1808.0");
        assert_eq!(lines[0].position_no.as_deref(), Some("3"));
        assert!(lines[0].description.ends_with("Füme"));
        assert!(lines[0].stock_code.is_empty());
        assert_eq!(lines[0].stock_item(), None);
    }
}
