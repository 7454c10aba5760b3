//! # Bill of Materials
//!
//! Expands an [`Enclosure`] into categorized, quantified material lines.
//!
//! Each contributor is a pure function over the whole enclosure:
//!
//! - [`profiles`] - rail, side/tab, lock, telescoping, corner-turn, cap and
//!   wing profiles
//! - [`seals`] - horizontal and vertical brush seals
//! - [`accessories`] - hardware counted in pieces
//!
//! [`aggregate`] merges the contributions into the final list.
//!
//! ## Example
//!
//! ```rust
//! use balkon_core::bom::BillOfMaterials;
//! use balkon_core::enclosure::{Arm, Enclosure};
//! use balkon_core::geometry::GlassThickness;
//!
//! let enclosure = Enclosure::new(2000.0, GlassThickness::Mm24)
//!     .with_arm(Arm::new(2000.0, 4));
//! let bom = BillOfMaterials::compute(&enclosure);
//!
//! let rail = bom.materials.iter().find(|l| l.stock_code == "357014_4447_0").unwrap();
//! assert_eq!(rail.measurement, "2000.0");
//! assert_eq!(rail.quantity, 4.0);
//! assert_eq!(bom.glass.pane_count(), 4);
//! ```

pub mod accessories;
pub mod aggregate;
pub mod profiles;
pub mod seals;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::adjacency::AdjacencyTotals;
use crate::catalog::{Category, StockItem};
use crate::enclosure::Enclosure;
use crate::glass::{build_glass_pane_list, GlassPaneList};
use crate::units::format_fixed;

pub use aggregate::{group_material_lines, group_profile_cuts};

/// Unit a line's quantity is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Linear metres
    #[serde(rename = "metre")]
    Metre,
    /// Pieces
    #[serde(rename = "adet")]
    Piece,
    /// Square metres
    #[serde(rename = "m²")]
    SquareMetre,
}

impl Unit {
    /// Unit label on printed lists
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Metre => "metre",
            Unit::Piece => "adet",
            Unit::SquareMetre => "m²",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One row of the bill of materials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialLine {
    /// Report section
    pub category: Category,
    /// Catalogue stock code
    pub stock_code: String,
    /// Catalogue description
    pub description: String,
    /// Cut length in mm with one decimal, empty for uncut items
    pub measurement: String,
    /// Quantity in `unit`
    pub quantity: f64,
    /// Unit of `quantity`
    pub unit: Unit,
    /// Offer position the line belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_no: Option<String>,
}

impl MaterialLine {
    /// A line for a catalogue item.
    pub fn new(item: StockItem, measurement: impl Into<String>, quantity: f64, unit: Unit) -> Self {
        MaterialLine {
            category: item.category(),
            stock_code: item.code().to_string(),
            description: item.description().to_string(),
            measurement: measurement.into(),
            quantity,
            unit,
            position_no: None,
        }
    }

    /// An uncut item counted in pieces.
    pub fn pieces(item: StockItem, count: u32) -> Self {
        Self::new(item, "", count as f64, Unit::Piece)
    }

    /// Catalogue item behind the line, if it is one
    pub fn stock_item(&self) -> Option<StockItem> {
        StockItem::from_code(&self.stock_code)
    }
}

/// Vertical profile pieces of one length, before conversion to metres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileCut {
    /// Profile being cut
    pub item: StockItem,
    /// Cut length (mm)
    pub length_mm: f64,
    /// Number of pieces
    pub pieces: u32,
}

impl ProfileCut {
    pub fn new(item: StockItem, length_mm: f64, pieces: u32) -> Self {
        ProfileCut {
            item,
            length_mm,
            pieces,
        }
    }

    /// Cut length as printed, one decimal
    pub fn measurement(&self) -> String {
        format_fixed(self.length_mm, 1)
    }

    /// Metres of profile: the printed length times the piece count.
    ///
    /// The quantity follows the printed measurement, so a 1862.04 mm cut is
    /// billed as 1862.0 mm per piece.
    pub fn into_line(self) -> MaterialLine {
        let measurement = self.measurement();
        let printed_mm = measurement.parse::<f64>().unwrap_or(0.0);
        let quantity = printed_mm * self.pieces as f64 / 1000.0;
        MaterialLine::new(self.item, measurement, quantity, Unit::Metre)
    }
}

/// Everything one computation produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillOfMaterials {
    /// Aggregated material lines, ordered by category then stock code
    pub materials: Vec<MaterialLine>,
    /// Per-arm pane table
    pub glass: GlassPaneList,
    /// Adjacency totals the profile counts were sized with
    pub adjacency: AdjacencyTotals,
}

impl BillOfMaterials {
    /// Run every contributor and aggregate the result.
    pub fn compute(enclosure: &Enclosure) -> Self {
        let adjacency = AdjacencyTotals::resolve(enclosure);

        let vertical_cuts = group_profile_cuts(profiles::vertical_profile_cuts(enclosure, &adjacency));

        let mut lines = profiles::rail_lines(enclosure);
        lines.extend(vertical_cuts.into_iter().map(ProfileCut::into_line));
        lines.extend(profiles::wing_lines(enclosure));
        lines.extend(accessories::accessory_lines(enclosure));
        lines.extend(seals::horizontal_seal_line(enclosure));
        lines.extend(seals::vertical_seal_line(enclosure, &adjacency));

        let position_no = enclosure.position_no.clone();
        for line in &mut lines {
            line.position_no = position_no.clone();
        }

        let materials = group_material_lines(lines);
        let glass = build_glass_pane_list(enclosure);

        debug!(
            lines = materials.len(),
            panes = glass.pane_count(),
            sliding_adjacency = adjacency.sliding,
            fixed_sliding_adjacency = adjacency.fixed_sliding,
            "computed bill of materials"
        );

        BillOfMaterials {
            materials,
            glass,
            adjacency,
        }
    }

    /// Lines of one category, in report order
    pub fn lines_in(&self, category: Category) -> impl Iterator<Item = &MaterialLine> {
        self.materials.iter().filter(move |line| line.category == category)
    }

    /// Material lines followed by the pane table as glass lines.
    pub fn export_lines(&self) -> Vec<MaterialLine> {
        let mut lines = self.materials.clone();
        lines.extend(self.glass.material_lines(self.materials.first().and_then(|l| l.position_no.as_deref())));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enclosure::{Arm, ExitDirection};
    use crate::geometry::GlassThickness;

    #[test]
    fn test_profile_cut_uses_printed_length() {
        let line = ProfileCut::new(StockItem::LockProfile, 1862.04, 3).into_line();
        assert_eq!(line.measurement, "1862.0");
        assert!((line.quantity - 1862.0 * 3.0 / 1000.0).abs() < 1e-12);
        assert_eq!(line.unit, Unit::Metre);
        assert_eq!(line.category, Category::Profile);
    }

    #[test]
    fn test_piece_line() {
        let line = MaterialLine::pieces(StockItem::Cap, 6);
        assert_eq!(line.measurement, "");
        assert_eq!(line.quantity, 6.0);
        assert_eq!(line.unit, Unit::Piece);
        assert_eq!(line.stock_item(), Some(StockItem::Cap));
    }

    #[test]
    fn test_unit_serialization() {
        assert_eq!(serde_json::to_string(&Unit::Piece).unwrap(), "\"adet\"");
        assert_eq!(serde_json::to_string(&Unit::SquareMetre).unwrap(), "\"m²\"");
    }

    #[test]
    fn test_position_no_is_stamped() {
        let mut enclosure = Enclosure::new(2000.0, GlassThickness::Mm24)
            .with_arm(Arm::new(2000.0, 4).with_exits(1, ExitDirection::Right));
        enclosure.position_no = Some("P-7".to_string());
        let bom = BillOfMaterials::compute(&enclosure);
        assert!(!bom.materials.is_empty());
        assert!(bom
            .materials
            .iter()
            .all(|line| line.position_no.as_deref() == Some("P-7")));
    }

    #[test]
    fn test_categories_are_ordered() {
        let enclosure = Enclosure::new(2000.0, GlassThickness::Mm24)
            .with_arm(Arm::new(2000.0, 4).with_exits(1, ExitDirection::Left));
        let bom = BillOfMaterials::compute(&enclosure);
        let categories: Vec<Category> = bom.materials.iter().map(|l| l.category).collect();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);
        assert_eq!(bom.lines_in(Category::Glass).count(), 0);
    }

    #[test]
    fn test_export_appends_glass() {
        let enclosure =
            Enclosure::new(2000.0, GlassThickness::Mm24).with_arm(Arm::new(2000.0, 4));
        let bom = BillOfMaterials::compute(&enclosure);
        let exported = bom.export_lines();
        assert_eq!(exported.len(), bom.materials.len() + 1);
        assert_eq!(exported.last().map(|l| l.category), Some(Category::Glass));
    }

    #[test]
    fn test_empty_enclosure_only_has_fixed_items() {
        let enclosure = Enclosure::new(2000.0, GlassThickness::Mm24);
        let bom = BillOfMaterials::compute(&enclosure);
        let items: Vec<Option<StockItem>> = bom.materials.iter().map(|l| l.stock_item()).collect();
        assert!(items.contains(&Some(StockItem::SideTabProfile)));
        assert!(items.contains(&Some(StockItem::SashCapProfile)));
        assert!(items.contains(&Some(StockItem::CornerWedge)));
        assert!(!items.contains(&Some(StockItem::RailProfile)));
        assert!(!items.contains(&Some(StockItem::BrushSealHorizontal)));
        assert!(bom.glass.panes.is_empty());
    }
}
