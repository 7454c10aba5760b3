//! Merging contributions into the final list.
//!
//! Lines of the same stock code and printed measurement are summed, except
//! for profiles cut piece by piece (see [`crate::catalog::StockItem::is_cut_individually`]),
//! which keep one row per cut. The final order is category, then stock code;
//! the sort is stable so rail rows stay left to right and wing rows stay pane
//! by pane.

use super::{MaterialLine, ProfileCut};

/// Merge vertical profile cuts of the same item and printed length, ordered
/// by printed length.
pub fn group_profile_cuts(cuts: Vec<ProfileCut>) -> Vec<ProfileCut> {
    let mut grouped: Vec<ProfileCut> = Vec::new();
    for cut in cuts {
        let measurement = cut.measurement();
        match grouped
            .iter_mut()
            .find(|g| g.item == cut.item && g.measurement() == measurement)
        {
            Some(existing) => existing.pieces = existing.pieces.saturating_add(cut.pieces),
            None => grouped.push(cut),
        }
    }
    grouped.sort_by_key(|cut| cut.measurement());
    grouped
}

/// Group material lines and order them for the report.
pub fn group_material_lines(lines: Vec<MaterialLine>) -> Vec<MaterialLine> {
    let mut individual: Vec<MaterialLine> = Vec::new();
    let mut grouped: Vec<MaterialLine> = Vec::new();

    for line in lines {
        let cut_individually = line
            .stock_item()
            .is_some_and(|item| item.is_cut_individually());
        if cut_individually {
            individual.push(line);
            continue;
        }
        match grouped
            .iter_mut()
            .find(|g| g.stock_code == line.stock_code && g.measurement == line.measurement)
        {
            Some(existing) => existing.quantity += line.quantity,
            None => grouped.push(line),
        }
    }

    individual.extend(grouped);
    individual.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| a.stock_code.cmp(&b.stock_code))
    });
    individual
}
