//! # Adjacency Metrics
//!
//! Integer counts over a panel sequence that size the vertical profiles:
//!
//! - **Sliding adjacency**: sliding/sliding junctions, one inner telescoping
//!   profile pair each.
//! - **Fixed/sliding adjacency**: junctions between a fixed pane and a sliding
//!   sash, one between-sash cap profile each. Exit sashes never count here,
//!   even when they sit next to fixed or sliding panes.
//!
//! The live preview computes the same totals while drawing and hands them to
//! the BOM; when present those totals win (see [`AdjacencyTotals::resolve`]).

use serde::{Deserialize, Serialize};

use crate::enclosure::Enclosure;
use crate::panels::{Panel, PanelKind};

/// Sliding panels minus one, never negative.
pub fn sliding_adjacency_count(panels: &[Panel]) -> u32 {
    let sliding = panels.iter().filter(|p| p.kind == PanelKind::Sliding).count() as u32;
    sliding.saturating_sub(1)
}

/// Consecutive pairs made of exactly one fixed pane and one sliding sash.
pub fn fixed_sliding_adjacency_count(panels: &[Panel]) -> u32 {
    panels
        .windows(2)
        .filter(|pair| {
            let (a, b) = (pair[0].kind, pair[1].kind);
            (a.is_fixed() && b == PanelKind::Sliding) || (a == PanelKind::Sliding && b.is_fixed())
        })
        .count() as u32
}

/// Adjacency counts summed over every active arm of an enclosure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AdjacencyTotals {
    /// Sliding/sliding junctions
    pub sliding: u32,
    /// Fixed/sliding junctions
    pub fixed_sliding: u32,
}

impl AdjacencyTotals {
    /// Recompute both totals from the enclosure's panel sequences.
    pub fn for_enclosure(enclosure: &Enclosure) -> Self {
        enclosure
            .panel_sequences()
            .iter()
            .fold(AdjacencyTotals::default(), |acc, (_, sequence)| AdjacencyTotals {
                sliding: acc
                    .sliding
                    .saturating_add(sliding_adjacency_count(&sequence.panels)),
                fixed_sliding: acc
                    .fixed_sliding
                    .saturating_add(fixed_sliding_adjacency_count(&sequence.panels)),
            })
    }

    /// Totals used for the BOM: preview-supplied values are trusted verbatim,
    /// missing ones are recomputed.
    pub fn resolve(enclosure: &Enclosure) -> Self {
        let computed = Self::for_enclosure(enclosure);
        AdjacencyTotals {
            sliding: enclosure.sliding_adjacency_total.unwrap_or(computed.sliding),
            fixed_sliding: enclosure
                .fixed_sliding_adjacency_total
                .unwrap_or(computed.fixed_sliding),
        }
    }
}
