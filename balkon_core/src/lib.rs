//! # balkon_core - Glass-Balcony Layout and Bill-of-Materials Engine
//!
//! `balkon_core` turns a multi-arm glazed balcony enclosure into the panel
//! layout of every arm, the adjacency counts that size the vertical profiles,
//! a categorized bill of materials and a per-arm glass-pane table. All inputs
//! and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take an enclosure and return results
//! - **Lenient input**: Form-style numbers never fail a computation; unusable
//!   values fall back to their defaults
//! - **JSON-First**: All types implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use balkon_core::{Arm, BillOfMaterials, Enclosure, ExitDirection, GlassThickness};
//!
//! let enclosure = Enclosure::new(2200.0, GlassThickness::Mm24)
//!     .with_arm(Arm::new(3000.0, 6).with_exits(1, ExitDirection::Right))
//!     .with_arm(Arm::new(1800.0, 4).with_turn_angle(90.0));
//!
//! let bom = BillOfMaterials::compute(&enclosure);
//! assert_eq!(bom.glass.pane_count(), 10);
//!
//! let json = serde_json::to_string_pretty(&bom).unwrap();
//! assert!(json.contains("357014_4447_0"));
//! ```
//!
//! ## Modules
//!
//! - [`enclosure`] - Arms and the enclosure they form (the input document)
//! - [`geometry`] - Turn pieces and per-thickness profile dimensions
//! - [`panels`] - Panel sequence of each arm
//! - [`adjacency`] - Sliding and fixed/sliding junction counts
//! - [`bom`] - Material contributors, aggregation and the BOM entry point
//! - [`glass`] - Per-arm glass-pane table
//! - [`catalog`] - Stock items and profile colors
//! - [`units`] - Unit wrappers and printed-number rounding
//! - [`constants`] - Fixed engineering dimensions
//! - [`errors`] - Structured error types

pub mod adjacency;
pub mod bom;
pub mod catalog;
pub mod constants;
pub mod enclosure;
pub mod errors;
pub mod geometry;
pub mod glass;
pub mod panels;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use adjacency::AdjacencyTotals;
pub use bom::{BillOfMaterials, MaterialLine, Unit};
pub use catalog::{Category, ProfileColor, StockItem};
pub use enclosure::{Arm, Enclosure, ExitDirection, FixedPaneDirection};
pub use errors::{BalkonError, BalkonResult};
pub use geometry::{profile_dimensions, turn_piece, GlassThickness, ProfileDimensions};
pub use glass::{build_glass_pane_list, GlassPane, GlassPaneList};
pub use panels::{build_panel_sequence, Panel, PanelKind, PanelSequence};
