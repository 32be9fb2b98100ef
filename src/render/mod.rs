//! Heatmap rendering and tabular export
//!
//! SVG output goes through plotters' SVG backend; CSV output through the `csv` crate.

pub mod heatmap;
pub mod palette;
pub mod table;

pub use heatmap::*;
pub use palette::*;
pub use table::*;
