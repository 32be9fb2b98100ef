//! # bsm-heatmap: Black-Scholes-Merton Prices and Sensitivity Heatmaps
//!
//! `bsm-heatmap` prices European call and put options with the closed-form
//! Black-Scholes-Merton formula (no dividends) and samples those prices over a
//! spot x volatility grid for visualization.
//!
//! ## Core Features
//!
//! - **Pricer**: [`price`] maps (S, K, T, r, σ) to call and put prices rounded to cents
//! - **Grid Sampler**: [`sample`] evaluates the pricer on a 10 x 10 spot/volatility
//!   lattice and at the caller's exact point
//! - **Input boundary**: [`input`] parses raw form values (volatility in percent) and
//!   maps every failure to a user-facing message
//! - **Rendering**: [`render`] draws annotated SVG heatmaps and exports CSV
//!
//! ## Quick Start
//!
//! ```rust
//! use bsm_heatmap::{price, sample, Range};
//!
//! let current = price(100.0, 100.0, 1.0, 0.05, 0.2)?;
//! assert_eq!((current.call_price, current.put_price), (10.45, 5.57));
//!
//! let heatmap = sample(
//!     100.0, 100.0, 1.0, 0.05, 0.2,
//!     Range::new(90.0, 110.0),
//!     Range::from_percent(10.0, 30.0),
//! )?;
//! let corner = price(90.0, 100.0, 1.0, 0.05, 0.1)?;
//! assert_eq!(heatmap.grid.call_matrix[0][0], corner.call_price);
//! # Ok::<(), bsm_heatmap::HeatmapError>(())
//! ```
//!
//! ## Errors
//!
//! Core operations return [`HeatmapError`]: `Parse` for malformed text, `InvalidRange`
//! for empty or inverted ranges, `InvalidInput` for values outside the pricing domain.
//! None of them is fatal; [`HeatmapError::user_message`] gives the text to display.

// ================================================================================================
// MODULES
// ================================================================================================

#[cfg(feature = "serde")]
pub mod config;
pub mod error;
pub mod grid;
pub mod input;
pub mod models;
pub mod render;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{HeatmapError, Result};

// Pricer
pub use models::bs::{norm_cdf, price, price_params, price_unrounded};
pub use models::{OptionParameters, PriceResult};

// Grid sampler
pub use grid::{
    build_axis, sample, sample_params, validate_ranges, Heatmap, Range, SamplingGrid, GRID_SIZE,
};

// Front-end boundary
pub use input::{generate, parse_field, HeatmapRequest, RawInputs, SliderBounds};

// Output
pub use render::{render_svg, write_csv, HeatmapStyle, Palette};

#[cfg(feature = "serde")]
pub use config::HeatmapConfig;
