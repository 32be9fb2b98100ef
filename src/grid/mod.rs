//! Spot/volatility sensitivity grids
//!
//! Builds evenly spaced spot and volatility axes from user ranges and evaluates the
//! Black-Scholes-Merton pricer on their Cartesian product, producing one call and one
//! put matrix indexed by (volatility row, spot column).

pub mod sampler;
pub mod types;

pub use sampler::*;
pub use types::*;
