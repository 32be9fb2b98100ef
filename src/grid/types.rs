use std::fmt;

use crate::models::PriceResult;

/// Number of points on each axis of a sampling grid.
pub const GRID_SIZE: usize = 10;

/// Closed interval used for the spot and volatility axes. Valid when `min < max`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Volatility range from percentage endpoints (e.g. 30..40 -> 0.30..0.40).
    pub fn from_percent(min_pct: f64, max_pct: f64) -> Self {
        Self {
            min: min_pct / 100.0,
            max: max_pct / 100.0,
        }
    }

    /// `min < max`; NaN endpoints are never ordered.
    pub fn is_ordered(&self) -> bool {
        self.min < self.max
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.min, self.max)
    }
}

/// Call and put prices over a spot x volatility lattice.
///
/// `call_matrix[i][j]` and `put_matrix[i][j]` are the prices at
/// (`vol_axis[i]`, `spot_axis[j]`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplingGrid {
    /// Ascending spot values, rounded to 2 decimals (columns)
    pub spot_axis: Vec<f64>,
    /// Ascending volatilities as fractions, rounded to 2 decimals (rows)
    pub vol_axis: Vec<f64>,
    pub call_matrix: Vec<Vec<f64>>,
    pub put_matrix: Vec<Vec<f64>>,
}

impl SamplingGrid {
    /// (rows, columns) = (volatility points, spot points)
    pub fn shape(&self) -> (usize, usize) {
        (self.vol_axis.len(), self.spot_axis.len())
    }

    /// Prices at (`vol_axis[row]`, `spot_axis[col]`), if in bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<PriceResult> {
        let call_price = *self.call_matrix.get(row)?.get(col)?;
        let put_price = *self.put_matrix.get(row)?.get(col)?;
        Some(PriceResult {
            call_price,
            put_price,
        })
    }

    /// Iterate `(volatility, spot, prices)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (f64, f64, PriceResult)> + '_ {
        self.vol_axis.iter().enumerate().flat_map(move |(i, &vol)| {
            self.spot_axis.iter().enumerate().map(move |(j, &spot)| {
                let prices = PriceResult {
                    call_price: self.call_matrix[i][j],
                    put_price: self.put_matrix[i][j],
                };
                (vol, spot, prices)
            })
        })
    }
}

/// Result of one generate request: the price at the caller's exact inputs plus the
/// sensitivity grid around it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Heatmap {
    pub current: PriceResult,
    pub grid: SamplingGrid,
}

/// Minimum and maximum of a matrix, ignoring non-finite entries.
pub fn matrix_bounds(matrix: &[Vec<f64>]) -> Option<(f64, f64)> {
    matrix
        .iter()
        .flatten()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
