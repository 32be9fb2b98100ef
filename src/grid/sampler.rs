use log::{debug, trace};

use super::types::*;
use crate::error::{HeatmapError, Result};
use crate::models::bs::price_params;
use crate::models::utils::{linspace, round_to_cents};
use crate::models::OptionParameters;

/// Build a `GRID_SIZE`-point axis over `range`, each value rounded to 2 decimals.
///
/// The range is not validated here; [`sample`] rejects unordered ranges first.
pub fn build_axis(range: Range) -> Vec<f64> {
    linspace(range.min, range.max, GRID_SIZE)
        .into_iter()
        .map(round_to_cents)
        .collect()
}

/// Reject the request unless both ranges satisfy `min < max`.
pub fn validate_ranges(spot_range: Range, vol_range: Range) -> Result<()> {
    if spot_range.is_ordered() && vol_range.is_ordered() {
        Ok(())
    } else {
        Err(HeatmapError::InvalidRange {
            spot: spot_range,
            vol: vol_range,
        })
    }
}

/// Price the caller's point and a spot x volatility grid around it.
///
/// Strike, time to maturity and rate are held fixed while spot varies along the
/// columns and volatility (as a fraction) along the rows.
///
/// # Errors
///
/// * [`HeatmapError::InvalidRange`] if either range has `min >= max`
/// * [`HeatmapError::InvalidInput`] if the caller's point or any grid cell falls
///   outside the pricing domain; no partial grid is returned
///
/// # Example
///
/// ```rust
/// use bsm_heatmap::{sample, Range};
///
/// let heatmap = sample(
///     100.0, 100.0, 1.0, 0.05, 0.2,
///     Range::new(90.0, 110.0),
///     Range::new(0.1, 0.3),
/// )?;
/// assert_eq!(heatmap.current.call_price, 10.45);
/// assert_eq!(heatmap.grid.spot_axis[1], 92.22);
/// assert_eq!(heatmap.grid.vol_axis[1], 0.12);
/// # Ok::<(), bsm_heatmap::HeatmapError>(())
/// ```
pub fn sample(
    spot: f64,
    strike: f64,
    time_to_maturity: f64,
    risk_free_rate: f64,
    volatility: f64,
    spot_range: Range,
    vol_range: Range,
) -> Result<Heatmap> {
    let params = OptionParameters {
        spot,
        strike,
        time_to_maturity,
        risk_free_rate,
        volatility,
    };
    sample_params(&params, spot_range, vol_range)
}

/// [`sample`] for a parameter value object.
pub fn sample_params(
    params: &OptionParameters,
    spot_range: Range,
    vol_range: Range,
) -> Result<Heatmap> {
    validate_ranges(spot_range, vol_range)?;

    let current = price_params(params)?;

    let spot_axis = build_axis(spot_range);
    let vol_axis = build_axis(vol_range);
    debug!(
        "sampling {}x{} grid: spot {} ({:?}), vol {} ({:?})",
        vol_axis.len(),
        spot_axis.len(),
        spot_range,
        spot_axis,
        vol_range,
        vol_axis
    );

    let mut call_matrix = Vec::with_capacity(vol_axis.len());
    let mut put_matrix = Vec::with_capacity(vol_axis.len());

    for &vol in &vol_axis {
        let mut call_row = Vec::with_capacity(spot_axis.len());
        let mut put_row = Vec::with_capacity(spot_axis.len());

        for &spot in &spot_axis {
            let cell = price_params(&params.with_spot_and_vol(spot, vol))?;
            trace!(
                "cell S={spot} vol={vol}: call={} put={}",
                cell.call_price,
                cell.put_price
            );
            call_row.push(cell.call_price);
            put_row.push(cell.put_price);
        }

        call_matrix.push(call_row);
        put_matrix.push(put_row);
    }

    Ok(Heatmap {
        current,
        grid: SamplingGrid {
            spot_axis,
            vol_axis,
            call_matrix,
            put_matrix,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_matches_rounded_linspace() {
        let spot = build_axis(Range::new(90.0, 110.0));
        assert_eq!(
            spot,
            vec![90.0, 92.22, 94.44, 96.67, 98.89, 101.11, 103.33, 105.56, 107.78, 110.0]
        );
        let vol = build_axis(Range::new(0.1, 0.3));
        assert_eq!(
            vol,
            vec![0.1, 0.12, 0.14, 0.17, 0.19, 0.21, 0.23, 0.26, 0.28, 0.3]
        );
    }

    #[test]
    fn unordered_ranges_rejected_before_pricing() {
        // The point itself is invalid too; the range error wins.
        let err = sample(
            100.0,
            0.0,
            1.0,
            0.05,
            0.2,
            Range::new(50.0, 50.0),
            Range::new(0.1, 0.3),
        )
        .unwrap_err();
        assert!(matches!(err, HeatmapError::InvalidRange { .. }));
    }

    #[test]
    fn nan_range_is_unordered() {
        assert!(validate_ranges(Range::new(f64::NAN, 1.0), Range::new(0.1, 0.2)).is_err());
    }

    #[test]
    fn invalid_point_aborts_whole_request() {
        let err = sample(
            100.0,
            100.0,
            0.0,
            0.05,
            0.2,
            Range::new(90.0, 110.0),
            Range::new(0.1, 0.3),
        )
        .unwrap_err();
        assert!(matches!(err, HeatmapError::InvalidInput { .. }));
    }

    #[test]
    fn zero_volatility_cell_aborts_whole_request() {
        // 0.001..0.02 rounds its first axis point to 0.00
        let err = sample(
            100.0,
            100.0,
            1.0,
            0.05,
            0.2,
            Range::new(90.0, 110.0),
            Range::new(0.001, 0.02),
        )
        .unwrap_err();
        assert!(matches!(err, HeatmapError::InvalidInput { .. }));
    }
}
