// Closed-form Black-Scholes-Merton pricing for European calls and puts without
// dividends. Outputs are rounded to cents only at the boundary so that every grid
// cell rounds independently of its neighbours.

use crate::error::{HeatmapError, Result};
use crate::models::{OptionParameters, PriceResult};

/// Standard normal CDF.
///
/// `0.5 * erfc(-x / sqrt(2))` keeps full relative precision in the lower tail,
/// where `1 + erf(x)` would cancel.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * libm::erfc(-x / std::f64::consts::SQRT_2)
}

/// Unrounded call and put prices for already validated parameters.
#[allow(non_snake_case)]
fn bs_prices(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> (f64, f64) {
    let sqrt_t = T.sqrt();
    let d1 = ((S / K).ln() + (r + 0.5 * sigma.powi(2)) * T) / (sigma * sqrt_t);
    let d2 = d1 - sigma * sqrt_t;
    let discounted_strike = K * (-r * T).exp();
    let call = S * norm_cdf(d1) - discounted_strike * norm_cdf(d2);
    let put = discounted_strike * norm_cdf(-d2) - S * norm_cdf(-d1);
    (call, put)
}

/// Price a European call and put, rounded to 2 decimal places.
///
/// # Errors
///
/// [`HeatmapError::InvalidInput`](crate::HeatmapError::InvalidInput) when spot, strike,
/// time to maturity or volatility is not strictly positive, or any argument is not
/// finite.
///
/// # Example
///
/// ```rust
/// use bsm_heatmap::price;
///
/// let result = price(100.0, 100.0, 1.0, 0.05, 0.2)?;
/// assert_eq!(result.call_price, 10.45);
/// assert_eq!(result.put_price, 5.57);
/// # Ok::<(), bsm_heatmap::HeatmapError>(())
/// ```
pub fn price(
    spot: f64,
    strike: f64,
    time_to_maturity: f64,
    risk_free_rate: f64,
    volatility: f64,
) -> Result<PriceResult> {
    let params = OptionParameters {
        spot,
        strike,
        time_to_maturity,
        risk_free_rate,
        volatility,
    };
    price_params(&params)
}

/// [`price`] for a parameter value object.
pub fn price_params(params: &OptionParameters) -> Result<PriceResult> {
    Ok(price_unrounded(params)?.rounded())
}

/// Black-Scholes-Merton prices without the final rounding.
///
/// Inputs that pass validation can still overflow (e.g. `exp(-r*T)` for a huge
/// negative rate); a non-finite leg is reported as `InvalidInput`.
pub fn price_unrounded(params: &OptionParameters) -> Result<PriceResult> {
    params.validate()?;
    let (call_price, put_price) = bs_prices(
        params.spot,
        params.strike,
        params.time_to_maturity,
        params.risk_free_rate,
        params.volatility,
    );
    if !call_price.is_finite() || !put_price.is_finite() {
        return Err(HeatmapError::invalid_input(format!(
            "prices are not finite (call {call_price}, put {put_price}) for {params:?}"
        )));
    }
    Ok(PriceResult {
        call_price,
        put_price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn norm_cdf_reference_points() {
        assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
        assert!((norm_cdf(1.0) - 0.841_344_746_068_543).abs() < 1e-12);
        assert!((norm_cdf(-1.96) - 0.024_997_895_148_220_4).abs() < 1e-12);
        // Symmetry
        for &x in &[0.1, 0.5, 1.3, 2.7, 5.0] {
            assert!((norm_cdf(x) + norm_cdf(-x) - 1.0).abs() < 1e-14);
        }
        // Lower tail keeps relative precision
        let tail = norm_cdf(-10.0);
        assert!((tail / 7.619_853_024_160_527e-24 - 1.0).abs() < 1e-10);
    }

    #[test]
    fn reference_at_the_money_prices() {
        let result = price(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
        assert_eq!(result.call_price, 10.45);
        assert_eq!(result.put_price, 5.57);

        let raw = price_unrounded(&OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap())
            .unwrap();
        assert!((raw.call_price - 10.450_583_572_185_565).abs() < 1e-9);
        assert!((raw.put_price - 5.573_526_022_256_971).abs() < 1e-9);
    }

    #[test]
    fn zero_volatility_or_time_is_invalid_input() {
        assert!(matches!(
            price(100.0, 100.0, 1.0, 0.05, 0.0),
            Err(HeatmapError::InvalidInput { .. })
        ));
        assert!(matches!(
            price(100.0, 100.0, 0.0, 0.05, 0.2),
            Err(HeatmapError::InvalidInput { .. })
        ));
        assert!(matches!(
            price(100.0, 0.0, 1.0, 0.05, 0.2),
            Err(HeatmapError::InvalidInput { .. })
        ));
        assert!(matches!(
            price(-5.0, 100.0, 1.0, 0.05, 0.2),
            Err(HeatmapError::InvalidInput { .. })
        ));
    }

    #[test]
    fn overflowing_discount_factor_is_invalid_input() {
        // exp(1000) overflows: the put is inf and the call is inf * 0
        let err = price(100.0, 100.0, 1.0, -1000.0, 0.2).unwrap_err();
        assert!(matches!(err, HeatmapError::InvalidInput { .. }), "{err:?}");
        let params = OptionParameters::new(100.0, 100.0, 1.0, -1000.0, 0.2).unwrap();
        assert!(price_unrounded(&params).is_err());
    }

    #[test]
    fn deep_out_of_the_money_legs_floor_at_zero() {
        let result = price(10.0, 150.0, 0.1, 0.01, 0.05).unwrap();
        assert_eq!(result.call_price, 0.0);
        assert!(result.call_price.is_sign_positive());
        assert!(result.put_price > 139.0);
    }
}
