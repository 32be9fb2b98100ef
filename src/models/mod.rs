pub mod bs;

use std::fmt;

use crate::error::{HeatmapError, Result};

/// Inputs to a single Black-Scholes-Merton evaluation.
///
/// Constructed fresh per evaluation; [`OptionParameters::new`] enforces the pricing
/// domain (positive spot, strike, time and volatility, all finite).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionParameters {
    /// Current price of the underlying
    pub spot: f64,
    /// Exercise price
    pub strike: f64,
    /// Time to expiration in years
    pub time_to_maturity: f64,
    /// Continuously compounded risk-free rate (as decimal)
    pub risk_free_rate: f64,
    /// Annualized volatility (as decimal, e.g. 0.2 for 20%)
    pub volatility: f64,
}

impl OptionParameters {
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_maturity: f64,
        risk_free_rate: f64,
        volatility: f64,
    ) -> Result<Self> {
        let params = Self {
            spot,
            strike,
            time_to_maturity,
            risk_free_rate,
            volatility,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check the pricing domain. Fields are public, so the pricer re-checks.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("time to maturity", self.time_to_maturity),
            ("volatility", self.volatility),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(HeatmapError::invalid_input(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        if !self.risk_free_rate.is_finite() {
            return Err(HeatmapError::invalid_input(format!(
                "risk-free rate must be finite, got {}",
                self.risk_free_rate
            )));
        }
        Ok(())
    }

    /// Same contract with a different spot and volatility, as used for grid cells.
    pub fn with_spot_and_vol(&self, spot: f64, volatility: f64) -> Self {
        Self {
            spot,
            volatility,
            ..*self
        }
    }
}

/// Call and put prices, each rounded to 2 decimal places.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceResult {
    pub call_price: f64,
    pub put_price: f64,
}

impl PriceResult {
    /// Round both legs to cents.
    pub fn rounded(self) -> Self {
        Self {
            call_price: utils::round_to_cents(self.call_price),
            put_price: utils::round_to_cents(self.put_price),
        }
    }
}

impl fmt::Display for PriceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Call Option Price: ${:.2}     Put Option Price: ${:.2}",
            self.call_price, self.put_price
        )
    }
}

/// Numeric helpers shared by the pricer and the grid sampler
pub mod utils {
    /// Round to 2 decimal places.
    ///
    /// Rounds the exact binary value, so `2.675` (stored just below the tie)
    /// becomes `2.67`.
    pub fn round_to_cents(x: f64) -> f64 {
        let rounded = format!("{x:.2}").parse::<f64>().unwrap_or(x);
        // Avoid "-0.00" for deep out-of-the-money legs
        if rounded == 0.0 {
            0.0
        } else {
            rounded
        }
    }

    /// `n` evenly spaced values from `min` to `max` inclusive, the last exactly `max`.
    pub fn linspace(min: f64, max: f64, n: usize) -> Vec<f64> {
        match n {
            0 => Vec::new(),
            1 => vec![min],
            _ => {
                let step = (max - min) / (n - 1) as f64;
                (0..n)
                    .map(|i| if i == n - 1 { max } else { min + i as f64 * step })
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::utils::{linspace, round_to_cents};
    use super::*;

    #[test]
    fn round_to_cents_basic() {
        assert_eq!(round_to_cents(10.4506), 10.45);
        assert_eq!(round_to_cents(5.5735), 5.57);
        assert_eq!(round_to_cents(92.2222), 92.22);
        assert_eq!(round_to_cents(-0.001), 0.0);
        assert!(round_to_cents(-0.001).is_sign_positive());
    }

    #[test]
    fn round_to_cents_uses_stored_value_near_ties() {
        // Both are stored slightly below the written half-cent
        assert_eq!(round_to_cents(2.675), 2.67);
        assert_eq!(round_to_cents(1.115), 1.11);
        assert_eq!(round_to_cents(-2.675), -2.67);
        // Stored slightly above
        assert_eq!(round_to_cents(1.005 + 1e-9), 1.01);
        assert!(round_to_cents(f64::NAN).is_nan());
        assert_eq!(round_to_cents(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn linspace_endpoints_and_spacing() {
        let xs = linspace(90.0, 110.0, 10);
        assert_eq!(xs.len(), 10);
        assert_eq!(xs[0], 90.0);
        assert_eq!(xs[9], 110.0);
        for w in xs.windows(2) {
            assert!((w[1] - w[0] - 20.0 / 9.0).abs() < 1e-12);
        }
        assert!(linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
    }

    #[test]
    fn option_parameters_reject_non_positive_fields() {
        assert!(OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).is_ok());
        assert!(OptionParameters::new(0.0, 100.0, 1.0, 0.05, 0.2).is_err());
        assert!(OptionParameters::new(100.0, -1.0, 1.0, 0.05, 0.2).is_err());
        assert!(OptionParameters::new(100.0, 100.0, 0.0, 0.05, 0.2).is_err());
        assert!(OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.0).is_err());
        assert!(OptionParameters::new(100.0, 100.0, 1.0, f64::NAN, 0.2).is_err());
        // Negative rates are allowed
        assert!(OptionParameters::new(100.0, 100.0, 1.0, -0.01, 0.2).is_ok());
    }

    #[test]
    fn display_matches_front_end_text() {
        let result = PriceResult {
            call_price: 10.45,
            put_price: 5.57,
        };
        assert_eq!(
            result.to_string(),
            "Call Option Price: $10.45     Put Option Price: $5.57"
        );
    }
}
