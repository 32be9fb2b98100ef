//! Boundary between a front-end's raw form values and the pricing core.
//!
//! The five option fields arrive as text; the range endpoints arrive as slider
//! positions, with volatility on a percentage scale. Parsing happens first, then the
//! range check, then pricing, so the first problem the user sees is the earliest one.

use log::warn;

use crate::error::{HeatmapError, Result};
use crate::grid::{sample_params, validate_ranges, Heatmap, Range};
use crate::models::OptionParameters;

pub const SPOT_FIELD: &str = "Spot Price (S)";
pub const STRIKE_FIELD: &str = "Strike Price (K)";
pub const TIME_FIELD: &str = "Time to Maturity (T)";
pub const RATE_FIELD: &str = "Risk-Free Rate (r)";
pub const VOL_FIELD: &str = "Volatility (σ)";

/// Limits and initial positions of a range slider pair.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderBounds {
    pub lower: f64,
    pub upper: f64,
    pub initial_min: f64,
    pub initial_max: f64,
}

impl SliderBounds {
    /// Spot sliders: 10 to 150, starting at 40..60.
    pub const SPOT: SliderBounds = SliderBounds {
        lower: 10.0,
        upper: 150.0,
        initial_min: 40.0,
        initial_max: 60.0,
    };

    /// Volatility sliders in percent: 1 to 100, starting at 30..40.
    pub const VOL_PERCENT: SliderBounds = SliderBounds {
        lower: 1.0,
        upper: 100.0,
        initial_min: 30.0,
        initial_max: 40.0,
    };

    /// Clamp a slider position into `[lower, upper]`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.lower, self.upper)
    }
}

/// Raw values as collected from the input form.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawInputs {
    pub spot: String,
    pub strike: String,
    pub time_to_maturity: String,
    pub risk_free_rate: String,
    pub volatility: String,
    /// Spot range endpoints in price units
    pub spot_min: f64,
    pub spot_max: f64,
    /// Volatility range endpoints in percent (1-100)
    pub vol_min_pct: f64,
    pub vol_max_pct: f64,
}

impl Default for RawInputs {
    fn default() -> Self {
        Self {
            spot: String::new(),
            strike: String::new(),
            time_to_maturity: String::new(),
            risk_free_rate: String::new(),
            volatility: String::new(),
            spot_min: SliderBounds::SPOT.initial_min,
            spot_max: SliderBounds::SPOT.initial_max,
            vol_min_pct: SliderBounds::VOL_PERCENT.initial_min,
            vol_max_pct: SliderBounds::VOL_PERCENT.initial_max,
        }
    }
}

/// Parsed, range-checked request ready to be priced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatmapRequest {
    pub params: OptionParameters,
    pub spot_range: Range,
    /// Volatility range as fractions
    pub vol_range: Range,
}

/// Parse one decimal field. Empty, non-numeric and non-finite values are rejected.
pub fn parse_field(field: &str, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(HeatmapError::parse(field, text)),
    }
}

impl RawInputs {
    /// Parse the text fields and check both ranges.
    ///
    /// Pricing-domain checks (positive strike etc.) are left to the pricer so that
    /// they surface as [`HeatmapError::InvalidInput`].
    pub fn parse(&self) -> Result<HeatmapRequest> {
        let params = OptionParameters {
            spot: parse_field(SPOT_FIELD, &self.spot)?,
            strike: parse_field(STRIKE_FIELD, &self.strike)?,
            time_to_maturity: parse_field(TIME_FIELD, &self.time_to_maturity)?,
            risk_free_rate: parse_field(RATE_FIELD, &self.risk_free_rate)?,
            volatility: parse_field(VOL_FIELD, &self.volatility)?,
        };

        let spot_range = Range::new(self.spot_min, self.spot_max);
        let vol_range = Range::from_percent(self.vol_min_pct, self.vol_max_pct);
        validate_ranges(spot_range, vol_range)?;

        Ok(HeatmapRequest {
            params,
            spot_range,
            vol_range,
        })
    }
}

impl HeatmapRequest {
    pub fn run(&self) -> Result<Heatmap> {
        sample_params(&self.params, self.spot_range, self.vol_range)
    }
}

/// Handle one "generate" action end to end.
///
/// Failures are logged and returned; the caller shows
/// [`HeatmapError::user_message`] and keeps its previous display.
pub fn generate(raw: &RawInputs) -> Result<Heatmap> {
    raw.parse().and_then(|request| request.run()).map_err(|err| {
        warn!("rejected heatmap request: {err}");
        err
    })
}
