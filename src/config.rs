//! TOML configuration for the command-line front-end.
//!
//! Every section and field is optional; missing values fall back to the initial
//! state of the input form (S = K = 100, T = 1, r = 5%, σ = 20%, spot
//! sliders 40..60, volatility sliders 30%..40%).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::input::{RawInputs, SliderBounds};
use crate::render::HeatmapStyle;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct HeatmapConfig {
    pub option: OptionConfig,
    pub ranges: RangeConfig,
    pub output: OutputConfig,
}

/// The five pricing inputs.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct OptionConfig {
    pub spot: f64,
    pub strike: f64,
    /// Years
    pub time_to_maturity: f64,
    pub risk_free_rate: f64,
    /// Fraction, e.g. 0.2 for 20%
    pub volatility: f64,
}

impl Default for OptionConfig {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            time_to_maturity: 1.0,
            risk_free_rate: 0.05,
            volatility: 0.2,
        }
    }
}

/// Grid ranges; volatility endpoints are in percent, like the sliders.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct RangeConfig {
    pub spot_min: f64,
    pub spot_max: f64,
    pub vol_min_pct: f64,
    pub vol_max_pct: f64,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            spot_min: SliderBounds::SPOT.initial_min,
            spot_max: SliderBounds::SPOT.initial_max,
            vol_min_pct: SliderBounds::VOL_PERCENT.initial_min,
            vol_max_pct: SliderBounds::VOL_PERCENT.initial_max,
        }
    }
}

/// Where and how to write results.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub svg: PathBuf,
    /// Optional long-format CSV export of the grid
    pub csv: Option<PathBuf>,
    #[serde(flatten)]
    pub style: HeatmapStyle,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            svg: PathBuf::from("heatmap.svg"),
            csv: None,
            style: HeatmapStyle::default(),
        }
    }
}

impl HeatmapConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid heatmap configuration")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Present the configured values the way the input form would.
    pub fn to_raw_inputs(&self) -> RawInputs {
        RawInputs {
            spot: self.option.spot.to_string(),
            strike: self.option.strike.to_string(),
            time_to_maturity: self.option.time_to_maturity.to_string(),
            risk_free_rate: self.option.risk_free_rate.to_string(),
            volatility: self.option.volatility.to_string(),
            spot_min: self.ranges.spot_min,
            spot_max: self.ranges.spot_max,
            vol_min_pct: self.ranges.vol_min_pct,
            vol_max_pct: self.ranges.vol_max_pct,
        }
    }
}

/// Commented template matching the defaults.
pub fn default_config_template() -> &'static str {
    r#"# bsm-heatmap configuration

[option]
spot = 100.0
strike = 100.0
time_to_maturity = 1.0   # years
risk_free_rate = 0.05
volatility = 0.2         # fraction

[ranges]
spot_min = 40.0
spot_max = 60.0
vol_min_pct = 30.0       # percent
vol_max_pct = 40.0

[output]
svg = "heatmap.svg"
# csv = "heatmap.csv"
width = 1200
height = 350
call_palette = "yl_gn_bu"
put_palette = "yl_or_rd"
annotate = true
"#
}
