//! Error types for heatmap generation.
//!
//! Every failure the core can produce is a deterministic function of the caller's
//! input, so all variants are recoverable: the front-end shows
//! [`HeatmapError::user_message`] and keeps its previous display.

use thiserror::Error;

use crate::grid::Range;

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, HeatmapError>;

/// Message shown for malformed or out-of-domain numeric input.
pub const INVALID_NUMBER_MESSAGE: &str = "Please enter valid numerical inputs.";

/// Message shown when a spot or volatility range is empty or inverted.
pub const INVALID_RANGE_MESSAGE: &str =
    "Min must be less than Max for both spot price and volatility.";

/// Errors raised while parsing inputs, pricing, or sampling a grid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HeatmapError {
    /// A raw input field is not a valid decimal number.
    #[error("invalid numeric input for {field}: {value:?}")]
    Parse { field: String, value: String },

    /// `min >= max` for the spot range, the volatility range, or both.
    #[error("min must be less than max for both ranges (spot: {spot}, volatility: {vol})")]
    InvalidRange { spot: Range, vol: Range },

    /// A pricing precondition is violated (non-positive spot, strike, time or volatility).
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

impl HeatmapError {
    pub fn parse(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Parse {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Dialog title used by front-ends.
    pub fn title(&self) -> &'static str {
        "Input Error"
    }

    /// Text to show the user. Parse failures and pricing-domain failures are
    /// indistinguishable from the user's point of view.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Parse { .. } | Self::InvalidInput { .. } => INVALID_NUMBER_MESSAGE,
            Self::InvalidRange { .. } => INVALID_RANGE_MESSAGE,
        }
    }
}
