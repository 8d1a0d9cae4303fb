//! Request/Response types for PricePredictor

use crate::model::PredictionError;
use resale_core::{FeatureVector, RawInput};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prediction request options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionOptions {
    /// Return the transformed feature vector with the price
    #[serde(default)]
    pub return_features: bool,
}

/// Prediction request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub input: RawInput,

    #[serde(default)]
    pub options: PredictionOptions,
}

impl PredictionRequest {
    /// Create a new prediction request
    pub fn new(input: RawInput) -> Self {
        Self {
            input,
            options: PredictionOptions::default(),
        }
    }

    /// Return the feature vector with the response
    pub fn with_features(mut self) -> Self {
        self.options.return_features = true;
        self
    }
}

/// Resale price in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PredictedPrice(u64);

impl PredictedPrice {
    pub fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Invert the log-scale model output: `round(exp(log_price))`
    ///
    /// Ties round to even.
    pub fn from_log_price(log_price: f64) -> Result<Self, PredictionError> {
        let price = log_price.exp();
        if !price.is_finite() {
            return Err(PredictionError::NonFiniteOutput(price));
        }
        let rounded = price.round_ties_even();
        if rounded >= u64::MAX as f64 {
            return Err(PredictionError::PriceOutOfRange(rounded));
        }
        Ok(Self(rounded as u64))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PredictedPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Prediction response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// Request ID (for tracking and correlation)
    pub request_id: String,

    /// Predicted resale price
    pub price: PredictedPrice,

    /// Raw model output before exponentiation
    pub log_price: f64,

    /// Name of the model that produced the price
    pub model: String,

    /// Out-of-range inputs that did not block the prediction
    #[serde(default)]
    pub warnings: Vec<String>,

    /// Transformed features (only present if return_features was set)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<FeatureVector>,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}
