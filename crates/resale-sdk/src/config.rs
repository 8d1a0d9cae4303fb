//! Configuration types for PricePredictor

use crate::error::{Result, SdkError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default model artifact location
pub const DEFAULT_MODEL_PATH: &str = "models/resale_flat_prices.json";

/// Prediction service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    /// Model artifact path
    pub model_path: PathBuf,

    /// Calendar year used to derive flat age; the current year when unset
    pub reference_year: Option<i32>,

    /// Reject categorical values outside the vocabularies instead of encoding them as -1
    pub strict_categories: bool,

    /// Reject values outside the expected ranges instead of warning
    pub enforce_ranges: bool,

    /// Limit on loading the model artifact, in milliseconds
    pub load_timeout_ms: u64,

    /// Limit on a single inference call, in milliseconds
    pub inference_timeout_ms: u64,
}

impl PredictorConfig {
    /// Create a new predictor configuration
    pub fn new() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            reference_year: None,
            strict_categories: false,
            enforce_ranges: false,
            load_timeout_ms: 5_000,
            inference_timeout_ms: 1_000,
        }
    }

    /// Set model artifact path
    pub fn with_model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = path.into();
        self
    }

    /// Pin the year used for flat age
    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = Some(year);
        self
    }

    /// Enable strict categorical validation
    pub fn strict_categories(mut self, strict: bool) -> Self {
        self.strict_categories = strict;
        self
    }

    /// Enable expected-range enforcement
    pub fn enforce_ranges(mut self, enforce: bool) -> Self {
        self.enforce_ranges = enforce;
        self
    }

    pub fn load_timeout(&self) -> Duration {
        Duration::from_millis(self.load_timeout_ms)
    }

    pub fn inference_timeout(&self) -> Duration {
        Duration::from_millis(self.inference_timeout_ms)
    }

    /// Check the configuration for values the predictor cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.model_path.as_os_str().is_empty() {
            return Err(SdkError::ConfigError("model_path must not be empty".to_string()));
        }
        if self.load_timeout_ms == 0 {
            return Err(SdkError::ConfigError("load_timeout_ms must be positive".to_string()));
        }
        if self.inference_timeout_ms == 0 {
            return Err(SdkError::ConfigError(
                "inference_timeout_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self::new()
    }
}
