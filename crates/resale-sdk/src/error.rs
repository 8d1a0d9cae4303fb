//! SDK error types

use crate::model::{ModelLoadError, PredictionError};
use resale_core::ValidationError;
use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Malformed or out-of-domain input
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Model artifact missing, corrupt or incompatible
    #[error("Model load error: {0}")]
    ModelLoad(#[from] ModelLoadError),

    /// Model rejected the feature vector or produced an unusable value
    #[error("Prediction error: {0}")]
    Prediction(#[from] PredictionError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl SdkError {
    /// Stable machine-readable kind
    pub fn kind(&self) -> &'static str {
        match self {
            SdkError::Validation(_) => "validation_error",
            SdkError::ModelLoad(_) => "model_load_error",
            SdkError::Prediction(_) => "prediction_error",
            SdkError::ConfigError(_) => "config_error",
        }
    }

    /// Offending input field, for validation errors
    pub fn field(&self) -> Option<&'static str> {
        match self {
            SdkError::Validation(e) => Some(e.field()),
            _ => None,
        }
    }
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
