//! Model adapter error types

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// The model artifact could not be loaded
#[derive(Error, Debug)]
pub enum ModelLoadError {
    /// Artifact file does not exist
    #[error("Model artifact not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Artifact exists but could not be read
    #[error("Failed to read model artifact {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Artifact is not a valid model document
    #[error("Corrupt model artifact {}: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Artifact was trained on a different feature layout
    #[error("Feature schema mismatch: {0}")]
    SchemaMismatch(String),

    /// Artifact parsed but describes an unusable model
    #[error("Invalid model: {0}")]
    InvalidModel(String),

    /// Loading took longer than the configured limit
    #[error("Model load timed out after {0:?}")]
    Timeout(Duration),

    /// The background load task panicked or was cancelled
    #[error("Model load task failed: {0}")]
    TaskFailed(String),
}

/// The model rejected or failed on a feature vector
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    /// Wrong number of features
    #[error("Feature shape mismatch: expected {expected} features, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// A feature value is NaN or infinite
    #[error("Feature {index} ({name}) is not finite")]
    NonFiniteFeature { index: usize, name: String },

    /// Model produced NaN or infinity, or the price overflowed
    #[error("Model produced a non-finite value: {0}")]
    NonFiniteOutput(f64),

    /// Price is finite but does not fit the price type
    #[error("Predicted price {0} is out of range")]
    PriceOutOfRange(f64),

    /// Inference took longer than the configured limit
    #[error("Inference timed out after {0:?}")]
    Timeout(Duration),

    /// The background inference task panicked or was cancelled
    #[error("Inference task failed: {0}")]
    TaskFailed(String),
}
