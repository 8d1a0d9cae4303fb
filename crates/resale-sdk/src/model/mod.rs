//! Model adapter
//!
//! Wraps a trained regression artifact behind a single capability:
//! `predict(feature_vector) -> log_price`.
//!
//! - `artifact`: on-disk JSON format with an explicit feature schema
//! - `linear` / `tree`: the supported regressors
//! - `loader`: reads and validates an artifact into a [`LoadedModel`]
//! - `handle`: lazily loaded, shared, reloadable model slot

pub mod artifact;
pub mod error;
pub mod handle;
pub mod linear;
pub mod loader;
pub mod tree;

pub use artifact::{
    FeatureSchema, ModelArtifact, ModelSpec, ARTIFACT_FORMAT_VERSION, LOG_PRICE_TARGET,
};
pub use error::{ModelLoadError, PredictionError};
pub use handle::{ModelHandle, ModelSource};
pub use linear::LinearRegressor;
pub use loader::{load_model, LoadedModel};
pub use tree::{Aggregation, TreeEnsemble, TreeNode};

/// A trained regression model predicting the natural log of the resale price
///
/// Implementations must be pure reads so one instance can serve concurrent
/// requests.
pub trait RegressionModel: Send + Sync + std::fmt::Debug {
    /// Predict the log price for one ordered feature row
    fn predict(&self, features: &[f64]) -> Result<f64, PredictionError>;

    /// Short model family name, for logs and responses
    fn name(&self) -> &str;

    /// Number of features the model expects
    fn n_features(&self) -> usize;
}

impl<T: RegressionModel + ?Sized> RegressionModel for Box<T> {
    fn predict(&self, features: &[f64]) -> Result<f64, PredictionError> {
        (**self).predict(features)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn n_features(&self) -> usize {
        (**self).n_features()
    }
}

pub(crate) fn check_shape(expected: usize, features: &[f64]) -> Result<(), PredictionError> {
    if features.len() != expected {
        return Err(PredictionError::ShapeMismatch {
            expected,
            actual: features.len(),
        });
    }
    Ok(())
}
