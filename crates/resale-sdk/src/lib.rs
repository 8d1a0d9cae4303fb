//! Resale SDK
//!
//! High-level API for predicting HDB resale prices: model adapter, shared
//! model loading and the prediction service.

pub mod builder;
pub mod config;
pub mod error;
pub mod model;
pub mod predictor;

// Re-export main types
pub use builder::PricePredictorBuilder;
pub use config::{PredictorConfig, DEFAULT_MODEL_PATH};
pub use error::{Result, SdkError};
pub use model::{
    load_model, LinearRegressor, LoadedModel, ModelArtifact, ModelHandle, ModelLoadError,
    ModelSource, ModelSpec, PredictionError, RegressionModel, TreeEnsemble,
};
pub use predictor::{
    PredictedPrice, PredictionOptions, PredictionRequest, PredictionResponse, PricePredictor,
};

// Re-export commonly used types from dependencies
pub use resale_core::{Category, FeatureVector, InputValue, RawInput, ValidationError};
