//! Builder pattern for PricePredictor

use crate::config::PredictorConfig;
use crate::error::Result;
use crate::model::{LoadedModel, ModelHandle, RegressionModel};
use crate::predictor::PricePredictor;
use std::path::PathBuf;
use std::sync::Arc;

/// Builder for PricePredictor
///
/// # Example
///
/// ```rust,ignore
/// use resale_sdk::PricePredictorBuilder;
///
/// // From a model artifact on disk, loaded on first use
/// let predictor = PricePredictorBuilder::new()
///     .with_model_path("models/resale_flat_prices.json")
///     .reference_year(2024)
///     .build()?;
///
/// // From an in-process model (for testing)
/// let predictor = PricePredictorBuilder::new()
///     .with_model(LinearRegressor::new(12.5, vec![0.0; 11]))
///     .build()?;
/// ```
pub struct PricePredictorBuilder {
    config: PredictorConfig,
    model: Option<Box<dyn RegressionModel>>,
    loaded: Option<LoadedModel>,
}

impl PricePredictorBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: PredictorConfig::new(),
            model: None,
            loaded: None,
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: PredictorConfig) -> Self {
        self.config = config;
        self
    }

    /// Set model artifact path
    pub fn with_model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.model_path = path.into();
        self
    }

    /// Use an in-process model instead of loading an artifact
    pub fn with_model(mut self, model: impl RegressionModel + 'static) -> Self {
        self.model = Some(Box::new(model));
        self.loaded = None;
        self
    }

    /// Use an already validated model
    pub fn with_loaded_model(mut self, model: LoadedModel) -> Self {
        self.loaded = Some(model);
        self.model = None;
        self
    }

    /// Pin the year used for flat age
    pub fn reference_year(mut self, year: i32) -> Self {
        self.config.reference_year = Some(year);
        self
    }

    /// Reject unknown categorical values
    pub fn strict_categories(mut self, strict: bool) -> Self {
        self.config.strict_categories = strict;
        self
    }

    /// Reject out-of-range values instead of warning
    pub fn enforce_ranges(mut self, enforce: bool) -> Self {
        self.config.enforce_ranges = enforce;
        self
    }

    /// Set model load timeout in milliseconds
    pub fn load_timeout(mut self, millis: u64) -> Self {
        self.config.load_timeout_ms = millis;
        self
    }

    /// Set inference timeout in milliseconds
    pub fn inference_timeout(mut self, millis: u64) -> Self {
        self.config.inference_timeout_ms = millis;
        self
    }

    /// Build the predictor
    ///
    /// No artifact is read here; a file-backed model is loaded on first use.
    pub fn build(self) -> Result<PricePredictor> {
        self.config.validate()?;

        let loaded = match (self.loaded, self.model) {
            (Some(loaded), _) => Some(loaded),
            (None, Some(model)) => Some(LoadedModel::from_model(model)?),
            (None, None) => None,
        };

        match loaded {
            Some(model) => Ok(PricePredictor::with_model_handle(
                self.config,
                Arc::new(ModelHandle::from_loaded(model)),
            )),
            None => PricePredictor::new(self.config),
        }
    }
}

impl Default for PricePredictorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SdkError;
    use crate::model::{LinearRegressor, ModelLoadError, ModelSource};

    #[tokio::test]
    async fn test_builder_with_model() {
        let predictor = PricePredictorBuilder::new()
            .with_model(LinearRegressor::new(12.5, vec![0.0; 11]))
            .reference_year(2024)
            .build()
            .unwrap();

        assert!(predictor.is_model_loaded().await);
        assert_eq!(predictor.model_handle().source(), &ModelSource::InMemory);
        assert_eq!(predictor.current_year(), 2024);
    }

    #[tokio::test]
    async fn test_builder_with_path_is_lazy() {
        let predictor = PricePredictorBuilder::new()
            .with_model_path("does/not/exist.json")
            .build()
            .unwrap();

        assert!(!predictor.is_model_loaded().await);
        assert_eq!(
            predictor.model_handle().source(),
            &ModelSource::File(PathBuf::from("does/not/exist.json"))
        );
    }

    #[test]
    fn test_builder_rejects_wrong_feature_count() {
        let result = PricePredictorBuilder::new()
            .with_model(LinearRegressor::new(0.0, vec![0.0; 4]))
            .build();

        assert!(matches!(
            result,
            Err(SdkError::ModelLoad(ModelLoadError::SchemaMismatch(_)))
        ));
    }

    #[test]
    fn test_builder_with_multiple_options() {
        let builder = PricePredictorBuilder::new()
            .strict_categories(true)
            .enforce_ranges(true)
            .load_timeout(250)
            .inference_timeout(50);

        assert!(builder.config.strict_categories);
        assert!(builder.config.enforce_ranges);
        assert_eq!(builder.config.load_timeout_ms, 250);
        assert_eq!(builder.config.inference_timeout_ms, 50);
    }

    #[test]
    fn test_builder_rejects_invalid_config() {
        let result = PricePredictorBuilder::new().inference_timeout(0).build();
        assert!(matches!(result, Err(SdkError::ConfigError(_))));
    }
}
