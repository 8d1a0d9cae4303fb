//! Core PricePredictor implementation

use super::types::{PredictedPrice, PredictionRequest, PredictionResponse};
use crate::config::PredictorConfig;
use crate::error::{Result, SdkError};
use crate::model::{LoadedModel, ModelHandle, PredictionError};
use chrono::Datelike;
use resale_core::{
    check_ranges, parse_input, Category, FeatureVector, ParsedInput, RawInput, ValidationError,
    UNKNOWN_CODE,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Predicts resale prices from raw transaction input
///
/// Cheap to share: the model lives behind an `Arc<ModelHandle>` and is loaded
/// once, on first use or on [`warm_up`](Self::warm_up).
pub struct PricePredictor {
    config: PredictorConfig,
    model: Arc<ModelHandle>,
}

impl PricePredictor {
    /// Generate a unique request ID
    /// Format: req_YYYYMMDDHHmmss_xxxxxx
    pub(crate) fn generate_request_id() -> String {
        use chrono::Utc;
        use rand::Rng;

        let datetime_str = Utc::now().format("%Y%m%d%H%M%S").to_string();
        let random: u32 = rand::thread_rng().gen_range(0..0xFFFFFF);

        format!("req_{}_{:06x}", datetime_str, random)
    }

    /// Create a predictor that loads its model from `config.model_path` on first use
    pub fn new(config: PredictorConfig) -> Result<Self> {
        config.validate()?;
        let model = Arc::new(ModelHandle::from_path(
            config.model_path.clone(),
            config.load_timeout(),
        ));
        Ok(Self { config, model })
    }

    /// Create a predictor around an existing model handle
    pub fn with_model_handle(config: PredictorConfig, model: Arc<ModelHandle>) -> Self {
        Self { config, model }
    }

    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    pub fn model_handle(&self) -> &Arc<ModelHandle> {
        &self.model
    }

    /// Year used to derive flat age
    pub fn current_year(&self) -> i32 {
        self.config
            .reference_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }

    /// Load the model now instead of on the first request
    pub async fn warm_up(&self) -> Result<()> {
        let model = self.model.get().await?;
        info!("Model '{}' ready ({})", model.name(), model.model_type());
        Ok(())
    }

    /// Re-read the model artifact, keeping the current model on failure
    pub async fn reload_model(&self) -> Result<Arc<LoadedModel>> {
        Ok(self.model.reload().await?)
    }

    /// Whether a model is currently loaded
    pub async fn is_model_loaded(&self) -> bool {
        self.model.is_loaded().await
    }

    /// Validate, encode and transform `raw` into a feature vector
    ///
    /// Returns the vector plus any out-of-range warnings.
    pub fn prepare(
        &self,
        raw: &RawInput,
    ) -> std::result::Result<(FeatureVector, Vec<String>), ValidationError> {
        let parsed = parse_input(raw)?;

        if self.config.strict_categories {
            check_known_categories(raw, &parsed)?;
        }

        let findings = check_ranges(&parsed);
        if self.config.enforce_ranges {
            if let Some(first) = findings.first().cloned() {
                return Err(first);
            }
        }

        let warnings: Vec<String> = findings.iter().map(|f| f.to_string()).collect();
        for warning in &warnings {
            warn!("Out-of-range input: {}", warning);
        }

        let features = FeatureVector::from_parsed(&parsed, self.current_year())?;
        Ok((features, warnings))
    }

    /// Predict the price for one raw input
    pub async fn predict_price(&self, raw: &RawInput) -> Result<PredictedPrice> {
        let (features, _) = self.prepare(raw)?;
        let (log_price, _) = self.infer(features).await?;
        Ok(PredictedPrice::from_log_price(log_price)?)
    }

    /// Predict the price for a request, with metadata
    pub async fn predict(&self, request: PredictionRequest) -> Result<PredictionResponse> {
        let start = Instant::now();
        let request_id = Self::generate_request_id();

        info!(
            "Received prediction request {}: town={}, flat_type={}, flat_model={}",
            request_id, request.input.town, request.input.flat_type, request.input.flat_model
        );

        let (features, warnings) = self.prepare(&request.input).map_err(|e| {
            info!("Request {} rejected: {}", request_id, e);
            SdkError::from(e)
        })?;
        debug!("Request {} transformed data: {:?}", request_id, features.to_array());

        let (log_price, model) = self.infer(features).await?;
        let price = PredictedPrice::from_log_price(log_price)?;

        let processing_time_ms = start.elapsed().as_millis() as u64;
        info!(
            "Request {} predicted price {} (log {:.6}) in {}ms",
            request_id, price, log_price, processing_time_ms
        );

        Ok(PredictionResponse {
            request_id,
            price,
            log_price,
            model: model.name().to_string(),
            warnings,
            features: request.options.return_features.then_some(features),
            processing_time_ms,
        })
    }

    /// Run the model on a blocking thread, bounded by the inference timeout
    async fn infer(&self, features: FeatureVector) -> Result<(f64, Arc<LoadedModel>)> {
        let model = self.model.get().await?;
        let timeout = self.config.inference_timeout();

        let task_model = Arc::clone(&model);
        let task = tokio::task::spawn_blocking(move || task_model.predict(&features));

        let log_price = match tokio::time::timeout(timeout, task).await {
            Ok(Ok(result)) => result?,
            Ok(Err(join_error)) => {
                return Err(PredictionError::TaskFailed(join_error.to_string()).into())
            }
            Err(_) => return Err(PredictionError::Timeout(timeout).into()),
        };

        Ok((log_price, model))
    }
}

fn check_known_categories(
    raw: &RawInput,
    parsed: &ParsedInput,
) -> std::result::Result<(), ValidationError> {
    let codes = [parsed.town_code, parsed.flat_type_code, parsed.flat_model_code];
    for ((category, value), code) in raw.categorical_fields().into_iter().zip(codes) {
        if code == UNKNOWN_CODE {
            return Err(unknown(category, value));
        }
    }
    Ok(())
}

fn unknown(category: Category, value: &str) -> ValidationError {
    ValidationError::UnknownCategory {
        category,
        value: value.to_string(),
    }
}
