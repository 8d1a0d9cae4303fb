//! REST API type definitions
//!
//! Request and response types for the REST API endpoints.

use resale_core::{Category, FeatureVector, RawInput};
use resale_sdk::{PredictionOptions, PredictionRequest, PredictionResponse, PricePredictor};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Currency of every predicted price
pub const CURRENCY: &str = "SGD";

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<PricePredictor>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub model_loaded: bool,
}

/// Accepted values for each categorical field, in code order
#[derive(Debug, Serialize, Deserialize)]
pub struct VocabularyResponse {
    pub town: Vec<String>,
    pub flat_type: Vec<String>,
    pub flat_model: Vec<String>,
}

impl VocabularyResponse {
    pub fn current() -> Self {
        let list = |category: Category| -> Vec<String> {
            category.vocabulary().iter().map(|v| v.to_string()).collect()
        };
        Self {
            town: list(Category::Town),
            flat_type: list(Category::FlatType),
            flat_model: list(Category::FlatModel),
        }
    }
}

/// Prediction request payload
#[derive(Debug, Deserialize)]
pub struct PredictRequestPayload {
    /// Raw transaction fields (required)
    pub input: RawInput,

    /// Optional configuration
    #[serde(default)]
    pub options: Option<RequestOptions>,
}

/// Request options
#[derive(Debug, Default, Deserialize)]
pub struct RequestOptions {
    /// Whether to return the transformed feature vector
    #[serde(default)]
    pub return_features: bool,
}

impl From<PredictRequestPayload> for PredictionRequest {
    fn from(payload: PredictRequestPayload) -> Self {
        let options = payload.options.unwrap_or_default();
        PredictionRequest {
            input: payload.input,
            options: PredictionOptions {
                return_features: options.return_features,
            },
        }
    }
}

/// Prediction response payload
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictResponsePayload {
    /// Request ID (for tracking and correlation)
    pub request_id: String,

    /// HTTP status code
    pub status: u16,

    /// Processing time in milliseconds
    pub process_time_ms: u64,

    /// Predicted resale price, rounded to a whole dollar
    pub price: u64,

    /// Raw model output
    pub log_price: f64,

    pub currency: String,

    /// Model that produced the price
    pub model: String,

    /// Inputs outside the expected ranges
    pub warnings: Vec<String>,

    /// Transformed features (only present if options.return_features = true)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<FeatureVector>,
}

impl From<PredictionResponse> for PredictResponsePayload {
    fn from(response: PredictionResponse) -> Self {
        Self {
            request_id: response.request_id,
            status: 200,
            process_time_ms: response.processing_time_ms,
            price: response.price.value(),
            log_price: response.log_price,
            currency: CURRENCY.to_string(),
            model: response.model,
            warnings: response.warnings,
            features: response.features,
        }
    }
}

/// Reload model endpoint response
#[derive(Debug, Serialize, Deserialize)]
pub struct ReloadResponse {
    pub success: bool,
    pub message: String,
}
