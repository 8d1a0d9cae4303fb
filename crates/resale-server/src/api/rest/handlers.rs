//! API endpoint handlers

use super::extractors::JsonExtractor;
use super::types::*;
use crate::error::ServerError;
use axum::{extract::State, Json};
use resale_sdk::SdkError;
use tracing::{error, info};

/// Health check endpoint
pub(super) async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model_loaded: state.predictor.is_model_loaded().await,
    })
}

/// Vocabulary endpoint
pub(super) async fn vocabulary() -> Json<VocabularyResponse> {
    Json(VocabularyResponse::current())
}

/// Prediction endpoint
#[axum::debug_handler]
pub(super) async fn predict(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<PredictRequestPayload>,
) -> Result<Json<PredictResponsePayload>, ServerError> {
    let response = state.predictor.predict(payload.into()).await.map_err(|e| {
        if !matches!(e, SdkError::Validation(_)) {
            error!("Prediction failed: {}", e);
        }
        ServerError::from(e)
    })?;

    Ok(Json(response.into()))
}

/// Reload model endpoint
pub(super) async fn reload_model(
    State(state): State<AppState>,
) -> Result<Json<ReloadResponse>, ServerError> {
    info!("Received model reload request");

    let model = state.predictor.reload_model().await.map_err(|e| {
        error!("Failed to reload model: {}", e);
        ServerError::from(e)
    })?;

    Ok(Json(ReloadResponse {
        success: true,
        message: format!("Model '{}' reloaded successfully", model.name()),
    }))
}
