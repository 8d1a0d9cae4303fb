//! Router creation and configuration

use super::handlers::*;
use super::types::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use resale_sdk::PricePredictor;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create REST API router
pub fn create_router(predictor: Arc<PricePredictor>) -> Router {
    let state = AppState { predictor };

    Router::new()
        .route("/health", get(health))
        .route("/v1/vocabulary", get(vocabulary))
        .route("/v1/predict", post(predict))
        .route("/v1/model/reload", post(reload_model))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
