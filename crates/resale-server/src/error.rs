//! Server error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use resale_sdk::{ModelLoadError, PredictionError, SdkError};
use serde_json::json;
use thiserror::Error;

/// Server error type
#[derive(Error, Debug)]
pub enum ServerError {
    /// Input failed validation
    #[error("Validation error: {message}")]
    Validation {
        field: Option<String>,
        message: String,
    },

    /// Request body could not be read
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Model artifact could not be loaded
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    /// Model failed on a valid input
    #[error("Prediction failed: {0}")]
    PredictionFailed(String),

    /// Loading or inference exceeded its limit
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Validation { .. } | ServerError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ServerError::ModelUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ServerError::PredictionFailed(_) | ServerError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ServerError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    /// Stable machine-readable kind
    pub fn kind(&self) -> &'static str {
        match self {
            ServerError::Validation { .. } => "validation_error",
            ServerError::InvalidRequest(_) => "invalid_request",
            ServerError::ModelUnavailable(_) => "model_load_error",
            ServerError::PredictionFailed(_) => "prediction_error",
            ServerError::Timeout(_) => "timeout",
            ServerError::InternalError(_) => "internal_error",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let kind = self.kind();

        let (error_message, field) = match self {
            ServerError::Validation { field, message } => (message, field),
            ServerError::InvalidRequest(msg)
            | ServerError::ModelUnavailable(msg)
            | ServerError::PredictionFailed(msg)
            | ServerError::Timeout(msg)
            | ServerError::InternalError(msg) => (msg, None),
        };

        let mut body = json!({
            "error": error_message,
            "status": status.as_u16(),
            "kind": kind,
        });
        if let Some(field) = field {
            body["field"] = json!(field);
        }

        (status, Json(body)).into_response()
    }
}

impl From<SdkError> for ServerError {
    fn from(err: SdkError) -> Self {
        match err {
            SdkError::Validation(e) => ServerError::Validation {
                field: Some(e.field().to_string()),
                message: e.to_string(),
            },
            SdkError::ModelLoad(e @ ModelLoadError::Timeout(_)) => {
                ServerError::Timeout(e.to_string())
            }
            SdkError::ModelLoad(e) => ServerError::ModelUnavailable(e.to_string()),
            SdkError::Prediction(e @ PredictionError::Timeout(_)) => {
                ServerError::Timeout(e.to_string())
            }
            SdkError::Prediction(e) => ServerError::PredictionFailed(e.to_string()),
            SdkError::ConfigError(msg) => ServerError::InternalError(msg),
        }
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::InternalError(err.to_string())
    }
}
