//! Integration tests for the prediction service
//!
//! Covers the path from raw input to a rounded price: the exact vector handed
//! to the model, price reconstruction, validation short-circuits, lazy model
//! loading and inference limits.

mod common;

use common::{bedok_input, linear_artifact_json, PanickingModel, RecordingModel};
use resale_sdk::{
    ModelLoadError, PredictionError, PredictionRequest, PricePredictorBuilder, SdkError,
    ValidationError,
};
use std::time::Duration;
use tempfile::TempDir;

// ============================================================================
// Feature vector handed to the model
// ============================================================================

#[tokio::test]
async fn test_model_receives_transformed_vector() {
    let model = RecordingModel::new(13.122);
    let rows = model.rows();
    let predictor = PricePredictorBuilder::new()
        .with_model(model)
        .reference_year(2024)
        .build()
        .unwrap();

    predictor.predict_price(&bedok_input()).await.unwrap();

    let rows = rows.lock().unwrap();
    assert_eq!(rows.len(), 1);
    let expected = [
        2020.0,
        1.0,
        3.0,
        90.0,
        2.0,
        4f64.ln(),
        6f64.ln(),
        70.0,
        3.0,
        1990.0,
        34.0,
    ];
    assert_eq!(rows[0], expected.to_vec());
}

#[tokio::test]
async fn test_price_is_rounded_exponent_of_model_output() {
    let predictor = PricePredictorBuilder::new()
        .with_model(RecordingModel::new(13.122))
        .reference_year(2024)
        .build()
        .unwrap();

    let price = predictor.predict_price(&bedok_input()).await.unwrap();
    assert_eq!(price.value(), 13.122f64.exp().round() as u64);
    assert_eq!(price.value(), 499_818);
}

#[tokio::test]
async fn test_string_numeric_fields_match_numbers() {
    let model = RecordingModel::new(12.0);
    let rows = model.rows();
    let predictor = PricePredictorBuilder::new()
        .with_model(model)
        .reference_year(2024)
        .build()
        .unwrap();

    let mut as_text = bedok_input();
    as_text.year = "2020".into();
    as_text.storey_start = "4".into();
    as_text.lease_commence_year = " 1990 ".into();

    predictor.predict_price(&bedok_input()).await.unwrap();
    predictor.predict_price(&as_text).await.unwrap();

    let rows = rows.lock().unwrap();
    assert_eq!(rows[0], rows[1]);
}

// ============================================================================
// Validation
// ============================================================================

#[tokio::test]
async fn test_invalid_input_never_reaches_model() {
    let model = RecordingModel::new(12.0);
    let rows = model.rows();
    let predictor = PricePredictorBuilder::new().with_model(model).build().unwrap();

    let mut zero_storey = bedok_input();
    zero_storey.storey_start = 0.into();
    let mut negative_storey = bedok_input();
    negative_storey.storey_end = (-3).into();
    let mut bad_area = bedok_input();
    bad_area.floor_area_sqm = "large".into();

    for input in [zero_storey, negative_storey, bad_area] {
        let err = predictor.predict_price(&input).await.unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));
    }
    assert!(rows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_town_uses_sentinel_by_default() {
    let model = RecordingModel::new(12.0);
    let rows = model.rows();
    let predictor = PricePredictorBuilder::new().with_model(model).build().unwrap();

    let mut input = bedok_input();
    input.town = "ATLANTIS".to_string();
    predictor.predict_price(&input).await.unwrap();

    assert_eq!(rows.lock().unwrap()[0][1], -1.0);
}

#[tokio::test]
async fn test_unknown_town_rejected_when_strict() {
    let model = RecordingModel::new(12.0);
    let rows = model.rows();
    let predictor = PricePredictorBuilder::new()
        .with_model(model)
        .strict_categories(true)
        .build()
        .unwrap();

    let mut input = bedok_input();
    input.town = "ATLANTIS".to_string();
    let err = predictor.predict_price(&input).await.unwrap_err();

    assert!(matches!(
        err,
        SdkError::Validation(ValidationError::UnknownCategory { .. })
    ));
    assert_eq!(err.field(), Some("town"));
    assert!(rows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_range_warnings_reported_in_response() {
    let predictor = PricePredictorBuilder::new()
        .with_model(RecordingModel::new(12.0))
        .reference_year(2024)
        .build()
        .unwrap();

    let mut input = bedok_input();
    input.lease_commence_year = 2030.into();
    let response = predictor
        .predict(PredictionRequest::new(input).with_features())
        .await
        .unwrap();

    assert_eq!(response.warnings.len(), 1);
    assert!(response.warnings[0].contains("lease_commence_year"));
    assert_eq!(response.features.unwrap().flat_age, -6);
}

#[tokio::test]
async fn test_range_enforced_rejects() {
    let predictor = PricePredictorBuilder::new()
        .with_model(RecordingModel::new(12.0))
        .enforce_ranges(true)
        .build()
        .unwrap();

    let mut input = bedok_input();
    input.year = 1985.into();
    let err = predictor.predict_price(&input).await.unwrap_err();
    assert_eq!(err.field(), Some("year"));
}

// ============================================================================
// Model loading
// ============================================================================

#[tokio::test]
async fn test_missing_artifact_then_recovery() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("model.json");
    let predictor = PricePredictorBuilder::new()
        .with_model_path(&path)
        .reference_year(2024)
        .build()
        .unwrap();

    let err = predictor.predict_price(&bedok_input()).await.unwrap_err();
    assert!(matches!(
        err,
        SdkError::ModelLoad(ModelLoadError::NotFound(_))
    ));
    assert_eq!(err.kind(), "model_load_error");

    std::fs::write(&path, linear_artifact_json("recovered", 12.5)).unwrap();
    let response = predictor
        .predict(PredictionRequest::new(bedok_input()))
        .await
        .unwrap();
    assert_eq!(response.price.value(), 268_337);
    assert_eq!(response.model, "recovered");
}

#[tokio::test]
async fn test_warm_up_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("model.json");
    std::fs::write(&path, linear_artifact_json("first", 12.0)).unwrap();

    let predictor = PricePredictorBuilder::new()
        .with_model_path(&path)
        .build()
        .unwrap();
    assert!(!predictor.is_model_loaded().await);
    predictor.warm_up().await.unwrap();
    assert!(predictor.is_model_loaded().await);

    std::fs::write(&path, linear_artifact_json("second", 12.0)).unwrap();
    let reloaded = predictor.reload_model().await.unwrap();
    assert_eq!(reloaded.name(), "second");

    std::fs::write(&path, "{}").unwrap();
    assert!(predictor.reload_model().await.is_err());
    let response = predictor
        .predict(PredictionRequest::new(bedok_input()))
        .await
        .unwrap();
    assert_eq!(response.model, "second");
}

// ============================================================================
// Inference failures
// ============================================================================

#[tokio::test]
async fn test_slow_model_times_out() {
    let predictor = PricePredictorBuilder::new()
        .with_model(RecordingModel::new(12.0).with_delay(Duration::from_millis(300)))
        .inference_timeout(20)
        .build()
        .unwrap();

    let err = predictor.predict_price(&bedok_input()).await.unwrap_err();
    assert!(matches!(
        err,
        SdkError::Prediction(PredictionError::Timeout(_))
    ));
}

#[tokio::test]
async fn test_panicking_model_is_prediction_error() {
    let predictor = PricePredictorBuilder::new()
        .with_model(PanickingModel)
        .build()
        .unwrap();

    let err = predictor.predict_price(&bedok_input()).await.unwrap_err();
    assert!(matches!(
        err,
        SdkError::Prediction(PredictionError::TaskFailed(_))
    ));
}
