//! Common test utilities for SDK integration tests

#![allow(dead_code)]

use resale_sdk::{PredictionError, RawInput, RegressionModel};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Model that returns a fixed log price and records every row it sees
#[derive(Debug, Clone)]
pub struct RecordingModel {
    output: f64,
    delay: Option<Duration>,
    rows: Arc<Mutex<Vec<Vec<f64>>>>,
}

impl RecordingModel {
    pub fn new(output: f64) -> Self {
        Self {
            output,
            delay: None,
            rows: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Sleep before answering, to exercise the inference timeout
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Shared view of the recorded rows; stays valid after the model is moved
    pub fn rows(&self) -> Arc<Mutex<Vec<Vec<f64>>>> {
        Arc::clone(&self.rows)
    }
}

impl RegressionModel for RecordingModel {
    fn predict(&self, features: &[f64]) -> Result<f64, PredictionError> {
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        self.rows.lock().unwrap().push(features.to_vec());
        Ok(self.output)
    }

    fn name(&self) -> &str {
        "recording"
    }

    fn n_features(&self) -> usize {
        11
    }
}

/// Model that panics on every call
#[derive(Debug)]
pub struct PanickingModel;

impl RegressionModel for PanickingModel {
    fn predict(&self, _features: &[f64]) -> Result<f64, PredictionError> {
        panic!("model exploded");
    }

    fn name(&self) -> &str {
        "panicking"
    }

    fn n_features(&self) -> usize {
        11
    }
}

/// The reference transaction: a 4-room Model A flat in Bedok sold in 2020
pub fn bedok_input() -> RawInput {
    RawInput {
        year: 2020.into(),
        town: "BEDOK".to_string(),
        flat_type: "4 ROOM".to_string(),
        floor_area_sqm: 90.0.into(),
        flat_model: "Model A".to_string(),
        storey_start: 4.into(),
        storey_end: 6.into(),
        remaining_lease_years: 70.into(),
        remaining_lease_months: 3.into(),
        lease_commence_year: 1990.into(),
    }
}

/// JSON for a linear artifact with the canonical schema
pub fn linear_artifact_json(name: &str, intercept: f64) -> String {
    serde_json::json!({
        "format_version": 1,
        "name": name,
        "target": "log_price",
        "schema": {
            "version": "1",
            "features": [
                "year", "town", "flat_type", "floor_area_sqm", "flat_model",
                "storey_start_log", "storey_end_log", "remaining_lease_years",
                "remaining_lease_months", "lease_commence_year", "flat_age"
            ]
        },
        "model": {
            "type": "linear",
            "intercept": intercept,
            "coefficients": vec![0.0; 11]
        }
    })
    .to_string()
}
