//! Linear regression on the log price

use super::error::{ModelLoadError, PredictionError};
use super::{check_shape, RegressionModel};
use serde::{Deserialize, Serialize};

/// `intercept + Σ coefficients[i] * x[i]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegressor {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl LinearRegressor {
    pub fn new(intercept: f64, coefficients: Vec<f64>) -> Self {
        Self {
            intercept,
            coefficients,
        }
    }

    /// Check the model against the expected number of features
    pub fn validate(&self, n_features: usize) -> Result<(), ModelLoadError> {
        if self.coefficients.len() != n_features {
            return Err(ModelLoadError::InvalidModel(format!(
                "linear model has {} coefficients, expected {}",
                self.coefficients.len(),
                n_features
            )));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ModelLoadError::InvalidModel(
                "linear model contains non-finite parameters".to_string(),
            ));
        }
        Ok(())
    }
}

impl RegressionModel for LinearRegressor {
    fn predict(&self, features: &[f64]) -> Result<f64, PredictionError> {
        check_shape(self.n_features(), features)?;
        let dot: f64 = self
            .coefficients
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum();
        Ok(self.intercept + dot)
    }

    fn name(&self) -> &str {
        "linear"
    }

    fn n_features(&self) -> usize {
        self.coefficients.len()
    }
}
