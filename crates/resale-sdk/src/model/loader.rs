//! Artifact loading and the model adapter

use super::artifact::{FeatureSchema, ModelArtifact, ModelSpec};
use super::error::{ModelLoadError, PredictionError};
use super::RegressionModel;
use chrono::{DateTime, Utc};
use resale_core::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A validated model ready for inference
///
/// Read-only after construction; share it behind an `Arc`.
#[derive(Debug)]
pub struct LoadedModel {
    name: String,
    schema: FeatureSchema,
    model: Box<dyn RegressionModel>,
    source: Option<PathBuf>,
    loaded_at: DateTime<Utc>,
}

impl LoadedModel {
    /// Validate an artifact and build the regressor it describes
    pub fn from_artifact(
        artifact: ModelArtifact,
        source: Option<PathBuf>,
    ) -> Result<Self, ModelLoadError> {
        artifact.validate_header()?;

        let model: Box<dyn RegressionModel> = match artifact.model {
            ModelSpec::Linear(linear) => {
                linear.validate(FEATURE_COUNT)?;
                Box::new(linear)
            }
            ModelSpec::TreeEnsemble(mut ensemble) => {
                ensemble.validate(FEATURE_COUNT)?;
                Box::new(ensemble)
            }
        };

        let name = artifact
            .name
            .unwrap_or_else(|| model.name().to_string());

        Ok(Self {
            name,
            schema: artifact.schema,
            model,
            source,
            loaded_at: Utc::now(),
        })
    }

    /// Wrap an in-process model, assuming the canonical feature layout
    pub fn from_model(model: impl RegressionModel + 'static) -> Result<Self, ModelLoadError> {
        if model.n_features() != FEATURE_COUNT {
            return Err(ModelLoadError::SchemaMismatch(format!(
                "model expects {} features, expected {}",
                model.n_features(),
                FEATURE_COUNT
            )));
        }
        Ok(Self {
            name: model.name().to_string(),
            schema: FeatureSchema::canonical(),
            model: Box::new(model),
            source: None,
            loaded_at: Utc::now(),
        })
    }

    /// Parse and validate an artifact from a JSON string
    pub fn from_json_str(json: &str, source: &Path) -> Result<Self, ModelLoadError> {
        let artifact: ModelArtifact =
            serde_json::from_str(json).map_err(|e| ModelLoadError::Corrupt {
                path: source.to_path_buf(),
                source: e,
            })?;
        Self::from_artifact(artifact, Some(source.to_path_buf()))
    }

    /// Predict the log price for one feature vector
    pub fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        let row = features.to_array();
        if let Some(index) = row.iter().position(|v| !v.is_finite()) {
            return Err(PredictionError::NonFiniteFeature {
                index,
                name: FEATURE_NAMES[index].to_string(),
            });
        }

        let output = self.model.predict(&row)?;
        debug!(model = %self.name, output, "Model inference complete");

        if !output.is_finite() {
            return Err(PredictionError::NonFiniteOutput(output));
        }
        Ok(output)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Model family (`linear`, `random_forest`, ...)
    pub fn model_type(&self) -> &str {
        self.model.name()
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Artifact path, if loaded from disk
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

/// Load and validate a model artifact from `path`
pub fn load_model(path: impl AsRef<Path>) -> Result<LoadedModel, ModelLoadError> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ModelLoadError::NotFound(path.to_path_buf())
        } else {
            ModelLoadError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let model = LoadedModel::from_json_str(&content, path)?;
    info!(
        "✓ Loaded model '{}' ({}) from {}",
        model.name(),
        model.model_type(),
        path.display()
    );
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::linear::LinearRegressor;

    fn features() -> FeatureVector {
        FeatureVector {
            year: 2020,
            town: 1,
            flat_type: 3,
            floor_area_sqm: 90.0,
            flat_model: 2,
            storey_start_log: 4f64.ln(),
            storey_end_log: 6f64.ln(),
            remaining_lease_years: 70,
            remaining_lease_months: 3,
            lease_commence_year: 1990,
            flat_age: 34,
        }
    }

    #[test]
    fn test_from_model_requires_eleven_features() {
        let err = LoadedModel::from_model(LinearRegressor::new(0.0, vec![1.0; 3])).unwrap_err();
        assert!(matches!(err, ModelLoadError::SchemaMismatch(_)));
    }

    #[test]
    fn test_predict_passes_row_in_order() {
        let mut coefficients = vec![0.0; FEATURE_COUNT];
        coefficients[3] = 0.01; // floor area
        coefficients[10] = -0.001; // flat age
        let model =
            LoadedModel::from_model(LinearRegressor::new(12.0, coefficients)).unwrap();

        let y = model.predict(&features()).unwrap();
        assert!((y - (12.0 + 0.9 - 0.034)).abs() < 1e-12);
        assert_eq!(model.model_type(), "linear");
        assert!(model.source().is_none());
    }

    #[test]
    fn test_predict_rejects_non_finite_feature() {
        let model = LoadedModel::from_model(LinearRegressor::new(0.0, vec![0.0; 11])).unwrap();
        let mut fv = features();
        fv.storey_start_log = f64::NEG_INFINITY;

        let err = model.predict(&fv).unwrap_err();
        assert_eq!(
            err,
            PredictionError::NonFiniteFeature {
                index: 5,
                name: "storey_start_log".to_string()
            }
        );
    }

    #[test]
    fn test_predict_rejects_non_finite_output() {
        let mut coefficients = vec![0.0; FEATURE_COUNT];
        coefficients[0] = f64::MAX;
        let model = LoadedModel::from_model(LinearRegressor::new(0.0, coefficients)).unwrap();

        let err = model.predict(&features()).unwrap_err();
        assert!(matches!(err, PredictionError::NonFiniteOutput(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_model("/definitely/not/here/model.json").unwrap_err();
        assert!(matches!(err, ModelLoadError::NotFound(_)));
    }

    #[test]
    fn test_from_json_str_corrupt() {
        let err = LoadedModel::from_json_str("{ not json", Path::new("broken.json")).unwrap_err();
        assert!(matches!(err, ModelLoadError::Corrupt { .. }));
        assert!(err.to_string().contains("broken.json"));
    }
}
