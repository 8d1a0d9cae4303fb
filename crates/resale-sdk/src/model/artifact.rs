//! Model artifact format
//!
//! ```json
//! {
//!   "format_version": 1,
//!   "name": "resale-flat-prices",
//!   "target": "log_price",
//!   "schema": { "version": "1", "features": ["year", "town", "..."] },
//!   "model": { "type": "linear", "intercept": 10.9, "coefficients": [0.01, "..."] }
//! }
//! ```
//!
//! The schema travels with the model so a layout mismatch is caught when the
//! artifact is loaded instead of producing silently wrong prices.

use super::error::ModelLoadError;
use super::linear::LinearRegressor;
use super::tree::TreeEnsemble;
use resale_core::{FEATURE_NAMES, SCHEMA_VERSION};
use serde::{Deserialize, Serialize};

/// Only artifact format understood by this crate
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// The only supported regression target
pub const LOG_PRICE_TARGET: &str = "log_price";

/// Feature layout the model was trained on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSchema {
    pub version: String,
    pub features: Vec<String>,
}

impl FeatureSchema {
    /// The layout produced by the feature transformer
    pub fn canonical() -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            features: FEATURE_NAMES.iter().map(|name| name.to_string()).collect(),
        }
    }

    /// Fail unless this schema matches the transformer's layout exactly
    pub fn ensure_canonical(&self) -> Result<(), ModelLoadError> {
        if self.version != SCHEMA_VERSION {
            return Err(ModelLoadError::SchemaMismatch(format!(
                "artifact schema version '{}', expected '{}'",
                self.version, SCHEMA_VERSION
            )));
        }
        if self.features.len() != FEATURE_NAMES.len() {
            return Err(ModelLoadError::SchemaMismatch(format!(
                "artifact lists {} features, expected {}",
                self.features.len(),
                FEATURE_NAMES.len()
            )));
        }
        for (idx, (actual, expected)) in self.features.iter().zip(FEATURE_NAMES).enumerate() {
            if actual != expected {
                return Err(ModelLoadError::SchemaMismatch(format!(
                    "feature {} is '{}', expected '{}'",
                    idx, actual, expected
                )));
            }
        }
        Ok(())
    }
}

/// Serialized regressor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModelSpec {
    Linear(LinearRegressor),
    TreeEnsemble(TreeEnsemble),
}

fn default_target() -> String {
    LOG_PRICE_TARGET.to_string()
}

/// Top-level artifact document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default = "default_target")]
    pub target: String,

    pub schema: FeatureSchema,

    pub model: ModelSpec,
}

impl ModelArtifact {
    /// Wrap a regressor with the canonical schema
    pub fn new(model: ModelSpec) -> Self {
        Self {
            format_version: ARTIFACT_FORMAT_VERSION,
            name: None,
            target: default_target(),
            schema: FeatureSchema::canonical(),
            model,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Check the header fields and schema, leaving model validation to the loader
    pub fn validate_header(&self) -> Result<(), ModelLoadError> {
        if self.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(ModelLoadError::InvalidModel(format!(
                "unsupported artifact format version {}, expected {}",
                self.format_version, ARTIFACT_FORMAT_VERSION
            )));
        }
        if self.target != LOG_PRICE_TARGET {
            return Err(ModelLoadError::InvalidModel(format!(
                "unsupported target '{}', expected '{}'",
                self.target, LOG_PRICE_TARGET
            )));
        }
        self.schema.ensure_canonical()
    }
}
