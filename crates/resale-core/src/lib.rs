//! Resale Core - Domain types for HDB resale price prediction
//!
//! This crate provides the pure, model-independent part of the predictor:
//! - Fixed vocabularies and categorical encoders (town, flat type, flat model)
//! - Raw caller input and its parsed, typed form
//! - The 11-field feature vector and its canonical schema
//! - The feature transformer that turns raw input into a feature vector
//! - Expected-range checks advertised to callers
//! - Validation error types

pub mod encoding;
pub mod error;
pub mod ranges;
pub mod transform;
pub mod types;

// Re-export commonly used types
pub use encoding::{encode, encode_by_name, try_encode, Category, UNKNOWN_CODE};
pub use error::{CoreError, ValidationError};
pub use ranges::{check_ranges, ExpectedRange, EXPECTED_RANGES};
pub use transform::{build_feature_vector, parse_input};
pub use types::{
    FeatureVector, InputValue, ParsedInput, RawInput, FEATURE_COUNT, FEATURE_NAMES,
    SCHEMA_VERSION,
};
