//! Error types for Resale Core

use crate::encoding::Category;
use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Unknown category name: {0}")]
    UnknownCategoryName(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;

/// Malformed or out-of-domain raw input.
///
/// Every variant names the offending field so callers can point the user at it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Value could not be cast to the field's numeric type
    #[error("Field '{field}' must be {expected}, got '{value}'")]
    NotNumeric {
        field: &'static str,
        expected: &'static str,
        value: String,
    },

    /// Value parsed but is NaN or infinite
    #[error("Field '{field}' must be a finite number, got '{value}'")]
    NotFinite { field: &'static str, value: String },

    /// Storey bound is zero or negative, so its logarithm is undefined
    #[error("non-positive storey bound: {field} = {value}")]
    NonPositiveStorey { field: &'static str, value: f64 },

    /// Categorical value outside its vocabulary (strict mode only)
    #[error("Unknown {category} '{value}'")]
    UnknownCategory { category: Category, value: String },

    /// Lease start so far from the reference year that flat age overflows
    #[error("Field 'lease_commence_year' = {lease_commence_year} cannot be aged against year {current_year}")]
    FlatAgeOverflow {
        lease_commence_year: i32,
        current_year: i32,
    },

    /// Value outside the advertised bounds (only when ranges are enforced)
    #[error("Field '{field}' = {value} is outside the expected range {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl ValidationError {
    /// Name of the input field this error refers to
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NotNumeric { field, .. }
            | ValidationError::NotFinite { field, .. }
            | ValidationError::NonPositiveStorey { field, .. }
            | ValidationError::OutOfRange { field, .. } => field,
            ValidationError::UnknownCategory { category, .. } => category.field_name(),
            ValidationError::FlatAgeOverflow { .. } => "lease_commence_year",
        }
    }
}
