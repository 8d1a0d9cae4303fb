//! Model feature vector and its canonical schema
//!
//! The model sees a bare array of 11 numbers. It cannot tell a reordered or
//! truncated vector from a valid one and will happily return a price for
//! either, so the order is fixed here in one place and shipped with every
//! model artifact as [`FEATURE_NAMES`] + [`SCHEMA_VERSION`]. Loaders compare
//! the artifact's schema against these constants before accepting a model.

use serde::{Deserialize, Serialize};

/// Number of features the model consumes
pub const FEATURE_COUNT: usize = 11;

/// Version of the feature layout below
pub const SCHEMA_VERSION: &str = "1";

/// Feature names in model input order
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "year",
    "town",
    "flat_type",
    "floor_area_sqm",
    "flat_model",
    "storey_start_log",
    "storey_end_log",
    "remaining_lease_years",
    "remaining_lease_months",
    "lease_commence_year",
    "flat_age",
];

/// Encoded and transformed features for one transaction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub year: i32,
    pub town: i32,
    pub flat_type: i32,
    pub floor_area_sqm: f64,
    pub flat_model: i32,
    /// Natural log of the lowest storey
    pub storey_start_log: f64,
    /// Natural log of the highest storey
    pub storey_end_log: f64,
    pub remaining_lease_years: i32,
    pub remaining_lease_months: i32,
    pub lease_commence_year: i32,
    /// Reference year minus lease commencement year; may be negative
    pub flat_age: i32,
}

impl FeatureVector {
    /// Values in model input order, matching [`FEATURE_NAMES`]
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.year as f64,
            self.town as f64,
            self.flat_type as f64,
            self.floor_area_sqm,
            self.flat_model as f64,
            self.storey_start_log,
            self.storey_end_log,
            self.remaining_lease_years as f64,
            self.remaining_lease_months as f64,
            self.lease_commence_year as f64,
            self.flat_age as f64,
        ]
    }

    /// `(name, value)` pairs in model input order
    pub fn named(&self) -> Vec<(&'static str, f64)> {
        FEATURE_NAMES.iter().copied().zip(self.to_array()).collect()
    }
}
