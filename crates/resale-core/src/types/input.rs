//! Raw and parsed prediction input

use super::value::InputValue;
use crate::encoding::Category;
use serde::{Deserialize, Serialize};

/// One resale transaction as supplied by the caller, before any casting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawInput {
    /// Year of sale
    pub year: InputValue,

    pub town: String,

    pub flat_type: String,

    pub floor_area_sqm: InputValue,

    pub flat_model: String,

    /// Lowest floor of the storey range
    pub storey_start: InputValue,

    /// Highest floor of the storey range
    pub storey_end: InputValue,

    #[serde(alias = "remaining_years")]
    pub remaining_lease_years: InputValue,

    #[serde(alias = "remaining_months")]
    pub remaining_lease_months: InputValue,

    pub lease_commence_year: InputValue,
}

impl RawInput {
    /// Categorical fields with their raw values, in feature-vector order
    pub fn categorical_fields(&self) -> [(Category, &str); 3] {
        [
            (Category::Town, self.town.as_str()),
            (Category::FlatType, self.flat_type.as_str()),
            (Category::FlatModel, self.flat_model.as_str()),
        ]
    }
}

/// Input after casting and categorical encoding, before domain transforms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParsedInput {
    pub year: i32,
    pub town_code: i32,
    pub flat_type_code: i32,
    pub floor_area_sqm: f64,
    pub flat_model_code: i32,
    pub storey_start: f64,
    pub storey_end: f64,
    pub remaining_lease_years: i32,
    pub remaining_lease_months: i32,
    pub lease_commence_year: i32,
}
