//! Categorical encoders
//!
//! Maps the three categorical input fields to the dense integer codes the
//! regression model was trained on.
//!
//! # Unknown values
//!
//! [`encode`] never fails: a value outside the vocabulary maps to
//! [`UNKNOWN_CODE`] (`-1`) and is passed on to the model as-is. Whether the
//! model treats `-1` as a meaningful "other" bucket depends on how it was
//! trained, so callers that cannot confirm that should use [`try_encode`] and
//! reject unknown values themselves (see the predictor's strict mode).
//!
//! Matching is exact and case-sensitive.

pub mod vocabulary;

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use vocabulary::{FLAT_MODELS, FLAT_TYPES, TOWNS};

/// Code returned for values outside a vocabulary
pub const UNKNOWN_CODE: i32 = -1;

/// Categorical input field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Town,
    FlatType,
    FlatModel,
}

impl Category {
    /// All categories, in feature-vector order
    pub const ALL: [Category; 3] = [Category::Town, Category::FlatType, Category::FlatModel];

    /// The fixed vocabulary, indexed by code
    pub fn vocabulary(&self) -> &'static [&'static str] {
        match self {
            Category::Town => &TOWNS,
            Category::FlatType => &FLAT_TYPES,
            Category::FlatModel => &FLAT_MODELS,
        }
    }

    /// Input field name carrying this category
    pub fn field_name(&self) -> &'static str {
        match self {
            Category::Town => "town",
            Category::FlatType => "flat_type",
            Category::FlatModel => "flat_model",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "town" => Ok(Category::Town),
            "flat_type" => Ok(Category::FlatType),
            "flat_model" => Ok(Category::FlatModel),
            other => Err(CoreError::UnknownCategoryName(other.to_string())),
        }
    }
}

/// Encode a categorical value, returning `None` when it is not in the vocabulary
pub fn try_encode(category: Category, value: &str) -> Option<i32> {
    category
        .vocabulary()
        .iter()
        .position(|candidate| *candidate == value)
        .map(|idx| idx as i32)
}

/// Encode a categorical value, falling back to [`UNKNOWN_CODE`]
pub fn encode(category: Category, value: &str) -> i32 {
    match try_encode(category, value) {
        Some(code) => code,
        None => {
            log::debug!(
                "{} '{}' is not in the vocabulary, encoding as {}",
                category,
                value,
                UNKNOWN_CODE
            );
            UNKNOWN_CODE
        }
    }
}

/// Encode by category name (`town`, `flat_type`, `flat_model`)
///
/// Only an unrecognised *category name* is an error; unknown values still
/// encode to [`UNKNOWN_CODE`].
pub fn encode_by_name(category_name: &str, value: &str) -> Result<i32, CoreError> {
    let category = category_name.parse::<Category>()?;
    Ok(encode(category, value))
}
