//! Feature transformer
//!
//! Turns a [`RawInput`] into the [`FeatureVector`] the model expects:
//! 1. Cast each field to its semantic type (integers for years and lease
//!    terms, floats for area and storeys) and encode the categorical fields.
//! 2. Reject non-positive storey bounds before taking their logarithm.
//! 3. Derive `flat_age = current_year - lease_commence_year`.
//!
//! Fields are checked in input order and the first failure is returned.

use crate::encoding::{encode, Category};
use crate::error::ValidationError;
use crate::types::{FeatureVector, InputValue, ParsedInput, RawInput};

/// Cast and encode raw input without applying domain transforms
pub fn parse_input(raw: &RawInput) -> Result<ParsedInput, ValidationError> {
    let year = parse_int("year", &raw.year)?;
    let town_code = encode(Category::Town, &raw.town);
    let flat_type_code = encode(Category::FlatType, &raw.flat_type);
    let floor_area_sqm = parse_float("floor_area_sqm", &raw.floor_area_sqm)?;
    let flat_model_code = encode(Category::FlatModel, &raw.flat_model);
    let storey_start = parse_float("storey_start", &raw.storey_start)?;
    let storey_end = parse_float("storey_end", &raw.storey_end)?;

    if storey_start <= 0.0 {
        return Err(ValidationError::NonPositiveStorey {
            field: "storey_start",
            value: storey_start,
        });
    }
    if storey_end <= 0.0 {
        return Err(ValidationError::NonPositiveStorey {
            field: "storey_end",
            value: storey_end,
        });
    }

    let remaining_lease_years = parse_int("remaining_lease_years", &raw.remaining_lease_years)?;
    let remaining_lease_months = parse_int("remaining_lease_months", &raw.remaining_lease_months)?;
    let lease_commence_year = parse_int("lease_commence_year", &raw.lease_commence_year)?;

    Ok(ParsedInput {
        year,
        town_code,
        flat_type_code,
        floor_area_sqm,
        flat_model_code,
        storey_start,
        storey_end,
        remaining_lease_years,
        remaining_lease_months,
        lease_commence_year,
    })
}

/// Build the model feature vector for `raw`, computing flat age against `current_year`
pub fn build_feature_vector(
    raw: &RawInput,
    current_year: i32,
) -> Result<FeatureVector, ValidationError> {
    let parsed = parse_input(raw)?;
    FeatureVector::from_parsed(&parsed, current_year)
}

impl FeatureVector {
    /// Apply domain transforms to already validated input
    ///
    /// Storey bounds must be positive; [`parse_input`] guarantees this.
    pub fn from_parsed(
        parsed: &ParsedInput,
        current_year: i32,
    ) -> Result<Self, ValidationError> {
        let flat_age = current_year
            .checked_sub(parsed.lease_commence_year)
            .ok_or(ValidationError::FlatAgeOverflow {
                lease_commence_year: parsed.lease_commence_year,
                current_year,
            })?;

        let features = Self {
            year: parsed.year,
            town: parsed.town_code,
            flat_type: parsed.flat_type_code,
            floor_area_sqm: parsed.floor_area_sqm,
            flat_model: parsed.flat_model_code,
            storey_start_log: parsed.storey_start.ln(),
            storey_end_log: parsed.storey_end.ln(),
            remaining_lease_years: parsed.remaining_lease_years,
            remaining_lease_months: parsed.remaining_lease_months,
            lease_commence_year: parsed.lease_commence_year,
            flat_age,
        };
        log::debug!("Transformed features: {:?}", features.to_array());
        Ok(features)
    }
}

fn parse_int(field: &'static str, value: &InputValue) -> Result<i32, ValidationError> {
    match value {
        InputValue::Number(n) => {
            if !n.is_finite() {
                return Err(ValidationError::NotFinite {
                    field,
                    value: value.to_string(),
                });
            }
            // Form number inputs arrive as floats; truncate like an integer cast.
            let truncated = n.trunc();
            if truncated < i32::MIN as f64 || truncated > i32::MAX as f64 {
                return Err(not_numeric(field, "an integer", value));
            }
            Ok(truncated as i32)
        }
        InputValue::Text(s) => s
            .trim()
            .parse::<i32>()
            .map_err(|_| not_numeric(field, "an integer", value)),
    }
}

fn parse_float(field: &'static str, value: &InputValue) -> Result<f64, ValidationError> {
    let parsed = match value {
        InputValue::Number(n) => *n,
        InputValue::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| not_numeric(field, "a number", value))?,
    };

    if !parsed.is_finite() {
        return Err(ValidationError::NotFinite {
            field,
            value: value.to_string(),
        });
    }
    Ok(parsed)
}

fn not_numeric(field: &'static str, expected: &'static str, value: &InputValue) -> ValidationError {
    ValidationError::NotNumeric {
        field,
        expected,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawInput {
        RawInput {
            year: "2020".into(),
            town: "BEDOK".to_string(),
            flat_type: "4 ROOM".to_string(),
            floor_area_sqm: 90.0.into(),
            flat_model: "Model A".to_string(),
            storey_start: 4.0.into(),
            storey_end: 6.0.into(),
            remaining_lease_years: 70.into(),
            remaining_lease_months: 3.into(),
            lease_commence_year: "1990".into(),
        }
    }

    #[test]
    fn test_parse_int_accepts_padded_string() {
        assert_eq!(parse_int("year", &" 2020 ".into()), Ok(2020));
    }

    #[test]
    fn test_parse_int_truncates_numbers() {
        assert_eq!(parse_int("remaining_lease_years", &70.9.into()), Ok(70));
        assert_eq!(parse_int("remaining_lease_years", &(-0.5).into()), Ok(0));
    }

    #[test]
    fn test_parse_int_rejects_decimal_string() {
        let err = parse_int("year", &"2020.5".into()).unwrap_err();
        assert_eq!(err.field(), "year");
        assert!(matches!(err, ValidationError::NotNumeric { .. }));
    }

    #[test]
    fn test_parse_float_rejects_nan_text() {
        let err = parse_float("floor_area_sqm", &"NaN".into()).unwrap_err();
        assert!(matches!(err, ValidationError::NotFinite { field: "floor_area_sqm", .. }));
    }

    #[test]
    fn test_parse_float_rejects_infinite_number() {
        let err = parse_float("storey_end", &f64::INFINITY.into()).unwrap_err();
        assert!(matches!(err, ValidationError::NotFinite { field: "storey_end", .. }));
    }

    #[test]
    fn test_parse_input_encodes_categories() {
        let parsed = parse_input(&raw()).unwrap();
        assert_eq!(parsed.town_code, 1);
        assert_eq!(parsed.flat_type_code, 3);
        assert_eq!(parsed.flat_model_code, 2);
        assert_eq!(parsed.storey_start, 4.0);
    }

    #[test]
    fn test_first_failing_field_is_reported() {
        let mut input = raw();
        input.floor_area_sqm = "big".into();
        input.lease_commence_year = "long ago".into();
        let err = parse_input(&input).unwrap_err();
        assert_eq!(err.field(), "floor_area_sqm");
    }

    #[test]
    fn test_storey_checked_before_lease_fields() {
        let mut input = raw();
        input.storey_end = 0.0.into();
        input.remaining_lease_years = "n/a".into();
        let err = parse_input(&input).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NonPositiveStorey {
                field: "storey_end",
                value: 0.0
            }
        );
    }

    #[test]
    fn test_build_feature_vector_flat_age() {
        let fv = build_feature_vector(&raw(), 2024).unwrap();
        assert_eq!(fv.flat_age, 34);
        assert_eq!(fv.lease_commence_year, 1990);
    }

    #[test]
    fn test_flat_age_overflow_is_validation_error() {
        let mut input = raw();
        input.lease_commence_year = "-2147483648".into();
        let err = build_feature_vector(&input, 2024).unwrap_err();
        assert_eq!(err.field(), "lease_commence_year");
        assert_eq!(
            err,
            ValidationError::FlatAgeOverflow {
                lease_commence_year: i32::MIN,
                current_year: 2024
            }
        );
    }

    #[test]
    fn test_extreme_lease_year_within_i32_still_ages() {
        let mut input = raw();
        input.lease_commence_year = "-2147483648".into();
        let fv = build_feature_vector(&input, -1).unwrap();
        assert_eq!(fv.flat_age, i32::MAX);
    }
}
