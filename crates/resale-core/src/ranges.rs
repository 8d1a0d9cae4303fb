//! Expected input ranges
//!
//! The bounds of the data the model was trained on, as advertised to users.
//! Values outside them are not malformed, but the prediction is an
//! extrapolation. Callers decide whether an out-of-range value is a warning
//! or an error.

use crate::error::ValidationError;
use crate::types::ParsedInput;

/// Inclusive bounds for one numeric field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpectedRange {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
}

impl ExpectedRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Advertised bounds, in input order
pub const EXPECTED_RANGES: &[ExpectedRange] = &[
    ExpectedRange { field: "year", min: 1990.0, max: 2024.0 },
    ExpectedRange { field: "floor_area_sqm", min: 31.0, max: 280.0 },
    ExpectedRange { field: "storey_start", min: 1.0, max: f64::INFINITY },
    ExpectedRange { field: "storey_end", min: 1.0, max: f64::INFINITY },
    ExpectedRange { field: "remaining_lease_years", min: 42.0, max: 97.0 },
    ExpectedRange { field: "remaining_lease_months", min: 0.0, max: 11.0 },
    ExpectedRange { field: "lease_commence_year", min: 1966.0, max: 2022.0 },
];

fn field_value(parsed: &ParsedInput, field: &str) -> Option<f64> {
    let value = match field {
        "year" => parsed.year as f64,
        "floor_area_sqm" => parsed.floor_area_sqm,
        "storey_start" => parsed.storey_start,
        "storey_end" => parsed.storey_end,
        "remaining_lease_years" => parsed.remaining_lease_years as f64,
        "remaining_lease_months" => parsed.remaining_lease_months as f64,
        "lease_commence_year" => parsed.lease_commence_year as f64,
        _ => return None,
    };
    Some(value)
}

/// Every field of `parsed` that falls outside its expected range
///
/// Returns `OutOfRange` errors in input order; an empty vector means all
/// fields are within bounds.
pub fn check_ranges(parsed: &ParsedInput) -> Vec<ValidationError> {
    EXPECTED_RANGES
        .iter()
        .filter_map(|range| {
            let value = field_value(parsed, range.field)?;
            if range.contains(value) {
                None
            } else {
                Some(ValidationError::OutOfRange {
                    field: range.field,
                    value,
                    min: range.min,
                    max: range.max,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed() -> ParsedInput {
        ParsedInput {
            year: 2020,
            town_code: 1,
            flat_type_code: 3,
            floor_area_sqm: 90.0,
            flat_model_code: 2,
            storey_start: 4.0,
            storey_end: 6.0,
            remaining_lease_years: 70,
            remaining_lease_months: 3,
            lease_commence_year: 1990,
        }
    }

    #[test]
    fn test_in_range_input_has_no_findings() {
        assert!(check_ranges(&parsed()).is_empty());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let mut input = parsed();
        input.floor_area_sqm = 31.0;
        input.remaining_lease_months = 11;
        input.year = 2024;
        assert!(check_ranges(&input).is_empty());
    }

    #[test]
    fn test_out_of_range_fields_reported_in_order() {
        let mut input = parsed();
        input.lease_commence_year = 2030;
        input.floor_area_sqm = 500.0;

        let findings = check_ranges(&input);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].field(), "floor_area_sqm");
        assert_eq!(findings[1].field(), "lease_commence_year");
    }

    #[test]
    fn test_fractional_storey_below_one() {
        let mut input = parsed();
        input.storey_start = 0.5;
        let findings = check_ranges(&input);
        assert_eq!(
            findings,
            vec![ValidationError::OutOfRange {
                field: "storey_start",
                value: 0.5,
                min: 1.0,
                max: f64::INFINITY,
            }]
        );
    }
}
