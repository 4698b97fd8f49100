//! Form field constraints.
//!
//! Each numeric input carries the same `min` / `max` / `step` attributes a
//! browser number input would, and every input is required. Validation here
//! reproduces those checks so a submit can be refused before the estimator
//! ever sees the record.
//!
//! | Field          | min  | max   | step |
//! |----------------|------|-------|------|
//! | bedrooms       | 1    | 10    | 1    |
//! | bathrooms      | 1    | 8     | 0.5  |
//! | squareFootage  | 500  | 10000 | 1    |
//! | yearBuilt      | 1900 | 2024  | 1    |
//! | lotSize        | 1000 | none  | 1    |
//! | garageSpaces   | 0    | 4     | 1    |
//!
//! The step base is the field's `min` (zero when there is none), so
//! bathrooms accept 1, 1.5, 2, ... but not 1.25.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use thiserror::Error;

use crate::calculations::common::parse_decimal;
use crate::models::{Field, PropertyFeatures, PropertyInput};

/// A single failed form constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The input was left empty.
    #[error("{} is required", .field.label())]
    Missing { field: Field },

    /// The input holds text that is not a number.
    #[error("{} must be a number, got '{value}'", .field.label())]
    NotANumber { field: Field, value: String },

    #[error("{} must be greater than or equal to {min}", .field.label())]
    BelowMinimum { field: Field, min: Decimal },

    #[error("{} must be less than or equal to {max}", .field.label())]
    AboveMaximum { field: Field, max: Decimal },

    /// The value is not `base + n * step` for a whole `n`.
    #[error("{} must be in steps of {step} from {base}", .field.label())]
    StepMismatch {
        field: Field,
        step: Decimal,
        base: Decimal,
    },

    /// Passed every attribute check but does not fit the typed record.
    #[error("{} is too large", .field.label())]
    TooLarge { field: Field },
}

impl ValidationError {
    /// The input that failed.
    pub fn field(&self) -> Field {
        match self {
            Self::Missing { field }
            | Self::NotANumber { field, .. }
            | Self::BelowMinimum { field, .. }
            | Self::AboveMaximum { field, .. }
            | Self::StepMismatch { field, .. }
            | Self::TooLarge { field } => *field,
        }
    }
}

/// `min` / `max` / `step` attributes of one numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericConstraint {
    pub min: Option<Decimal>,
    pub max: Option<Decimal>,
    pub step: Decimal,
}

impl NumericConstraint {
    /// Returns the constraint for a numeric field, or `None` for the
    /// neighborhood text input and the condition select.
    pub fn for_field(field: Field) -> Option<Self> {
        let (min, max, step) = match field {
            Field::Bedrooms => (Some(dec!(1)), Some(dec!(10)), Decimal::ONE),
            Field::Bathrooms => (Some(dec!(1)), Some(dec!(8)), dec!(0.5)),
            Field::SquareFootage => (Some(dec!(500)), Some(dec!(10000)), Decimal::ONE),
            Field::YearBuilt => (Some(dec!(1900)), Some(dec!(2024)), Decimal::ONE),
            Field::LotSize => (Some(dec!(1000)), None, Decimal::ONE),
            Field::GarageSpaces => (Some(dec!(0)), Some(dec!(4)), Decimal::ONE),
            Field::Neighborhood | Field::Condition => return None,
        };
        Some(Self { min, max, step })
    }

    /// Parses `raw` and checks it against the attributes.
    pub fn check(
        &self,
        field: Field,
        raw: &str,
    ) -> Result<Decimal, ValidationError> {
        if raw.trim().is_empty() {
            return Err(ValidationError::Missing { field });
        }
        let value = parse_decimal(raw).ok_or_else(|| ValidationError::NotANumber {
            field,
            value: raw.to_string(),
        })?;

        if let Some(min) = self.min.filter(|min| value < *min) {
            return Err(ValidationError::BelowMinimum { field, min });
        }
        if let Some(max) = self.max.filter(|max| value > *max) {
            return Err(ValidationError::AboveMaximum { field, max });
        }

        let base = self.min.unwrap_or(Decimal::ZERO);
        if !((value - base) % self.step).is_zero() {
            return Err(ValidationError::StepMismatch {
                field,
                step: self.step,
                base,
            });
        }

        Ok(value)
    }
}

/// Validates every field of `input`, collecting all failures in form order.
pub fn validate(input: &PropertyInput) -> Result<PropertyFeatures, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let bedrooms = integral::<u8>(Field::Bedrooms, input, &mut errors);
    let bathrooms = numeric(Field::Bathrooms, input, &mut errors);
    let square_footage = integral::<u32>(Field::SquareFootage, input, &mut errors);
    let year_built = integral::<i32>(Field::YearBuilt, input, &mut errors);
    let lot_size = integral::<u64>(Field::LotSize, input, &mut errors);
    let garage_spaces = integral::<u8>(Field::GarageSpaces, input, &mut errors);

    // A required text input only rejects the empty string.
    if input.neighborhood.is_empty() {
        errors.push(ValidationError::Missing {
            field: Field::Neighborhood,
        });
    }

    match (
        bedrooms,
        bathrooms,
        square_footage,
        year_built,
        lot_size,
        garage_spaces,
    ) {
        (
            Some(bedrooms),
            Some(bathrooms),
            Some(square_footage),
            Some(year_built),
            Some(lot_size),
            Some(garage_spaces),
        ) if errors.is_empty() => Ok(PropertyFeatures {
            bedrooms,
            bathrooms,
            square_footage,
            year_built,
            lot_size,
            garage_spaces,
            neighborhood: input.neighborhood.clone(),
            condition: input.condition,
        }),
        _ => Err(errors),
    }
}

fn numeric(
    field: Field,
    input: &PropertyInput,
    errors: &mut Vec<ValidationError>,
) -> Option<Decimal> {
    let constraint = NumericConstraint::for_field(field)?;
    match constraint.check(field, input.value(field)) {
        Ok(value) => Some(value),
        Err(error) => {
            errors.push(error);
            None
        }
    }
}

fn integral<T: TryFrom<i64>>(
    field: Field,
    input: &PropertyInput,
    errors: &mut Vec<ValidationError>,
) -> Option<T> {
    let value = numeric(field, input, errors)?;
    let converted = value.to_i64().and_then(|v| T::try_from(v).ok());
    if converted.is_none() {
        errors.push(ValidationError::TooLarge { field });
    }
    converted
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::Condition;

    fn sample_input() -> PropertyInput {
        PropertyInput {
            bedrooms: "3".to_string(),
            bathrooms: "2".to_string(),
            square_footage: "2000".to_string(),
            year_built: "1995".to_string(),
            lot_size: "8000".to_string(),
            garage_spaces: "2".to_string(),
            neighborhood: "Suburbs".to_string(),
            condition: Condition::Good,
        }
    }

    #[test]
    fn validate_accepts_typical_property() {
        let features = validate(&sample_input()).unwrap();

        assert_eq!(features.bedrooms, 3);
        assert_eq!(features.bathrooms, dec!(2));
        assert_eq!(features.square_footage, 2000);
        assert_eq!(features.year_built, 1995);
        assert_eq!(features.lot_size, 8000);
        assert_eq!(features.garage_spaces, 2);
        assert_eq!(features.neighborhood, "Suburbs");
        assert_eq!(features.condition, Condition::Good);
    }

    #[test]
    fn validate_blank_form_reports_every_required_field() {
        let errors = validate(&PropertyInput::default()).unwrap_err();

        let fields: Vec<Field> = errors.iter().map(ValidationError::field).collect();
        assert_eq!(
            fields,
            vec![
                Field::Bedrooms,
                Field::Bathrooms,
                Field::SquareFootage,
                Field::YearBuilt,
                Field::LotSize,
                Field::GarageSpaces,
                Field::Neighborhood,
            ]
        );
        assert!(
            errors
                .iter()
                .all(|e| matches!(e, ValidationError::Missing { .. }))
        );
    }

    #[test]
    fn validate_accepts_half_bathrooms() {
        let mut input = sample_input();
        input.bathrooms = "2.5".to_string();

        let features = validate(&input).unwrap();

        assert_eq!(features.bathrooms, dec!(2.5));
    }

    #[test]
    fn validate_rejects_quarter_bathrooms() {
        let mut input = sample_input();
        input.bathrooms = "2.25".to_string();

        let errors = validate(&input).unwrap_err();

        assert_eq!(
            errors,
            vec![ValidationError::StepMismatch {
                field: Field::Bathrooms,
                step: dec!(0.5),
                base: dec!(1),
            }]
        );
    }

    #[test]
    fn validate_rejects_fractional_bedrooms() {
        let mut input = sample_input();
        input.bedrooms = "3.5".to_string();

        let errors = validate(&input).unwrap_err();

        assert_eq!(errors[0].field(), Field::Bedrooms);
        assert!(matches!(errors[0], ValidationError::StepMismatch { .. }));
    }

    #[test]
    fn validate_accepts_whole_number_written_with_decimals() {
        let mut input = sample_input();
        input.bedrooms = "3.0".to_string();

        assert_eq!(validate(&input).unwrap().bedrooms, 3);
    }

    #[test]
    fn validate_enforces_range_limits() {
        let mut input = sample_input();
        input.year_built = "2025".to_string();
        input.garage_spaces = "5".to_string();
        input.square_footage = "499".to_string();

        let errors = validate(&input).unwrap_err();

        assert_eq!(
            errors,
            vec![
                ValidationError::BelowMinimum {
                    field: Field::SquareFootage,
                    min: dec!(500),
                },
                ValidationError::AboveMaximum {
                    field: Field::YearBuilt,
                    max: dec!(2024),
                },
                ValidationError::AboveMaximum {
                    field: Field::GarageSpaces,
                    max: dec!(4),
                },
            ]
        );
    }

    #[test]
    fn validate_accepts_range_boundaries() {
        let mut input = sample_input();
        input.bedrooms = "10".to_string();
        input.bathrooms = "1".to_string();
        input.square_footage = "10000".to_string();
        input.year_built = "1900".to_string();
        input.lot_size = "1000".to_string();
        input.garage_spaces = "0".to_string();

        assert!(validate(&input).is_ok());
    }

    #[test]
    fn validate_reports_non_numeric_text() {
        let mut input = sample_input();
        input.lot_size = "big".to_string();

        let errors = validate(&input).unwrap_err();

        assert_eq!(
            errors,
            vec![ValidationError::NotANumber {
                field: Field::LotSize,
                value: "big".to_string(),
            }]
        );
    }

    #[test]
    fn validate_lot_size_has_no_upper_bound_until_it_overflows() {
        let mut input = sample_input();
        input.lot_size = "2,000,000".to_string();
        assert_eq!(validate(&input).unwrap().lot_size, 2_000_000);

        input.lot_size = "99999999999999999999".to_string();
        let errors = validate(&input).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::TooLarge {
                field: Field::LotSize
            }]
        );
    }

    #[test]
    fn validate_whitespace_neighborhood_counts_as_filled() {
        let mut input = sample_input();
        input.neighborhood = " ".to_string();

        assert!(validate(&input).is_ok());
    }

    #[test]
    fn error_messages_use_field_labels() {
        let error = ValidationError::Missing {
            field: Field::SquareFootage,
        };

        assert_eq!(error.to_string(), "Square Footage is required");
    }
}
