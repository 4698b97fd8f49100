//! Fixed-weight price estimator.
//!
//! The estimate is a linear combination of the property's attributes,
//! scaled by a multiplier for its condition and rounded to whole dollars:
//!
//! | Term           | Default weight                         |
//! |----------------|----------------------------------------|
//! | base           | $150,000                               |
//! | bedrooms       | $25,000 each                           |
//! | bathrooms      | $15,000 per whole bathroom             |
//! | square footage | $120 per sq ft                         |
//! | age            | −$500 per year before 2024             |
//! | lot size       | $5 per sq ft                           |
//! | garage spaces  | $8,000 each                            |
//!
//! | Condition  | Multiplier |
//! |------------|------------|
//! | excellent  | 1.2        |
//! | good       | 1.0        |
//! | fair       | 0.8        |
//! | poor       | 0.8        |
//!
//! A half bathroom passes validation but adds nothing to the estimate.
//! Rounding sends exact halves toward positive infinity. All arithmetic is
//! exact decimal arithmetic and checked for overflow.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use price_core::{Condition, EstimatedPrice, PropertyFeatures};
//! use price_core::calculations::Estimator;
//!
//! let features = PropertyFeatures {
//!     bedrooms: 3,
//!     bathrooms: dec!(2),
//!     square_footage: 2000,
//!     year_built: 1995,
//!     lot_size: 8000,
//!     garage_spaces: 2,
//!     neighborhood: "Suburbs".to_string(),
//!     condition: Condition::Good,
//! };
//!
//! let price = Estimator::default().estimate(&features).unwrap();
//!
//! assert_eq!(price, EstimatedPrice(536_500));
//! ```

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::common::{parse_leading_int, round_half_up};
use crate::models::{Condition, EstimatedPrice, PropertyFeatures, PropertyInput};

/// Errors that can occur while configuring or running the estimator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EstimatorError {
    /// The base price must be non-negative.
    #[error("base price must be non-negative, got {0}")]
    NegativeBasePrice(Decimal),

    /// A condition multiplier must be non-negative.
    #[error("{condition} multiplier must be non-negative, got {value}")]
    NegativeMultiplier { condition: Condition, value: Decimal },

    /// An intermediate value left the representable range.
    #[error("estimate overflowed while computing the {0} term")]
    Overflow(&'static str),
}

/// Weights and multipliers of the estimate formula.
///
/// [`EstimatorConfig::default`] is the formula the form has always used.
/// Every field may be overridden from the `[estimator]` table of the app
/// config; missing keys keep their default.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use price_core::calculations::EstimatorConfig;
///
/// let config = EstimatorConfig {
///     poor_multiplier: dec!(0.7),
///     ..EstimatorConfig::default()
/// };
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Starting value before any attribute is counted.
    pub base_price: Decimal,

    pub per_bedroom: Decimal,

    /// Applied to the bathroom count including halves.
    pub per_bathroom: Decimal,

    pub per_square_foot: Decimal,

    /// Year the property age is measured from.
    pub reference_year: i32,

    /// Added once per year of age. Negative, so older homes are worth less.
    pub per_year_of_age: Decimal,

    pub per_lot_square_foot: Decimal,

    pub per_garage_space: Decimal,

    pub poor_multiplier: Decimal,

    /// Same as poor unless overridden.
    pub fair_multiplier: Decimal,

    pub good_multiplier: Decimal,

    pub excellent_multiplier: Decimal,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            base_price: dec!(150000),
            per_bedroom: dec!(25000),
            per_bathroom: dec!(15000),
            per_square_foot: dec!(120),
            reference_year: 2024,
            per_year_of_age: dec!(-500),
            per_lot_square_foot: dec!(5),
            per_garage_space: dec!(8000),
            poor_multiplier: dec!(0.8),
            fair_multiplier: dec!(0.8),
            good_multiplier: dec!(1.0),
            excellent_multiplier: dec!(1.2),
        }
    }
}

impl EstimatorConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`EstimatorError`] if:
    /// - `base_price` is negative
    /// - any condition multiplier is negative
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use price_core::Condition;
    /// use price_core::calculations::{EstimatorConfig, EstimatorError};
    ///
    /// let config = EstimatorConfig {
    ///     excellent_multiplier: dec!(-1.2),
    ///     ..EstimatorConfig::default()
    /// };
    ///
    /// assert_eq!(
    ///     config.validate(),
    ///     Err(EstimatorError::NegativeMultiplier {
    ///         condition: Condition::Excellent,
    ///         value: dec!(-1.2),
    ///     })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), EstimatorError> {
        if self.base_price < Decimal::ZERO {
            return Err(EstimatorError::NegativeBasePrice(self.base_price));
        }
        for &condition in Condition::all() {
            let value = self.multiplier(condition);
            if value < Decimal::ZERO {
                return Err(EstimatorError::NegativeMultiplier { condition, value });
            }
        }
        Ok(())
    }

    fn multiplier(
        &self,
        condition: Condition,
    ) -> Decimal {
        match condition {
            Condition::Poor => self.poor_multiplier,
            Condition::Fair => self.fair_multiplier,
            Condition::Good => self.good_multiplier,
            Condition::Excellent => self.excellent_multiplier,
        }
    }
}

/// Numeric attributes in the shape the formula consumes.
///
/// Both the validated and the unchecked paths reduce to this.
struct Terms {
    bedrooms: Decimal,
    bathrooms: Decimal,
    square_footage: Decimal,
    year_built: Decimal,
    lot_size: Decimal,
    garage_spaces: Decimal,
    condition: Condition,
}

impl From<&PropertyFeatures> for Terms {
    fn from(features: &PropertyFeatures) -> Self {
        Self {
            bedrooms: Decimal::from(features.bedrooms),
            bathrooms: features.bathrooms.trunc(),
            square_footage: Decimal::from(features.square_footage),
            year_built: Decimal::from(features.year_built),
            lot_size: Decimal::from(features.lot_size),
            garage_spaces: Decimal::from(features.garage_spaces),
            condition: features.condition,
        }
    }
}

/// Price estimator over a fixed, validated configuration.
///
/// Estimation is pure: the estimator holds no state besides its
/// configuration, so identical inputs always give identical prices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Estimator {
    config: EstimatorConfig,
}

impl Estimator {
    /// Creates an estimator, rejecting an invalid configuration.
    pub fn new(config: EstimatorConfig) -> Result<Self, EstimatorError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Multiplier applied to the subtotal for `condition`.
    pub fn condition_multiplier(
        &self,
        condition: Condition,
    ) -> Decimal {
        self.config.multiplier(condition)
    }

    /// Sum of the base price and every weighted attribute, before the
    /// condition multiplier is applied.
    ///
    /// # Errors
    ///
    /// Returns [`EstimatorError::Overflow`] if a term leaves the decimal range.
    pub fn subtotal(
        &self,
        features: &PropertyFeatures,
    ) -> Result<Decimal, EstimatorError> {
        self.subtotal_of(&Terms::from(features))
    }

    /// Estimates the price of a validated property.
    ///
    /// # Errors
    ///
    /// Returns [`EstimatorError::Overflow`] when a configured weight pushes an
    /// intermediate value, or the final price, out of range.
    pub fn estimate(
        &self,
        features: &PropertyFeatures,
    ) -> Result<EstimatedPrice, EstimatorError> {
        self.estimate_terms(&Terms::from(features))
    }

    /// Estimates straight from the entered text, skipping the form
    /// constraints.
    ///
    /// Each numeric field contributes the integer it starts with: `"3.7"`
    /// counts as 3 and `"8,000"` as 8. A field with no leading digits makes
    /// the whole estimate `None`, as does an overflow. Out-of-range values
    /// are used as entered.
    pub fn estimate_unchecked(
        &self,
        input: &PropertyInput,
    ) -> Option<EstimatedPrice> {
        let terms = Terms {
            bedrooms: parse_leading_int(&input.bedrooms)?,
            bathrooms: parse_leading_int(&input.bathrooms)?,
            square_footage: parse_leading_int(&input.square_footage)?,
            year_built: parse_leading_int(&input.year_built)?,
            lot_size: parse_leading_int(&input.lot_size)?,
            garage_spaces: parse_leading_int(&input.garage_spaces)?,
            condition: input.condition,
        };
        self.estimate_terms(&terms)
            .inspect_err(|error| debug!(%error, "unchecked estimate has no value"))
            .ok()
    }

    fn estimate_terms(
        &self,
        terms: &Terms,
    ) -> Result<EstimatedPrice, EstimatorError> {
        let subtotal = self.subtotal_of(terms)?;
        let multiplier = self.condition_multiplier(terms.condition);
        let total = subtotal
            .checked_mul(multiplier)
            .ok_or(EstimatorError::Overflow("condition"))?;

        let price = whole_dollars(total)?;
        debug!(%subtotal, %multiplier, %price, "estimated price");

        if price.dollars() < 0 {
            warn!(%price, "estimate is negative; inputs are outside typical ranges");
        }
        Ok(price)
    }

    fn subtotal_of(
        &self,
        terms: &Terms,
    ) -> Result<Decimal, EstimatorError> {
        let c = &self.config;

        let age = Decimal::from(c.reference_year)
            .checked_sub(terms.year_built)
            .ok_or(EstimatorError::Overflow("age"))?;

        [
            ("bedrooms", terms.bedrooms, c.per_bedroom),
            ("bathrooms", terms.bathrooms, c.per_bathroom),
            ("square footage", terms.square_footage, c.per_square_foot),
            ("age", age, c.per_year_of_age),
            ("lot size", terms.lot_size, c.per_lot_square_foot),
            ("garage", terms.garage_spaces, c.per_garage_space),
        ]
        .into_iter()
        .try_fold(c.base_price, |sum, (name, value, weight)| {
            value
                .checked_mul(weight)
                .and_then(|term| sum.checked_add(term))
                .ok_or(EstimatorError::Overflow(name))
        })
    }
}

/// Rounds `total` to an [`EstimatedPrice`].
fn whole_dollars(total: Decimal) -> Result<EstimatedPrice, EstimatorError> {
    // Totals outside i64 cannot be shown as a price.
    if total.to_i64().is_none() {
        return Err(EstimatorError::Overflow("total"));
    }
    round_half_up(total)
        .to_i64()
        .map(EstimatedPrice)
        .ok_or(EstimatorError::Overflow("total"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_features(condition: Condition) -> PropertyFeatures {
        PropertyFeatures {
            bedrooms: 3,
            bathrooms: dec!(2),
            square_footage: 2000,
            year_built: 1995,
            lot_size: 8000,
            garage_spaces: 2,
            neighborhood: "Suburbs".to_string(),
            condition,
        }
    }

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

    // =========================================================================
    // estimate tests
    // =========================================================================

    #[test]
    fn estimate_reference_property_in_good_condition() {
        // 150000 + 75000 + 30000 + 240000 - 14500 + 40000 + 16000
        let price = Estimator::default()
            .estimate(&sample_features(Condition::Good))
            .unwrap();

        assert_eq!(price, EstimatedPrice(536_500));
    }

    #[test]
    fn estimate_excellent_scales_subtotal_by_one_point_two() {
        let price = Estimator::default()
            .estimate(&sample_features(Condition::Excellent))
            .unwrap();

        assert_eq!(price, EstimatedPrice(643_800));
    }

    #[test]
    fn estimate_fair_and_poor_share_a_multiplier() {
        let estimator = Estimator::default();

        let fair = estimator
            .estimate(&sample_features(Condition::Fair))
            .unwrap();
        let poor = estimator
            .estimate(&sample_features(Condition::Poor))
            .unwrap();

        assert_eq!(fair, EstimatedPrice(429_200));
        assert_eq!(poor, fair);
    }

    #[test]
    fn estimate_counts_whole_bathrooms_only() {
        let mut features = sample_features(Condition::Good);
        features.bathrooms = dec!(2.5);

        let price = Estimator::default().estimate(&features).unwrap();

        assert_eq!(price, EstimatedPrice(536_500));
    }

    #[test]
    fn estimate_is_deterministic() {
        let estimator = Estimator::default();
        let features = sample_features(Condition::Excellent);

        let first = estimator.estimate(&features).unwrap();
        let second = estimator.estimate(&features).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn estimate_ignores_neighborhood() {
        let estimator = Estimator::default();
        let mut other = sample_features(Condition::Good);
        other.neighborhood = "Downtown".to_string();

        assert_eq!(
            estimator.estimate(&other).unwrap(),
            estimator
                .estimate(&sample_features(Condition::Good))
                .unwrap()
        );
    }

    #[test]
    fn estimate_is_non_negative_across_valid_ranges() {
        let estimator = Estimator::default();

        for &condition in &[Condition::Good, Condition::Excellent] {
            for bedrooms in [1u8, 10] {
                for bathrooms in [dec!(1), dec!(8)] {
                    for square_footage in [500u32, 10_000] {
                        for year_built in [1900, 2024] {
                            for garage_spaces in [0u8, 4] {
                                let features = PropertyFeatures {
                                    bedrooms,
                                    bathrooms,
                                    square_footage,
                                    year_built,
                                    lot_size: 1000,
                                    garage_spaces,
                                    neighborhood: "Anywhere".to_string(),
                                    condition,
                                };
                                let price = estimator.estimate(&features).unwrap();
                                assert!(price.dollars() >= 0, "{features:?} -> {price}");
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn estimate_cheapest_valid_property() {
        let features = PropertyFeatures {
            bedrooms: 1,
            bathrooms: dec!(1),
            square_footage: 500,
            year_built: 1900,
            lot_size: 1000,
            garage_spaces: 0,
            neighborhood: "Anywhere".to_string(),
            condition: Condition::Good,
        };

        // 150000 + 25000 + 15000 + 60000 - 62000 + 5000
        let price = Estimator::default().estimate(&features).unwrap();

        assert_eq!(price, EstimatedPrice(193_000));
    }

    #[test]
    fn estimate_reports_overflow_instead_of_panicking() {
        let estimator = Estimator::new(EstimatorConfig {
            per_lot_square_foot: Decimal::MAX,
            ..EstimatorConfig::default()
        })
        .unwrap();

        let result = estimator.estimate(&sample_features(Condition::Good));

        assert_eq!(result, Err(EstimatorError::Overflow("lot size")));
    }

    // =========================================================================
    // subtotal / multiplier tests
    // =========================================================================

    #[test]
    fn subtotal_excludes_condition() {
        let estimator = Estimator::default();

        let good = estimator
            .subtotal(&sample_features(Condition::Good))
            .unwrap();
        let poor = estimator
            .subtotal(&sample_features(Condition::Poor))
            .unwrap();

        assert_eq!(good, dec!(536500));
        assert_eq!(poor, good);
    }

    #[test]
    fn condition_multipliers_match_formula() {
        let estimator = Estimator::default();

        assert_eq!(estimator.condition_multiplier(Condition::Excellent), dec!(1.2));
        assert_eq!(estimator.condition_multiplier(Condition::Good), dec!(1.0));
        assert_eq!(estimator.condition_multiplier(Condition::Fair), dec!(0.8));
        assert_eq!(estimator.condition_multiplier(Condition::Poor), dec!(0.8));
    }

    #[test]
    fn custom_fair_multiplier_splits_fair_from_poor() {
        let estimator = Estimator::new(EstimatorConfig {
            fair_multiplier: dec!(0.9),
            ..EstimatorConfig::default()
        })
        .unwrap();

        let fair = estimator
            .estimate(&sample_features(Condition::Fair))
            .unwrap();
        let poor = estimator
            .estimate(&sample_features(Condition::Poor))
            .unwrap();

        assert_eq!(fair, EstimatedPrice(482_850));
        assert_eq!(poor, EstimatedPrice(429_200));
    }

    // =========================================================================
    // config validation tests
    // =========================================================================

    #[test]
    fn new_rejects_negative_base_price() {
        let result = Estimator::new(EstimatorConfig {
            base_price: dec!(-1),
            ..EstimatorConfig::default()
        });

        assert_eq!(result, Err(EstimatorError::NegativeBasePrice(dec!(-1))));
    }

    #[test]
    fn new_rejects_negative_multiplier() {
        let result = Estimator::new(EstimatorConfig {
            fair_multiplier: dec!(-0.8),
            ..EstimatorConfig::default()
        });

        assert_eq!(
            result,
            Err(EstimatorError::NegativeMultiplier {
                condition: Condition::Fair,
                value: dec!(-0.8),
            })
        );
    }

    // =========================================================================
    // estimate_unchecked tests
    // =========================================================================

    #[test]
    fn estimate_unchecked_matches_validated_path() {
        let price = Estimator::default().estimate_unchecked(&sample_input());

        assert_eq!(price, Some(EstimatedPrice(536_500)));
    }

    #[test]
    fn estimate_unchecked_non_numeric_field_yields_none() {
        let mut input = sample_input();
        input.garage_spaces = "two".to_string();

        assert_eq!(Estimator::default().estimate_unchecked(&input), None);
    }

    #[test]
    fn estimate_unchecked_empty_field_yields_none() {
        let mut input = sample_input();
        input.year_built.clear();

        assert_eq!(Estimator::default().estimate_unchecked(&input), None);
    }

    #[test]
    fn estimate_unchecked_uses_out_of_range_values_as_entered() {
        let mut input = sample_input();
        input.bedrooms = "0".to_string();
        input.year_built = "2030".to_string();

        // Zero bedrooms drops 75000; a build year after the reference year
        // adds 3000 where 1995 subtracted 14500.
        let price = Estimator::default().estimate_unchecked(&input);

        assert_eq!(price, Some(EstimatedPrice(479_000)));
    }

    #[test]
    fn estimate_unchecked_drops_fractions() {
        let mut input = sample_input();
        input.bedrooms = "3.7".to_string();
        input.bathrooms = "2.5".to_string();

        let price = Estimator::default().estimate_unchecked(&input);

        assert_eq!(price, Some(EstimatedPrice(536_500)));
    }

    #[test]
    fn estimate_unchecked_stops_at_thousands_separator() {
        let mut input = sample_input();
        input.lot_size = "8,000".to_string();

        // The lot counts as 8 sq ft: 40 instead of 40000.
        let price = Estimator::default().estimate_unchecked(&input);

        assert_eq!(price, Some(EstimatedPrice(496_540)));
    }
}
