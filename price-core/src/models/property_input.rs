use serde::{Deserialize, Serialize};

use crate::form::constraints::{self, ValidationError};
use crate::models::{Condition, Field, ParseConditionError, PropertyFeatures};

/// The property attributes exactly as entered.
///
/// Numeric fields stay as text until the record is validated or estimated,
/// the same way a form keeps whatever the user typed. Field names on the
/// wire (CSV headers, input names) are camelCase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyInput {
    pub bedrooms: String,
    pub bathrooms: String,
    pub square_footage: String,
    pub year_built: String,
    pub lot_size: String,
    pub garage_spaces: String,
    pub neighborhood: String,
    #[serde(default)]
    pub condition: Condition,
}

impl PropertyInput {
    /// Returns the current text of `field`.
    ///
    /// For [`Field::Condition`] this is the wire value of the selection.
    pub fn value(
        &self,
        field: Field,
    ) -> &str {
        match field {
            Field::Bedrooms => &self.bedrooms,
            Field::Bathrooms => &self.bathrooms,
            Field::SquareFootage => &self.square_footage,
            Field::YearBuilt => &self.year_built,
            Field::LotSize => &self.lot_size,
            Field::GarageSpaces => &self.garage_spaces,
            Field::Neighborhood => &self.neighborhood,
            Field::Condition => self.condition.as_str(),
        }
    }

    /// Overwrites `field` with `value`.
    ///
    /// Text is stored verbatim. Only the condition is parsed, since a select
    /// cannot hold a value outside its options.
    pub fn set(
        &mut self,
        field: Field,
        value: &str,
    ) -> Result<(), ParseConditionError> {
        let slot = match field {
            Field::Bedrooms => &mut self.bedrooms,
            Field::Bathrooms => &mut self.bathrooms,
            Field::SquareFootage => &mut self.square_footage,
            Field::YearBuilt => &mut self.year_built,
            Field::LotSize => &mut self.lot_size,
            Field::GarageSpaces => &mut self.garage_spaces,
            Field::Neighborhood => &mut self.neighborhood,
            Field::Condition => {
                self.condition = Condition::parse(value)?;
                return Ok(());
            }
        };
        value.clone_into(slot);
        Ok(())
    }

    /// Checks every field against its form constraints.
    ///
    /// Returns the typed record, or every failure in form order.
    pub fn validate(&self) -> Result<PropertyFeatures, Vec<ValidationError>> {
        constraints::validate(self)
    }
}
