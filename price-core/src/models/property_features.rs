use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::format_thousands;
use crate::models::Condition;

/// A property record whose every field passed the form constraints.
///
/// Produced by [`PropertyInput::validate`](crate::PropertyInput::validate);
/// this is what the estimator consumes on the normal submit path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyFeatures {
    pub bedrooms: u8,
    /// Half baths count as 0.5.
    pub bathrooms: Decimal,
    pub square_footage: u32,
    pub year_built: i32,
    pub lot_size: u64,
    pub garage_spaces: u8,
    pub neighborhood: String,
    pub condition: Condition,
}

/// Property summary as shown beside the estimate.
impl fmt::Display for PropertyFeatures {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Bedrooms:      {}", self.bedrooms)?;
        writeln!(f, "Bathrooms:     {}", self.bathrooms.normalize())?;
        writeln!(
            f,
            "Square Feet:   {}",
            format_thousands(i64::from(self.square_footage))
        )?;
        writeln!(f, "Year Built:    {}", self.year_built)?;
        writeln!(
            f,
            "Lot Size:      {} sq ft",
            format_thousands(i64::try_from(self.lot_size).unwrap_or(i64::MAX))
        )?;
        writeln!(f, "Garage:        {}", self.garage_spaces)?;
        writeln!(f, "Neighborhood:  {}", self.neighborhood)?;
        write!(f, "Condition:     {}", self.condition)
    }
}
