use std::fmt;

use thiserror::Error;

/// Error returned when a field name does not match any form input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field '{0}'")]
pub struct UnknownFieldError(pub String);

/// One input of the property form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Bedrooms,
    Bathrooms,
    SquareFootage,
    YearBuilt,
    LotSize,
    GarageSpaces,
    Neighborhood,
    Condition,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 8] = [
        Field::Bedrooms,
        Field::Bathrooms,
        Field::SquareFootage,
        Field::YearBuilt,
        Field::LotSize,
        Field::GarageSpaces,
        Field::Neighborhood,
        Field::Condition,
    ];

    /// The input's `name` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bedrooms => "bedrooms",
            Self::Bathrooms => "bathrooms",
            Self::SquareFootage => "squareFootage",
            Self::YearBuilt => "yearBuilt",
            Self::LotSize => "lotSize",
            Self::GarageSpaces => "garageSpaces",
            Self::Neighborhood => "neighborhood",
            Self::Condition => "condition",
        }
    }

    pub fn parse(s: &str) -> Result<Self, UnknownFieldError> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownFieldError(s.to_string()))
    }

    /// Label shown next to the input and in validation messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bedrooms => "Bedrooms",
            Self::Bathrooms => "Bathrooms",
            Self::SquareFootage => "Square Footage",
            Self::YearBuilt => "Year Built",
            Self::LotSize => "Lot Size (sq ft)",
            Self::GarageSpaces => "Garage Spaces",
            Self::Neighborhood => "Neighborhood",
            Self::Condition => "Condition",
        }
    }

    /// Example value shown beside an input.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Bedrooms => "3",
            Self::Bathrooms => "2",
            Self::SquareFootage => "2000",
            Self::YearBuilt => "1995",
            Self::LotSize => "8000",
            Self::GarageSpaces => "2",
            Self::Neighborhood => "Downtown, Suburbs, etc.",
            Self::Condition => "good",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
