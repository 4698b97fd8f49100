use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a condition value is not one of the four options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown condition '{0}' (expected poor, fair, good or excellent)")]
pub struct ParseConditionError(pub String);

/// Overall state of the property, chosen from a fixed list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Poor,
    Fair,
    #[default]
    Good,
    Excellent,
}

impl Condition {
    /// Every condition in the order the select lists them.
    pub fn all() -> &'static [Condition] {
        &[
            Condition::Poor,
            Condition::Fair,
            Condition::Good,
            Condition::Excellent,
        ]
    }

    /// Wire value, as submitted by the form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Poor => "poor",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Poor => "Poor",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }

    /// Parses a wire value. Matching ignores ASCII case and surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, ParseConditionError> {
        let trimmed = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseConditionError(s.to_string()))
    }

    /// Position within [`Condition::all`].
    pub fn index(&self) -> usize {
        match self {
            Self::Poor => 0,
            Self::Fair => 1,
            Self::Good => 2,
            Self::Excellent => 3,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_condition_is_good() {
        assert_eq!(Condition::default(), Condition::Good);
    }

    #[test]
    fn parse_accepts_wire_values_in_any_case() {
        assert_eq!(Condition::parse("excellent"), Ok(Condition::Excellent));
        assert_eq!(Condition::parse(" Fair "), Ok(Condition::Fair));
        assert_eq!(Condition::parse("POOR"), Ok(Condition::Poor));
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert_eq!(
            Condition::parse("mint"),
            Err(ParseConditionError("mint".to_string()))
        );
    }

    #[test]
    fn index_matches_position_in_all() {
        for (i, condition) in Condition::all().iter().enumerate() {
            assert_eq!(condition.index(), i);
        }
    }
}
