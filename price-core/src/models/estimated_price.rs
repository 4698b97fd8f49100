use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calculations::common::format_thousands;

/// A whole-dollar price produced by the estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EstimatedPrice(pub i64);

impl EstimatedPrice {
    pub fn dollars(&self) -> i64 {
        self.0
    }
}

/// Renders as currency with thousands separators, e.g. `$536,500`.
impl fmt::Display for EstimatedPrice {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "-${}", format_thousands(self.0.saturating_abs()))
        } else {
            write!(f, "${}", format_thousands(self.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_uses_dollar_sign_and_separators() {
        assert_eq!(EstimatedPrice(536_500).to_string(), "$536,500");
        assert_eq!(EstimatedPrice(1_234_567).to_string(), "$1,234,567");
    }

    #[test]
    fn display_puts_sign_before_dollar() {
        assert_eq!(EstimatedPrice(-45_000).to_string(), "-$45,000");
    }
}
