//! Form state holder and field constraints.
//!
//! [`PriceForm`] owns the record being edited and walks it through
//! editing → submitting → showing result. [`constraints`] holds the checks a
//! submit must pass.

pub mod constraints;
mod state;

pub use constraints::{NumericConstraint, ValidationError};
pub use state::{DEFAULT_SUBMIT_DELAY, FormError, PendingEstimate, Prediction, PriceForm};
