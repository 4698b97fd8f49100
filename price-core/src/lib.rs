pub mod calculations;
pub mod form;
pub mod models;

pub use calculations::{Estimator, EstimatorConfig, EstimatorError};
pub use form::{FormError, PendingEstimate, Prediction, PriceForm, ValidationError};
pub use models::*;
