mod condition;
mod estimated_price;
mod field;
mod phase;
mod property_features;
mod property_input;

pub use condition::{Condition, ParseConditionError};
pub use estimated_price::EstimatedPrice;
pub use field::{Field, UnknownFieldError};
pub use phase::Phase;
pub use property_features::PropertyFeatures;
pub use property_input::PropertyInput;
