//! UI views for the price predictor.
//!
//! - `property_form` - the input form, its buttons and submit/reset handling
//! - `result_panel` - text of the estimate panel
//! - `status_bar` - keyboard shortcut hints

mod property_form;
pub mod result_panel;
pub mod status_bar;

pub use property_form::show_property_form;
