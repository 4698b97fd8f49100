//! Application state for the price predictor UI.
//!
//! Stored as Cursive user data so every callback can reach the form.

use std::time::Duration;

use price_core::PriceForm;
use tokio::runtime::Handle;

/// Application-wide state stored in Cursive's user data.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The form being edited and its current phase.
    pub form: PriceForm,

    /// How long a submit waits before the estimate is shown.
    pub submit_delay: Duration,

    /// Runtime that runs the submit delay off the UI thread.
    pub runtime: Handle,
}

impl AppState {
    pub fn new(
        form: PriceForm,
        submit_delay: Duration,
        runtime: Handle,
    ) -> Self {
        Self {
            form,
            submit_delay,
            runtime,
        }
    }
}
