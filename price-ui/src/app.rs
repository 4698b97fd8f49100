//! Wires configuration, the async runtime and the terminal UI together.

use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use cursive::event::Event;
use price_core::PriceForm;
use tracing::{info, warn};

use crate::{config::AppConfig, logging, state::AppState, views};

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub delay_ms: Option<u64>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
    pub log_stdout: bool,
}

/// Layers `overrides` on top of `config`. Unset overrides leave the file
/// value alone; `log_stdout` can only switch stdout logging on.
pub fn apply_overrides(
    mut config: AppConfig,
    overrides: Overrides,
) -> AppConfig {
    if let Some(delay_ms) = overrides.delay_ms {
        config.delay_ms = delay_ms;
    }
    if let Some(level) = overrides.log_level {
        config.log_level = level;
    }
    if let Some(file) = overrides.log_file {
        config.log_file = Some(file);
    }
    config.log_stdout |= overrides.log_stdout;
    config
}

/// Runs the price predictor form until the user quits.
///
/// Logging must already be initialized. Stdout logging is held off for the
/// lifetime of the UI and restored to the configured setting afterwards.
pub fn run(config: &AppConfig) -> Result<()> {
    let estimator = config.estimator().context("invalid estimator settings")?;
    let delay: Duration = config.submit_delay();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("estimate-timer")
        .enable_time()
        .build()
        .context("failed to start the async runtime")?;

    info!(?delay, "starting price predictor");

    let mut siv = cursive::crossterm();
    siv.set_user_data(AppState::new(
        PriceForm::new(estimator),
        delay,
        runtime.handle().clone(),
    ));
    siv.add_global_callback(Event::CtrlChar('q'), |s| s.quit());

    views::show_property_form(&mut siv);

    let outcome = siv
        .try_run()
        .map_err(|e| anyhow::anyhow!("terminal UI failed: {e}"));

    if let Err(e) = logging::set_stdout_enabled(config.log_stdout) {
        warn!(%e, "could not restore stdout logging");
    }
    info!("price predictor closed");

    outcome
}
