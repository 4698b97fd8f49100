use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use price_ui::{
    app::{self, Overrides},
    config::AppConfig,
    logging::{self, LogSettings},
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// House price predictor.
///
/// Fill in the property details and submit to get a simulated market value.
#[derive(Debug, Parser)]
struct Cli {
    /// TOML file with delay, logging and estimator settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Milliseconds to wait between submit and the estimate.
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Log level or filter directive (RUST_LOG still wins).
    #[arg(long)]
    log_level: Option<String>,

    /// Append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Echo log records to stdout once the form is closed.
    #[arg(long)]
    log_stdout: bool,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file_config = AppConfig::load_or_default(cli.config.as_deref())?;
    let config = app::apply_overrides(
        file_config,
        Overrides {
            delay_ms: cli.delay_ms,
            log_level: cli.log_level,
            log_file: cli.log_file,
            log_stdout: cli.log_stdout,
        },
    );

    // The form owns the terminal; stdout stays quiet until it closes.
    logging::init_logging(&LogSettings {
        stdout: false,
        ..config.log_settings()
    })
    .context("failed to initialise logging")?;

    debug!(?config, "configuration resolved");

    app::run(&config)
}
