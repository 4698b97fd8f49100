use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, warn};

use price_ui::{config::AppConfig, csv_loader, logging};

/// Estimate every property in a CSV file.
///
/// Prints one line per row: the row number followed by the estimate or the
/// reasons the row was rejected.
#[derive(Debug, Parser)]
struct Args {
    /// CSV file with one property per row.
    #[arg(long)]
    file: PathBuf,

    /// TOML file with estimator settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the form constraints and estimate whatever parses.
    #[arg(long)]
    unchecked: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = AppConfig::load_or_default(args.config.as_deref())?;
    // Results go to stdout; log records only reach it when the config asks.
    logging::init_logging(&config.log_settings()).context("failed to initialise logging")?;

    let estimator = config.estimator()?;
    let rows = csv_loader::load_from_file(&args.file)
        .with_context(|| format!("failed to load '{}'", args.file.display()))?;
    debug!(rows = rows.len(), unchecked = args.unchecked, "estimating batch");

    for (idx, input) in rows.iter().enumerate() {
        let row = idx + 1;

        if args.unchecked {
            match estimator.estimate_unchecked(input) {
                Some(price) => println!("{row}: {price}"),
                None => println!("{row}: not a number"),
            }
            continue;
        }

        match input.validate() {
            Ok(features) => match estimator.estimate(&features) {
                Ok(price) => println!("{row}: {price}"),
                Err(e) => {
                    warn!(row, %e, "estimate failed");
                    println!("{row}: error: {e}");
                }
            },
            Err(errors) => {
                let reasons = errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ");
                println!("{row}: invalid: {reasons}");
            }
        }
    }

    Ok(())
}
