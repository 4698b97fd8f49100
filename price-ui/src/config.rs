//! Application configuration.
//!
//! Settings come from three layers, later ones winning: built-in defaults,
//! an optional TOML file, then command-line flags.
//!
//! ```toml
//! delay_ms = 2000
//! log_level = "info"
//! log_file = "predictor.log"
//!
//! [estimator]
//! fair_multiplier = "0.9"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use price_core::{Estimator, EstimatorConfig, EstimatorError, form::DEFAULT_SUBMIT_DELAY};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logging::LogSettings;

/// Errors raised while loading or applying the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid estimator settings: {0}")]
    Estimator(#[from] EstimatorError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Milliseconds between submit and the estimate appearing.
    pub delay_ms: u64,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
    /// Echo log records to stdout when the terminal is not owned by the UI.
    pub log_stdout: bool,
    pub estimator: EstimatorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            delay_ms: u64::try_from(DEFAULT_SUBMIT_DELAY.as_millis()).unwrap_or(2000),
            log_level: "info".to_string(),
            log_file: None,
            log_stdout: false,
            estimator: EstimatorConfig::default(),
        }
    }
}

impl AppConfig {
    /// Reads and parses the TOML file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Builds the estimator, validating the `[estimator]` table.
    pub fn estimator(&self) -> Result<Estimator, ConfigError> {
        Ok(Estimator::new(self.estimator.clone())?)
    }

    pub fn log_settings(&self) -> LogSettings {
        LogSettings {
            level: self.log_level.clone(),
            stdout: self.log_stdout,
            file: self.log_file.clone(),
        }
    }
}
