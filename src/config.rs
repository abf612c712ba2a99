//! Configuration management and validation
//!
//! Provides the configuration structure for processing parameters and
//! logging defaults, loaded from an optional TOML file layered over
//! built-in defaults. CLI arguments override both.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_INVOICES_DIR, DEFAULT_SUMMARY_FILE,
    INVOICE_FILE_EXTENSION,
};
use crate::{Error, Result};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Invoice processing settings
    pub processing: ProcessingConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Invoice processing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Directory containing invoice files
    pub invoices_dir: PathBuf,

    /// Output path for the rendered summary
    pub summary_file: PathBuf,

    /// Extension of files treated as invoices within the directory
    pub file_extension: String,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when no verbosity flag is given
    pub level: String,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            invoices_dir: PathBuf::from(DEFAULT_INVOICES_DIR),
            summary_file: PathBuf::from(DEFAULT_SUMMARY_FILE),
            file_extension: INVOICE_FILE_EXTENSION.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration, layering an optional TOML file over defaults
    ///
    /// An explicitly given file must load; the default location is tried
    /// opportunistically and silently skipped when absent.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        match config_file {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                Self::load_from_file(path)
            }
            None => match Self::default_config_path() {
                Ok(path) if path.exists() => {
                    debug!("Loading configuration from {}", path.display());
                    Self::load_from_file(&path)
                }
                _ => {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Default configuration file location in the user config directory
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            Error::configuration("Could not determine user configuration directory")
        })?;

        Ok(config_dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Validate configuration values for consistency
    pub fn validate(&self) -> Result<()> {
        if self.processing.file_extension.trim().is_empty() {
            return Err(Error::configuration(
                "Invoice file extension cannot be empty",
            ));
        }

        if self.processing.summary_file.as_os_str().is_empty() {
            return Err(Error::configuration("Summary output path cannot be empty"));
        }

        match self.logging.level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            other => {
                return Err(Error::configuration(format!(
                    "Unknown log level '{}'",
                    other
                )));
            }
        }

        Ok(())
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let config = ::config::Config::builder()
            .add_source(::config::File::from(path))
            .build()?
            .try_deserialize::<Self>()?;

        config.validate()?;
        Ok(config)
    }
}
