//! Invoice Processor Library
//!
//! A Rust library for aggregating restaurant invoice files into a daily
//! sales summary report.
//!
//! This library provides tools for:
//! - Parsing plain-text `key: value` invoice files into validated orders
//! - Accumulating orders into per-channel and per-item sales totals
//! - Rendering the daily sales summary in its flat-text report layout
//! - Tolerant handling of malformed invoices without aborting a run

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod invoice_parser;
        pub mod sales_summary;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::{Channel, MenuItem, Order};
pub use config::Config;

/// Result type alias for invoice processing
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for invoice processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Configuration file could not be loaded
    #[error("Configuration loading failed: {0}")]
    ConfigLoad(#[from] ::config::ConfigError),

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Invoices directory not found
    #[error("Invoices directory not found: {path}")]
    InvoicesDirNotFound { path: String },

    /// Directory traversal error
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },

    /// Report serialization error
    #[error("Report serialization error: {0}")]
    ReportSerialization(#[from] serde_json::Error),
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create an invoices directory not found error
    pub fn invoices_dir_not_found(path: impl Into<String>) -> Self {
        Self::InvoicesDirNotFound { path: path.into() }
    }

    /// Create a directory traversal error
    pub fn directory_traversal(message: impl Into<String>, source: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "Directory traversal failed".to_string(),
            source: error,
        }
    }
}
