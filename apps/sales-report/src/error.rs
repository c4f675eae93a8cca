//! Report error types.
//!
//! Everything the command-line tool can fail on, with the core
//! [`DataProcessingError`] carried through unchanged.

use std::path::PathBuf;

use sales_core::DataProcessingError;
use thiserror::Error;

/// Result type alias for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Report error type.
#[derive(Debug, Error)]
pub enum ReportError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Config file could not be parsed.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A config value is out of range or malformed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    // =========================================================================
    // Input / Output Errors
    // =========================================================================
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Input parsed, but is not a list of records.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // =========================================================================
    // Processing Errors
    // =========================================================================
    /// Validation or aggregation failed.
    #[error(transparent)]
    Processing(#[from] DataProcessingError),
}

impl ReportError {
    /// Process exit code for this error.
    ///
    /// `2` for rejected sales data, `1` for everything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            ReportError::Processing(_) => 2,
            _ => 1,
        }
    }
}
