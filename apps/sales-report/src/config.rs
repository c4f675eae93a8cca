//! # Report Configuration
//!
//! Configuration management for the report tool.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --in-format csv --pretty                                           │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     SALES_REPORT_IN_FORMAT=csv                                         │
//! │     SALES_REPORT_OUT_FORMAT=json                                       │
//! │     SALES_REPORT_PRETTY=true                                           │
//! │     SALES_REPORT_LOG=debug                                             │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config PATH, or $SALES_REPORT_CONFIG, or                         │
//! │     ~/.config/sales-report/report.toml (Linux)                         │
//! │     ~/Library/Application Support/com.sales.sales-report/report.toml   │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     json in, json out, compact, log filter "warn"                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # report.toml
//! [input]
//! format = "csv"
//!
//! [output]
//! format = "json"
//! pretty = true
//!
//! [logging]
//! filter = "info,sales_core=debug"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::error::{ReportError, ReportResult};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "SALES_REPORT_CONFIG";

/// Log filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

// =============================================================================
// Record Format
// =============================================================================

/// On-disk format for records and summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RecordFormat {
    /// A JSON array of objects.
    #[default]
    Json,
    /// Comma-separated values with a header row.
    Csv,
}

impl std::fmt::Display for RecordFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordFormat::Json => write!(f, "json"),
            RecordFormat::Csv => write!(f, "csv"),
        }
    }
}

impl std::str::FromStr for RecordFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(RecordFormat::Json),
            "csv" => Ok(RecordFormat::Csv),
            other => Err(ReportError::InvalidConfig(format!(
                "Unknown record format: '{}'. Valid options: json, csv",
                other
            ))),
        }
    }
}

// =============================================================================
// Sections
// =============================================================================

/// How records are read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputSettings {
    #[serde(default)]
    pub format: RecordFormat,
}

/// How summaries are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: RecordFormat,

    /// Pretty-print JSON output. Ignored for CSV.
    #[serde(default)]
    pub pretty: bool,
}

/// Log filter used when `RUST_LOG` is not set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directive string, e.g. `"info,sales_core=debug"`.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: default_log_filter(),
        }
    }
}

// =============================================================================
// Main Report Configuration
// =============================================================================

/// Complete report configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub input: InputSettings,

    #[serde(default)]
    pub output: OutputSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl ReportConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`report.toml`)
    /// 3. Environment variables
    ///
    /// An explicit path (argument or `SALES_REPORT_CONFIG`) must exist; the
    /// platform default path is optional. An environment override with an
    /// unrecognized value is an `InvalidConfig` error.
    pub fn load(config_path: Option<PathBuf>) -> ReportResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// [`ReportConfig::load`] with a custom environment lookup.
    pub fn load_with<F>(config_path: Option<PathBuf>, lookup: F) -> ReportResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let explicit = config_path.or_else(|| lookup(CONFIG_PATH_ENV).map(PathBuf::from));

        let mut config = match explicit {
            Some(path) if path.exists() => Self::from_file(&path)?,
            Some(path) => return Err(ReportError::ConfigNotFound(path)),
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_overrides(lookup)?;
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML config file.
    pub fn from_file(path: &Path) -> ReportResult<Self> {
        info!(?path, "Loading report config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ReportResult<()> {
        if self.logging.filter.trim().is_empty() {
            return Err(ReportError::InvalidConfig(
                "logging.filter must not be empty".into(),
            ));
        }

        EnvFilter::try_new(&self.logging.filter).map_err(|e| {
            ReportError::InvalidConfig(format!(
                "logging.filter '{}' is not a valid filter: {}",
                self.logging.filter, e
            ))
        })?;

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_overrides<F>(&mut self, lookup: F) -> ReportResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(format) = lookup("SALES_REPORT_IN_FORMAT") {
            self.input.format = env_format("SALES_REPORT_IN_FORMAT", &format)?;
            debug!(format = %self.input.format, "Overriding input format from environment");
        }

        if let Some(format) = lookup("SALES_REPORT_OUT_FORMAT") {
            self.output.format = env_format("SALES_REPORT_OUT_FORMAT", &format)?;
            debug!(format = %self.output.format, "Overriding output format from environment");
        }

        if let Some(pretty) = lookup("SALES_REPORT_PRETTY") {
            self.output.pretty = match pretty.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                other => {
                    return Err(ReportError::InvalidConfig(format!(
                        "SALES_REPORT_PRETTY: '{}' is not a boolean. Valid options: true, false",
                        other
                    )))
                }
            };
        }

        if let Some(filter) = lookup("SALES_REPORT_LOG") {
            self.logging.filter = filter;
        }

        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "sales", "sales-report")
            .map(|dirs| dirs.config_dir().join("report.toml"))
    }
}

fn env_format(key: &str, value: &str) -> ReportResult<RecordFormat> {
    value.parse::<RecordFormat>().map_err(|_| {
        ReportError::InvalidConfig(format!(
            "{}: unknown record format '{}'. Valid options: json, csv",
            key,
            value.trim()
        ))
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
