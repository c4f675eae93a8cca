//! # sales-report
//!
//! Command-line shell around [`sales_core::aggregate`].
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        sales-report                                     │
//! │                                                                         │
//! │  file / stdin ──► input::read_records ──► Vec<serde_json::Value>       │
//! │                                                  │                      │
//! │                                                  ▼                      │
//! │                                     sales_core::aggregate               │
//! │                                                  │                      │
//! │                                                  ▼                      │
//! │  file / stdout ◄── output::write_summaries ◄── Vec<ProductSummary>     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod output;

use std::io::{Read, Write};

use sales_core::ProductSummary;
use tracing::info;

pub use config::{RecordFormat, ReportConfig};
pub use error::{ReportError, ReportResult};

/// Reads and aggregates records without touching any output.
///
/// Callers that write to a file open it only after this returns `Ok`, so
/// a rejected input never truncates an existing report.
pub fn build_report<R: Read>(reader: R, config: &ReportConfig) -> ReportResult<Vec<ProductSummary>> {
    let records = input::read_records(reader, config.input.format)?;
    let summaries = sales_core::aggregate(&records)?;

    info!(
        records = records.len(),
        products = summaries.len(),
        "Report built"
    );
    Ok(summaries)
}

/// Reads records, aggregates them and writes the summaries.
///
/// Returns the number of product summaries written. Nothing reaches
/// `writer` when reading or aggregation fails.
pub fn run_report<R: Read, W: Write>(
    reader: R,
    writer: W,
    config: &ReportConfig,
) -> ReportResult<usize> {
    let summaries = build_report(reader, config)?;
    output::write_summaries(writer, &summaries, &config.output)?;
    Ok(summaries.len())
}
