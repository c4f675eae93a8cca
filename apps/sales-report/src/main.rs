//! # Sales Report CLI
//!
//! Aggregates per-line-item sales records into per-product summaries.
//!
//! ## Usage
//! ```bash
//! # JSON from stdin to stdout
//! sales-report < sales.json
//!
//! # CSV file to pretty JSON
//! sales-report --input sales.csv --in-format csv --pretty
//!
//! # Summaries as CSV
//! sales-report -i sales.json -o summary.csv --out-format csv
//! ```
//!
//! ## Log Levels
//! - `RUST_LOG=debug` - Show debug messages
//! - `RUST_LOG=sales_core=trace` - Trace every record folded into a group
//! - Default: the config's `logging.filter` (`warn`)

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

use sales_report::config::DEFAULT_LOG_FILTER;
use sales_report::output::write_summaries;
use sales_report::{build_report, RecordFormat, ReportConfig, ReportResult};

#[derive(Parser, Debug)]
#[command(
    name = "sales-report",
    version,
    about = "Aggregate sales records into per-product summaries"
)]
struct Cli {
    /// Input file (default: stdin)
    #[arg(short = 'i', long = "input")]
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Input record format
    #[arg(long = "in-format", value_enum)]
    in_format: Option<RecordFormat>,

    /// Output summary format
    #[arg(long = "out-format", value_enum)]
    out_format: Option<RecordFormat>,

    /// Config file (default: $SALES_REPORT_CONFIG or the platform config dir)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let log_filter = init_tracing();

    match load_config(&cli).and_then(|config| {
        apply_log_filter(log_filter.as_ref(), &config);
        run(&cli, &config)
    }) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

/// Loads config, then applies command-line flags on top.
fn load_config(cli: &Cli) -> ReportResult<ReportConfig> {
    let mut config = ReportConfig::load(cli.config.clone())?;

    if let Some(format) = cli.in_format {
        config.input.format = format;
    }
    if let Some(format) = cli.out_format {
        config.output.format = format;
    }
    if cli.pretty {
        config.output.pretty = true;
    }

    Ok(config)
}

/// Initializes the tracing subscriber for structured logging.
///
/// Installed before config loading so its events are not lost. When
/// `RUST_LOG` is set it is final; otherwise the default filter applies
/// until [`apply_log_filter`] swaps in the config's filter through the
/// returned handle. Logs go to stderr.
fn init_tracing() -> Option<reload::Handle<EnvFilter, Registry>> {
    let from_env = EnvFilter::try_from_default_env().ok();
    let follows_config = from_env.is_none();
    let (filter, handle) =
        reload::Layer::new(from_env.unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    follows_config.then_some(handle)
}

fn apply_log_filter(handle: Option<&reload::Handle<EnvFilter, Registry>>, config: &ReportConfig) {
    let Some(handle) = handle else {
        return;
    };
    if let Err(e) = handle.reload(EnvFilter::new(&config.logging.filter)) {
        warn!(error = %e, "Failed to apply logging.filter");
    }
}

fn run(cli: &Cli, config: &ReportConfig) -> ReportResult<()> {
    info!(
        input = ?cli.input,
        in_format = %config.input.format,
        out_format = %config.output.format,
        "Starting sales report"
    );

    let reader: Box<dyn Read> = match &cli.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };
    let summaries = build_report(reader, config)?;

    // Opened only after aggregation succeeds so a rejected input leaves
    // an existing report untouched.
    let writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };
    write_summaries(writer, &summaries, &config.output)?;

    info!(products = summaries.len(), "Report written");
    Ok(())
}
