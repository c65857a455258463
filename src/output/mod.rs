//! Output formatting module.
//!
//! Provides formatters for plain text, JSON, and CSV output of normalization
//! reports.

mod csv_format;
mod json_format;
mod plain;
mod report;

pub use plain::{print_error, print_info, print_warning};
pub use report::{ErrorSummary, Outcome, OutcomeStatus, Report};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};

/// Output format for results.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable plain text
    #[default]
    Plain,
    /// JSON structured output
    Json,
    /// CSV format for data analysis
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// Format and print a report to stdout.
pub fn print_report(report: &Report, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, report, format)
}

/// Format a report into any writer.
pub fn write_report<W: Write>(out: &mut W, report: &Report, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Plain => plain::write_plain(out, report),
        OutputFormat::Json => json_format::write_json(out, report),
        OutputFormat::Csv => csv_format::write_csv(out, report),
    }
}
