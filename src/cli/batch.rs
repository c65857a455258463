//! Batch subcommand implementation.
//!
//! Handles `dialargs batch <file>`. The file holds a JSON array of calls,
//! each call being an array of positional arguments:
//!
//! ```json
//! [[80], [80, "localhost"], [{"port": 80}], [{"port": "0x50"}, "localhost"]]
//! ```

use crate::config::AppSettings;
use crate::error::{CliError, CliResult};
use crate::output::{self, Outcome, OutputFormat, Report};
use crate::types::ConnectArgs;
use clap::Parser;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Normalize every call listed in a JSON file.
#[derive(Parser, Debug)]
pub struct BatchCommand {
    /// JSON file containing an array of positional argument lists
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format for results
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Exit with a failure status if any call is rejected
    #[arg(long)]
    pub fail_on_reject: bool,
}

impl BatchCommand {
    /// Execute the batch command.
    pub fn execute(&self, settings: &AppSettings, quiet: bool) -> CliResult<bool> {
        let calls = load_calls(&self.file)?;
        info!(path = %self.file.display(), calls = calls.len(), "loaded batch file");

        let format = self.output.unwrap_or(settings.default_output_format);
        if !quiet && format == OutputFormat::Plain {
            output::print_info(&format!(
                "Normalizing {} calls from {}",
                calls.len(),
                self.file.display()
            ));
        }

        let report = evaluate_calls(calls);
        output::print_report(&report, format)?;

        Ok(!self.fail_on_reject || report.rejected == 0)
    }
}

/// Read the list of calls from a batch file.
pub fn load_calls(path: &Path) -> CliResult<Vec<Value>> {
    let invalid = |reason: String| CliError::InvalidBatch {
        path: path.to_path_buf(),
        reason,
    };

    let content = fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
    let value: Value = serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))?;

    match value {
        Value::Array(calls) => Ok(calls),
        _ => Err(invalid("expected a JSON array of argument lists".to_string())),
    }
}

/// Normalize each call, keeping its position in the batch.
pub fn evaluate_calls(calls: Vec<Value>) -> Report {
    calls
        .into_iter()
        .enumerate()
        .map(|(index, call)| {
            let raw = call.to_string();
            match ConnectArgs::from_json(call) {
                Ok(args) => Outcome::evaluate(index, args),
                Err(err) => Outcome::unreadable(index, raw, &err),
            }
        })
        .collect()
}
