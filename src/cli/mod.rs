//! CLI subcommand definitions and handlers.
//!
//! Implements a subcommand architecture:
//! - `dialargs check <port> [host]` - Normalize a single connect call
//! - `dialargs batch <file>` - Normalize every call listed in a JSON file
//! - `dialargs config` - Show or initialize settings

mod batch;
mod check;
mod config;

pub use batch::{evaluate_calls, load_calls, BatchCommand};
pub use check::CheckCommand;
pub use config::ConfigCommand;

use crate::config::AppSettings;
use crate::error::CliResult;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// dialargs - connect-argument normalization and validation.
///
/// Reduces the argument shapes a connect-style API accepts (bare port,
/// port and host, options record, options record and host) to one validated
/// target, or reports why the arguments are invalid.
#[derive(Parser, Debug)]
#[command(name = "dialargs")]
#[command(author = "HueCodes <huecodes@proton.me>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Validate and normalize connect arguments", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to custom configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Normalize a single connect call
    #[command(alias = "c")]
    Check(CheckCommand),

    /// Normalize every call listed in a JSON file
    #[command(alias = "b")]
    Batch(BatchCommand),

    /// Show or initialize settings
    Config(ConfigCommand),
}

impl Cli {
    /// True when the selected command creates the settings file instead of
    /// reading it, so no existing file is required.
    pub fn writes_settings(&self) -> bool {
        matches!(&self.command, Commands::Config(cmd) if cmd.init)
    }

    /// Run the selected subcommand.
    ///
    /// Returns `Ok(false)` when the command completed but reported rejected
    /// arguments.
    pub fn execute(&self, settings: &AppSettings) -> CliResult<bool> {
        match &self.command {
            Commands::Check(cmd) => cmd.execute(settings),
            Commands::Batch(cmd) => cmd.execute(settings, self.quiet),
            Commands::Config(cmd) => cmd.execute(settings, self.config.as_deref()),
        }
    }
}
