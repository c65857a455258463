//! dialargs command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use dialargs::cli::Cli;
use dialargs::config::AppSettings;
use dialargs::output;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            output::print_error(&format!("{:#}", e));
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    let settings = load_settings(cli)?;
    init_tracing(cli.verbose || settings.verbose, cli.quiet);

    if !settings.color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    Ok(cli.execute(&settings)?)
}

fn load_settings(cli: &Cli) -> Result<AppSettings> {
    if cli.writes_settings() {
        return Ok(AppSettings::default());
    }

    match &cli.config {
        Some(path) => AppSettings::load_from(path)
            .with_context(|| format!("loading settings from {}", path.display())),
        None => Ok(AppSettings::load().unwrap_or_else(|e| {
            if !cli.quiet {
                output::print_warning(&format!("{}; using default settings", e));
            }
            AppSettings::default()
        })),
    }
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the flags.
fn init_tracing(verbose: bool, quiet: bool) {
    let default_filter = if quiet {
        "error"
    } else if verbose {
        "dialargs=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
