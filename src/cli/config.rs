//! Config subcommand implementation.

use crate::config::{AppSettings, Paths};
use crate::error::CliResult;
use crate::output;
use clap::Parser;
use std::path::Path;

/// Show or initialize settings.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    /// Write the default settings file
    #[arg(long)]
    pub init: bool,
}

impl ConfigCommand {
    pub fn execute(&self, settings: &AppSettings, custom: Option<&Path>) -> CliResult<bool> {
        if self.init {
            let defaults = AppSettings::default();
            let path = match custom {
                Some(path) => {
                    defaults.save_to(path)?;
                    path.to_path_buf()
                }
                None => defaults.save()?,
            };
            output::print_info(&format!("Wrote default settings to {}", path.display()));
            return Ok(true);
        }

        let source = match custom {
            Some(path) => path.display().to_string(),
            None => Paths::get()?.settings_file().display().to_string(),
        };
        println!("# {}", source);
        println!(
            "{}",
            serde_json::to_string_pretty(settings).map_err(crate::error::ConfigError::from)?
        );
        Ok(true)
    }
}
