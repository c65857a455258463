//! Check subcommand implementation.
//!
//! Handles `dialargs check <port> [host]` for a single connect call.

use crate::config::AppSettings;
use crate::error::CliResult;
use crate::output::{self, Outcome, OutputFormat, Report};
use crate::types::{ArgValue, ConnectArgs, ConnectOptions};
use clap::Parser;

/// Normalize a single connect call.
#[derive(Parser, Debug)]
pub struct CheckCommand {
    /// Port value as the caller would pass it
    ///
    /// Examples:
    ///   80              Number
    ///   '"80"'          Decimal string
    ///   0x50            Bare text is a string
    ///   NaN, null, [], {}, true
    #[arg(value_name = "PORT", allow_hyphen_values = true)]
    pub port: String,

    /// Host passed as a trailing argument
    #[arg(value_name = "HOST")]
    pub host: Option<String>,

    /// Pass the port inside an options record
    #[arg(long)]
    pub options: bool,

    /// Put HOST inside the options record instead of after it (implies --options)
    #[arg(long, requires = "host")]
    pub record_host: bool,

    /// Resolution hints bitmask (implies --options)
    #[arg(long, value_name = "BITS", allow_hyphen_values = true)]
    pub hints: Option<String>,

    /// Address family: 0, 4, 6, IPv4 or IPv6 (implies --options)
    #[arg(long, allow_hyphen_values = true)]
    pub family: Option<String>,

    /// Local address to bind before connecting (implies --options)
    #[arg(long, value_name = "ADDR")]
    pub local_address: Option<String>,

    /// Local port to bind before connecting (implies --options)
    #[arg(long, value_name = "PORT", allow_hyphen_values = true)]
    pub local_port: Option<String>,

    /// Output format for results
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

impl CheckCommand {
    /// Build the connect call described by the command line.
    pub fn to_args(&self) -> ConnectArgs {
        let port = parse_literal(&self.port);
        let uses_options = self.options
            || self.record_host
            || self.hints.is_some()
            || self.family.is_some()
            || self.local_address.is_some()
            || self.local_port.is_some();

        if !uses_options {
            return match &self.host {
                Some(host) => ConnectArgs::PortHost(port, host.clone()),
                None => ConnectArgs::Port(port),
            };
        }

        let literal = |value: &Option<String>| value.as_deref().map(parse_literal).unwrap_or_default();
        let options = ConnectOptions {
            port,
            host: self.host.clone().filter(|_| self.record_host),
            hints: literal(&self.hints),
            family: literal(&self.family),
            local_address: self.local_address.clone(),
            local_port: literal(&self.local_port),
        };

        match &self.host {
            Some(host) if !self.record_host => ConnectArgs::OptionsHost(options, host.clone()),
            _ => ConnectArgs::Options(options),
        }
    }

    /// Execute the check command. Returns whether the call was accepted.
    pub fn execute(&self, settings: &AppSettings) -> CliResult<bool> {
        let outcome = Outcome::evaluate(0, self.to_args());
        let accepted = outcome.is_accepted();

        let mut report = Report::default();
        report.push(outcome);

        let format = self.output.unwrap_or(settings.default_output_format);
        output::print_report(&report, format)?;

        Ok(accepted)
    }
}

fn parse_literal(s: &str) -> ArgValue {
    match s.parse() {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
