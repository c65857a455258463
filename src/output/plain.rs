//! Plain text output formatting.
//!
//! Produces human-readable output with colors and formatting.

use super::report::{Outcome, Report};
use console::style;
use std::io::{self, Write};

/// Write a report in human-readable plain text format.
pub fn write_plain<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    for outcome in &report.outcomes {
        write_outcome(out, outcome)?;
    }

    if report.len() > 1 {
        writeln!(out)?;
        writeln!(
            out,
            "  {} {} calls: {} accepted, {} rejected",
            style("Summary:").bold(),
            report.len(),
            style(report.accepted).green().bold(),
            style(report.rejected).red()
        )?;
    }

    Ok(())
}

fn write_outcome<W: Write>(out: &mut W, outcome: &Outcome) -> io::Result<()> {
    let shape = outcome
        .shape
        .map(|shape| shape.to_string())
        .unwrap_or_else(|| "-".to_string());

    match (&outcome.target, &outcome.error) {
        (Some(target), _) => {
            writeln!(
                out,
                "  {} {:<16} {}",
                style("ok").green().bold(),
                shape,
                outcome.input
            )?;
            writeln!(
                out,
                "     {} {}  {} {}  {} {}  {} {}",
                style("port").dim(),
                target.port,
                style("host").dim(),
                target.host.as_deref().unwrap_or("(default)"),
                style("hints").dim(),
                target.hints,
                style("family").dim(),
                target.family
            )?;
        }
        (None, Some(error)) => {
            writeln!(
                out,
                "  {} {:<16} {}",
                style("err").red().bold(),
                shape,
                outcome.input
            )?;
            writeln!(
                out,
                "     {} {}",
                style(error.kind).yellow(),
                error.message
            )?;
        }
        (None, None) => {}
    }

    Ok(())
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Print an informational message.
pub fn print_info(msg: &str) {
    eprintln!("{} {}", style("Info:").cyan().bold(), msg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ArgValue, ConnectArgs};

    #[test]
    fn test_plain_output() {
        console::set_colors_enabled(false);

        let mut report = Report::default();
        report.push(Outcome::evaluate(0, ConnectArgs::Port(ArgValue::from(80))));
        report.push(Outcome::evaluate(1, ConnectArgs::Port(ArgValue::from(65536))));

        let mut buf = Vec::new();
        write_plain(&mut buf, &report).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("ok (port)"));
        assert!(text.contains("port 80"));
        assert!(text.contains("host (default)"));
        assert!(text.contains("err (port)"));
        assert!(text.contains("bad_port"));
        assert!(text.contains("1 accepted, 1 rejected"));
    }
}
