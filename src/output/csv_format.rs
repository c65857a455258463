//! CSV output formatting.

use super::report::Report;
use std::io::{self, Write};

/// Write a report in CSV format, one row per call.
pub fn write_csv<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record([
        "index", "shape", "input", "status", "port", "host", "hints", "family", "error_kind",
        "error_name", "message",
    ])?;

    for outcome in &report.outcomes {
        let shape = outcome.shape.map(|s| s.to_string()).unwrap_or_default();
        let status = match outcome.status {
            super::OutcomeStatus::Accepted => "accepted",
            super::OutcomeStatus::Rejected => "rejected",
        };
        let (port, host, hints, family) = match &outcome.target {
            Some(target) => (
                target.port.to_string(),
                target.host.clone().unwrap_or_default(),
                target.hints.bits().to_string(),
                target.family.as_u8().to_string(),
            ),
            None => Default::default(),
        };
        let (kind, name, message) = match &outcome.error {
            Some(error) => (
                error.kind.to_string(),
                error.name.to_string(),
                error.message.clone(),
            ),
            None => Default::default(),
        };

        let index = outcome.index.to_string();
        wtr.write_record([
            index.as_str(),
            shape.as_str(),
            outcome.input.as_str(),
            status,
            port.as_str(),
            host.as_str(),
            hints.as_str(),
            family.as_str(),
            kind.as_str(),
            name.as_str(),
            message.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Outcome;
    use crate::types::{ArgValue, ConnectArgs, ConnectOptions};

    #[test]
    fn test_csv_output() {
        let mut report = Report::default();
        report.push(Outcome::evaluate(
            0,
            ConnectArgs::Options(ConnectOptions::new(8080).with_host("localhost")),
        ));
        report.push(Outcome::evaluate(1, ConnectArgs::Port(ArgValue::Bool(false))));

        let mut buf = Vec::new();
        write_csv(&mut buf, &report).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("index,shape,input,status"));
        assert!(lines[1].contains("accepted,8080,localhost,0,0"));
        assert!(lines[2].contains("rejected"));
        assert!(lines[2].contains("invalid_arg_type,port"));
    }
}
