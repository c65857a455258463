//! JSON output formatting.

use super::report::Report;
use std::io::{self, Write};

/// Write a report in JSON format.
pub fn write_json<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    writeln!(out, "{}", json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Outcome;
    use crate::types::{ArgValue, ConnectArgs};

    #[test]
    fn test_json_output() {
        let mut report = Report::default();
        report.push(Outcome::evaluate(
            0,
            ConnectArgs::PortHost(ArgValue::from("80"), "localhost".into()),
        ));
        report.push(Outcome::evaluate(1, ConnectArgs::Port(ArgValue::Number(f64::NAN))));

        let mut buf = Vec::new();
        write_json(&mut buf, &report).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["accepted"], 1);
        assert_eq!(value["outcomes"][0]["status"], "accepted");
        assert_eq!(value["outcomes"][0]["target"]["port"], 80);
        assert_eq!(value["outcomes"][0]["target"]["host"], "localhost");
        assert_eq!(value["outcomes"][1]["error"]["kind"], "bad_port");
        assert_eq!(value["outcomes"][1]["error"]["received"], "NaN");
    }
}
