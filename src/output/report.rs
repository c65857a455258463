//! Per-call normalization outcomes collected for display.

use crate::error::{ValidationError, ValidationErrorKind};
use crate::normalize::normalize;
use crate::types::{ArgValue, CallShape, ConnectArgs, NormalizedTarget};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Accepted,
    Rejected,
}

/// The parts of a validation error worth reporting.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorSummary {
    pub kind: ValidationErrorKind,
    pub name: &'static str,
    pub received: ArgValue,
    pub message: String,
}

impl From<&ValidationError> for ErrorSummary {
    fn from(err: &ValidationError) -> Self {
        Self {
            kind: err.kind(),
            name: err.name(),
            received: err.received().clone(),
            message: err.to_string(),
        }
    }
}

/// Result of normalizing one call.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub index: usize,
    /// Call shape, when the input could be read as one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<CallShape>,
    pub input: String,
    pub status: OutcomeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<NormalizedTarget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorSummary>,
}

impl Outcome {
    /// Normalize `args` and record the result.
    pub fn evaluate(index: usize, args: ConnectArgs) -> Self {
        let shape = Some(args.shape());
        let input = args.to_string();
        match normalize(args) {
            Ok(target) => Self {
                index,
                shape,
                input,
                status: OutcomeStatus::Accepted,
                target: Some(target),
                error: None,
            },
            Err(err) => Self {
                index,
                shape,
                input,
                status: OutcomeStatus::Rejected,
                target: None,
                error: Some(ErrorSummary::from(&err)),
            },
        }
    }

    /// Record input that was rejected before it could be read as a call shape.
    pub fn unreadable(index: usize, input: String, err: &ValidationError) -> Self {
        Self {
            index,
            shape: None,
            input,
            status: OutcomeStatus::Rejected,
            target: None,
            error: Some(ErrorSummary::from(err)),
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.status == OutcomeStatus::Accepted
    }
}

/// A collection of outcomes with running totals.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub accepted: usize,
    pub rejected: usize,
    pub outcomes: Vec<Outcome>,
}

impl Report {
    pub fn push(&mut self, outcome: Outcome) {
        if outcome.is_accepted() {
            self.accepted += 1;
        } else {
            self.rejected += 1;
        }
        self.outcomes.push(outcome);
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

impl FromIterator<Outcome> for Report {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        let mut report = Self::default();
        for outcome in iter {
            report.push(outcome);
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_totals() {
        let report: Report = [
            ConnectArgs::Port(ArgValue::from(80)),
            ConnectArgs::Port(ArgValue::Null),
            ConnectArgs::PortHost(ArgValue::from("0x1F90"), "localhost".into()),
        ]
        .into_iter()
        .enumerate()
        .map(|(index, args)| Outcome::evaluate(index, args))
        .collect();

        assert_eq!(report.len(), 3);
        assert_eq!(report.accepted, 2);
        assert_eq!(report.rejected, 1);

        let rejected = &report.outcomes[1];
        assert_eq!(rejected.input, "(null)");
        let error = rejected.error.as_ref().unwrap();
        assert_eq!(error.kind, ValidationErrorKind::InvalidArgType);
        assert_eq!(error.name, "port");
    }
}
