//! Error types for dialargs.
//!
//! Uses `thiserror` for ergonomic error definitions. Validation failures and
//! dial failures are separate types: the former are raised before any dial is
//! attempted, the latter only by a [`Dialer`](crate::dial::Dialer).

use crate::types::{same_value_zero, ArgValue};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Rejection of connect arguments before any dial is attempted.
#[derive(Error, Debug, Clone)]
pub enum ValidationError {
    /// The argument has the wrong type (booleans, arrays, objects, null).
    #[error("the \"{name}\" argument must be of type {expected}, received {received}")]
    InvalidArgType {
        name: &'static str,
        expected: &'static str,
        received: ArgValue,
    },

    /// The port has an acceptable type but not a usable value.
    #[error("{name} should be >= 0 and < 65536, received {received}")]
    BadPort {
        name: &'static str,
        received: ArgValue,
        /// The attempted numeric interpretation, when one was made.
        coerced: Option<f64>,
    },

    /// An option field holds a value outside its accepted set.
    #[error("the argument '{name}' is invalid, received {received}")]
    InvalidOptionValue {
        name: &'static str,
        received: ArgValue,
    },
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::InvalidArgType { .. } => ValidationErrorKind::InvalidArgType,
            Self::BadPort { .. } => ValidationErrorKind::BadPort,
            Self::InvalidOptionValue { .. } => ValidationErrorKind::InvalidOptionValue,
        }
    }

    /// Stable machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Name of the offending argument or option.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidArgType { name, .. }
            | Self::BadPort { name, .. }
            | Self::InvalidOptionValue { name, .. } => *name,
        }
    }

    /// The offending value as supplied.
    pub fn received(&self) -> &ArgValue {
        match self {
            Self::InvalidArgType { received, .. }
            | Self::BadPort { received, .. }
            | Self::InvalidOptionValue { received, .. } => received,
        }
    }
}

impl PartialEq for ValidationError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::InvalidArgType { name: a, expected: ea, received: ra },
                Self::InvalidArgType { name: b, expected: eb, received: rb },
            ) => a == b && ea == eb && ra == rb,
            (
                Self::BadPort { name: a, received: ra, coerced: ca },
                Self::BadPort { name: b, received: rb, coerced: cb },
            ) => {
                let coerced_eq = match (ca, cb) {
                    (Some(x), Some(y)) => same_value_zero(*x, *y),
                    (None, None) => true,
                    _ => false,
                };
                a == b && ra == rb && coerced_eq
            }
            (
                Self::InvalidOptionValue { name: a, received: ra },
                Self::InvalidOptionValue { name: b, received: rb },
            ) => a == b && ra == rb,
            _ => false,
        }
    }
}

/// Tag of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    InvalidArgType,
    BadPort,
    InvalidOptionValue,
}

impl ValidationErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidArgType => "invalid_arg_type",
            Self::BadPort => "bad_port",
            Self::InvalidOptionValue => "invalid_option_value",
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Network-level failure reported by a dialer once a target is dialed.
#[derive(Error, Debug)]
pub enum DialError {
    #[error("Connection refused")]
    ConnectionRefused,

    #[error("Connection timed out")]
    Timeout,

    #[error("Host unreachable")]
    HostUnreachable,

    #[error("Network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("Failed to resolve '{host}': {reason}")]
    ResolutionFailed { host: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine configuration directory")]
    DirectoryNotFound,

    #[error("Failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("Failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    #[error("Invalid configuration format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors surfaced by the command-line interface.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid batch file {path}: {reason}")]
    InvalidBatch { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type alias for dial operations.
pub type DialResult<T> = Result<T, DialError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_code() {
        let err = ValidationError::BadPort {
            name: "port",
            received: ArgValue::from(-1),
            coerced: Some(-1.0),
        };
        assert_eq!(err.kind(), ValidationErrorKind::BadPort);
        assert_eq!(err.code(), "bad_port");
        assert_eq!(err.name(), "port");
        assert_eq!(err.received(), &ArgValue::from(-1));
    }

    #[test]
    fn test_nan_errors_compare_equal() {
        let make = || ValidationError::BadPort {
            name: "port",
            received: ArgValue::Number(f64::NAN),
            coerced: Some(f64::NAN),
        };
        assert_eq!(make(), make());
    }

    #[test]
    fn test_messages() {
        let err = ValidationError::InvalidArgType {
            name: "port",
            expected: "number or string",
            received: ArgValue::Bool(true),
        };
        assert_eq!(
            err.to_string(),
            "the \"port\" argument must be of type number or string, received true"
        );

        let err = ValidationError::InvalidOptionValue {
            name: "hints",
            received: ArgValue::from(1066),
        };
        assert_eq!(err.to_string(), "the argument 'hints' is invalid, received 1066");
    }
}
