//! Connect call shapes.
//!
//! A connect-style API accepts the same logical request in four syntactic
//! forms. `ConnectArgs` names each form explicitly, and
//! [`ConnectArgs::into_options`] reduces all of them to one `ConnectOptions`
//! record before any validation runs.

use crate::error::{ValidationError, ValidationResult};
use crate::types::ArgValue;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// An options record as supplied by the caller, not yet validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectOptions {
    pub port: ArgValue,
    pub host: Option<String>,
    pub hints: ArgValue,
    pub family: ArgValue,
    pub local_address: Option<String>,
    pub local_port: ArgValue,
}

impl ConnectOptions {
    /// Create an options record carrying only a port.
    pub fn new(port: impl Into<ArgValue>) -> Self {
        Self {
            port: port.into(),
            ..Self::default()
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn with_hints(mut self, hints: impl Into<ArgValue>) -> Self {
        self.hints = hints.into();
        self
    }

    pub fn with_family(mut self, family: impl Into<ArgValue>) -> Self {
        self.family = family.into();
        self
    }

    pub fn with_local_address(mut self, address: impl Into<String>) -> Self {
        self.local_address = Some(address.into());
        self
    }

    pub fn with_local_port(mut self, port: impl Into<ArgValue>) -> Self {
        self.local_port = port.into();
        self
    }

    /// Read an options record from an object's fields.
    ///
    /// Unknown keys are ignored. `host` and `localAddress` must be strings
    /// when present.
    pub fn from_record(fields: &BTreeMap<String, ArgValue>) -> ValidationResult<Self> {
        let field = |key: &str| fields.get(key).cloned().unwrap_or_default();

        Ok(Self {
            port: field("port"),
            host: string_field(fields, "host")?,
            hints: field("hints"),
            family: field("family"),
            local_address: string_field(fields, "localAddress")?,
            local_port: field("localPort"),
        })
    }

    /// Render this record back into an object, omitting unset fields.
    pub fn to_record(&self) -> ArgValue {
        let mut fields = BTreeMap::new();
        let mut put = |key: &str, value: ArgValue| {
            if !value.is_undefined() {
                fields.insert(key.to_string(), value);
            }
        };
        put("port", self.port.clone());
        put("host", self.host.clone().map(ArgValue::String).unwrap_or_default());
        put("hints", self.hints.clone());
        put("family", self.family.clone());
        put(
            "localAddress",
            self.local_address.clone().map(ArgValue::String).unwrap_or_default(),
        );
        put("localPort", self.local_port.clone());
        ArgValue::Object(fields)
    }
}

fn string_field(
    fields: &BTreeMap<String, ArgValue>,
    key: &'static str,
) -> ValidationResult<Option<String>> {
    match fields.get(key) {
        None | Some(ArgValue::Undefined) | Some(ArgValue::Null) => Ok(None),
        Some(ArgValue::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ValidationError::InvalidArgType {
            name: key,
            expected: "string",
            received: other.clone(),
        }),
    }
}

/// The syntactic form a connect call used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CallShape {
    /// `(port)`
    Port,
    /// `(port, host)`
    PortHost,
    /// `({ port, ... })`
    Options,
    /// `({ port, ... }, host)`
    OptionsHost,
}

impl CallShape {
    pub const ALL: [CallShape; 4] = [
        CallShape::Port,
        CallShape::PortHost,
        CallShape::Options,
        CallShape::OptionsHost,
    ];
}

impl fmt::Display for CallShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Port => write!(f, "(port)"),
            Self::PortHost => write!(f, "(port, host)"),
            Self::Options => write!(f, "(options)"),
            Self::OptionsHost => write!(f, "(options, host)"),
        }
    }
}

/// Arguments to a connect call, in one of the four supported shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectArgs {
    Port(ArgValue),
    PortHost(ArgValue, String),
    Options(ConnectOptions),
    /// An options record followed by a host that overrides the record's host.
    OptionsHost(ConnectOptions, String),
}

impl ConnectArgs {
    /// Build the given shape for a port and optional host.
    ///
    /// Shapes without a host slot drop `host`; shapes with one use
    /// `"localhost"` when `host` is `None`.
    pub fn with_shape(shape: CallShape, port: impl Into<ArgValue>, host: Option<&str>) -> Self {
        let port = port.into();
        let host_or_default = || host.unwrap_or("localhost").to_string();
        match shape {
            CallShape::Port => Self::Port(port),
            CallShape::PortHost => Self::PortHost(port, host_or_default()),
            CallShape::Options => {
                let options = ConnectOptions::new(port);
                Self::Options(match host {
                    Some(host) => options.with_host(host),
                    None => options,
                })
            }
            CallShape::OptionsHost => {
                Self::OptionsHost(ConnectOptions::new(port), host_or_default())
            }
        }
    }

    /// Build arguments from a positional argument list.
    ///
    /// A leading object is an options record; anything else is a port. The
    /// optional second argument is the host and must be a string. Empty
    /// lists and lists longer than two are rejected as a whole.
    pub fn from_positional(args: Vec<ArgValue>) -> ValidationResult<Self> {
        if args.is_empty() || args.len() > 2 {
            return Err(ValidationError::InvalidArgType {
                name: "args",
                expected: "one or two arguments",
                received: ArgValue::Array(args),
            });
        }
        let mut iter = args.into_iter();
        let first = iter.next().unwrap_or_default();
        let host = match iter.next() {
            Some(ArgValue::String(host)) => Some(host),
            Some(other) if !other.is_undefined() => {
                debug!(received = %other, "rejecting non-string host argument");
                return Err(ValidationError::InvalidArgType {
                    name: "host",
                    expected: "string",
                    received: other,
                });
            }
            _ => None,
        };

        let args = match (first, host) {
            (ArgValue::Object(fields), Some(host)) => {
                Self::OptionsHost(ConnectOptions::from_record(&fields)?, host)
            }
            (ArgValue::Object(fields), None) => {
                Self::Options(ConnectOptions::from_record(&fields)?)
            }
            (port, Some(host)) => Self::PortHost(port, host),
            (port, None) => Self::Port(port),
        };
        Ok(args)
    }

    /// Build arguments from a JSON array of positional arguments.
    pub fn from_json(value: serde_json::Value) -> ValidationResult<Self> {
        match ArgValue::from(value) {
            ArgValue::Array(items) => Self::from_positional(items),
            other => Err(ValidationError::InvalidArgType {
                name: "args",
                expected: "array",
                received: other,
            }),
        }
    }

    pub fn shape(&self) -> CallShape {
        match self {
            Self::Port(_) => CallShape::Port,
            Self::PortHost(..) => CallShape::PortHost,
            Self::Options(_) => CallShape::Options,
            Self::OptionsHost(..) => CallShape::OptionsHost,
        }
    }

    /// Reduce any shape to a single options record.
    pub fn into_options(self) -> ConnectOptions {
        match self {
            Self::Port(port) => ConnectOptions::new(port),
            Self::PortHost(port, host) => ConnectOptions::new(port).with_host(host),
            Self::Options(options) => options,
            Self::OptionsHost(options, host) => options.with_host(host),
        }
    }

    /// The arguments as a positional list.
    pub fn to_positional(&self) -> Vec<ArgValue> {
        match self {
            Self::Port(port) => vec![port.clone()],
            Self::PortHost(port, host) => vec![port.clone(), ArgValue::from(host.as_str())],
            Self::Options(options) => vec![options.to_record()],
            Self::OptionsHost(options, host) => {
                vec![options.to_record(), ArgValue::from(host.as_str())]
            }
        }
    }
}

impl From<ConnectOptions> for ConnectArgs {
    fn from(options: ConnectOptions) -> Self {
        Self::Options(options)
    }
}

impl fmt::Display for ConnectArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.to_positional().iter().map(|v| v.to_string()).collect();
        write!(f, "({})", parts.join(", "))
    }
}
