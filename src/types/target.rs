//! The canonical output of normalization.

use crate::types::{AddressFamily, ArgValue, ConnectOptions, Port, ResolutionHints};
use serde::Serialize;
use std::fmt;
use std::net::IpAddr;

/// A validated connect target, ready to hand to a dialer.
///
/// Every field holds a checked value; the only way to build one from caller
/// input is [`normalize`](crate::normalize::normalize).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NormalizedTarget {
    pub port: Port,
    /// Host exactly as supplied. `None` when the caller gave none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    pub hints: ResolutionHints,
    pub family: AddressFamily,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_address: Option<IpAddr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_port: Option<Port>,
}

impl NormalizedTarget {
    /// Host dialed when the caller supplies none.
    pub const DEFAULT_HOST: &'static str = "localhost";

    /// Create a target for a port with no host and default options.
    pub fn new(port: Port) -> Self {
        Self {
            port,
            host: None,
            hints: ResolutionHints::NONE,
            family: AddressFamily::Any,
            local_address: None,
            local_port: None,
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// The host to resolve, falling back to [`Self::DEFAULT_HOST`].
    pub fn host_or_default(&self) -> &str {
        self.host.as_deref().unwrap_or(Self::DEFAULT_HOST)
    }

    /// Hints to pass to address resolution.
    ///
    /// Without a family preference or explicit hints, resolution is limited
    /// to configured address families (`ADDRCONFIG`), except on Windows
    /// where that flag is unreliable.
    pub fn lookup_hints(&self) -> ResolutionHints {
        if self.family == AddressFamily::Any && self.hints.is_empty() && !cfg!(windows) {
            ResolutionHints::ADDRCONFIG
        } else {
            self.hints
        }
    }

    /// Re-express this target as an options record.
    ///
    /// Normalizing the result yields this target again.
    pub fn to_options(&self) -> ConnectOptions {
        ConnectOptions {
            port: ArgValue::from(self.port.as_u16()),
            host: self.host.clone(),
            hints: if self.hints.is_empty() {
                ArgValue::Undefined
            } else {
                ArgValue::from(self.hints.bits())
            },
            family: match self.family {
                AddressFamily::Any => ArgValue::Undefined,
                family => ArgValue::from(u32::from(family.as_u8())),
            },
            local_address: self.local_address.map(|addr| addr.to_string()),
            local_port: self
                .local_port
                .map(|port| ArgValue::from(port.as_u16()))
                .unwrap_or_default(),
        }
    }
}

impl fmt::Display for NormalizedTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let host = self.host_or_default();
        if host.contains(':') {
            write!(f, "[{}]:{}", host, self.port)
        } else {
            write!(f, "{}:{}", host, self.port)
        }
    }
}
