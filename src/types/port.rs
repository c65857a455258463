//! Validated port numbers.
//!
//! The `Port` newtype ensures values handed to a dialer are always valid
//! port numbers (0-65535). Port 0 is representable: it is a legal connect
//! argument even though no service can listen on it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated network port number (0-65535).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Port(u16);

impl Port {
    /// Minimum valid port number.
    pub const MIN: u16 = 0;
    /// Maximum valid port number.
    pub const MAX: u16 = 65535;

    /// Create a port from a raw `u16`. Every `u16` is a valid port.
    #[inline]
    pub const fn new(port: u16) -> Self {
        Self(port)
    }

    /// Interpret a coerced numeric value as a port.
    ///
    /// Returns `None` for `NaN`, infinities, fractional values and anything
    /// outside 0-65535. Negative zero is accepted as port 0.
    pub fn from_number(value: f64) -> Option<Self> {
        if !value.is_finite() || value.fract() != 0.0 {
            return None;
        }
        if value < f64::from(Self::MIN) || value > f64::from(Self::MAX) {
            return None;
        }
        Some(Self(value as u16))
    }

    /// Get the raw port number.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Check if this is a privileged port (< 1024).
    #[inline]
    pub const fn is_privileged(self) -> bool {
        self.0 < 1024
    }

    /// Check if this port falls in the IANA dynamic range (49152-65535).
    #[inline]
    pub const fn is_ephemeral(self) -> bool {
        self.0 >= 49152
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for Port {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<Port> for u16 {
    fn from(port: Port) -> Self {
        port.0
    }
}
