//! Address-resolution hints and address family selection.
//!
//! Hint flag values come from the platform's `getaddrinfo` constants so a
//! bitmask accepted here means the same thing to the resolver that later
//! consumes it.

use crate::types::ArgValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

#[cfg(unix)]
mod flags {
    pub const ADDRCONFIG: u32 = libc::AI_ADDRCONFIG as u32;
    pub const V4MAPPED: u32 = libc::AI_V4MAPPED as u32;
    pub const ALL: u32 = libc::AI_ALL as u32;
}

#[cfg(not(unix))]
mod flags {
    pub const ADDRCONFIG: u32 = 0x0400;
    pub const V4MAPPED: u32 = 0x0800;
    pub const ALL: u32 = 0x0100;
}

/// A bitmask of recognized address-resolution hint flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolutionHints(u32);

impl ResolutionHints {
    /// No hints.
    pub const NONE: Self = Self(0);
    /// Only return address families configured on the local system.
    pub const ADDRCONFIG: Self = Self(flags::ADDRCONFIG);
    /// Map IPv4 results to IPv6 when IPv6 was requested and none were found.
    pub const V4MAPPED: Self = Self(flags::V4MAPPED);
    /// With `V4MAPPED`, return both IPv6 and mapped IPv4 addresses.
    pub const ALL: Self = Self(flags::ALL);
    /// Union of every recognized flag.
    pub const RECOGNIZED: Self = Self(flags::ADDRCONFIG | flags::V4MAPPED | flags::ALL);

    /// Build hints from raw bits, rejecting any bit outside the recognized set.
    pub fn from_bits(bits: i64) -> Option<Self> {
        if bits < 0 || bits & !i64::from(Self::RECOGNIZED.0) != 0 {
            None
        } else {
            Some(Self(bits as u32))
        }
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every flag in `other` is also set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for ResolutionHints {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ResolutionHints {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for ResolutionHints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "0");
        }
        let names: Vec<&str> = [
            (Self::ADDRCONFIG, "ADDRCONFIG"),
            (Self::V4MAPPED, "V4MAPPED"),
            (Self::ALL, "ALL"),
        ]
        .iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, name)| *name)
        .collect();
        write!(f, "{}", names.join("|"))
    }
}

/// Address family preference for resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    /// No preference; either family may be returned.
    #[default]
    Any,
    V4,
    V6,
}

impl AddressFamily {
    /// Interpret a `family` option value.
    ///
    /// Accepts `0`, `4`, `6`, `"IPv4"` and `"IPv6"`; `undefined` and `null`
    /// mean no preference.
    pub fn from_arg(value: &ArgValue) -> Option<Self> {
        match value {
            ArgValue::Undefined | ArgValue::Null => Some(Self::Any),
            ArgValue::Number(n) if *n == 0.0 => Some(Self::Any),
            ArgValue::Number(n) if *n == 4.0 => Some(Self::V4),
            ArgValue::Number(n) if *n == 6.0 => Some(Self::V6),
            ArgValue::String(s) if s == "IPv4" => Some(Self::V4),
            ArgValue::String(s) if s == "IPv6" => Some(Self::V6),
            _ => None,
        }
    }

    /// Numeric family value (0, 4 or 6).
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Any => 0,
            Self::V4 => 4,
            Self::V6 => 6,
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "any"),
            Self::V4 => write!(f, "IPv4"),
            Self::V6 => write!(f, "IPv6"),
        }
    }
}
