//! # dialargs - Connect-Argument Normalization
//!
//! A connect-style networking API usually accepts the same request in
//! several forms: a bare port, a port and a host, an options record, or an
//! options record followed by a host. dialargs reduces all of them to one
//! validated [`NormalizedTarget`] before any connection is attempted, or
//! rejects them with a typed [`ValidationError`].
//!
//! ## Features
//!
//! - **One sum type for four call shapes**: [`ConnectArgs`]
//! - **Port coercion**: numbers, decimal strings and `0x`/`0o`/`0b` strings
//! - **Option validation**: resolution hints, address family, local binding
//! - **Synchronous failures**: validation never waits on the network
//! - **Dialer seam**: [`dial::connect`] hands valid targets to a [`Dialer`]
//!
//! ## Example Usage
//!
//! ```rust
//! use dialargs::{normalize, ArgValue, ConnectArgs, ConnectOptions, Port};
//!
//! let target = normalize(ConnectArgs::PortHost(ArgValue::from("0x50"), "localhost".into()))
//!     .unwrap();
//! assert_eq!(target.port, Port::new(80));
//!
//! let options = ConnectOptions::new(80).with_host("localhost");
//! assert_eq!(normalize(ConnectArgs::Options(options)).unwrap(), target);
//!
//! let err = normalize(ConnectArgs::Port(ArgValue::from(65536))).unwrap_err();
//! assert_eq!(err.code(), "bad_port");
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Argument values, call shapes and the normalized target
//! - [`normalize`] - Validation and coercion rules
//! - [`dial`] - The `Dialer` trait and the validated hand-off
//! - [`config`] - Settings management
//! - [`error`] - Error types
//! - [`output`] - Output formatting utilities
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod config;
pub mod dial;
pub mod error;
pub mod normalize;
pub mod output;
pub mod types;

// Re-export commonly used types
pub use dial::{connect, Dialer};
pub use error::{DialError, ValidationError, ValidationErrorKind};
pub use normalize::normalize;
pub use types::{
    AddressFamily, ArgValue, CallShape, ConnectArgs, ConnectOptions, NormalizedTarget, Port,
    ResolutionHints,
};
