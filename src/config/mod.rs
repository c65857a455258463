//! Configuration management for dialargs.
//!
//! Provides XDG-compliant storage for application settings.

mod settings;

pub use settings::{AppSettings, Paths};
