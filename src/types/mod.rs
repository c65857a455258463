//! Core type definitions for connect arguments and their normalized form.
//!
//! Raw caller input is modelled by [`ArgValue`] and [`ConnectArgs`]; the
//! validated result is a [`NormalizedTarget`] whose fields cannot hold
//! invalid values.

mod args;
mod hints;
mod port;
mod target;
mod value;

pub use args::{CallShape, ConnectArgs, ConnectOptions};
pub use hints::{AddressFamily, ResolutionHints};
pub use port::Port;
pub use target::NormalizedTarget;
pub use value::{format_number, string_to_number, ArgValue};

pub(crate) use value::{is_blank, same_value_zero};
