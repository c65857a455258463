//! Hand-off of normalized targets to a networking collaborator.
//!
//! This crate does not open sockets. A [`Dialer`] implementation owns
//! resolution and transport; [`connect`] guarantees it only ever sees a
//! validated [`NormalizedTarget`].

use crate::error::{DialResult, ValidationResult};
use crate::normalize::normalize;
use crate::types::{ConnectArgs, NormalizedTarget};
use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt};
use tracing::debug;

/// A networking collaborator that can dial a normalized target.
///
/// Failures reported here (refused, unreachable, timed out) are network
/// failures and are never used for argument problems.
#[async_trait]
pub trait Dialer: Send + Sync {
    /// The established connection handle.
    type Connection: Send;

    /// Attempt to establish a connection to `target`.
    async fn dial(&self, target: &NormalizedTarget) -> DialResult<Self::Connection>;
}

/// Validate `args` and, if they are valid, prepare a dial.
///
/// Normalization runs before this function returns, so a validation error is
/// reported synchronously and `dialer` is never invoked for it. The returned
/// future performs the dial when polled.
pub fn connect<'a, D: Dialer>(
    dialer: &'a D,
    args: ConnectArgs,
) -> ValidationResult<BoxFuture<'a, DialResult<D::Connection>>> {
    let target = normalize(args)?;
    debug!(%target, hints = %target.lookup_hints(), "dispatching connect target");

    Ok(async move { dialer.dial(&target).await }.boxed())
}
