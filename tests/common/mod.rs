//! Shared helpers for integration tests.

#![allow(dead_code)]

use dialargs::{ArgValue, CallShape, ConnectArgs};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Asserts, when dropped, that it was hit exactly the expected number of times.
pub struct CallCount {
    name: &'static str,
    expected: usize,
    actual: Arc<AtomicUsize>,
}

impl CallCount {
    pub fn exactly(name: &'static str, expected: usize) -> Self {
        Self {
            name,
            expected,
            actual: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn never(name: &'static str) -> Self {
        Self::exactly(name, 0)
    }

    /// A cloneable handle that records hits against this counter.
    pub fn handle(&self) -> CallHandle {
        CallHandle(Arc::clone(&self.actual))
    }

    pub fn count(&self) -> usize {
        self.actual.load(Ordering::SeqCst)
    }
}

impl Drop for CallCount {
    fn drop(&mut self) {
        if !std::thread::panicking() {
            assert_eq!(
                self.count(),
                self.expected,
                "{} was called {} times, expected {}",
                self.name,
                self.count(),
                self.expected
            );
        }
    }
}

#[derive(Clone)]
pub struct CallHandle(Arc<AtomicUsize>);

impl CallHandle {
    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Build every call shape for a port value and host.
pub fn all_shapes(port: impl Into<ArgValue>, host: &str) -> Vec<ConnectArgs> {
    let port = port.into();
    CallShape::ALL
        .iter()
        .map(|&shape| ConnectArgs::with_shape(shape, port.clone(), Some(host)))
        .collect()
}

