//! Test builders — ergonomic constructors for fields, contexts, and capture
//! loggers.
//!
//! These helpers optimise for readability in test assertions, not for
//! production use.

#![allow(dead_code)]

use kvlog::{CaptureSink, Context, Field, Level, Logger};
use std::sync::Arc;

/// Shorthand for [`Field::new`].
pub fn field(name: &str, value: impl Into<serde_json::Value>) -> Field {
    Field::new(name, value)
}

/// A context wired to a fresh in-memory capture logger at `Level::Debug`,
/// plus the capture handle for assertions.
pub fn capture_context() -> (Context, CaptureSink) {
    capture_context_at(Level::Debug)
}

/// Same as [`capture_context`], with an explicit level threshold.
pub fn capture_context_at(level: Level) -> (Context, CaptureSink) {
    let sink = CaptureSink::new();
    let logger = Logger::new(Arc::new(sink.clone()), level);
    (Context::new().with_logger(logger), sink)
}

/// A deterministic error with a source chain, for bare-error arguments.
#[derive(Debug)]
pub struct TestError(pub &'static str);

impl std::fmt::Display for TestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for TestError {}
