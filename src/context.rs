//! Context — the immutable carrier of accumulated fields and the logger
//! override.
//!
//! A context is a value: deriving a child copies cheaply (the field state is
//! a shared `Arc` snapshot), and nothing a child does propagates backward to
//! its parent or sideways to siblings. The same parent may therefore be used
//! concurrently from multiple execution paths without coordination.

use kvlog_core::Field;
use kvlog_sink::{default_logger, Logger};
use std::sync::Arc;

/// A request-scoped logging context.
///
/// Created empty, extended via [`add_fields`](crate::add_fields), and read by
/// every leveled log statement. Optionally carries a logger override; without
/// one, the process default logger is used.
#[derive(Debug, Clone, Default)]
pub struct Context {
    fields: Option<Arc<Vec<Field>>>,
    logger: Option<Logger>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated field snapshot; empty when nothing has been added.
    pub fn fields(&self) -> &[Field] {
        self.fields.as_deref().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Derive a context that logs through `logger` instead of the process
    /// default.
    pub fn with_logger(&self, logger: Logger) -> Context {
        Context {
            fields: self.fields.clone(),
            logger: Some(logger),
        }
    }

    /// The logger this context resolves to.
    pub fn logger(&self) -> Logger {
        self.logger.clone().unwrap_or_else(default_logger)
    }

    /// Derive a context whose logger name gains a dot-separated segment.
    pub fn named(&self, segment: &str) -> Context {
        self.with_logger(self.logger().named(segment))
    }

    /// Derive a context holding `fields` as its new state snapshot.
    pub(crate) fn with_field_state(&self, fields: Vec<Field>) -> Context {
        Context {
            fields: Some(Arc::new(fields)),
            logger: self.logger.clone(),
        }
    }
}
