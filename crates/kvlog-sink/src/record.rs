//! The record handed from the logger handle to a sink.

use chrono::{DateTime, Utc};
use kvlog_core::{Field, Level};

/// One fully resolved log event: severity, message, and the merged field
/// sequence, stamped at emission time.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub ts: DateTime<Utc>,
    pub level: Level,
    /// Dotted logger name, when the emitting logger is named.
    pub logger: Option<String>,
    pub message: String,
    pub fields: Vec<Field>,
}

impl Record {
    pub fn new(level: Level, message: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            ts: Utc::now(),
            level,
            logger: None,
            message: message.into(),
            fields,
        }
    }

    pub fn with_logger(mut self, name: impl Into<String>) -> Self {
        self.logger = Some(name.into());
        self
    }

    /// Override the emission timestamp. Intended for deterministic tests.
    pub fn with_ts(mut self, ts: DateTime<Utc>) -> Self {
        self.ts = ts;
        self
    }
}
