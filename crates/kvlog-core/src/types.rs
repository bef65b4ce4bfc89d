//! Core types for kvlog-core.
//!
//! This module defines the fundamental data structures shared across all
//! layers: the canonical [`Field`], the uninterpreted [`RawArg`], and the
//! severity [`Level`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reserved field name under which a bare error argument is attached.
pub const ERROR_FIELD_NAME: &str = "error";

/// A named, typed diagnostic value attached to a log line.
///
/// Identity for merge purposes is `name` alone, case-sensitive. The value is
/// stored type-erased as a [`serde_json::Value`] so any serializable scalar
/// or structured value fits.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub value: Value,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Build the reserved `"error"` field from an error, rendering its full
    /// source chain (`outer: middle: root`).
    pub fn from_error(error: impl std::error::Error) -> Self {
        Self::new(ERROR_FIELD_NAME, render_error_chain(&error))
    }
}

/// One uninterpreted element of a logging argument list, before
/// normalisation. Consumed once; carries no persistent identity.
///
/// Call sites mix pre-built fields, bare errors, and ad hoc `"key", value`
/// pairs; the normalizer sorts out which is which positionally.
#[derive(Debug, Clone, PartialEq)]
pub enum RawArg {
    /// A pre-built field, passed through as-is.
    Field(Field),
    /// A bare error, already rendered to its display chain.
    Error(String),
    /// Anything else: a key candidate or a value for the preceding key.
    Value(Value),
}

impl RawArg {
    /// Wrap an error argument, rendering its full source chain.
    pub fn err(error: impl std::error::Error) -> Self {
        RawArg::Error(render_error_chain(&error))
    }

    /// Collapse to a plain value, for use in value position of a pair.
    pub(crate) fn into_value(self) -> Value {
        match self {
            RawArg::Value(value) => value,
            RawArg::Error(rendered) => Value::String(rendered),
            // A pre-built field in value position keeps its json rendering.
            RawArg::Field(field) => {
                let mut obj = serde_json::Map::new();
                obj.insert(field.name, field.value);
                Value::Object(obj)
            }
        }
    }
}

impl From<Field> for RawArg {
    fn from(field: Field) -> Self {
        RawArg::Field(field)
    }
}

impl From<anyhow::Error> for RawArg {
    fn from(error: anyhow::Error) -> Self {
        RawArg::Error(format!("{error:#}"))
    }
}

macro_rules! impl_raw_arg_value {
    ($($ty:ty),* $(,)?) => {
        $(impl From<$ty> for RawArg {
            fn from(value: $ty) -> Self {
                RawArg::Value(Value::from(value))
            }
        })*
    };
}

impl_raw_arg_value!(&str, String, bool, i32, i64, u32, u64, f64, Value);

fn render_error_chain(error: &(dyn std::error::Error + '_)) -> String {
    let mut rendered = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}

/// Log severity level.
///
/// `Fatal` and `Panic` terminate the caller after emission and bypass level
/// gating entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Panic,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Debug => write!(f, "debug"),
            Level::Info => write!(f, "info"),
            Level::Warn => write!(f, "warn"),
            Level::Error => write!(f, "error"),
            Level::Fatal => write!(f, "fatal"),
            Level::Panic => write!(f, "panic"),
        }
    }
}

/// Error returned when parsing an unrecognised level name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised log level {0:?}")]
pub struct ParseLevelError(String);

impl std::str::FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            "panic" => Ok(Level::Panic),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
