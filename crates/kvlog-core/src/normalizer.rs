//! Normalizer — converts a raw argument list into canonical fields.
//!
//! The scan is positional and stateful: a pre-built [`Field`] passes through,
//! the first bare error becomes the reserved `"error"` field, and everything
//! else is treated as a key that consumes the following item as its value.
//! Malformed input (odd counts, non-string keys, extra errors) is dropped and
//! reported as [`Diagnostic`] values instead of failing the log statement —
//! logging must never become a failure mode of the instrumented code.

use crate::types::{Field, RawArg, ERROR_FIELD_NAME};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Diagnostic messages
// ---------------------------------------------------------------------------

pub const ERR_MSG_ODD_NUMBER: &str = "Ignored key without a value.";
pub const ERR_MSG_NON_STRING_KEY: &str = "Ignored key-value pairs with non-string keys.";
pub const ERR_MSG_MULTIPLE_ERRORS: &str = "Multiple errors without a key.";

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

/// A key-value pair rejected because the key is not a string, with the key's
/// position in the original argument list.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidPair {
    pub position: usize,
    pub key: Value,
    pub value: Value,
}

/// An internal report about malformed logging input.
///
/// Diagnostics are returned to the caller of [`normalize`] rather than
/// emitted here, keeping the normalizer side-effect-free; the API layer
/// forwards them to the backend at error severity.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// A second or later bare error in the same call; only the first becomes
    /// the `"error"` field.
    ExtraError { error: String },
    /// A trailing key with no value to pair with.
    DanglingKey { ignored: Value },
    /// All non-string-key pairs from one call, batched, in position order.
    NonStringKeys { pairs: Vec<InvalidPair> },
}

impl Diagnostic {
    /// The fixed message the backend logs for this diagnostic.
    pub fn message(&self) -> &'static str {
        match self {
            Diagnostic::ExtraError { .. } => ERR_MSG_MULTIPLE_ERRORS,
            Diagnostic::DanglingKey { .. } => ERR_MSG_ODD_NUMBER,
            Diagnostic::NonStringKeys { .. } => ERR_MSG_NON_STRING_KEY,
        }
    }

    /// The structured payload attached to the diagnostic log line.
    pub fn fields(&self) -> Vec<Field> {
        match self {
            Diagnostic::ExtraError { error } => {
                vec![Field::new(ERROR_FIELD_NAME, error.clone())]
            }
            Diagnostic::DanglingKey { ignored } => vec![Field::new("ignored", ignored.clone())],
            Diagnostic::NonStringKeys { pairs } => {
                let rendered: Vec<Value> = pairs
                    .iter()
                    .map(|p| json!({ "position": p.position, "key": p.key, "value": p.value }))
                    .collect();
                vec![Field::new("invalid", Value::Array(rendered))]
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Normalizer
// ---------------------------------------------------------------------------

/// The result of one normalization pass: the canonical fields plus any
/// diagnostics describing input that was dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Normalized {
    pub fields: Vec<Field>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Convert a raw argument list into an ordered field sequence.
///
/// Duplicate names are *not* deduplicated here; override semantics apply only
/// when the sequence is merged with another (see [`crate::merger::merge`]).
pub fn normalize(args: Vec<RawArg>) -> Normalized {
    if args.is_empty() {
        return Normalized::default();
    }

    let mut fields = Vec::with_capacity(args.len());
    let mut diagnostics = Vec::new();
    let mut invalid: Vec<InvalidPair> = Vec::new();
    let mut seen_error = false;

    let mut iter = args.into_iter().enumerate();
    while let Some((position, arg)) = iter.next() {
        let key = match arg {
            RawArg::Field(field) => {
                fields.push(field);
                continue;
            }
            RawArg::Error(rendered) => {
                if seen_error {
                    diagnostics.push(Diagnostic::ExtraError { error: rendered });
                } else {
                    seen_error = true;
                    fields.push(Field::new(ERROR_FIELD_NAME, rendered));
                }
                continue;
            }
            RawArg::Value(value) => value,
        };

        // The current item is a key needing a paired value.
        let Some((_, value_arg)) = iter.next() else {
            diagnostics.push(Diagnostic::DanglingKey { ignored: key });
            break;
        };

        match key {
            Value::String(name) => fields.push(Field::new(name, value_arg.into_value())),
            other => invalid.push(InvalidPair {
                position,
                key: other,
                value: value_arg.into_value(),
            }),
        }
    }

    if !invalid.is_empty() {
        diagnostics.push(Diagnostic::NonStringKeys { pairs: invalid });
    }

    Normalized {
        fields,
        diagnostics,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
