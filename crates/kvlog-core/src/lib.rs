//! kvlog-core — field model, normalizer, and merger for kvlog.
//!
//! This crate holds the only part of the system with non-trivial semantics:
//! turning a heterogeneous argument list into a canonical field sequence, and
//! combining two such sequences deterministically.
//!
//! # Pipeline
//!
//! ```text
//! RawArg list ──► Normalizer ──► FieldSequence ──┐
//!                                                ├──► Merger ──► FieldSequence
//! Context state ────────────────────────────────┘
//! ```
//!
//! Malformed input never escapes as an error: the normalizer degrades to
//! "drop the offending item" and reports what it dropped as [`Diagnostic`]
//! values for the caller to forward to the logging backend.

pub mod config;
pub mod merger;
pub mod normalizer;
pub mod types;

pub use config::LogConfig;
pub use merger::merge;
pub use normalizer::{
    normalize, Diagnostic, InvalidPair, Normalized, ERR_MSG_MULTIPLE_ERRORS, ERR_MSG_NON_STRING_KEY,
    ERR_MSG_ODD_NUMBER,
};
pub use types::{Field, Level, ParseLevelError, RawArg, ERROR_FIELD_NAME};
