//! kvlog — context-scoped structured logging fields with deterministic merge.
//!
//! Call sites attach key/value diagnostic fields to a request-scoped
//! [`Context`]; fields accumulate across nested calls and are merged with
//! the fields supplied at each log statement, producing one ordered field
//! list per log line. Malformed input (odd argument counts, non-string keys,
//! repeated bare errors) is dropped and reported, never propagated — a log
//! statement cannot fail its caller.
//!
//! # Architecture
//!
//! ```text
//! RawArg list ──► Normalizer ──► FieldSequence ──┐
//!                                                ├──► Merger ──► Sink
//! Context state ────────────────────────────────┘
//! ```
//!
//! The core algorithms live in `kvlog-core`, the backends in `kvlog-sink`;
//! this crate adds the [`Context`] type and the caller-facing API.
//!
//! # Example
//!
//! ```
//! use kvlog::{args, add_fields, info, Context};
//!
//! let ctx = Context::new();
//! let ctx = add_fields(&ctx, args!["request_id", "req-abc123"]);
//! info(&ctx, "payment accepted", args!["amount", 1299, "currency", "EUR"]);
//! ```

pub mod api;
pub mod context;

pub use api::{
    add_fields, debug, emit_terminating, error, fatal, info, panic, resolve_fields, warn,
    Termination,
};
pub use context::Context;
pub use kvlog_core::{
    merge, normalize, Diagnostic, Field, InvalidPair, Level, LogConfig, Normalized,
    ParseLevelError, RawArg, ERROR_FIELD_NAME, ERR_MSG_MULTIPLE_ERRORS, ERR_MSG_NON_STRING_KEY,
    ERR_MSG_ODD_NUMBER,
};
pub use kvlog_sink::{
    default_logger, set_default_logger, CaptureSink, JsonSink, Logger, Record, Sink,
};
