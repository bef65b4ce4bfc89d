//! kvlog-sink — logging backends for kvlog.
//!
//! The core crate produces a message plus an ordered field sequence; this
//! crate turns that into output. [`Sink`] is the emission seam, [`JsonSink`]
//! writes one JSON object per line to any writer, [`CaptureSink`] keeps
//! records in memory for tests, and [`Logger`] bundles a sink with an atomic
//! level threshold and an optional dotted name.

pub mod capture;
pub mod json;
pub mod logger;
pub mod record;

pub use capture::CaptureSink;
pub use json::JsonSink;
pub use logger::{default_logger, set_default_logger, AtomicLevel, Logger, Sink};
pub use record::Record;
