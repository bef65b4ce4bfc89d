//! The logger handle: a sink plus an atomic level threshold and a name.
//!
//! The process-wide default logger is the only shared mutable state in the
//! system. It is swapped atomically as a whole; the level threshold uses
//! relaxed last-writer-wins semantics, so a log call racing a level change
//! may observe either threshold. That is acceptable — the threshold controls
//! filtering, not correctness.

use crate::json::JsonSink;
use crate::record::Record;
use kvlog_core::{Field, Level, LogConfig};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, OnceLock, RwLock};

/// The emission seam between the metadata layer and a backend.
pub trait Sink: Send + Sync {
    fn emit(&self, record: &Record);
    fn flush(&self);
}

// ---------------------------------------------------------------------------
// Atomic level
// ---------------------------------------------------------------------------

/// A level threshold shared between a logger and all loggers derived from it.
pub struct AtomicLevel(AtomicU8);

impl AtomicLevel {
    pub fn new(level: Level) -> Self {
        Self(AtomicU8::new(level_to_u8(level)))
    }

    pub fn load(&self) -> Level {
        level_from_u8(self.0.load(Ordering::Relaxed))
    }

    pub fn store(&self, level: Level) {
        self.0.store(level_to_u8(level), Ordering::Relaxed);
    }
}

fn level_to_u8(level: Level) -> u8 {
    match level {
        Level::Debug => 0,
        Level::Info => 1,
        Level::Warn => 2,
        Level::Error => 3,
        Level::Fatal => 4,
        Level::Panic => 5,
    }
}

fn level_from_u8(raw: u8) -> Level {
    match raw {
        0 => Level::Debug,
        1 => Level::Info,
        2 => Level::Warn,
        3 => Level::Error,
        4 => Level::Fatal,
        _ => Level::Panic,
    }
}

// ---------------------------------------------------------------------------
// Logger handle
// ---------------------------------------------------------------------------

/// A cheap-to-clone handle bundling a sink, a shared level threshold, and an
/// optional dotted name.
#[derive(Clone)]
pub struct Logger {
    sink: Arc<dyn Sink>,
    level: Arc<AtomicLevel>,
    name: Option<String>,
}

impl Logger {
    pub fn new(sink: Arc<dyn Sink>, level: Level) -> Self {
        Self {
            sink,
            level: Arc::new(AtomicLevel::new(level)),
            name: None,
        }
    }

    /// A JSON-to-stdout logger, the built-in default backend.
    pub fn stdout(level: Level) -> Self {
        Self::new(Arc::new(JsonSink::stdout()), level)
    }

    /// Wire a loaded [`LogConfig`] into a stdout JSON logger.
    pub fn from_config(cfg: &LogConfig) -> Self {
        Self::new(
            Arc::new(JsonSink::stdout().with_timestamps(cfg.log.timestamps)),
            cfg.log.level,
        )
    }

    /// Whether a statement at `level` passes the threshold.
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level.load()
    }

    pub fn level(&self) -> Level {
        self.level.load()
    }

    /// Change the threshold for this logger and everything sharing it.
    /// Last writer wins; no ordering guarantee relative to in-flight calls.
    pub fn set_level(&self, level: Level) {
        self.level.store(level);
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Derive a logger whose name gains a dot-separated segment
    /// (`"api"` → `"api.db"`). Sink and threshold are shared.
    pub fn named(&self, segment: &str) -> Logger {
        let name = match &self.name {
            Some(existing) => format!("{existing}.{segment}"),
            None => segment.to_string(),
        };
        Logger {
            sink: self.sink.clone(),
            level: self.level.clone(),
            name: Some(name),
        }
    }

    /// Emit a record through the sink. Gating is the caller's concern; this
    /// always emits.
    pub fn log(&self, level: Level, message: &str, fields: Vec<Field>) {
        let mut record = Record::new(level, message, fields);
        if let Some(name) = &self.name {
            record = record.with_logger(name.clone());
        }
        self.sink.emit(&record);
    }

    pub fn flush(&self) {
        self.sink.flush();
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level.load())
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Process-wide default
// ---------------------------------------------------------------------------

static DEFAULT_LOGGER: OnceLock<RwLock<Logger>> = OnceLock::new();

fn default_cell() -> &'static RwLock<Logger> {
    DEFAULT_LOGGER.get_or_init(|| RwLock::new(Logger::stdout(Level::Error)))
}

/// The process default logger, used by contexts without an override.
pub fn default_logger() -> Logger {
    match default_cell().read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Replace the process default logger. Last writer wins.
pub fn set_default_logger(logger: Logger) {
    match default_cell().write() {
        Ok(mut guard) => *guard = logger,
        Err(poisoned) => *poisoned.into_inner() = logger,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
