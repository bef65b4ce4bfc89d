//! In-memory capture sink for tests.

use crate::logger::Sink;
use crate::record::Record;
use std::sync::{Arc, Mutex};

/// A sink that keeps every emitted record in memory.
///
/// Clones share the same storage, so a test can hold one handle while the
/// logger under test holds another.
#[derive(Clone, Default)]
pub struct CaptureSink {
    records: Arc<Mutex<Vec<Record>>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all captured records, in emission order.
    pub fn records(&self) -> Vec<Record> {
        self.lock().clone()
    }

    /// True when any captured record's message contains `text`.
    pub fn contains(&self, text: &str) -> bool {
        self.lock().iter().any(|r| r.message.contains(text))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Record>> {
        match self.records.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Sink for CaptureSink {
    fn emit(&self, record: &Record) {
        self.lock().push(record.clone());
    }

    fn flush(&self) {}
}
