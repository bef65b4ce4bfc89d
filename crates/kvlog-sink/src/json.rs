//! JSON line sink — one JSON object per record, written to any writer.
//!
//! Key order is `ts`, `level`, `logger`, `message`, then each field in its
//! merged order. Write failures are swallowed; logging must not become a
//! failure mode of the instrumented code.

use crate::logger::Sink;
use crate::record::Record;
use chrono::SecondsFormat;
use serde_json::Value;
use std::io::Write;
use std::sync::Mutex;

pub struct JsonSink<W: Write + Send> {
    writer: Mutex<W>,
    timestamps: bool,
}

impl JsonSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            timestamps: true,
        }
    }

    /// Toggle the `ts` key. Disabled output is deterministic, which the
    /// snapshot tests rely on.
    pub fn with_timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = timestamps;
        self
    }

    /// Encode a record to its single-line JSON form, without the trailing
    /// newline.
    ///
    /// The envelope keys (`ts`, `level`, `logger`, `message`) are reserved:
    /// a field sharing one of those names is dropped rather than clobbering
    /// the envelope, since a JSON object cannot hold the key twice.
    pub fn encode(&self, record: &Record) -> String {
        let mut obj = serde_json::Map::new();
        if self.timestamps {
            obj.insert(
                "ts".to_string(),
                Value::String(record.ts.to_rfc3339_opts(SecondsFormat::Millis, true)),
            );
        }
        obj.insert("level".to_string(), Value::String(record.level.to_string()));
        if let Some(name) = &record.logger {
            obj.insert("logger".to_string(), Value::String(name.clone()));
        }
        obj.insert("message".to_string(), Value::String(record.message.clone()));
        for field in &record.fields {
            if obj.contains_key(&field.name) {
                continue;
            }
            obj.insert(field.name.clone(), field.value.clone());
        }
        Value::Object(obj).to_string()
    }
}

impl<W: Write + Send> Sink for JsonSink<W> {
    fn emit(&self, record: &Record) {
        let line = self.encode(record);
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{line}");
        }
    }

    fn flush(&self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
