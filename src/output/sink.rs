//! Line sinks.
//!
//! # Responsibilities
//! - Write one record per call, already carrying the logger's prefix
//! - Keep each record a single write so concurrent loggers interleave by line
//!
//! # Design Decisions
//! - Prefix is bound when the sink is created, never passed per call
//! - Write failures are ignored

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Destination for prefixed log lines.
pub trait Sink: Send + Sync + fmt::Debug {
    /// Write `line` (no trailing newline) as one record.
    fn write_line(&self, line: &str);

    /// The prefix prepended to every record.
    fn prefix(&self) -> &str;
}

/// Builds the sink for a logger once its prefix is known.
pub type SinkFactory = Box<dyn FnOnce(&str) -> Box<dyn Sink> + Send>;

fn record(prefix: &str, line: &str) -> String {
    let mut out = String::with_capacity(prefix.len() + line.len() + 1);
    out.push_str(prefix);
    out.push_str(line);
    out
}

/// Writes records to the process error stream.
#[derive(Debug, Clone)]
pub struct StderrSink {
    prefix: String,
}

impl StderrSink {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn factory() -> SinkFactory {
        Box::new(|prefix: &str| -> Box<dyn Sink> { Box::new(StderrSink::new(prefix)) })
    }
}

impl Sink for StderrSink {
    fn write_line(&self, line: &str) {
        let mut buf = record(&self.prefix, line);
        buf.push('\n');
        let _ = io::stderr().lock().write_all(buf.as_bytes());
    }

    fn prefix(&self) -> &str {
        &self.prefix
    }
}

/// Collects records in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    prefix: String,
    records: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink writing into the same buffer under a different prefix.
    pub fn bind(&self, prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            records: self.records.clone(),
        }
    }

    /// Factory that binds this buffer to the logger's prefix.
    pub fn factory(&self) -> SinkFactory {
        let shared = self.clone();
        Box::new(move |prefix: &str| -> Box<dyn Sink> { Box::new(shared.bind(prefix)) })
    }

    /// Every record written so far, prefix included.
    pub fn records(&self) -> Vec<String> {
        self.records
            .lock()
            .map(|r| r.clone())
            .unwrap_or_else(|e| e.into_inner().clone())
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Sink for MemorySink {
    fn write_line(&self, line: &str) {
        let rec = record(&self.prefix, line);
        let mut records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        records.push(rec);
    }

    fn prefix(&self) -> &str {
        &self.prefix
    }
}
