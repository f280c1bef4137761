use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single record of one measured invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingEntry {
    pub id: String,
    pub label: String,
    pub elapsed: Duration,
    pub ok: bool,
}

impl TimingEntry {
    pub(crate) fn new(label: &str, elapsed: Duration, ok: bool) -> Self {
        Self {
            id: format!("call_{}", uuid::Uuid::new_v4().simple()),
            label: label.to_string(),
            elapsed,
            ok,
        }
    }
}

/// Trait for receiving timing records.
pub trait Timing: Send + Sync {
    fn record(&self, entry: TimingEntry);
    fn flush(&self);
}

/// Simple in-memory sink for timing records.
pub struct MemoryTimings {
    entries: std::sync::Mutex<Vec<TimingEntry>>,
}

impl MemoryTimings {
    pub fn new() -> Self {
        Self {
            entries: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn entries(&self) -> Vec<TimingEntry> {
        self.entries.lock().unwrap().clone()
    }
}

impl Timing for MemoryTimings {
    fn record(&self, entry: TimingEntry) {
        self.entries.lock().unwrap().push(entry);
    }

    fn flush(&self) {
        // No-op for memory sink
    }
}
