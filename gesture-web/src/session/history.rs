//! Capture history - the last N recorded gestures, newest first

use std::collections::VecDeque;

use serde::Serialize;

use crate::classifier::GestureResult;

/// Number of captures kept
pub const HISTORY_CAPACITY: usize = 10;

/// One captured gesture
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub name: &'static str,
    pub confidence: f32,
    /// Milliseconds since the Unix epoch (JS `Date.now()`)
    pub captured_at_ms: f64,
}

impl HistoryEntry {
    pub fn new(result: GestureResult, captured_at_ms: f64) -> Self {
        Self {
            name: result.name,
            confidence: result.confidence,
            captured_at_ms,
        }
    }

    /// "Peace (80.0%) - 10:42:07", with the time already formatted by the caller
    pub fn label(&self, time_text: &str) -> String {
        format!("{} ({:.1}%) - {}", self.name, self.confidence * 100.0, time_text)
    }
}

/// Bounded history; pushing past capacity drops the oldest entry
pub struct GestureHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl GestureHistory {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    /// Newest first
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for GestureHistory {
    fn default() -> Self {
        Self::new()
    }
}
