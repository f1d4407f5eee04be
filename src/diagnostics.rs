//! Recent-history buffer for diagnostics messages shown beside the board.

use crate::interface::Severity;
use chrono::{DateTime, Local};
use std::collections::VecDeque;

pub const DEFAULT_CAPACITY: usize = 20;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticEntry {
    pub timestamp: DateTime<Local>,
    pub severity: Severity,
    pub message: String,
}

impl DiagnosticEntry {
    /// Wall-clock time of the entry, e.g. `14:03:27`.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// Newest-first list of diagnostics, dropping the oldest past `capacity`.
#[derive(Clone, Debug)]
pub struct DiagnosticLog {
    entries: VecDeque<DiagnosticEntry>,
    capacity: usize,
}

impl Default for DiagnosticLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl DiagnosticLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, severity: Severity, message: impl Into<String>) {
        self.push_at(Local::now(), severity, message);
    }

    pub fn push_at(
        &mut self,
        timestamp: DateTime<Local>,
        severity: Severity,
        message: impl Into<String>,
    ) {
        if self.capacity == 0 {
            return;
        }
        self.entries.push_front(DiagnosticEntry {
            timestamp,
            severity,
            message: message.into(),
        });
        self.entries.truncate(self.capacity);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> impl Iterator<Item = &DiagnosticEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_newest_first() {
        let mut log = DiagnosticLog::default();
        log.push(Severity::Info, "first");
        log.push(Severity::Error, "second");
        let messages: Vec<_> = log.entries().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, ["second", "first"]);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut log = DiagnosticLog::with_capacity(3);
        for i in 0..5 {
            log.push(Severity::Info, format!("message {i}"));
        }
        assert_eq!(log.len(), 3);
        let messages: Vec<_> = log.entries().map(|e| e.message.clone()).collect();
        assert_eq!(messages, ["message 4", "message 3", "message 2"]);
    }

    #[test]
    fn test_default_capacity() {
        let mut log = DiagnosticLog::default();
        for i in 0..(DEFAULT_CAPACITY + 7) {
            log.push(Severity::Success, i.to_string());
        }
        assert_eq!(log.len(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_clear() {
        let mut log = DiagnosticLog::default();
        log.push(Severity::Info, "hello");
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_time_label() {
        let mut log = DiagnosticLog::default();
        let at = Local.with_ymd_and_hms(2024, 3, 9, 14, 3, 27).unwrap();
        log.push_at(at, Severity::Info, "timed");
        let entry = log.entries().next().unwrap();
        assert_eq!(entry.time_label(), "14:03:27");
    }
}
