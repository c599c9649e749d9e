//! Recording log sink for unit testing.
//!
//! Captures every message so tests can assert on what load/save reported
//! without installing a `tracing` subscriber.

use std::sync::Mutex;

use super::LogSink;

/// Severity of a recorded message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Warn,
    Error,
}

/// One message captured by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
}

/// A [`LogSink`] that stores every message in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages in the order they were reported.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().expect("lock poisoned").clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages_at(LogLevel::Warn)
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages_at(LogLevel::Error)
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().expect("lock poisoned").is_empty()
    }

    fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.records
            .lock()
            .expect("lock poisoned")
            .iter()
            .filter(|r| r.level == level)
            .map(|r| r.message.clone())
            .collect()
    }

    fn push(&self, level: LogLevel, message: &str) {
        self.records.lock().expect("lock poisoned").push(LogRecord {
            level,
            message: message.to_owned(),
        });
    }
}

impl LogSink for RecordingSink {
    fn warn(&self, message: &str) {
        self.push(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(LogLevel::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_keeps_order_and_level() {
        // Arrange
        let sink = RecordingSink::new();

        // Act
        sink.warn("first");
        sink.error("second");
        sink.warn("third");

        // Assert
        assert_eq!(sink.warnings(), vec!["first", "third"]);
        assert_eq!(sink.errors(), vec!["second"]);
        assert_eq!(sink.records()[1].level, LogLevel::Error);
    }

    #[test]
    fn test_new_recording_sink_is_empty() {
        assert!(RecordingSink::new().is_empty());
    }
}
