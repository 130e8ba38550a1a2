// Logging module - In-memory log capture for TUI display
//
// A tracing layer that records events into a bounded buffer the logs panel
// reads every frame. Writing to stderr while the alternate screen is active
// would garble the display.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::field::{Field, Visit};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

/// Oldest entries are dropped past this many
const MAX_LOG_ENTRIES: usize = 1000;

/// A single captured event
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    /// Message followed by any structured fields (`key=value`)
    pub message: String,
}

/// Shared ring buffer of recent log entries
#[derive(Clone, Default)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<LogEntry>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock leaves a usable queue behind
    fn lock(&self) -> MutexGuard<'_, VecDeque<LogEntry>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn push(&self, entry: LogEntry) {
        let mut entries = self.lock();
        if entries.len() >= MAX_LOG_ENTRIES {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// The last `n` entries, oldest first
    pub fn tail(&self, n: usize) -> Vec<LogEntry> {
        let entries = self.lock();
        let skip = entries.len().saturating_sub(n);
        entries.iter().skip(skip).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }
}

/// Layer that copies every event that passes the filter into a [`LogBuffer`]
pub struct TuiLogLayer {
    buffer: LogBuffer,
}

impl TuiLogLayer {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer }
    }
}

impl<S: Subscriber> Layer<S> for TuiLogLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        self.buffer.push(LogEntry {
            timestamp: Utc::now(),
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: visitor.finish(),
        });
    }
}

/// Collects the message and structured fields of an event
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<String>,
}

impl MessageVisitor {
    fn record(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = value;
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }

    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields.join(" "),
            (false, false) => format!("{} {}", self.message, self.fields.join(" ")),
        }
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.record(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let rendered = format!("{:?}", value);
        // Strip the quotes Debug puts around strings
        let rendered = rendered
            .strip_prefix('"')
            .and_then(|r| r.strip_suffix('"'))
            .map(str::to_string)
            .unwrap_or(rendered);
        self.record(field, rendered);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::layer::SubscriberExt;

    fn entry(message: String) -> LogEntry {
        LogEntry {
            timestamp: Utc::now(),
            level: Level::INFO,
            target: "test".to_string(),
            message,
        }
    }

    #[test]
    fn test_buffer_is_bounded() {
        let buffer = LogBuffer::new();
        for i in 0..MAX_LOG_ENTRIES + 5 {
            buffer.push(entry(i.to_string()));
        }

        assert_eq!(buffer.len(), MAX_LOG_ENTRIES);
        let all = buffer.tail(usize::MAX);
        assert_eq!(all[0].message, "5");
    }

    #[test]
    fn test_tail_returns_newest_in_order() {
        let buffer = LogBuffer::new();
        for i in 0..5 {
            buffer.push(entry(i.to_string()));
        }

        let messages: Vec<_> = buffer.tail(2).into_iter().map(|e| e.message).collect();
        assert_eq!(messages, ["3", "4"]);
        assert!(buffer.tail(0).is_empty());
    }

    #[test]
    fn test_layer_captures_message_and_fields() {
        let buffer = LogBuffer::new();
        let subscriber = tracing_subscriber::registry().with(TuiLogLayer::new(buffer.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(item = 3, "page item removed");
            tracing::warn!(reason = "gone", "close failed");
            tracing::debug!("plain");
        });

        let entries = buffer.tail(10);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].level, Level::INFO);
        assert_eq!(entries[0].message, "page item removed item=3");
        assert_eq!(entries[1].level, Level::WARN);
        assert_eq!(entries[1].message, "close failed reason=gone");
        assert_eq!(entries[2].message, "plain");
    }
}
