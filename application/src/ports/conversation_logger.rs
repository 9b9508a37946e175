//! Port for structured conversation logging.
//!
//! Defines the [`ConversationLogger`] trait for recording debate events
//! (accepted turns, checkpoints, violations, verdicts) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the debate
//! in a machine-readable format (JSONL).

use chrono::{DateTime, Utc};
use serde_json::Value;

/// A structured conversation event for logging.
///
/// Each event has a type string, a UTC timestamp, and a JSON payload
/// containing event-specific fields.
pub struct ConversationEvent {
    /// Event type identifier (e.g., "turn_accepted", "checkpoint_completed").
    pub event_type: &'static str,
    /// When the event was recorded.
    pub timestamp: DateTime<Utc>,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    /// Create a new conversation event with the current UTC timestamp.
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            timestamp: Utc::now(),
            payload,
        }
    }
}

/// Port for logging conversation events to a structured log.
///
/// Implementations write each event as a single record (e.g., one JSONL line).
/// The `log` method is synchronous and non-fallible: logging failures are
/// ignored and never disturb the debate.
pub trait ConversationLogger: Send + Sync {
    /// Record a conversation event.
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
