//! Port for structured deliberation logging.
//!
//! Defines the [`DeliberationLogger`] trait for recording deliberation events
//! (debate entries, votes, the meta summary and the outcome) to a structured
//! log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the full
//! deliberation record in a machine-readable format (JSONL).

use serde::Serialize;
use serde_json::Value;

/// A structured deliberation event for logging.
pub struct DeliberationEvent {
    /// Event type identifier (`debate_entry`, `vote`, `summary`, `outcome`).
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl DeliberationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    /// Event whose payload is a serialized domain value.
    ///
    /// A value that fails to serialize is logged with a null payload.
    pub fn from_serializable<T: Serialize>(event_type: &'static str, value: &T) -> Self {
        Self::new(
            event_type,
            serde_json::to_value(value).unwrap_or(Value::Null),
        )
    }
}

/// Port for logging deliberation events to a structured log.
///
/// `log` is synchronous and non-fallible: a logging failure never disturbs
/// the deliberation itself.
pub trait DeliberationLogger: Send + Sync {
    fn log(&self, event: DeliberationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoDeliberationLog;

impl DeliberationLogger for NoDeliberationLog {
    fn log(&self, _event: DeliberationEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use parliament_domain::Outcome;

    #[test]
    fn test_from_serializable() {
        let event = DeliberationEvent::from_serializable("outcome", &Outcome::Deadlocked);
        assert_eq!(event.event_type, "outcome");
        assert_eq!(event.payload, Value::String("deadlocked".to_string()));
    }
}
