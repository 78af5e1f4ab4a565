use super::LogLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A log line emitted by the worker runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEvent {
    pub level: LogLevel,
    pub msg: String,
}

/// An exception that escaped the worker's own handlers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UncaughtExceptionEvent {
    pub exception: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BootEvent {
    pub boot_time: usize,
}

/// Marker payload for events that carry no data of their own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PseudoEvent {}

/// Events emitted by the worker runtime, adjacently tagged on the wire:
/// `{"event_type": "...", "event": {...}}`.
///
/// Only `Log` and `UncaughtException` get dedicated routing; every other
/// variant is handled by the consumer's fallback arm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event_type", content = "event")]
pub enum WorkerEvent {
    Log(LogEvent),
    UncaughtException(UncaughtExceptionEvent),
    Boot(BootEvent),
    MemoryLimit(PseudoEvent),
    CpuTimeLimit(PseudoEvent),
    WallClockTimeLimit(PseudoEvent),
}

/// Context attached to an event by the producing runtime.
///
/// The consumer never reads this for routing; it is carried untouched so
/// in-process producers keep their envelope intact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// A recognized event, or the raw element when the discriminant (or the
/// payload shape behind it) is unknown.
#[derive(Debug, Clone, PartialEq)]
pub enum EventPayload {
    Event(WorkerEvent),
    Unrecognized(Value),
}

impl EventPayload {
    /// Classify a raw JSON element.
    ///
    /// Never fails: anything that does not deserialize as a known
    /// `WorkerEvent` is kept verbatim for fallback handling. That covers
    /// unknown discriminants and recognized discriminants with a payload
    /// missing expected fields (e.g. `Log` without `msg`).
    pub fn from_value(value: Value) -> Self {
        match WorkerEvent::deserialize(&value) {
            Ok(event) => EventPayload::Event(event),
            Err(_) => EventPayload::Unrecognized(value),
        }
    }
}

/// One element of the event stream: the payload plus producer metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkerEventMessage {
    pub event: EventPayload,
    pub metadata: EventMetadata,
}

impl WorkerEventMessage {
    pub fn new(event: WorkerEvent) -> Self {
        Self {
            event: EventPayload::Event(event),
            metadata: EventMetadata::default(),
        }
    }

    pub fn with_metadata(event: WorkerEvent, metadata: EventMetadata) -> Self {
        Self {
            event: EventPayload::Event(event),
            metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn log_event_uses_the_adjacent_tag_layout() {
        let event = WorkerEvent::Log(LogEvent {
            level: LogLevel::Error,
            msg: "disk full".to_string(),
        });

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            json!({"event_type": "Log", "event": {"level": "Error", "msg": "disk full"}})
        );
    }

    #[test]
    fn known_tags_deserialize_to_events() {
        let value = json!({"event_type": "UncaughtException", "event": {"exception": "boom"}});

        match EventPayload::from_value(value) {
            EventPayload::Event(WorkerEvent::UncaughtException(e)) => {
                assert_eq!(e.exception, "boom");
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn unknown_tags_keep_the_raw_element() {
        let value = json!({"event_type": "Heartbeat", "event": {"ts": 123}});

        match EventPayload::from_value(value.clone()) {
            EventPayload::Unrecognized(raw) => assert_eq!(raw, value),
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn known_tag_with_missing_fields_keeps_the_raw_element() {
        // `Log` without `msg` is not a Log event the consumer can route.
        let value = json!({"event_type": "Log", "event": {"level": "Error"}});

        match EventPayload::from_value(value.clone()) {
            EventPayload::Unrecognized(raw) => assert_eq!(raw, value),
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn pseudo_events_round_trip() {
        let value = json!({"event_type": "MemoryLimit", "event": {}});

        match EventPayload::from_value(value) {
            EventPayload::Event(WorkerEvent::MemoryLimit(_)) => {}
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn empty_metadata_serializes_to_an_empty_object() {
        let value = serde_json::to_value(EventMetadata::default()).unwrap();
        assert_eq!(value, json!({}));
    }
}
