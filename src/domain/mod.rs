//! Domain layer for worker-event-console.
//!
//! Contains the canonical types shared across all modules:
//! - `WorkerEvent`: the tagged event union emitted by the worker runtime
//! - `EventPayload`: a recognized event, or the raw element for fallback handling
//! - `LogLevel`: log severity carried by `Log` events

pub mod event;
pub mod log_level;

pub use event::{
    BootEvent, EventMetadata, EventPayload, LogEvent, PseudoEvent, UncaughtExceptionEvent,
    WorkerEvent, WorkerEventMessage,
};
pub use log_level::LogLevel;
