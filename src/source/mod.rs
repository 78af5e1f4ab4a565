//! Event sources.
//!
//! A source is anything that yields `Result<Option<WorkerEventMessage>, SourceError>`
//! as a [`futures::Stream`]. `None` items are absent elements (the producer
//! yielded a null); stream completion means the producer is done. The
//! consumer is injected with a source rather than reaching for a global one,
//! so it can be exercised against test streams.

pub mod channel;
pub mod ndjson;

pub use channel::ChannelSource;
pub use ndjson::NdjsonSource;

use thiserror::Error;

/// Failure of the producing side. Never recovered locally; the consumer
/// propagates the first one it sees.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read from event input: {0}")]
    Io(#[from] std::io::Error),
    #[error("event input is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
