//! The event consumer loop: drain a source to completion, routing each
//! element to the console sink.

use crate::domain::{EventPayload, WorkerEvent, WorkerEventMessage};
use crate::sink::ConsoleSink;
use crate::source::SourceError;
use futures::{Stream, StreamExt};
use std::io;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ConsumerError {
    #[error("event source failed: {0}")]
    Source(#[from] SourceError),
    #[error("sink write failed: {0}")]
    Io(#[from] io::Error),
    #[error("fallback serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Totals observed while draining one source.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DrainStats {
    /// Elements that produced an output line.
    pub routed: u64,
    /// Absent (null) elements, which produce no output.
    pub skipped: u64,
}

/// Drain `events` to completion, one element at a time, in production order.
///
/// Routing:
/// - `Log` with level `Error` → error lane, message text only
/// - `Log` with any other level → output lane, message text only
/// - `UncaughtException` → error lane, exception text only
/// - everything else (recognized or not) → output lane, whole element as JSON
///
/// Absent elements are skipped. A source failure ends the drain immediately
/// and propagates; there is no retry and no local recovery.
pub async fn drain<S, O, E>(
    mut events: S,
    sink: &mut ConsoleSink<O, E>,
) -> Result<DrainStats, ConsumerError>
where
    S: Stream<Item = Result<Option<WorkerEventMessage>, SourceError>> + Unpin,
    O: io::Write,
    E: io::Write,
{
    let mut stats = DrainStats::default();

    while let Some(item) = events.next().await {
        let Some(message) = item? else {
            stats.skipped += 1;
            continue;
        };

        match message.event {
            EventPayload::Event(WorkerEvent::Log(log)) if log.level.is_error() => {
                sink.error_line(&log.msg)?;
            }
            EventPayload::Event(WorkerEvent::Log(log)) => {
                sink.out_line(&log.msg)?;
            }
            EventPayload::Event(WorkerEvent::UncaughtException(e)) => {
                sink.error_line(&e.exception)?;
            }
            EventPayload::Event(other) => {
                sink.out_line(&serde_json::to_string(&other)?)?;
            }
            EventPayload::Unrecognized(value) => {
                sink.out_line(&value.to_string())?;
            }
        }

        stats.routed += 1;
    }

    debug!(
        routed = stats.routed,
        skipped = stats.skipped,
        "event stream drained"
    );

    Ok(stats)
}
