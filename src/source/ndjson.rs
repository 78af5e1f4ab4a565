use super::SourceError;
use crate::domain::{EventMetadata, EventPayload, WorkerEventMessage};
use futures::Stream;
use serde::Deserialize;
use serde_json::Value;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

/// Newline-delimited JSON event source.
///
/// One element per line. Blank lines and the JSON literal `null` are absent
/// elements (`Ok(None)`). Any JSON object is an event element; discriminant
/// recognition happens in `EventPayload::from_value`, so an object without a
/// known `event_type` still arrives as `Unrecognized` rather than failing.
/// A line that is not valid JSON at all is a producer failure.
pub struct NdjsonSource<R> {
    lines: Lines<R>,
}

/// Wire envelope: optional producer metadata next to the event element.
#[derive(Deserialize)]
struct RawMessage {
    #[serde(default)]
    metadata: Option<EventMetadata>,
    #[serde(flatten)]
    element: Value,
}

impl<R: AsyncBufRead + Unpin> NdjsonSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }

    fn parse_line(line: &str) -> Result<Option<WorkerEventMessage>, SourceError> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let value: Value = serde_json::from_str(trimmed)?;
        let message = match value {
            Value::Null => return Ok(None),
            // An envelope that does not split into metadata + element is
            // still a delivered event, not a producer failure; it takes
            // the fallback path whole.
            Value::Object(_) => match RawMessage::deserialize(&value) {
                Ok(raw) => WorkerEventMessage {
                    event: EventPayload::from_value(raw.element),
                    metadata: raw.metadata.unwrap_or_default(),
                },
                Err(_) => WorkerEventMessage {
                    event: EventPayload::Unrecognized(value),
                    metadata: EventMetadata::default(),
                },
            },
            // Non-object elements have no discriminant to dispatch on;
            // they take the fallback path untouched.
            other => WorkerEventMessage {
                event: EventPayload::Unrecognized(other),
                metadata: EventMetadata::default(),
            },
        };

        Ok(Some(message))
    }
}

impl<R: AsyncBufRead + Unpin> Stream for NdjsonSource<R> {
    type Item = Result<Option<WorkerEventMessage>, SourceError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        match Pin::new(&mut self.lines).poll_next_line(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Ok(None)) => Poll::Ready(None),
            Poll::Ready(Ok(Some(line))) => Poll::Ready(Some(Self::parse_line(&line))),
            Poll::Ready(Err(e)) => Poll::Ready(Some(Err(SourceError::Io(e)))),
        }
    }
}
