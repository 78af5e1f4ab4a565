use super::SourceError;
use crate::domain::WorkerEventMessage;
use futures::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::mpsc;

/// Stream adapter over an in-process event channel.
///
/// The producing runtime holds the `UnboundedSender` and pushes one
/// `Option<WorkerEventMessage>` per event slot; the stream completes once
/// every sender has been dropped. Items are infallible, so the error type
/// exists only to satisfy the common source item shape.
pub struct ChannelSource {
    rx: mpsc::UnboundedReceiver<Option<WorkerEventMessage>>,
}

impl ChannelSource {
    pub fn new(rx: mpsc::UnboundedReceiver<Option<WorkerEventMessage>>) -> Self {
        Self { rx }
    }

    /// Convenience constructor for wiring a producer task to a fresh source.
    pub fn pair() -> (mpsc::UnboundedSender<Option<WorkerEventMessage>>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self { rx })
    }
}

impl Stream for ChannelSource {
    type Item = Result<Option<WorkerEventMessage>, SourceError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx).map(|item| item.map(Ok))
    }
}
