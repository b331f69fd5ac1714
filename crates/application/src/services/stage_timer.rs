//! Per-request latency markers
//!
//! Each stage logs a start marker at debug level and an end marker with
//! `elapsed_ms` at info level, tagged with the request's correlation id.

use std::time::Instant;

use futures::{Stream, StreamExt};
use tokio::{sync::oneshot, task::JoinHandle};
use tracing::{debug, info};

/// A timed step of the voice reply pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Resolving the input to a transcript
    Transcription,
    /// Chat completion call
    Completion,
    /// Synthesis request up to the provider's response headers
    Synthesis,
    /// Forwarding the audio body to the caller
    Streaming,
}

impl Stage {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transcription => "transcription",
            Self::Completion => "completion",
            Self::Synthesis => "synthesis",
            Self::Streaming => "stream",
        }
    }
}

/// Running timer for one stage
#[derive(Debug)]
pub struct StageTimer {
    stage: Stage,
    correlation_id: String,
    started: Instant,
}

impl StageTimer {
    /// Start timing `stage`
    pub fn start(stage: Stage, correlation_id: &str) -> Self {
        debug!(
            correlation_id = %correlation_id,
            stage = stage.as_str(),
            "Stage started"
        );
        Self {
            stage,
            correlation_id: correlation_id.to_string(),
            started: Instant::now(),
        }
    }

    /// Milliseconds since the stage started
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// Log the end marker and return the elapsed time
    pub fn finish(self) -> u64 {
        let elapsed_ms = self.elapsed_ms();
        info!(
            correlation_id = %self.correlation_id,
            stage = self.stage.as_str(),
            elapsed_ms,
            "Stage finished"
        );
        elapsed_ms
    }

    /// Wrap `stream` so the end marker is logged once it is finished or dropped
    ///
    /// The marker is written by a detached task; nothing about the stream's
    /// items or timing depends on it.
    pub fn finish_when_dropped<S>(self, stream: S) -> impl Stream<Item = S::Item> + Send + 'static
    where
        S: Stream + Send + 'static,
    {
        let (stream, _marker) = self.spawn_end_marker(stream);
        stream
    }

    /// Like [`Self::finish_when_dropped`], also handing back the marker task
    ///
    /// The task resolves to the logged `elapsed_ms`.
    fn spawn_end_marker<S>(
        self,
        stream: S,
    ) -> (impl Stream<Item = S::Item> + Send + 'static, JoinHandle<u64>)
    where
        S: Stream + Send + 'static,
    {
        let (done_tx, done_rx) = oneshot::channel::<()>();

        let marker = tokio::spawn(async move {
            // Resolves with an error once the sender is dropped with the stream.
            let _ = done_rx.await;
            self.finish()
        });

        let stream = stream.map(move |item| {
            let _held = &done_tx;
            item
        });
        (stream, marker)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use futures::stream;

    use super::*;

    #[test]
    fn stage_labels() {
        assert_eq!(Stage::Transcription.as_str(), "transcription");
        assert_eq!(Stage::Completion.as_str(), "completion");
        assert_eq!(Stage::Synthesis.as_str(), "synthesis");
        assert_eq!(Stage::Streaming.as_str(), "stream");
    }

    #[test]
    fn finish_reports_elapsed_time() {
        let timer = StageTimer::start(Stage::Completion, "local");
        std::thread::sleep(Duration::from_millis(5));
        assert!(timer.finish() >= 5);
    }

    #[tokio::test]
    async fn wrapped_stream_yields_items_unchanged() {
        let timer = StageTimer::start(Stage::Streaming, "iad1::abc");
        let items: Vec<u8> = timer
            .finish_when_dropped(stream::iter(vec![1u8, 2, 3]))
            .collect()
            .await;
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn end_marker_waits_for_early_drop() {
        let timer = StageTimer::start(Stage::Streaming, "local");
        let (wrapped, marker) = timer.spawn_end_marker(stream::iter(vec![1u8, 2, 3]));
        let mut wrapped = Box::pin(wrapped);

        assert_eq!(wrapped.next().await, Some(1));
        tokio::time::sleep(Duration::from_millis(5)).await;
        assert!(!marker.is_finished());

        drop(wrapped);
        let elapsed_ms = tokio::time::timeout(Duration::from_secs(1), marker)
            .await
            .expect("end marker was not written after drop")
            .expect("end marker task failed");
        assert!(elapsed_ms >= 5);
    }

    #[tokio::test]
    async fn end_marker_follows_exhausted_stream() {
        let timer = StageTimer::start(Stage::Streaming, "iad1::abc");
        let (wrapped, marker) = timer.spawn_end_marker(stream::iter(vec![1u8, 2]));

        let items: Vec<u8> = wrapped.collect().await;
        assert_eq!(items, vec![1, 2]);

        tokio::time::timeout(Duration::from_secs(1), marker)
            .await
            .expect("end marker was not written after the stream ended")
            .expect("end marker task failed");
    }
}
