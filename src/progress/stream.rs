//! Timed sampling of progress into a snapshot stream
//!
//! [`stream`] polls a [`Progressable`] on a fixed interval from a spawned
//! task and pushes [`Progress`] snapshots into a bounded channel. The
//! stream ends after the snapshot that first observes completion, or
//! promptly when the cancellation token fires. One stream per progress
//! object; it is not restartable.

use super::{Progress, Progressable};
use std::time::Duration;
use tokio_stream::wrappers::ReceiverStream;
use tokio_util::sync::CancellationToken;

/// Snapshots buffered ahead of a slow consumer.
const CHANNEL_DEPTH: usize = 16;

/// Sample `progress` every `interval` until it completes or `cancel` fires.
///
/// Snapshots are delivered in sampling order at roughly `interval` spacing;
/// exact periodicity is not guaranteed under scheduler pressure. The first
/// sample is taken immediately, so a source that is already complete yields
/// exactly one snapshot before the stream closes.
pub fn stream<P>(
    progress: P,
    interval: Duration,
    cancel: CancellationToken,
) -> ReceiverStream<Progress>
where
    P: Progressable + 'static,
{
    let (tx, rx) = tokio::sync::mpsc::channel(CHANNEL_DEPTH);

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            tokio::select! {
                () = cancel.cancelled() => {
                    tracing::trace!("progress stream cancelled");
                    break;
                }
                _ = ticker.tick() => {
                    let done = progress.is_complete();
                    if tx.send(progress.snapshot()).await.is_err() {
                        // consumer hung up
                        break;
                    }
                    if done {
                        break;
                    }
                }
            }
        }
    });

    ReceiverStream::new(rx)
}
