//! Run-to-completion over an agent's event stream.
//!
//! [`run_until_done`] races connect-and-consume against the deadline and the
//! caller's cancellation token. Losing the race drops the work future, which
//! drops the response body and closes the connection.

mod options;
mod tracker;

pub use options::{WaitOptions, DEFAULT_STREAM_TIMEOUT};
pub use tracker::{RunTracker, DONE_EVENT, INIT_EVENT};

use std::future::Future;

use futures_util::{pin_mut, StreamExt};
use tokio::time::Instant;

use crate::error::{SeclaiError, SeclaiResult};
use crate::models::RunState;
use crate::sse::sse_records;
use crate::traits::ByteStream;

/// Connect, then read records until the run completes, the stream ends, the
/// deadline expires or the wait is cancelled.
///
/// `connect` resolves to the response body once a 2xx status was accepted.
/// Connection time counts against the deadline.
pub async fn run_until_done<F>(connect: F, options: &WaitOptions) -> SeclaiResult<RunState>
where
    F: Future<Output = SeclaiResult<ByteStream>>,
{
    let started = Instant::now();
    let deadline = options.effective_deadline(started);
    let budget = deadline.saturating_duration_since(started);

    let work = async {
        let body = connect.await?;
        consume(body).await
    };

    let cancelled = async {
        match options.cancellation() {
            Some(token) => token.cancelled().await,
            None => std::future::pending::<()>().await,
        }
    };

    tokio::select! {
        biased;
        _ = cancelled => {
            tracing::info!("Run wait cancelled after {:?}", started.elapsed());
            Err(SeclaiError::Cancelled)
        }
        _ = tokio::time::sleep_until(deadline) => {
            tracing::warn!("Run did not complete within {:?}; closing stream", budget);
            Err(SeclaiError::Timeout { after: budget })
        }
        result = work => result,
    }
}

/// Drive the record stream through a [`RunTracker`].
async fn consume(body: ByteStream) -> SeclaiResult<RunState> {
    let records = sse_records(body);
    pin_mut!(records);

    let mut tracker = RunTracker::new();
    while let Some(record) = records.next().await {
        let record = record?;
        if let Some(done) = tracker.observe(&record) {
            return Ok(done);
        }
    }

    tracing::debug!(
        "Event stream closed after {} records without done",
        tracker.records_seen()
    );
    tracker.finish()
}
