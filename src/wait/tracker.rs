//! Run-completion state tracking over SSE records.

use crate::error::{SeclaiError, SeclaiResult};
use crate::models::RunState;
use crate::sse::SseRecord;

/// Progress snapshot event.
pub const INIT_EVENT: &str = "init";
/// Terminal event carrying the final run state.
pub const DONE_EVENT: &str = "done";

/// Tracks the latest decoded run state and detects the `done` record.
///
/// Each decoded payload fully replaces the previous state.
#[derive(Debug, Default)]
pub struct RunTracker {
    last_seen: Option<RunState>,
    records_seen: usize,
}

impl RunTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one record. Returns the final state when it is a decodable
    /// `done` record.
    ///
    /// Records of other event types are ignored without decoding. An `init` or
    /// `done` payload that fails to decode is skipped: one malformed event must
    /// not fail an otherwise good stream.
    pub fn observe(&mut self, record: &SseRecord) -> Option<RunState> {
        self.records_seen += 1;

        let is_done = record.is_event(DONE_EVENT);
        if !is_done && !record.is_event(INIT_EVENT) {
            tracing::debug!("Ignoring SSE event '{}'", record.event);
            return None;
        }

        let state = match serde_json::from_str::<RunState>(&record.data) {
            Ok(state) => state,
            Err(e) => {
                tracing::debug!("Skipping undecodable '{}' event: {}", record.event, e);
                return None;
            }
        };

        tracing::debug!(
            "Run {} is {} ('{}' event)",
            state.run_id,
            state.status,
            record.event
        );

        if is_done {
            self.last_seen = Some(state.clone());
            return Some(state);
        }
        self.last_seen = Some(state);
        None
    }

    /// Most recent successfully decoded state.
    pub fn last_seen(&self) -> Option<&RunState> {
        self.last_seen.as_ref()
    }

    /// Number of records observed so far, recognized or not.
    pub fn records_seen(&self) -> usize {
        self.records_seen
    }

    /// Resolve a stream that ended without a `done` record.
    ///
    /// The last known state is returned as a best-effort result; with no state
    /// at all the stream is reported as ended early.
    pub fn finish(self) -> SeclaiResult<RunState> {
        match self.last_seen {
            Some(state) => {
                tracing::debug!(
                    "Stream ended without done event; returning last state of run {}",
                    state.run_id
                );
                Ok(state)
            }
            None => Err(SeclaiError::StreamEndedBeforeDone),
        }
    }
}
