//! Deadline and cancellation settings for waiting on a run.

use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Applied when the caller gives no deadline.
pub const DEFAULT_STREAM_TIMEOUT: Duration = Duration::from_secs(60);

/// Stand-in for timeouts too large to represent as an instant.
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

/// Bounds for [`SeclaiClient::run_streaming_agent_and_wait`](crate::client::SeclaiClient::run_streaming_agent_and_wait).
///
/// # Example
///
/// ```ignore
/// use seclai::wait::WaitOptions;
/// use std::time::Duration;
///
/// let options = WaitOptions::new().with_timeout(Duration::from_secs(120));
/// ```
#[derive(Debug, Clone, Default)]
pub struct WaitOptions {
    deadline: Option<Instant>,
    cancel: Option<CancellationToken>,
}

impl WaitOptions {
    /// No deadline (the default applies) and no cancellation token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expire `timeout` from now.
    ///
    /// A timeout past the representable range is clamped to roughly thirty
    /// years.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(offset(Instant::now(), timeout))
    }

    /// Expire at an absolute instant.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Abort the wait when `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Caller-supplied deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn cancellation(&self) -> Option<&CancellationToken> {
        self.cancel.as_ref()
    }

    /// The caller's deadline, or `started + DEFAULT_STREAM_TIMEOUT`.
    pub fn effective_deadline(&self, started: Instant) -> Instant {
        self.deadline
            .unwrap_or_else(|| offset(started, DEFAULT_STREAM_TIMEOUT))
    }
}

fn offset(from: Instant, by: Duration) -> Instant {
    from.checked_add(by).unwrap_or_else(|| from + FAR_FUTURE)
}
