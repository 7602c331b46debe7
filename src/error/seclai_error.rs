//! Unified error type for all client operations.

use std::time::Duration;

use thiserror::Error;

use super::category::ErrorCategory;
use super::status::{ApiStatusError, ApiValidationError};
use crate::traits::HttpError;

/// Every error the client can return.
#[derive(Debug, Error)]
pub enum SeclaiError {
    /// Invalid or missing client configuration
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Transport failure, passed through unchanged
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The wait deadline expired while connecting or streaming
    #[error("timed out after {after:?} waiting for the run to complete")]
    Timeout { after: Duration },

    /// The caller's cancellation token fired
    #[error("operation cancelled")]
    Cancelled,

    /// The event stream closed before any usable run state arrived
    #[error("stream ended before receiving done event")]
    StreamEndedBeforeDone,

    /// Non-2xx response
    #[error(transparent)]
    Status(#[from] ApiStatusError),

    /// HTTP 422 response
    #[error(transparent)]
    Validation(#[from] ApiValidationError),

    /// Request encoding or response decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SeclaiError {
    pub fn configuration(message: impl Into<String>) -> Self {
        SeclaiError::Configuration {
            message: message.into(),
        }
    }

    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            SeclaiError::Configuration { .. } => ErrorCategory::Configuration,
            SeclaiError::Http(e) if e.is_timeout() => ErrorCategory::Timeout,
            SeclaiError::Http(_) => ErrorCategory::Transport,
            SeclaiError::Timeout { .. } => ErrorCategory::Timeout,
            SeclaiError::Cancelled => ErrorCategory::Cancelled,
            SeclaiError::StreamEndedBeforeDone => ErrorCategory::Protocol,
            SeclaiError::Status(_) => ErrorCategory::Api,
            SeclaiError::Validation(_) => ErrorCategory::Validation,
            SeclaiError::Json(_) => ErrorCategory::Protocol,
        }
    }

    /// True for deadline expiry and for the transport's own request timeout.
    pub fn is_timeout(&self) -> bool {
        self.category() == ErrorCategory::Timeout
    }

    /// Whether retrying the same call may succeed.
    ///
    /// Server errors (5xx), 408 and 429 count as retryable on top of the
    /// category rule.
    pub fn is_retryable(&self) -> bool {
        match self.status_code() {
            Some(status) => status >= 500 || status == 408 || status == 429,
            None => self.category().is_retryable(),
        }
    }

    /// HTTP status for `Status` and `Validation` errors.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            SeclaiError::Status(e) => Some(e.status),
            SeclaiError::Validation(e) => Some(e.status.status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> SeclaiError {
        SeclaiError::Status(ApiStatusError {
            status: code,
            method: "GET".to_string(),
            url: "https://seclai.com/api/sources/".to_string(),
            response_text: String::new(),
        })
    }

    #[test]
    fn test_timeout_is_distinct_from_transport() {
        let timeout = SeclaiError::Timeout {
            after: Duration::from_millis(10),
        };
        let reset: SeclaiError = HttpError::Body("connection reset".into()).into();

        assert!(timeout.is_timeout());
        assert_eq!(timeout.category(), ErrorCategory::Timeout);
        assert!(!reset.is_timeout());
        assert_eq!(reset.category(), ErrorCategory::Transport);
    }

    #[test]
    fn test_transport_timeout_counts_as_timeout() {
        let err: SeclaiError = HttpError::Timeout("30s".into()).into();
        assert!(err.is_timeout());
        assert!(matches!(err, SeclaiError::Http(_)));
    }

    #[test]
    fn test_http_error_is_transparent() {
        let err: SeclaiError = HttpError::ConnectionFailed("dns failure".into()).into();
        assert_eq!(err.to_string(), "connection failed: dns failure");
    }

    #[test]
    fn test_retry_logic() {
        assert!(status(500).is_retryable());
        assert!(status(503).is_retryable());
        assert!(status(429).is_retryable());
        assert!(!status(404).is_retryable());
        assert!(!SeclaiError::StreamEndedBeforeDone.is_retryable());
        assert!(!SeclaiError::Cancelled.is_retryable());
        assert!(!SeclaiError::configuration("missing API key").is_retryable());
    }

    #[test]
    fn test_status_code() {
        assert_eq!(status(404).status_code(), Some(404));
        assert_eq!(SeclaiError::Cancelled.status_code(), None);
    }

    #[test]
    fn test_stream_ended_message() {
        assert_eq!(
            SeclaiError::StreamEndedBeforeDone.to_string(),
            "stream ended before receiving done event"
        );
    }
}
