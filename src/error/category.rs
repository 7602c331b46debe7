//! Error category classification.
//!
//! Gives callers one switch for retry policy instead of matching every
//! variant of [`SeclaiError`](super::SeclaiError).

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Missing API key, invalid base URL, invalid upload request.
    /// Not retryable until the configuration is corrected.
    Configuration,

    /// Connection, DNS, TLS or body read failures.
    /// Generally transient.
    Transport,

    /// A deadline expired before the operation finished.
    /// The server may simply be slow; retrying with a longer deadline can help.
    Timeout,

    /// The caller cancelled the operation.
    Cancelled,

    /// The API answered with a non-2xx status other than 422.
    Api,

    /// The API rejected the request body or parameters (HTTP 422).
    Validation,

    /// The response could not be interpreted (bad JSON, stream ended early).
    Protocol,
}

impl ErrorCategory {
    /// Returns true if errors in this category are generally transient
    /// and the operation can be retried.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Transport | ErrorCategory::Timeout)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::Transport => "transport",
            ErrorCategory::Timeout => "timeout",
            ErrorCategory::Cancelled => "cancelled",
            ErrorCategory::Api => "api",
            ErrorCategory::Validation => "validation",
            ErrorCategory::Protocol => "protocol",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_retryable() {
        assert!(ErrorCategory::Transport.is_retryable());
        assert!(ErrorCategory::Timeout.is_retryable());
        assert!(!ErrorCategory::Configuration.is_retryable());
        assert!(!ErrorCategory::Cancelled.is_retryable());
        assert!(!ErrorCategory::Api.is_retryable());
        assert!(!ErrorCategory::Validation.is_retryable());
        assert!(!ErrorCategory::Protocol.is_retryable());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(format!("{}", ErrorCategory::Timeout), "timeout");
        assert_eq!(format!("{}", ErrorCategory::Validation), "validation");
    }
}
