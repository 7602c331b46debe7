//! Non-2xx response classification.
//!
//! Every request path (buffered JSON, event stream, multipart upload) builds
//! its status error through [`status_error`].

use std::fmt;

use reqwest::Method;
use thiserror::Error;

use super::seclai_error::SeclaiError;
use crate::models::HttpValidationError;

/// A non-2xx HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiStatusError {
    pub status: u16,
    pub method: String,
    pub url: String,
    /// Response body, whitespace-trimmed
    pub response_text: String,
}

impl fmt::Display for ApiStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "api error ({}) {} {}", self.status, self.method, self.url)?;
        if !self.response_text.is_empty() {
            write!(f, ": {}", self.response_text)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiStatusError {}

/// HTTP 422 response.
///
/// `validation` is set when the body matched the structured
/// `{"detail": [...]}` shape.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{status}")]
pub struct ApiValidationError {
    pub status: ApiStatusError,
    pub validation: Option<HttpValidationError>,
}

/// Build the error for a non-2xx response.
pub fn status_error(method: &Method, url: &str, status: u16, body: &[u8]) -> SeclaiError {
    let status_err = ApiStatusError {
        status,
        method: method.as_str().to_string(),
        url: url.to_string(),
        response_text: String::from_utf8_lossy(body).trim().to_string(),
    };

    tracing::warn!("{} {} returned HTTP {}", status_err.method, url, status);

    if status == 422 {
        let validation = if body.is_empty() {
            None
        } else {
            serde_json::from_slice::<HttpValidationError>(body).ok()
        };
        return SeclaiError::Validation(ApiValidationError {
            status: status_err,
            validation,
        });
    }

    SeclaiError::Status(status_err)
}
