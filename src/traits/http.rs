//! HTTP transport trait abstraction.
//!
//! The client never talks to reqwest directly. Every request goes through
//! [`HttpClient`], which lets tests swap in a mock transport and keeps the
//! streaming path and the buffered path on the same request/response types.

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use futures_util::StreamExt;
use reqwest::Method;
use std::collections::HashMap;
use std::pin::Pin;
use std::time::Duration;
use thiserror::Error;

/// HTTP headers represented as a key-value map.
pub type Headers = HashMap<String, String>;

/// Boxed error carried by transport failures so the original cause is kept intact.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Incrementally delivered response body.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, HttpError>> + Send>>;

/// One part of a `multipart/form-data` body.
#[derive(Debug, Clone, PartialEq)]
pub enum MultipartPart {
    /// Plain text form field
    Text { name: String, value: String },
    /// File field with its original file name
    File {
        name: String,
        file_name: String,
        mime_type: Option<String>,
        bytes: Bytes,
    },
}

/// Ordered list of multipart parts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartForm {
    pub parts: Vec<MultipartPart>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(MultipartPart::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        mime_type: Option<String>,
        bytes: Bytes,
    ) -> Self {
        self.parts.push(MultipartPart::File {
            name: name.into(),
            file_name: file_name.into(),
            mime_type,
            bytes,
        });
        self
    }
}

/// Request body variants supported by the transport.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Pre-encoded JSON document
    Json(Bytes),
    /// `multipart/form-data`; the transport chooses the boundary
    Multipart(MultipartForm),
}

/// A fully described outgoing request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Headers,
    pub body: Option<RequestBody>,
    /// Whole-request timeout. `None` leaves the request unbounded, which the
    /// streaming path relies on since its deadline is enforced by the caller.
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Headers::new(),
            body: None,
            timeout: None,
        }
    }

    /// Set a header, replacing any previous value with the same name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.headers
            .retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
        self.headers.insert(name, value.into());
        self
    }

    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Case-insensitive header lookup.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Fully buffered HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: Headers,
    /// Response body
    pub body: Bytes,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, body: Bytes) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body,
        }
    }

    /// Create a new response with headers.
    pub fn with_headers(status: u16, headers: Headers, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Check if the response indicates success (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Response whose body has not been read yet.
///
/// Dropping it closes the underlying connection.
pub struct StreamingResponse {
    pub status: u16,
    pub headers: Headers,
    pub body: ByteStream,
}

impl StreamingResponse {
    pub fn new(status: u16, headers: Headers, body: ByteStream) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Drain the rest of the body into memory.
    pub async fn into_bytes(mut self) -> Result<Bytes, HttpError> {
        let mut collected = Vec::new();
        while let Some(chunk) = self.body.next().await {
            collected.extend_from_slice(&chunk?);
        }
        Ok(Bytes::from(collected))
    }
}

impl std::fmt::Debug for StreamingResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamingResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

/// Transport-level failures.
///
/// The source error from the underlying HTTP stack is preserved so callers can
/// inspect it with `std::error::Error::source`.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Connecting failed (refused, DNS, TLS handshake)
    #[error("connection failed: {0}")]
    ConnectionFailed(#[source] BoxError),
    /// The transport's own request timeout fired
    #[error("request timed out: {0}")]
    Timeout(#[source] BoxError),
    /// Reading the response body failed mid-stream
    #[error("failed to read response body: {0}")]
    Body(#[source] BoxError),
    /// The request could not be built
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// Anything else reported by the transport
    #[error("transport error: {0}")]
    Other(#[source] BoxError),
}

impl HttpError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, HttpError::Timeout(_))
    }
}

/// Trait for HTTP transports.
///
/// Implementations include the production reqwest adapter and the mock used
/// in tests.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send a request and buffer the whole response body.
    async fn send(&self, request: HttpRequest) -> Result<Response, HttpError>;

    /// Send a request and hand back the body as a stream once the status line
    /// and headers have arrived. Non-2xx responses are returned as-is so the
    /// caller can read the error body.
    async fn send_streaming(&self, request: HttpRequest) -> Result<StreamingResponse, HttpError>;
}
