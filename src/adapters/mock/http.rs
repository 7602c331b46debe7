//! Mock HTTP client for testing.
//!
//! Provides a configurable mock transport that returns predefined responses,
//! byte streams, or errors, and records every request it receives.

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use std::collections::HashMap;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::task::{Context, Poll};

use crate::traits::{
    ByteStream, Headers, HttpClient, HttpError, HttpRequest, Response, StreamingResponse,
};

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a buffered response
    Success(Response),
    /// Fail to connect with the given message
    ConnectionError(String),
    /// Return a streamed body made of these chunks
    Stream {
        status: u16,
        chunks: Vec<Bytes>,
        /// Keep the stream open forever after the last chunk
        hang: bool,
    },
    /// Stream these chunks, then fail the read with the given message
    StreamError { chunks: Vec<Bytes>, message: String },
}

impl MockResponse {
    /// `200 OK` event stream that closes after the last chunk.
    pub fn sse<I, S>(chunks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MockResponse::Stream {
            status: 200,
            chunks: chunks.into_iter().map(|c| Bytes::from(c.into())).collect(),
            hang: false,
        }
    }

    /// `200 OK` event stream that never closes after the last chunk.
    pub fn sse_hanging<I, S>(chunks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MockResponse::Stream {
            status: 200,
            chunks: chunks.into_iter().map(|c| Bytes::from(c.into())).collect(),
            hang: true,
        }
    }

    /// Buffered JSON response.
    pub fn json(status: u16, body: &serde_json::Value) -> Self {
        MockResponse::Success(Response::new(status, Bytes::from(body.to_string())))
    }
}

/// Mock HTTP client for testing.
///
/// Responses are matched by exact URL first, then by URL prefix, then fall
/// back to the default response.
///
/// # Example
///
/// ```ignore
/// use seclai::adapters::mock::{MockHttpClient, MockResponse};
///
/// let client = MockHttpClient::new();
/// client.set_response(
///     "https://seclai.com/api/agents/a1/runs/stream",
///     MockResponse::sse(["event: done\ndata: {\"run_id\":\"r\",\"status\":\"completed\"}\n\n"]),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct MockHttpClient {
    /// Configured responses by URL pattern
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// Default response when no specific match
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<HttpRequest>>>,
    /// Streamed bodies handed out and not yet dropped
    live_streams: Arc<AtomicUsize>,
}

fn locked<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            default_response: Arc::new(Mutex::new(None)),
            requests: Arc::new(Mutex::new(Vec::new())),
            live_streams: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Set a response for a specific URL.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        locked(&self.responses).insert(url.to_string(), response);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        *locked(&self.default_response) = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<HttpRequest> {
        locked(&self.requests).clone()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        locked(&self.requests).clear();
    }

    /// Number of streamed bodies that are still open.
    ///
    /// Drops back to zero once every consumer has released its connection.
    pub fn live_streams(&self) -> usize {
        self.live_streams.load(Ordering::SeqCst)
    }

    fn record_request(&self, request: &HttpRequest) {
        locked(&self.requests).push(request.clone());
    }

    fn get_response(&self, url: &str) -> Option<MockResponse> {
        let responses = locked(&self.responses);

        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }

        // Longest prefix wins so nested paths can be configured separately
        let prefix_match = responses
            .iter()
            .filter(|(pattern, _)| url.starts_with(pattern.as_str()))
            .max_by_key(|(pattern, _)| pattern.len())
            .map(|(_, response)| response.clone());
        if prefix_match.is_some() {
            return prefix_match;
        }

        locked(&self.default_response).clone()
    }

    fn tracked(&self, inner: ByteStream) -> ByteStream {
        self.live_streams.fetch_add(1, Ordering::SeqCst);
        Box::pin(TrackedStream {
            inner,
            live: Arc::clone(&self.live_streams),
        })
    }
}

impl Default for MockHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte stream that decrements the live counter when dropped.
struct TrackedStream {
    inner: ByteStream,
    live: Arc<AtomicUsize>,
}

impl Stream for TrackedStream {
    type Item = Result<Bytes, HttpError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().inner.as_mut().poll_next(cx)
    }
}

impl Drop for TrackedStream {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

fn chunk_stream(chunks: Vec<Bytes>) -> impl Stream<Item = Result<Bytes, HttpError>> + Send {
    futures::stream::iter(chunks.into_iter().map(Ok))
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn send(&self, request: HttpRequest) -> Result<Response, HttpError> {
        self.record_request(&request);

        match self.get_response(&request.url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::ConnectionError(message)) => {
                Err(HttpError::ConnectionFailed(message.into()))
            }
            Some(MockResponse::Stream { .. }) | Some(MockResponse::StreamError { .. }) => Err(
                HttpError::InvalidRequest("stream response on non-stream request".to_string()),
            ),
            None => Err(HttpError::InvalidRequest(format!(
                "no mock response for URL: {}",
                request.url
            ))),
        }
    }

    async fn send_streaming(&self, request: HttpRequest) -> Result<StreamingResponse, HttpError> {
        use futures_util::StreamExt;

        self.record_request(&request);

        match self.get_response(&request.url) {
            Some(MockResponse::Stream {
                status,
                chunks,
                hang,
            }) => {
                let body: ByteStream = if hang {
                    Box::pin(chunk_stream(chunks).chain(futures::stream::pending()))
                } else {
                    Box::pin(chunk_stream(chunks))
                };
                Ok(StreamingResponse::new(status, Headers::new(), self.tracked(body)))
            }
            Some(MockResponse::StreamError { chunks, message }) => {
                let failure = futures::stream::once(async move {
                    Err(HttpError::Body(message.into()))
                });
                let body: ByteStream = Box::pin(chunk_stream(chunks).chain(failure));
                Ok(StreamingResponse::new(200, Headers::new(), self.tracked(body)))
            }
            Some(MockResponse::Success(response)) => {
                let body: ByteStream = Box::pin(chunk_stream(vec![response.body]));
                Ok(StreamingResponse::new(
                    response.status,
                    response.headers,
                    self.tracked(body),
                ))
            }
            Some(MockResponse::ConnectionError(message)) => {
                Err(HttpError::ConnectionFailed(message.into()))
            }
            None => Err(HttpError::InvalidRequest(format!(
                "no mock response for URL: {}",
                request.url
            ))),
        }
    }
}
