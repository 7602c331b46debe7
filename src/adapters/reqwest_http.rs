//! Reqwest-based HTTP transport adapter.
//!
//! Production implementation of the [`HttpClient`] trait from `crate::traits`.

use async_trait::async_trait;
use futures_util::StreamExt;

use crate::traits::{
    Headers, HttpClient, HttpError, HttpRequest, MultipartForm, MultipartPart, RequestBody,
    Response, StreamingResponse,
};

/// HTTP client implementation using reqwest.
///
/// # Example
///
/// ```ignore
/// use seclai::adapters::ReqwestHttpClient;
/// use seclai::traits::{HttpClient, HttpRequest};
///
/// let client = ReqwestHttpClient::new();
/// let response = client
///     .send(HttpRequest::new(reqwest::Method::GET, "https://seclai.com/api/sources/"))
///     .await?;
/// println!("Status: {}", response.status);
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Create a new ReqwestHttpClient with default settings.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a new ReqwestHttpClient with a custom reqwest::Client.
    ///
    /// This allows for advanced configuration like proxies, connection pools,
    /// or TLS settings.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Get a reference to the underlying reqwest::Client.
    pub fn inner(&self) -> &reqwest::Client {
        &self.client
    }

    /// Convert reqwest error to HttpError, keeping the original as the source.
    fn convert_error(err: reqwest::Error) -> HttpError {
        if err.is_timeout() {
            HttpError::Timeout(Box::new(err))
        } else if err.is_connect() {
            HttpError::ConnectionFailed(Box::new(err))
        } else if err.is_body() || err.is_decode() {
            HttpError::Body(Box::new(err))
        } else if err.is_builder() {
            HttpError::InvalidRequest(err.to_string())
        } else {
            HttpError::Other(Box::new(err))
        }
    }

    /// Convert reqwest headers to our Headers type.
    fn convert_headers(headers: &reqwest::header::HeaderMap) -> Headers {
        headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect()
    }

    fn build_form(form: MultipartForm) -> Result<reqwest::multipart::Form, HttpError> {
        let mut built = reqwest::multipart::Form::new();
        for part in form.parts {
            built = match part {
                MultipartPart::Text { name, value } => built.text(name, value),
                MultipartPart::File {
                    name,
                    file_name,
                    mime_type,
                    bytes,
                } => {
                    let mut file_part =
                        reqwest::multipart::Part::bytes(bytes.to_vec()).file_name(file_name);
                    if let Some(mime) = mime_type {
                        file_part = file_part
                            .mime_str(&mime)
                            .map_err(|e| HttpError::InvalidRequest(e.to_string()))?;
                    }
                    built.part(name, file_part)
                }
            };
        }
        Ok(built)
    }

    /// Translate an [`HttpRequest`] into a reqwest request builder.
    fn build(&self, request: HttpRequest) -> Result<reqwest::RequestBuilder, HttpError> {
        let url = reqwest::Url::parse(&request.url)
            .map_err(|e| HttpError::InvalidRequest(format!("invalid URL {}: {}", request.url, e)))?;

        let mut builder = self.client.request(request.method, url);
        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }
        builder = match request.body {
            Some(RequestBody::Json(bytes)) => builder.body(bytes),
            Some(RequestBody::Multipart(form)) => builder.multipart(Self::build_form(form)?),
            None => builder,
        };
        Ok(builder)
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn send(&self, request: HttpRequest) -> Result<Response, HttpError> {
        let response = self
            .build(request)?
            .send()
            .await
            .map_err(Self::convert_error)?;

        let status = response.status().as_u16();
        let headers = Self::convert_headers(response.headers());
        let body = response.bytes().await.map_err(Self::convert_error)?;

        Ok(Response::with_headers(status, headers, body))
    }

    async fn send_streaming(&self, request: HttpRequest) -> Result<StreamingResponse, HttpError> {
        let response = self
            .build(request)?
            .send()
            .await
            .map_err(Self::convert_error)?;

        let status = response.status().as_u16();
        let headers = Self::convert_headers(response.headers());
        let body = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(Self::convert_error));

        Ok(StreamingResponse::new(status, headers, Box::pin(body)))
    }
}
