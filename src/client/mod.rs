//! Seclai API client.
//!
//! [`SeclaiClient`] owns the resolved configuration and a transport. Every
//! call, typed or raw, builds its URL with [`url::build_url`] and classifies
//! non-2xx responses with [`status_error`].

mod agents;
mod contents;
mod sources;
pub mod url;

use std::sync::Arc;

use bytes::Bytes;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::adapters::ReqwestHttpClient;
use crate::config::{ClientConfig, ResolvedConfig};
use crate::error::{status_error, SeclaiResult};
use crate::traits::{HttpClient, HttpRequest, RequestBody};
pub use url::Query;

/// A raw API call for endpoints without a typed method.
///
/// # Example
///
/// ```ignore
/// use seclai::client::ApiRequest;
///
/// let request = ApiRequest::get("/api/sources/")
///     .query("page", "2")
///     .header("X-Trace", "abc");
/// let raw: Option<serde_json::Value> = client.request(request).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Query,
    pub body: Option<serde_json::Value>,
    pub headers: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Query::new(),
            body: None,
            headers: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Add a query parameter. Empty values are dropped when the URL is built.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Add a numeric query parameter when it is positive.
    pub fn query_positive(self, key: impl Into<String>, value: u32) -> Self {
        if value == 0 {
            return self;
        }
        self.query(key, value.to_string())
    }

    /// Serialize `body` as the JSON request body.
    pub fn json<B: Serialize>(mut self, body: &B) -> SeclaiResult<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Extra header. Blank names are skipped when the request is sent.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Client for the Seclai API.
#[derive(Clone)]
pub struct SeclaiClient {
    config: ResolvedConfig,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for SeclaiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeclaiClient")
            .field("base_url", &self.config.base_url.as_str())
            .field("api_key_header", &self.config.api_key_header)
            .finish_non_exhaustive()
    }
}

impl SeclaiClient {
    /// Build a client on the default reqwest transport.
    pub fn new(config: ClientConfig) -> SeclaiResult<Self> {
        Self::with_http_client(config, Arc::new(ReqwestHttpClient::new()))
    }

    /// Build a client on a caller-supplied transport.
    pub fn with_http_client(config: ClientConfig, http: Arc<dyn HttpClient>) -> SeclaiResult<Self> {
        let config = config.resolve()?;
        tracing::debug!("Seclai client targeting {}", config.base_url);
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    pub fn base_url(&self) -> &reqwest::Url {
        &self.config.base_url
    }

    fn url(&self, path: &str, query: &Query) -> String {
        url::build_url(&self.config.base_url, path, query).to_string()
    }

    /// Request carrying the API key header.
    fn authorized(&self, method: Method, url: String) -> HttpRequest {
        HttpRequest::new(method, url).header(&self.config.api_key_header, &self.config.api_key)
    }

    /// Send a raw request and decode the JSON response.
    ///
    /// Returns `Ok(None)` for an empty 2xx body.
    pub async fn request<T: DeserializeOwned>(&self, request: ApiRequest) -> SeclaiResult<Option<T>> {
        let raw = self.request_raw(request).await?;
        if raw.is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_slice(&raw)?))
    }

    /// Send a raw request and return the 2xx body bytes.
    pub async fn request_raw(&self, request: ApiRequest) -> SeclaiResult<Bytes> {
        let ApiRequest {
            method,
            path,
            query,
            body,
            headers,
        } = request;

        let mut http_request = self
            .authorized(method, self.url(&path, &query))
            .header("Accept", "application/json")
            .timeout(self.config.http_timeout);

        if let Some(body) = body {
            http_request = http_request
                .header("Content-Type", "application/json")
                .body(RequestBody::Json(Bytes::from(serde_json::to_vec(&body)?)));
        }

        for (name, value) in headers {
            if name.trim().is_empty() {
                continue;
            }
            http_request = http_request.header(name, value);
        }

        self.send_buffered(http_request).await
    }

    /// Send, buffer the body and classify non-2xx statuses.
    async fn send_buffered(&self, request: HttpRequest) -> SeclaiResult<Bytes> {
        let method = request.method.clone();
        let url = request.url.clone();
        tracing::debug!("{} {}", method, url);

        let response = self.http.send(request).await?;
        if !response.is_success() {
            return Err(status_error(&method, &url, response.status, &response.body));
        }
        Ok(response.body)
    }

    /// Send and decode a required JSON body.
    async fn fetch<T: DeserializeOwned>(&self, request: ApiRequest) -> SeclaiResult<T> {
        let raw = self.request_raw(request).await?;
        Ok(serde_json::from_slice(&raw)?)
    }
}
