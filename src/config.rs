//! Client configuration.
//!
//! Explicit values win over the environment; the environment wins over
//! built-in defaults.

use std::time::Duration;

use reqwest::Url;

use crate::error::{SeclaiError, SeclaiResult};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "SECLAI_API_KEY";
/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "SECLAI_API_URL";

pub const DEFAULT_BASE_URL: &str = "https://seclai.com";
pub const DEFAULT_API_KEY_HEADER: &str = "x-api-key";
/// Per-request timeout for buffered (non-streaming) calls.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for [`SeclaiClient`](crate::client::SeclaiClient).
///
/// # Example
///
/// ```ignore
/// use seclai::config::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_api_key("sk-test")
///     .with_base_url("https://staging.seclai.com");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key; falls back to `SECLAI_API_KEY`
    pub api_key: Option<String>,
    /// Base URL; falls back to `SECLAI_API_URL`, then `https://seclai.com`
    pub base_url: Option<String>,
    /// Header carrying the API key (default: `x-api-key`)
    pub api_key_header: String,
    /// Timeout for buffered requests (default: 30s)
    pub http_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            api_key_header: DEFAULT_API_KEY_HEADER.to_string(),
            http_timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Config whose API key and base URL come from the environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.api_key = non_blank(std::env::var(API_KEY_ENV).ok());
        config.base_url = non_blank(std::env::var(API_URL_ENV).ok());
        config
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_api_key_header(mut self, header: impl Into<String>) -> Self {
        self.api_key_header = header.into();
        self
    }

    pub fn with_http_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = timeout;
        self
    }

    /// Fill gaps from the process environment and validate.
    pub fn resolve(&self) -> SeclaiResult<ResolvedConfig> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Same as [`resolve`](Self::resolve) with a custom variable lookup.
    pub fn resolve_with<F>(&self, env: F) -> SeclaiResult<ResolvedConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = non_blank(self.api_key.clone())
            .or_else(|| non_blank(env(API_KEY_ENV)))
            .ok_or_else(|| {
                SeclaiError::configuration(format!(
                    "missing API key: set it on the config or via {}",
                    API_KEY_ENV
                ))
            })?;

        let base = non_blank(self.base_url.clone())
            .or_else(|| non_blank(env(API_URL_ENV)))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&base)
            .map_err(|e| SeclaiError::configuration(format!("invalid base URL: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(SeclaiError::configuration(format!(
                "invalid base URL: {}",
                base
            )));
        }

        let api_key_header = match self.api_key_header.trim() {
            "" => DEFAULT_API_KEY_HEADER.to_string(),
            header => header.to_string(),
        };

        Ok(ResolvedConfig {
            api_key,
            base_url,
            api_key_header,
            http_timeout: self.http_timeout,
        })
    }
}

/// Validated configuration held by the client.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub api_key: String,
    pub base_url: Url,
    pub api_key_header: String,
    pub http_timeout: Duration,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
