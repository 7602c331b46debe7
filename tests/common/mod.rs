//! Shared fixtures for integration tests.
//!
//! # Example
//!
//! ```ignore
//! let server = MockServer::start().await;
//! let client = test_client(&server);
//! ```

#![allow(dead_code)]

use seclai::{ClientConfig, SeclaiClient};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "sk-test-12345";

/// Client pointed at the mock server with a test API key.
pub fn test_client(server: &MockServer) -> SeclaiClient {
    let config = ClientConfig::new()
        .with_api_key(TEST_API_KEY)
        .with_base_url(server.uri());
    SeclaiClient::new(config).expect("test config is valid")
}

/// One SSE record as it appears on the wire.
pub fn sse_event(event: &str, data: &str) -> String {
    format!("event: {}\ndata: {}\n\n", event, data)
}

pub fn run_json(run_id: &str, status: &str) -> String {
    format!(r#"{{"run_id":"{}","status":"{}"}}"#, run_id, status)
}
