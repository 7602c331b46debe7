//! Mock implementations for testing.
//!
//! Lets the client be exercised end to end without network access.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP transport with configurable responses and streams

pub mod http;

pub use http::{MockHttpClient, MockResponse};
