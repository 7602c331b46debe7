//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP transport (buffered and streaming requests)

pub mod http;

pub use http::{
    BoxError, ByteStream, Headers, HttpClient, HttpError, HttpRequest, MultipartForm,
    MultipartPart, RequestBody, Response, StreamingResponse,
};
