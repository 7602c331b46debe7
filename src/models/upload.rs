//! File upload models.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A file to upload to a source connection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadFileRequest {
    pub file: Bytes,
    pub file_name: String,
    /// Optional display title; sent as the `title` form field when set
    pub title: Option<String>,
    /// Explicit MIME type for the file part; the transport guesses otherwise
    pub mime_type: Option<String>,
}

impl UploadFileRequest {
    pub fn new(file: impl Into<Bytes>, file_name: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            file_name: file_name.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

/// Server acknowledgement of an upload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FileUploadResponse {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub content_version_id: Option<String>,
    #[serde(default)]
    pub source_connection_id: Option<String>,
}
