//! Structured validation error body returned with HTTP 422.

use serde::{Deserialize, Serialize};

/// `{"detail": [...]}`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HttpValidationError {
    #[serde(default)]
    pub detail: Option<Vec<ValidationError>>,
}

impl HttpValidationError {
    /// Messages of every reported problem, in order.
    pub fn messages(&self) -> Vec<&str> {
        self.detail
            .iter()
            .flatten()
            .map(|e| e.msg.as_str())
            .collect()
    }
}

/// One field-level problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Location path, e.g. `["query", "page"]`; entries may be strings or indices
    #[serde(default)]
    pub loc: Vec<serde_json::Value>,
    pub msg: String,
    #[serde(default, rename = "type")]
    pub kind: String,
}
