//! Content version models.

use serde::{Deserialize, Serialize};

use crate::models::pagination::PaginationResponse;

/// A slice of a content version's extracted text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentDetailResponse {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub start: Option<u64>,
    #[serde(default)]
    pub end: Option<u64>,
    #[serde(default)]
    pub total_length: Option<u64>,
    #[serde(default)]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

/// One embedded chunk of a content version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentEmbedding {
    pub id: String,
    #[serde(default)]
    pub chunk_index: Option<u32>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub vector: Option<Vec<f32>>,
}

/// Page of embeddings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentEmbeddingsListResponse {
    #[serde(default)]
    pub data: Vec<ContentEmbedding>,
    pub pagination: PaginationResponse,
}
