//! Content endpoints.

use super::url::segment;
use super::{ApiRequest, SeclaiClient};
use crate::error::SeclaiResult;
use crate::models::{ContentDetailResponse, ContentEmbeddingsListResponse};

fn content_path(content_version_id: &str) -> String {
    format!("/api/contents/{}", segment(content_version_id))
}

impl SeclaiClient {
    /// Fetch a content version, optionally sliced to `[start, end)`.
    /// Zero means "not set".
    pub async fn get_content_detail(
        &self,
        content_version_id: &str,
        start: u32,
        end: u32,
    ) -> SeclaiResult<ContentDetailResponse> {
        self.fetch(
            ApiRequest::get(content_path(content_version_id))
                .query_positive("start", start)
                .query_positive("end", end),
        )
        .await
    }

    pub async fn delete_content(&self, content_version_id: &str) -> SeclaiResult<()> {
        self.request_raw(ApiRequest::delete(content_path(content_version_id)))
            .await
            .map(|_| ())
    }

    pub async fn list_content_embeddings(
        &self,
        content_version_id: &str,
        page: u32,
        limit: u32,
    ) -> SeclaiResult<ContentEmbeddingsListResponse> {
        self.fetch(
            ApiRequest::get(format!("{}/embeddings", content_path(content_version_id)))
                .query_positive("page", page)
                .query_positive("limit", limit),
        )
        .await
    }
}
