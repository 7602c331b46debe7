//! Source endpoints.

use reqwest::Method;

use super::url::segment;
use super::{ApiRequest, Query, SeclaiClient};
use crate::error::{SeclaiError, SeclaiResult};
use crate::models::{FileUploadResponse, ListSourcesParams, SourceListResponse, UploadFileRequest};
use crate::traits::{MultipartForm, RequestBody};

impl SeclaiClient {
    /// `GET /api/sources/`. Zero or empty parameters are omitted.
    pub async fn list_sources(&self, params: &ListSourcesParams) -> SeclaiResult<SourceListResponse> {
        let mut request = ApiRequest::get("/api/sources/")
            .query_positive("page", params.page)
            .query_positive("limit", params.limit);
        for (key, value) in [
            ("sort", &params.sort),
            ("order", &params.order),
            ("account_id", &params.account_id),
        ] {
            if let Some(value) = value {
                request = request.query(key, value.as_str());
            }
        }
        self.fetch(request).await
    }

    /// Upload a file to a source connection as `multipart/form-data`.
    ///
    /// The file goes in the `file` part; a title, when set, in the `title`
    /// field. An empty file or a blank file name is rejected before any
    /// request is made.
    pub async fn upload_file_to_source(
        &self,
        source_connection_id: &str,
        upload: UploadFileRequest,
    ) -> SeclaiResult<FileUploadResponse> {
        if upload.file.is_empty() {
            return Err(SeclaiError::configuration(
                "upload requires non-empty file bytes",
            ));
        }
        if upload.file_name.trim().is_empty() {
            return Err(SeclaiError::configuration("upload requires a file name"));
        }

        let mut form = MultipartForm::new();
        if let Some(title) = upload.title.filter(|t| !t.is_empty()) {
            form = form.text("title", title);
        }
        form = form.file("file", upload.file_name, upload.mime_type, upload.file);

        let url = self.url(
            &format!("/api/sources/{}/upload", segment(source_connection_id)),
            &Query::new(),
        );
        let request = self
            .authorized(Method::POST, url)
            .header("Accept", "application/json")
            .timeout(self.config.http_timeout)
            .body(RequestBody::Multipart(form));

        let raw = self.send_buffered(request).await?;
        if raw.is_empty() {
            return Ok(FileUploadResponse::default());
        }
        Ok(serde_json::from_slice(&raw)?)
    }
}
