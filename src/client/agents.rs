//! Agent run endpoints.

use bytes::Bytes;
use reqwest::Method;

use super::url::segment;
use super::{ApiRequest, Query, SeclaiClient};
use crate::error::{status_error, SeclaiResult};
use crate::models::{
    AgentRunListResponse, AgentRunRequest, AgentRunResponse, AgentRunStreamRequest, RunState,
};
use crate::traits::{ByteStream, RequestBody};
use crate::wait::{run_until_done, WaitOptions};

fn runs_path(agent_id: &str) -> String {
    format!("/api/agents/{}/runs", segment(agent_id))
}

fn run_path(agent_id: &str, run_id: &str) -> String {
    format!("{}/{}", runs_path(agent_id), segment(run_id))
}

impl SeclaiClient {
    /// Start an agent run and return immediately.
    pub async fn run_agent(
        &self,
        agent_id: &str,
        request: &AgentRunRequest,
    ) -> SeclaiResult<AgentRunResponse> {
        self.fetch(ApiRequest::post(runs_path(agent_id)).json(request)?)
            .await
    }

    /// Start an agent run and wait for it to finish over the event stream.
    ///
    /// Returns the `done` payload, or the last `init` payload when the server
    /// closes the stream early. Fails with [`SeclaiError::Timeout`] when the
    /// deadline (60s unless `options` sets one) expires first.
    ///
    /// [`SeclaiError::Timeout`]: crate::error::SeclaiError::Timeout
    pub async fn run_streaming_agent_and_wait(
        &self,
        agent_id: &str,
        request: &AgentRunStreamRequest,
        options: WaitOptions,
    ) -> SeclaiResult<RunState> {
        let body = Bytes::from(serde_json::to_vec(request)?);
        let url = self.url(&format!("{}/stream", runs_path(agent_id)), &Query::new());

        tracing::info!("Starting streamed run for agent {}", agent_id);
        run_until_done(self.open_run_stream(url, body), &options).await
    }

    /// POST the run request and hand back the event stream once a 2xx
    /// status arrives.
    async fn open_run_stream(&self, url: String, body: Bytes) -> SeclaiResult<ByteStream> {
        let request = self
            .authorized(Method::POST, url.clone())
            .header("Content-Type", "application/json")
            .header("Accept", "text/event-stream")
            .body(RequestBody::Json(body));

        let response = self.http.send_streaming(request).await?;
        if !response.is_success() {
            let status = response.status;
            let text = response.into_bytes().await.unwrap_or_default();
            return Err(status_error(&Method::POST, &url, status, &text));
        }

        tracing::debug!("Event stream open for {}", url);
        Ok(response.body)
    }

    pub async fn list_agent_runs(
        &self,
        agent_id: &str,
        page: u32,
        limit: u32,
    ) -> SeclaiResult<AgentRunListResponse> {
        self.fetch(
            ApiRequest::get(runs_path(agent_id))
                .query_positive("page", page)
                .query_positive("limit", limit),
        )
        .await
    }

    pub async fn get_agent_run(&self, agent_id: &str, run_id: &str) -> SeclaiResult<AgentRunResponse> {
        self.fetch(ApiRequest::get(run_path(agent_id, run_id))).await
    }

    /// Cancel or delete a run.
    pub async fn delete_agent_run(&self, agent_id: &str, run_id: &str) -> SeclaiResult<()> {
        self.request_raw(ApiRequest::delete(run_path(agent_id, run_id)))
            .await
            .map(|_| ())
    }
}
