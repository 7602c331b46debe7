//! Streaming run-to-completion tests against a wiremock server.

mod common;

use std::time::{Duration, Instant};

use common::{run_json, sse_event, test_client, TEST_API_KEY};
use seclai::models::{AgentRunStreamRequest, RunStatus};
use seclai::{SeclaiError, WaitOptions};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const STREAM_PATH: &str = "/api/agents/agent-1/runs/stream";

async fn mount_stream(server: &MockServer, body: String) {
    Mock::given(method("POST"))
        .and(path(STREAM_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/event-stream")
                .set_body_string(body),
        )
        .mount(server)
        .await;
}

fn request() -> AgentRunStreamRequest {
    AgentRunStreamRequest::with_input("hello")
}

#[tokio::test]
async fn test_completes_with_done_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(STREAM_PATH))
        .and(header("x-api-key", TEST_API_KEY))
        .and(header("accept", "text/event-stream"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({"input": "hello"})))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            "{}{}",
            sse_event("init", &run_json("run_123", "processing")),
            sse_event(
                "done",
                r#"{"run_id":"run_123","status":"completed","output":"final"}"#
            ),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let state = test_client(&server)
        .run_streaming_agent_and_wait("agent-1", &request(), WaitOptions::new())
        .await
        .unwrap();

    assert_eq!(state.run_id, "run_123");
    assert_eq!(state.status, RunStatus::Completed);
    assert_eq!(state.output.as_deref(), Some("final"));
}

#[tokio::test]
async fn test_literal_init_done_exchange() {
    let server = MockServer::start().await;
    mount_stream(
        &server,
        "event: init\n\
         data: {\"run_id\":\"run_1\",\"status\":\"processing\"}\n\
         \n\
         event: done\n\
         data: {\"run_id\":\"run_1\",\"status\":\"completed\",\"output\":\"ok\"}\n\
         \n"
        .to_string(),
    )
    .await;

    let state = test_client(&server)
        .run_streaming_agent_and_wait("agent-1", &request(), WaitOptions::new())
        .await
        .unwrap();

    assert_eq!(state.run_id, "run_1");
    assert_eq!(state.status, RunStatus::Completed);
    assert_eq!(state.output.as_deref(), Some("ok"));
}

#[tokio::test]
async fn test_multiline_data_and_crlf_framing() {
    let server = MockServer::start().await;
    mount_stream(
        &server,
        ": keep-alive\r\n\
         event: done\r\n\
         data: {\"run_id\":\"r1\",\r\n\
         data: \"status\":\"completed\"}\r\n\
         \r\n"
            .to_string(),
    )
    .await;

    let state = test_client(&server)
        .run_streaming_agent_and_wait("agent-1", &request(), WaitOptions::new())
        .await
        .unwrap();

    assert_eq!(state.run_id, "r1");
    assert_eq!(state.status, RunStatus::Completed);
}

#[tokio::test]
async fn test_best_effort_when_stream_ends_without_done() {
    let server = MockServer::start().await;
    mount_stream(
        &server,
        format!(
            "{}{}",
            sse_event("init", &run_json("r1", "pending")),
            sse_event("init", &run_json("r1", "processing")),
        ),
    )
    .await;

    let state = test_client(&server)
        .run_streaming_agent_and_wait("agent-1", &request(), WaitOptions::new())
        .await
        .unwrap();

    assert_eq!(state.status, RunStatus::Processing);
}

#[tokio::test]
async fn test_empty_stream_is_an_error() {
    let server = MockServer::start().await;
    mount_stream(&server, String::new()).await;

    let err = test_client(&server)
        .run_streaming_agent_and_wait("agent-1", &request(), WaitOptions::new())
        .await
        .unwrap_err();

    assert!(matches!(err, SeclaiError::StreamEndedBeforeDone));
    assert_eq!(err.to_string(), "stream ended before receiving done event");
}

#[tokio::test]
async fn test_malformed_init_is_ignored() {
    let server = MockServer::start().await;
    mount_stream(
        &server,
        format!(
            "{}{}",
            sse_event("init", "{not json"),
            sse_event("done", &run_json("r1", "completed")),
        ),
    )
    .await;

    let state = test_client(&server)
        .run_streaming_agent_and_wait("agent-1", &request(), WaitOptions::new())
        .await
        .unwrap();

    assert_eq!(state.status, RunStatus::Completed);
}

#[tokio::test]
async fn test_only_malformed_payloads_ends_in_error() {
    let server = MockServer::start().await;
    mount_stream(&server, sse_event("init", "{not json")).await;

    let err = test_client(&server)
        .run_streaming_agent_and_wait("agent-1", &request(), WaitOptions::new())
        .await
        .unwrap_err();

    assert!(matches!(err, SeclaiError::StreamEndedBeforeDone));
}

#[tokio::test]
async fn test_done_without_run_id_ends_the_wait() {
    let server = MockServer::start().await;
    mount_stream(
        &server,
        format!(
            "{}{}",
            sse_event("init", &run_json("r1", "processing")),
            sse_event("done", r#"{"status":"completed","output":"ok"}"#),
        ),
    )
    .await;

    let state = test_client(&server)
        .run_streaming_agent_and_wait("agent-1", &request(), WaitOptions::new())
        .await
        .unwrap();

    assert_eq!(state.run_id, "");
    assert_eq!(state.status, RunStatus::Completed);
    assert_eq!(state.output.as_deref(), Some("ok"));
}

#[tokio::test]
async fn test_empty_init_object_is_best_effort_state() {
    let server = MockServer::start().await;
    mount_stream(&server, "event: init\ndata: {}\n\n".to_string()).await;

    let state = test_client(&server)
        .run_streaming_agent_and_wait("agent-1", &request(), WaitOptions::new())
        .await
        .unwrap();

    assert_eq!(state.run_id, "");
    assert_eq!(state.status, RunStatus::Other(String::new()));
    assert!(state.output.is_none());
}

#[tokio::test]
async fn test_unknown_events_are_skipped() {
    let server = MockServer::start().await;
    mount_stream(
        &server,
        format!(
            "{}{}{}",
            sse_event("progress", r#"{"pct":50}"#),
            "data: no event name\n\n",
            sse_event("done", &run_json("r1", "failed")),
        ),
    )
    .await;

    let state = test_client(&server)
        .run_streaming_agent_and_wait("agent-1", &request(), WaitOptions::new())
        .await
        .unwrap();

    assert_eq!(state.status, RunStatus::Failed);
}

#[tokio::test]
async fn test_unterminated_final_record_is_flushed() {
    let server = MockServer::start().await;
    mount_stream(
        &server,
        format!("event: done\ndata: {}", run_json("r1", "completed")),
    )
    .await;

    let state = test_client(&server)
        .run_streaming_agent_and_wait("agent-1", &request(), WaitOptions::new())
        .await
        .unwrap();

    assert_eq!(state.status, RunStatus::Completed);
}

#[tokio::test]
async fn test_validation_error_before_stream() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(STREAM_PATH))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "detail": [{"loc": ["body", "input"], "msg": "field required", "type": "missing"}]
        })))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .run_streaming_agent_and_wait("agent-1", &request(), WaitOptions::new())
        .await
        .unwrap_err();

    match err {
        SeclaiError::Validation(v) => {
            assert_eq!(v.status.status, 422);
            assert_eq!(v.status.method, "POST");
            assert!(v.status.url.ends_with(STREAM_PATH));
            let validation = v.validation.expect("structured detail");
            assert_eq!(validation.messages(), vec!["field required"]);
        }
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_before_stream() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(STREAM_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .run_streaming_agent_and_wait("agent-1", &request(), WaitOptions::new())
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(503));
    assert!(err.is_retryable());
    assert!(err.to_string().contains("overloaded"));
}

#[tokio::test]
async fn test_deadline_expires_on_slow_server() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(STREAM_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(sse_event("done", &run_json("r1", "completed")))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let started = Instant::now();
    let err = test_client(&server)
        .run_streaming_agent_and_wait(
            "agent-1",
            &request(),
            WaitOptions::new().with_timeout(Duration::from_millis(10)),
        )
        .await
        .unwrap_err();

    assert!(err.is_timeout());
    assert!(matches!(err, SeclaiError::Timeout { .. }));
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn test_agent_id_is_path_escaped() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/agents/agent%2F1/runs/stream"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(sse_event("done", &run_json("r1", "completed"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let state = test_client(&server)
        .run_streaming_agent_and_wait("agent/1", &request(), WaitOptions::new())
        .await
        .unwrap();

    assert_eq!(state.run_id, "r1");
}

#[tokio::test]
async fn test_concurrent_waits_are_independent() {
    let server = MockServer::start().await;

    for (agent, run) in [("a1", "r1"), ("a2", "r2")] {
        Mock::given(method("POST"))
            .and(path(format!("/api/agents/{}/runs/stream", agent)))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(sse_event("done", &run_json(run, "completed"))),
            )
            .mount(&server)
            .await;
    }

    let client = test_client(&server);
    let (req1, req2) = (request(), request());
    let (first, second) = tokio::join!(
        client.run_streaming_agent_and_wait("a1", &req1, WaitOptions::new()),
        client.run_streaming_agent_and_wait("a2", &req2, WaitOptions::new()),
    );

    assert_eq!(first.unwrap().run_id, "r1");
    assert_eq!(second.unwrap().run_id, "r2");
}
