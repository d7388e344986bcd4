//! Integration tests for the request-to-process-to-stream bridge
//!
//! These tests exercise the public crate surface end-to-end with real
//! child processes: the full MCP conversation over the router, and the
//! runner-to-event pipeline the transports consume.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use futures::StreamExt;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use llmbridge_core::{
    create_router, AppState, CommandRunner, InvocationRequest, PromptParams, ServerConfig,
    StreamEvent,
};

/// Test helper: config pointing the bridge at /bin/echo
fn echo_config() -> Arc<ServerConfig> {
    Arc::new(ServerConfig {
        port: 0,
        command: "/bin/echo".to_string(),
        command_args: Vec::new(),
        default_model: "gpt-5-nano".to_string(),
        exec_timeout: Duration::from_secs(5),
        api_key: None,
    })
}

fn rpc_message(id: Value, method: &str, params: Value) -> Request<Body> {
    let body = json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": method,
        "params": params
    });
    Request::builder()
        .method("POST")
        .uri("/sse")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn sse_frames(response: axum::response::Response) -> Vec<Value> {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    text.split("\n\n")
        .filter_map(|frame| frame.strip_prefix("data: "))
        .map(|data| serde_json::from_str(data).unwrap())
        .collect()
}

// ============================================================================
// Full MCP conversation
// ============================================================================

#[tokio::test]
async fn test_full_mcp_conversation() {
    // initialize
    let response = create_router(AppState::new(echo_config()))
        .oneshot(rpc_message(json!(1), "initialize", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let frames = sse_frames(response).await;
    assert_eq!(frames[0]["method"], "connection/ready");
    assert_eq!(frames[1]["id"], 1);
    assert_eq!(frames[1]["result"]["serverInfo"]["name"], "llmbridge");

    // tools/list
    let response = create_router(AppState::new(echo_config()))
        .oneshot(rpc_message(json!(2), "tools/list", json!({})))
        .await
        .unwrap();
    let frames = sse_frames(response).await;
    let tools = frames[1]["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 2);

    // tools/call
    let response = create_router(AppState::new(echo_config()))
        .oneshot(rpc_message(
            json!(3),
            "tools/call",
            json!({ "name": "llm_prompt", "arguments": { "prompt": "ping" } }),
        ))
        .await
        .unwrap();
    let frames = sse_frames(response).await;
    assert_eq!(frames[1]["id"], 3);
    let text = frames[1]["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("ping"));
}

// ============================================================================
// Runner-to-event pipeline
// ============================================================================

#[tokio::test]
async fn test_streaming_pipeline_preserves_order_and_payload() {
    let config = Arc::new(ServerConfig {
        command: "/bin/sh".to_string(),
        ..(*echo_config()).clone()
    });
    let runner = CommandRunner::new(config);

    let request = InvocationRequest {
        argv: vec![
            "-c".to_string(),
            "echo first; echo second; echo third".to_string(),
        ],
        env: Vec::new(),
        timeout: Duration::from_secs(5),
    };

    let events: Vec<StreamEvent> = runner.run_streaming(request).collect().await;

    assert_eq!(
        events,
        vec![
            StreamEvent::Line("first".to_string()),
            StreamEvent::Line("second".to_string()),
            StreamEvent::Line("third".to_string()),
            StreamEvent::Completed(0),
        ]
    );
}

#[tokio::test]
async fn test_buffered_invocation_from_prompt_params() {
    let config = echo_config();
    let runner = CommandRunner::new(Arc::clone(&config));

    let params = PromptParams::from_value(json!({
        "prompt": "integration",
        "model": "test-model"
    }))
    .unwrap();
    let invocation = InvocationRequest::for_prompt(&config, &params);

    let output = runner.run_buffered(&invocation).await.unwrap();
    assert_eq!(output, "integration -m test-model\n");
}
