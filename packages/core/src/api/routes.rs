//! Plain JSON endpoints
//!
//! Request/response routes: health, buffered prompt execution, model
//! listing, and the non-RPC tool surface. Buffered results pass through
//! the event framer so these endpoints and the SSE endpoints share one
//! event model.

use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::api::http_error::ApiError;
use crate::api::AppState;
use crate::events::{buffered_events, StreamEvent};
use crate::invocation::{InvocationRequest, PromptParams};
use crate::mcp::handlers::tools;

/// Health check endpoint
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Reduce a framed buffered sequence back to the captured output, or the
/// flattened failure.
fn framed_output(events: Vec<StreamEvent>) -> Result<String, ApiError> {
    let mut output = String::new();
    for event in events {
        match event {
            StreamEvent::Line(text) => output = text,
            StreamEvent::Completed(_) => {}
            StreamEvent::Failed(reason) => return Err(ApiError::internal(reason)),
        }
    }
    Ok(output)
}

/// Run a prompt to completion and return the full output.
///
/// Body: `{prompt, model?, system?, temperature?, max_tokens?}`.
pub async fn prompt(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let params = PromptParams::from_value(body).map_err(ApiError::internal)?;
    let invocation = InvocationRequest::for_prompt(state.runner.config(), &params);

    let result = state.runner.run_buffered(&invocation).await;
    let output = framed_output(buffered_events(result))?;

    Ok(Json(json!({ "response": output })))
}

/// List the models the external tool knows about, one per non-empty
/// output line.
pub async fn models(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let invocation = InvocationRequest::for_models(state.runner.config());

    let result = state.runner.run_buffered(&invocation).await;
    let output = framed_output(buffered_events(result))?;

    let models: Vec<String> = output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    Ok(Json(json!({ "models": models })))
}

/// Static tool descriptors for the plain HTTP surface.
pub async fn mcp_tools_list() -> Json<Value> {
    Json(tools::descriptor_list(&tools::http_tool_descriptors()))
}

/// Execute one tool call in buffered mode.
///
/// Body: `{name, arguments}`. Unknown names are a 400; execution failures
/// are a 500.
pub async fn mcp_tools_call(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let name = body.get("name").and_then(|v| v.as_str()).unwrap_or("");
    let arguments = body.get("arguments").cloned().unwrap_or_else(|| json!({}));

    let action = tools::resolve_tool(name).ok_or_else(|| ApiError::unknown_tool(name))?;

    let output = tools::run_tool(&state.runner, action, arguments)
        .await
        .map_err(ApiError::internal)?;

    Ok(Json(tools::text_content(output)))
}
