//! SSE endpoints
//!
//! Long-lived `text/event-stream` responses. Every stream opens with an
//! acknowledgement frame before any process-derived event, writes one
//! `data:` frame per event in production order, and closes after the
//! terminal event. Client disconnects drop the stream, which drops — and
//! therefore kills — the child process.

use std::convert::Infallible;
use std::time::Duration;

use async_stream::stream;
use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::IntoResponse;
use axum::Json;
use futures::Stream;
use serde_json::{json, Value};
use tokio_stream::StreamExt;
use tracing::error;

use crate::api::AppState;
use crate::events::StreamEvent;
use crate::invocation::{InvocationRequest, PromptParams};
use crate::mcp;
use crate::mcp::types::RpcNotification;

const KEEP_ALIVE_SECS: u64 = 30;

/// Serialize an event stream as a long-lived SSE response.
///
/// `Cache-Control: no-cache` and `X-Accel-Buffering: no` keep caches and
/// reverse proxies from buffering the stream. Keep-alive comments flow
/// every 30 seconds so a slow-starting process does not look like a dead
/// connection.
fn sse_response<S>(stream: S) -> impl IntoResponse
where
    S: Stream<Item = Result<Event, Infallible>> + Send + 'static,
{
    (
        [
            ("cache-control", "no-cache"),
            ("x-accel-buffering", "no"),
        ],
        Sse::new(stream).keep_alive(
            KeepAlive::new()
                .interval(Duration::from_secs(KEEP_ALIVE_SECS))
                .text("keepalive"),
        ),
    )
}

fn data_frame(payload: Value) -> Result<Event, Infallible> {
    Ok(Event::default().data(payload.to_string()))
}

/// JSON-RPC over SSE.
///
/// The channel always opens with the `connection/ready` notification.
/// A POST body carrying a JSON-RPC message gets its response framed onto
/// the same stream; GET (no message) acknowledges and closes.
fn rpc_channel(state: AppState, message: Option<Value>) -> impl IntoResponse {
    let stream = stream! {
        match serde_json::to_value(RpcNotification::connection_ready()) {
            Ok(ready) => yield data_frame(ready),
            Err(e) => error!("Failed to serialize ready notification: {}", e),
        }

        if let Some(message) = message {
            if let Some(response) = mcp::handle_message(&state.runner, message).await {
                match serde_json::to_value(&response) {
                    Ok(wire) => yield data_frame(wire),
                    Err(e) => error!("Failed to serialize JSON-RPC response: {}", e),
                }
            }
        }
    };

    sse_response(stream)
}

/// GET /sse
pub async fn rpc_channel_get(State(state): State<AppState>) -> impl IntoResponse {
    rpc_channel(state, None)
}

/// POST /sse
pub async fn rpc_channel_post(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> impl IntoResponse {
    rpc_channel(state, body.map(|Json(message)| message))
}

/// POST /sse/prompt — stream one prompt invocation.
///
/// Frames arrive in process order: the acknowledgement, one `{"text": …}`
/// per output line as it is produced, then exactly one terminal frame
/// (`{"done": true, "code": …}` or `{"error": …}`).
pub async fn prompt_stream(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let stream = stream! {
        yield data_frame(json!({ "status": "connected" }));

        let params = match PromptParams::from_value(body) {
            Ok(params) => params,
            Err(reason) => {
                yield data_frame(StreamEvent::Failed(reason).to_json());
                return;
            }
        };

        let invocation = InvocationRequest::for_prompt(state.runner.config(), &params);
        let events = state.runner.run_streaming(invocation);
        tokio::pin!(events);

        while let Some(event) = events.next().await {
            yield data_frame(event.to_json());
        }
    };

    sse_response(stream)
}
