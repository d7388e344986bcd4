//! Model Context Protocol (MCP) Integration
//!
//! JSON-RPC 2.0 bridge between the SSE transport and the process runner.
//! Supported methods: `initialize`, `tools/list`, `tools/call`. The HTTP
//! transport delivers one JSON-RPC message per request body; requests
//! without an id are notifications and produce no response.
//!
//! `tools/call` dispatches into the runner's buffered mode and wraps the
//! captured output as MCP content blocks before the transport frames the
//! whole response.

pub mod handlers;
pub mod types;

pub use types::{RpcError, RpcNotification, RpcRequest, RpcResponse};

use serde_json::Value;
use tracing::{debug, warn};

use crate::exec::CommandRunner;

/// Handle one JSON-RPC message and return the response to frame, if any.
///
/// Returns `None` for notifications (no id) and for non-2.0 requests that
/// carry no id. The response id always echoes the request id verbatim.
pub async fn handle_message(runner: &CommandRunner, raw: Value) -> Option<RpcResponse> {
    let request: RpcRequest = match serde_json::from_value(raw) {
        Ok(request) => request,
        Err(e) => {
            warn!("Failed to parse JSON-RPC request: {}", e);
            return Some(RpcResponse::error(
                Value::Null,
                RpcError::invalid_request(format!("Invalid JSON-RPC request: {}", e)),
            ));
        }
    };

    if request.jsonrpc != "2.0" {
        let id = request.id?;
        return Some(RpcResponse::error(
            id,
            RpcError::invalid_request("Invalid JSON-RPC version"),
        ));
    }

    debug!(method = %request.method, "Handling JSON-RPC request");

    let result = match request.method.as_str() {
        "initialize" => handlers::initialize::handle_initialize(request.params),
        "tools/list" => handlers::tools::handle_tools_list(request.params),
        "tools/call" => handlers::tools::handle_tools_call(runner, request.params).await,
        _ => {
            warn!("Unknown MCP method: {}", request.method);
            Err(RpcError::method_not_found(&request.method))
        }
    };

    // Notifications are executed but never answered.
    let id = request.id?;

    Some(match result {
        Ok(result) => RpcResponse::success(id, result),
        Err(error) => {
            warn!(
                code = error.code,
                "JSON-RPC request failed: {}", error.message
            );
            RpcResponse::error(id, error)
        }
    })
}
