//! MCP JSON-RPC 2.0 Types
//!
//! Type definitions for Model Context Protocol communication.
//! Implements JSON-RPC 2.0 request/response/notification objects for the
//! SSE transport.
//!
//! The request `id` is kept as a raw `serde_json::Value` so that string
//! and number ids echo back with exact identity.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC 2.0 request structure
///
/// # Example
///
/// ```json
/// {
///     "jsonrpc": "2.0",
///     "id": 7,
///     "method": "tools/call",
///     "params": {
///         "name": "llm_prompt",
///         "arguments": { "prompt": "hello" }
///     }
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct RpcRequest {
    /// JSON-RPC version (must be "2.0")
    pub jsonrpc: String,

    /// Request identifier; absent for notifications
    #[serde(default)]
    pub id: Option<Value>,

    /// Method name to invoke
    pub method: String,

    /// Method parameters as JSON value
    #[serde(default)]
    pub params: Value,
}

/// JSON-RPC 2.0 response structure
///
/// `result` and `error` are mutually exclusive; the absent one is omitted
/// from the wire form.
#[derive(Debug, Serialize)]
pub struct RpcResponse {
    /// JSON-RPC version (always "2.0")
    pub jsonrpc: String,

    /// Request identifier (echoes the request verbatim)
    pub id: Value,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

/// JSON-RPC 2.0 error structure
#[derive(Debug, Serialize, Clone)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
}

/// JSON-RPC 2.0 notification (no id, no response expected)
#[derive(Debug, Serialize)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

// JSON-RPC 2.0 standard error codes
pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

impl RpcError {
    /// Create a parse error
    pub fn parse_error(message: impl Into<String>) -> Self {
        Self {
            code: PARSE_ERROR,
            message: message.into(),
        }
    }

    /// Create an invalid request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            code: INVALID_REQUEST,
            message: message.into(),
        }
    }

    /// Create a method not found error
    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: METHOD_NOT_FOUND,
            message: format!("Method not found: {}", method),
        }
    }

    /// Create an unknown tool error (same code as method not found)
    pub fn tool_not_found(tool: &str) -> Self {
        Self {
            code: METHOD_NOT_FOUND,
            message: format!("Unknown tool: {}", tool),
        }
    }

    /// Create an invalid params error
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self {
            code: INVALID_PARAMS,
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self {
            code: INTERNAL_ERROR,
            message: message.into(),
        }
    }
}

impl RpcResponse {
    /// Create a success response
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response
    pub fn error(id: Value, error: RpcError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

impl RpcNotification {
    /// The acknowledgement sent as the first frame on the SSE channel,
    /// before any process-derived event.
    pub fn connection_ready() -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            method: "connection/ready".to_string(),
            params: Some(Value::Object(Default::default())),
        }
    }
}

// Include tests
#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
