//! MCP Initialize Handler
//!
//! Handles the MCP initialization handshake. This is the first method a
//! client calls on the SSE channel; it reports the protocol version and
//! server identity and never touches the process runner.

use crate::mcp::types::RpcError;
use serde_json::{json, Value};

/// Protocol version reported to clients.
const PROTOCOL_VERSION: &str = "1.0.0";

/// Handle MCP initialize request
///
/// Returns the protocol version, capability set, and server info. The
/// client's own parameters are accepted as-is; this server does not
/// negotiate versions.
pub fn handle_initialize(_params: Value) -> Result<Value, RpcError> {
    Ok(json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {}
        },
        "serverInfo": {
            "name": "llmbridge",
            "version": env!("CARGO_PKG_VERSION")
        }
    }))
}

// Include tests
#[cfg(test)]
#[path = "initialize_test.rs"]
mod initialize_test;
