//! Tests for MCP JSON-RPC types

use super::*;
use serde_json::json;

#[test]
fn test_deserialize_request() {
    let raw = r#"{"jsonrpc":"2.0","id":123,"method":"tools/call","params":{"name":"llm_prompt"}}"#;
    let request: RpcRequest = serde_json::from_str(raw).unwrap();

    assert_eq!(request.jsonrpc, "2.0");
    assert_eq!(request.id, Some(json!(123)));
    assert_eq!(request.method, "tools/call");
    assert!(request.params.is_object());
}

#[test]
fn test_deserialize_notification_has_no_id() {
    let raw = r#"{"jsonrpc":"2.0","method":"initialized"}"#;
    let request: RpcRequest = serde_json::from_str(raw).unwrap();

    assert!(request.id.is_none());
    assert!(request.params.is_null());
}

#[test]
fn test_string_id_survives_round_trip() {
    let raw = r#"{"jsonrpc":"2.0","id":"req-42","method":"tools/list","params":{}}"#;
    let request: RpcRequest = serde_json::from_str(raw).unwrap();

    let response = RpcResponse::success(request.id.unwrap(), json!({"tools": []}));
    let wire = serde_json::to_value(&response).unwrap();
    assert_eq!(wire["id"], "req-42");
}

#[test]
fn test_success_response_omits_error() {
    let response = RpcResponse::success(json!(42), json!({"ok": true}));
    let wire = serde_json::to_value(&response).unwrap();

    assert_eq!(wire["jsonrpc"], "2.0");
    assert_eq!(wire["id"], 42);
    assert_eq!(wire["result"]["ok"], true);
    assert!(wire.get("error").is_none()); // Should be omitted
}

#[test]
fn test_error_response_omits_result() {
    let response = RpcResponse::error(json!(99), RpcError::tool_not_found("bogus"));
    let wire = serde_json::to_value(&response).unwrap();

    assert_eq!(wire["id"], 99);
    assert_eq!(wire["error"]["code"], METHOD_NOT_FOUND);
    assert_eq!(wire["error"]["message"], "Unknown tool: bogus");
    assert!(wire.get("result").is_none()); // Should be omitted
}

#[test]
fn test_standard_error_codes() {
    assert_eq!(PARSE_ERROR, -32700);
    assert_eq!(INVALID_REQUEST, -32600);
    assert_eq!(METHOD_NOT_FOUND, -32601);
    assert_eq!(INVALID_PARAMS, -32602);
    assert_eq!(INTERNAL_ERROR, -32603);
}

#[test]
fn test_connection_ready_notification() {
    let wire = serde_json::to_value(RpcNotification::connection_ready()).unwrap();

    assert_eq!(wire["jsonrpc"], "2.0");
    assert_eq!(wire["method"], "connection/ready");
    assert_eq!(wire["params"], json!({}));
    assert!(wire.get("id").is_none());
}
