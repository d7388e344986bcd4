//! MCP Tools Handler
//!
//! Implements the MCP `tools/list` and `tools/call` methods. Tool names
//! resolve through an enumerated dispatch table, so adding a tool is a
//! data change (one table row, one descriptor) rather than a new control
//! path.
//!
//! Every tool call runs the external tool in buffered mode; the SSE
//! channel frames whole JSON-RPC responses, never partial tool output.

use serde_json::{json, Value};

use crate::exec::CommandRunner;
use crate::invocation::{InvocationRequest, PromptParams};
use crate::mcp::types::RpcError;

/// Static metadata for one exposed tool. No lifecycle; effectively a
/// constant.
#[derive(Debug, Clone)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Option<Value>,
}

impl ToolDescriptor {
    pub fn to_json(&self) -> Value {
        let mut tool = json!({
            "name": self.name,
            "description": self.description,
        });
        if let Some(schema) = &self.input_schema {
            tool["inputSchema"] = schema.clone();
        }
        tool
    }
}

/// What a tool call does once its name resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolAction {
    /// Send a prompt to the external tool
    Prompt,
    /// List the models the external tool knows about
    ListModels,
}

/// Tool-name dispatch table. Both the RPC names and the short names used
/// by the plain HTTP surface resolve to the same actions.
pub fn resolve_tool(name: &str) -> Option<ToolAction> {
    match name {
        "llm_prompt" | "prompt" => Some(ToolAction::Prompt),
        "llm_models" | "list_models" => Some(ToolAction::ListModels),
        _ => None,
    }
}

fn prompt_input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "prompt": { "type": "string" },
            "model": { "type": "string", "default": "gpt-5-nano" },
            "system": { "type": "string" },
            "temperature": { "type": "number" },
            "max_tokens": { "type": "number" }
        },
        "required": ["prompt"]
    })
}

/// Descriptors advertised on the JSON-RPC channel.
pub fn rpc_tool_descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor {
            name: "llm_prompt",
            description: "Send a prompt to an LLM model",
            input_schema: Some(prompt_input_schema()),
        },
        ToolDescriptor {
            name: "llm_models",
            description: "List available LLM models",
            input_schema: None,
        },
    ]
}

/// Descriptors advertised on the plain HTTP tool surface, which uses the
/// short names.
pub fn http_tool_descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor {
            name: "prompt",
            description: "Send a prompt to an LLM model",
            input_schema: Some(prompt_input_schema()),
        },
        ToolDescriptor {
            name: "list_models",
            description: "List available LLM models",
            input_schema: None,
        },
    ]
}

/// Render a descriptor set as a `tools/list`-shaped result.
pub fn descriptor_list(descriptors: &[ToolDescriptor]) -> Value {
    json!({
        "tools": descriptors.iter().map(ToolDescriptor::to_json).collect::<Vec<_>>()
    })
}

/// Handle tools/list request
pub fn handle_tools_list(_params: Value) -> Result<Value, RpcError> {
    Ok(descriptor_list(&rpc_tool_descriptors()))
}

/// Handle tools/call request
///
/// Unknown tool names answer `-32601`; any execution failure maps to
/// `-32603` carrying the failure message. Success wraps the captured
/// output as a typed-text content array.
pub async fn handle_tools_call(runner: &CommandRunner, params: Value) -> Result<Value, RpcError> {
    let name = params.get("name").and_then(|v| v.as_str()).unwrap_or("");
    let arguments = params.get("arguments").cloned().unwrap_or_else(|| json!({}));

    let action = resolve_tool(name).ok_or_else(|| RpcError::tool_not_found(name))?;

    let output = run_tool(runner, action, arguments)
        .await
        .map_err(RpcError::internal_error)?;

    Ok(text_content(output))
}

/// Execute a resolved tool through the runner's buffered mode.
///
/// Shared by the JSON-RPC bridge and the plain `/mcp/tools/call` route;
/// both flatten failures to the opaque message this returns.
pub async fn run_tool(
    runner: &CommandRunner,
    action: ToolAction,
    arguments: Value,
) -> Result<String, String> {
    let invocation = match action {
        ToolAction::Prompt => {
            let params = PromptParams::from_value(arguments)?;
            InvocationRequest::for_prompt(runner.config(), &params)
        }
        ToolAction::ListModels => InvocationRequest::for_models(runner.config()),
    };

    runner
        .run_buffered(&invocation)
        .await
        .map_err(|e| e.to_string())
}

/// Wrap captured output as an MCP content array of typed text blocks.
pub fn text_content(text: String) -> Value {
    json!({
        "content": [{ "type": "text", "text": text }]
    })
}

// Include tests
#[cfg(test)]
#[path = "tools_test.rs"]
mod tools_test;
