//! Invocation values and argument-vector construction
//!
//! An [`InvocationRequest`] is the immutable per-call value handed to the
//! process runner: the argument vector for the external tool, the
//! environment overlay, and the buffered-mode timeout. The external program
//! itself and its base arguments come from [`ServerConfig`], not from the
//! request.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use crate::config::ServerConfig;

/// One external-tool invocation. Created per incoming call, moved into the
/// runner, discarded when the invocation completes.
#[derive(Debug, Clone)]
pub struct InvocationRequest {
    /// Arguments appended after the configured base arguments
    pub argv: Vec<String>,

    /// Environment overlay applied on top of the inherited environment
    pub env: Vec<(String, String)>,

    /// Wall-clock limit for buffered execution
    pub timeout: Duration,
}

/// Request body shared by `/prompt`, `/sse/prompt`, and the prompt tool
/// call's `arguments` object.
#[derive(Debug, Clone, Deserialize)]
pub struct PromptParams {
    pub prompt: String,

    #[serde(default)]
    pub model: Option<String>,

    #[serde(default)]
    pub system: Option<String>,

    #[serde(default)]
    pub temperature: Option<f64>,

    #[serde(default)]
    pub max_tokens: Option<u64>,
}

impl PromptParams {
    /// Parse params from a JSON value. An absent or empty prompt is a
    /// malformed request.
    pub fn from_value(value: Value) -> Result<Self, String> {
        let params: PromptParams =
            serde_json::from_value(value).map_err(|e| format!("Invalid prompt parameters: {}", e))?;
        if params.prompt.trim().is_empty() {
            return Err("Missing required field: prompt".to_string());
        }
        Ok(params)
    }
}

impl InvocationRequest {
    /// Build the invocation for a prompt:
    /// `<prompt> -m <model> [-s <system>] [-t <temperature>] [--max-tokens <n>]`
    pub fn for_prompt(config: &ServerConfig, params: &PromptParams) -> Self {
        let model = params
            .model
            .clone()
            .unwrap_or_else(|| config.default_model.clone());

        let mut argv = vec![params.prompt.clone(), "-m".to_string(), model];

        if let Some(system) = &params.system {
            argv.push("-s".to_string());
            argv.push(system.clone());
        }
        if let Some(temperature) = params.temperature {
            argv.push("-t".to_string());
            argv.push(temperature.to_string());
        }
        if let Some(max_tokens) = params.max_tokens {
            argv.push("--max-tokens".to_string());
            argv.push(max_tokens.to_string());
        }

        InvocationRequest {
            argv,
            env: config.env_overlay(),
            timeout: config.exec_timeout,
        }
    }

    /// Build the invocation for listing models: `models list`
    pub fn for_models(config: &ServerConfig) -> Self {
        InvocationRequest {
            argv: vec!["models".to_string(), "list".to_string()],
            env: config.env_overlay(),
            timeout: config.exec_timeout,
        }
    }
}

// Include tests
#[cfg(test)]
#[path = "invocation_test.rs"]
mod invocation_test;
