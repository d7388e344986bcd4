//! Runtime server configuration
//!
//! ServerConfig is the single source of truth for what the running process
//! uses. It is built from the environment once at startup, then passed
//! explicitly into the services that need it.
//!
//! ServerConfig is NOT serialized — it is rebuilt on every launch.

use std::time::Duration;

/// Default external command when `LLM_COMMAND` is unset.
const DEFAULT_COMMAND: &str = "uvx llm";

/// Model sent to the external tool when a request names none.
const DEFAULT_MODEL: &str = "gpt-5-nano";

/// Wall-clock limit for buffered executions, in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime server configuration — derived from the environment at startup.
/// Immutable for the process lifetime; shared behind `Arc`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port (from `PORT` env var or default 3000)
    pub port: u16,

    /// External tool program (first word of `LLM_COMMAND`)
    pub command: String,

    /// Base arguments prepended to every invocation (rest of `LLM_COMMAND`)
    pub command_args: Vec<String>,

    /// Model used when a request does not specify one
    pub default_model: String,

    /// Wall-clock timeout for buffered executions
    pub exec_timeout: Duration,

    /// API credential forwarded to the child process. Never logged.
    pub api_key: Option<String>,
}

impl ServerConfig {
    /// Build the configuration from the process environment.
    ///
    /// Called once during startup in main() before `start_server`.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        let command_line =
            std::env::var("LLM_COMMAND").unwrap_or_else(|_| DEFAULT_COMMAND.to_string());
        let mut words = command_line.split_whitespace().map(String::from);
        let command = words.next().unwrap_or_else(|| DEFAULT_COMMAND.to_string());
        let command_args: Vec<String> = words.collect();

        let default_model =
            std::env::var("LLM_DEFAULT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let exec_timeout = std::env::var("LLM_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());

        ServerConfig {
            port,
            command,
            command_args,
            default_model,
            exec_timeout,
            api_key,
        }
    }

    /// Environment overlay applied on top of the inherited parent
    /// environment when spawning the external tool. The credential is
    /// injected only when present in the host environment.
    pub fn env_overlay(&self) -> Vec<(String, String)> {
        match &self.api_key {
            Some(key) => vec![("OPENAI_API_KEY".to_string(), key.clone())],
            None => Vec::new(),
        }
    }
}

// Include tests
#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
