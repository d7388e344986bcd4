//! LLMBridge Server Binary
//!
//! Standalone binary that exposes the bridge over HTTP: plain JSON
//! endpoints, SSE streaming, and the MCP tool surface.
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings (port 3000, `uvx llm`)
//! cargo run --bin llmbridge-server
//!
//! # Custom port and tool command
//! PORT=3001 LLM_COMMAND="llm" cargo run --bin llmbridge-server
//! ```
//!
//! # Environment Variables
//!
//! - `PORT`: HTTP listen port (default: 3000)
//! - `LLM_COMMAND`: external tool command line (default: "uvx llm")
//! - `LLM_DEFAULT_MODEL`: model when requests name none (default: gpt-5-nano)
//! - `LLM_TIMEOUT_SECS`: buffered execution timeout (default: 30)
//! - `OPENAI_API_KEY`: credential forwarded to the external tool
//! - `RUST_LOG`: logging level (e.g., "info", "debug", "trace")

use std::sync::Arc;

use llmbridge_core::{start_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🚀 LLMBridge Server");
    tracing::info!("==================================");

    let config = Arc::new(ServerConfig::from_env());

    tracing::info!("📡 Port: {}", config.port);
    tracing::info!(
        "🔧 External tool: {} {}",
        config.command,
        config.command_args.join(" ")
    );
    tracing::info!("🧠 Default model: {}", config.default_model);
    tracing::info!(
        "🔑 API credential: {}",
        if config.api_key.is_some() {
            "present"
        } else {
            "not set"
        }
    );

    start_server(config).await?;

    Ok(())
}
