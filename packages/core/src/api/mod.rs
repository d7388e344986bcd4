//! HTTP surface
//!
//! Exposes the bridge over axum: plain JSON endpoints, the SSE streaming
//! endpoints, and the MCP tool routes. Each inbound connection is one
//! tokio task; there is no cross-request shared mutable state, so the
//! application state is just the immutable configuration and the
//! stateless runner behind `Arc`.
//!
//! # Endpoints
//!
//! - `GET /health` - liveness probe
//! - `POST /prompt` - buffered prompt execution
//! - `GET /models` - list models known to the external tool
//! - `GET|POST /sse` - JSON-RPC over SSE
//! - `POST /sse/prompt` - line-streamed prompt execution over SSE
//! - `POST /mcp/tools/list` - static tool descriptors
//! - `POST /mcp/tools/call` - buffered tool execution

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::exec::CommandRunner;

mod http_error;
mod routes;
mod sse;

pub use http_error::ApiError;

/// Application state shared across all endpoints.
#[derive(Clone)]
pub struct AppState {
    pub runner: Arc<CommandRunner>,
}

impl AppState {
    pub fn new(config: Arc<ServerConfig>) -> Self {
        Self {
            runner: Arc::new(CommandRunner::new(config)),
        }
    }
}

/// Create the main application router with all endpoint modules.
///
/// CORS is permissive — the reference deployments sit behind local
/// frontends on arbitrary ports.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/prompt", post(routes::prompt))
        .route("/models", get(routes::models))
        .route("/sse", get(sse::rpc_channel_get).post(sse::rpc_channel_post))
        .route("/sse/prompt", post(sse::prompt_stream))
        .route("/mcp/tools/list", post(routes::mcp_tools_list))
        .route("/mcp/tools/call", post(routes::mcp_tools_call))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Start the HTTP server and serve until shutdown.
pub async fn start_server(config: Arc<ServerConfig>) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{}", config.port);
    let state = AppState::new(config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("🚀 LLM bridge listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
