//! HTTP error handling
//!
//! Every failure on the JSON endpoints flattens to a single opaque
//! `{"error": message}` body. The only non-500 failure is an unknown tool
//! on the plain tool-call route, which is the caller's mistake (400).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

/// Failure kinds the HTTP surface distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Tool name not in the dispatch table
    UnknownTool,
    /// Everything else: spawn/timeout/exit failures, malformed bodies
    Internal,
}

/// HTTP error response carrying the opaque failure message.
#[derive(Debug)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    /// Create an unknown-tool error
    pub fn unknown_tool(name: &str) -> Self {
        Self {
            kind: ApiErrorKind::UnknownTool,
            message: format!("Unknown tool: {}", name),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Internal,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.kind {
            ApiErrorKind::UnknownTool => StatusCode::BAD_REQUEST,
            ApiErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.message }))).into_response()
    }
}
