//! LLMBridge Core
//!
//! This crate bridges HTTP and JSON-RPC requests onto an external
//! command-line language-model tool: it launches a child process per
//! request, captures its output (buffered or line-by-line), and re-emits
//! it as a framed, ordered event stream to the protocol consumers.
//!
//! # Architecture
//!
//! - **One task per connection**: request state is private to its task;
//!   no cross-request locking exists anywhere in the crate
//! - **One event model**: buffered and streaming invocations both surface
//!   as ordered [`events::StreamEvent`] sequences
//! - **No orphans**: every child process is waited on or killed on every
//!   exit path, including timeout and client disconnect
//!
//! # Modules
//!
//! - [`config`] - Immutable process-wide configuration
//! - [`invocation`] - Per-call invocation values and argv construction
//! - [`exec`] - Process runner (buffered + streaming modes)
//! - [`events`] - Normalized stream events and buffered framing
//! - [`mcp`] - JSON-RPC 2.0 bridge (initialize, tools/list, tools/call)
//! - [`api`] - axum router, JSON endpoints, SSE transport

pub mod api;
pub mod config;
pub mod events;
pub mod exec;
pub mod invocation;
pub mod mcp;

// Re-export commonly used types
pub use api::{create_router, start_server, AppState};
pub use config::ServerConfig;
pub use events::StreamEvent;
pub use exec::{CommandRunner, ExecError};
pub use invocation::{InvocationRequest, PromptParams};
