//! MCP Request Handlers
//!
//! Handler modules for the supported MCP operations.

pub mod initialize;
pub mod tools;
