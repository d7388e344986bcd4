//! Stream Events
//!
//! The normalized unit of streamed output shared by every transport. Both
//! execution modes produce a `Stream<Item = StreamEvent>`: streaming runs
//! yield events directly from the runner, and buffered results are framed
//! here into the same shape, so the SSE layer needs exactly one interface.

use serde_json::{json, Value};

use crate::exec::ExecError;

/// One unit of bridged process output.
///
/// Consumed exactly once, in arrival order. `Completed` and `Failed` are
/// terminal: a well-formed sequence contains exactly one of them, last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// One line of standard output
    Line(String),

    /// The process exited with the given code
    Completed(i32),

    /// The invocation failed (spawn failure, I/O failure, kill)
    Failed(String),
}

impl StreamEvent {
    /// Project the event to its wire JSON.
    pub fn to_json(&self) -> Value {
        match self {
            StreamEvent::Line(text) => json!({ "text": text }),
            StreamEvent::Completed(code) => json!({ "done": true, "code": code }),
            StreamEvent::Failed(reason) => json!({ "error": reason }),
        }
    }

    /// True for `Completed` and `Failed`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, StreamEvent::Completed(_) | StreamEvent::Failed(_))
    }
}

/// Frame a buffered execution result as an event sequence: the full output
/// as a single `Line` followed by `Completed(0)`, or a single `Failed`.
///
/// Request/response endpoints reduce this sequence back to their JSON
/// bodies, so buffered and streaming invocations flow through the same
/// event model.
pub fn buffered_events(result: Result<String, ExecError>) -> Vec<StreamEvent> {
    match result {
        Ok(output) => vec![StreamEvent::Line(output), StreamEvent::Completed(0)],
        Err(e) => vec![StreamEvent::Failed(e.to_string())],
    }
}

// Include tests
#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;
