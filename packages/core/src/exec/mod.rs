//! External tool execution
//!
//! Owns the child-process lifecycle for the external language-model
//! command. Two modes share one runner:
//!
//! - **Buffered**: wait for completion under a wall-clock timeout, capture
//!   all output ([`CommandRunner::run_buffered`]).
//! - **Streaming**: read standard output line-by-line while the process
//!   runs, yielding events as they become available
//!   ([`CommandRunner::run_streaming`]).
//!
//! Every exit path — success, failure, timeout, caller cancellation —
//! leaves no child process behind: timeouts kill and reap explicitly, and
//! all children are spawned with `kill_on_drop` so dropping an in-flight
//! future or stream terminates the process.

pub mod error;
pub mod runner;

pub use error::ExecError;
pub use runner::CommandRunner;
