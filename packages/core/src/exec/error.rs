//! Execution Error Types
//!
//! Error taxonomy for external-tool invocations. Every runner failure is
//! one of these; transports flatten them to a single opaque message for
//! the caller.

use std::time::Duration;

use thiserror::Error;

/// External command execution errors
#[derive(Error, Debug)]
pub enum ExecError {
    /// The executable could not be launched (missing, not executable)
    #[error("Failed to launch {command}: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Buffered execution exceeded its wall-clock limit
    #[error("Command timed out after {}s", .limit.as_secs())]
    Timeout { limit: Duration },

    /// The process ran and signaled failure via its exit code
    #[error("Command failed with exit code {code}: {stderr}")]
    NonZeroExit { code: i32, stderr: String },

    /// Reading output or reaping the process failed
    #[error("Command I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl ExecError {
    /// Create a spawn failure error
    pub fn spawn_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::SpawnFailed {
            command: command.into(),
            source,
        }
    }

    /// Create a timeout error
    pub fn timeout(limit: Duration) -> Self {
        Self::Timeout { limit }
    }

    /// Create a non-zero exit error
    pub fn non_zero_exit(code: i32, stderr: impl Into<String>) -> Self {
        Self::NonZeroExit {
            code,
            stderr: stderr.into(),
        }
    }
}
