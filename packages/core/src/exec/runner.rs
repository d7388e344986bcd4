//! Command Runner
//!
//! Spawns the configured external tool and bridges its output to the rest
//! of the system. Buffered mode blocks the calling task until exit or
//! timeout; streaming mode hands back a lazy, single-consumer event
//! sequence that observes partial output before the process completes.

use std::process::Stdio;
use std::sync::Arc;

use async_stream::stream;
use futures::Stream;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::process::{Child, ChildStderr, Command};
use tracing::{debug, instrument, warn};

use crate::config::ServerConfig;
use crate::events::StreamEvent;
use crate::exec::error::ExecError;
use crate::invocation::InvocationRequest;

/// Runs the external tool on behalf of one request at a time.
///
/// The runner itself is stateless; each invocation owns its child process
/// privately, so runners can be shared freely across request tasks.
pub struct CommandRunner {
    config: Arc<ServerConfig>,
}

impl CommandRunner {
    pub fn new(config: Arc<ServerConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Spawn the external tool with piped stdio and the request's
    /// environment overlay on top of the inherited environment.
    ///
    /// `kill_on_drop` guarantees the child cannot outlive its owner: if
    /// the caller is cancelled mid-invocation, dropping the in-flight
    /// future or stream terminates the process.
    fn spawn(&self, request: &InvocationRequest) -> Result<Child, ExecError> {
        let mut command = Command::new(&self.config.command);
        command
            .args(&self.config.command_args)
            .args(&request.argv)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        // Overlay keys only; the credential value is never logged.
        for (key, value) in &request.env {
            command.env(key, value);
        }

        command
            .spawn()
            .map_err(|source| ExecError::spawn_failed(&self.config.command, source))
    }

    /// Run to completion, capturing all output.
    ///
    /// Stdout and stderr are drained concurrently while waiting for exit
    /// (draining one pipe at a time can deadlock once the other fills).
    /// On timeout the child is killed and reaped before the error returns,
    /// so no process lingers past the call.
    #[instrument(skip(self, request), fields(command = %self.config.command))]
    pub async fn run_buffered(&self, request: &InvocationRequest) -> Result<String, ExecError> {
        debug!(argv = ?request.argv, "Running external command (buffered)");

        let mut child = self.spawn(request)?;
        let mut stdout_pipe = child.stdout.take();
        let mut stderr_pipe = child.stderr.take();

        let outcome = {
            let capture = async {
                let mut stdout = Vec::new();
                let mut stderr = Vec::new();

                let read_stdout = async {
                    if let Some(pipe) = stdout_pipe.as_mut() {
                        pipe.read_to_end(&mut stdout).await?;
                    }
                    std::io::Result::Ok(())
                };
                let read_stderr = async {
                    if let Some(pipe) = stderr_pipe.as_mut() {
                        pipe.read_to_end(&mut stderr).await?;
                    }
                    std::io::Result::Ok(())
                };
                tokio::try_join!(read_stdout, read_stderr)?;

                let status = child.wait().await?;
                std::io::Result::Ok((status, stdout, stderr))
            };

            tokio::time::timeout(request.timeout, capture).await
        };

        match outcome {
            Ok(Ok((status, stdout, stderr))) => {
                if status.success() {
                    Ok(String::from_utf8_lossy(&stdout).into_owned())
                } else {
                    let code = status.code().unwrap_or(-1);
                    let stderr = String::from_utf8_lossy(&stderr).trim().to_string();
                    warn!(code, "External command failed");
                    Err(ExecError::non_zero_exit(code, stderr))
                }
            }
            Ok(Err(e)) => Err(ExecError::Io(e)),
            Err(_elapsed) => {
                warn!(
                    timeout_secs = request.timeout.as_secs(),
                    "External command timed out, killing child"
                );
                // kill() also reaps, so the timeout path leaves no zombie.
                if let Err(e) = child.kill().await {
                    warn!("Failed to kill timed-out child: {}", e);
                }
                Err(ExecError::timeout(request.timeout))
            }
        }
    }

    /// Spawn and return a lazy, single-consumer event sequence.
    ///
    /// One `Line` per stdout line as it becomes available, then exactly
    /// one terminal event: `Completed(code)` once the process exits, or
    /// `Failed(reason)` if the spawn or a read failed. No event follows a
    /// terminal event. Dropping the stream kills the child.
    ///
    /// Streaming mode has no built-in timeout; it runs until the process
    /// exits or the consumer cancels.
    pub fn run_streaming(
        &self,
        request: InvocationRequest,
    ) -> impl Stream<Item = StreamEvent> + Send + 'static {
        debug!(argv = ?request.argv, "Running external command (streaming)");
        let spawned = self.spawn(&request);

        stream! {
            let mut child = match spawned {
                Ok(child) => child,
                Err(e) => {
                    yield StreamEvent::Failed(e.to_string());
                    return;
                }
            };

            let stdout = match child.stdout.take() {
                Some(stdout) => stdout,
                None => {
                    yield StreamEvent::Failed("stdout pipe unavailable".to_string());
                    return;
                }
            };
            if let Some(stderr) = child.stderr.take() {
                tokio::spawn(drain_stderr(stderr));
            }

            let mut lines = BufReader::new(stdout).lines();
            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => yield StreamEvent::Line(line),
                    Ok(None) => break,
                    Err(e) => {
                        if let Err(kill_err) = child.kill().await {
                            warn!("Failed to kill child after read error: {}", kill_err);
                        }
                        yield StreamEvent::Failed(format!("Failed to read command output: {}", e));
                        return;
                    }
                }
            }

            match child.wait().await {
                Ok(status) => yield StreamEvent::Completed(status.code().unwrap_or(-1)),
                Err(e) => yield StreamEvent::Failed(format!("Failed to reap command: {}", e)),
            }
        }
    }
}

/// Tee child stderr to the debug log, line by line, until EOF.
///
/// Stderr is diagnostic only in streaming mode; it never becomes an event.
async fn drain_stderr(stderr: ChildStderr) {
    let mut lines = BufReader::new(stderr).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        debug!(line = %line, "external command stderr");
    }
}

// Include tests
#[cfg(test)]
#[path = "runner_test.rs"]
mod runner_test;
