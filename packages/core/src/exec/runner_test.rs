//! Tests for CommandRunner
//!
//! These run real child processes through /bin/sh, which keeps the
//! process-lifecycle behavior (exit codes, timeouts, kills) honest.

use super::*;
use std::time::{Duration, Instant};

use futures::StreamExt;

fn runner_for(command: &str) -> CommandRunner {
    CommandRunner::new(Arc::new(ServerConfig {
        port: 0,
        command: command.to_string(),
        command_args: Vec::new(),
        default_model: "gpt-5-nano".to_string(),
        exec_timeout: Duration::from_secs(5),
        api_key: None,
    }))
}

fn shell(script: &str, timeout: Duration) -> InvocationRequest {
    InvocationRequest {
        argv: vec!["-c".to_string(), script.to_string()],
        env: Vec::new(),
        timeout,
    }
}

#[tokio::test]
async fn test_buffered_captures_stdout() {
    let runner = runner_for("/bin/sh");
    let output = runner
        .run_buffered(&shell("echo hello", Duration::from_secs(5)))
        .await
        .unwrap();

    assert_eq!(output, "hello\n");
}

#[tokio::test]
async fn test_buffered_nonzero_exit_carries_stderr() {
    let runner = runner_for("/bin/sh");
    let result = runner
        .run_buffered(&shell("echo oops >&2; exit 3", Duration::from_secs(5)))
        .await;

    match result {
        Err(ExecError::NonZeroExit { code, stderr }) => {
            assert_eq!(code, 3);
            assert_eq!(stderr, "oops");
        }
        other => panic!("Expected NonZeroExit, got {:?}", other),
    }
}

#[tokio::test]
async fn test_buffered_result_xor_error() {
    let runner = runner_for("/bin/sh");

    let ok = runner
        .run_buffered(&shell("echo fine", Duration::from_secs(5)))
        .await;
    assert!(ok.is_ok());

    let err = runner
        .run_buffered(&shell("exit 1", Duration::from_secs(5)))
        .await;
    assert!(err.is_err());
}

#[tokio::test]
async fn test_buffered_timeout_kills_child() {
    let runner = runner_for("/bin/sh");
    let started = Instant::now();

    let result = runner
        .run_buffered(&shell("sleep 30", Duration::from_millis(200)))
        .await;

    // The call must come back promptly (the child was killed, not waited
    // out) and report a timeout.
    assert!(started.elapsed() < Duration::from_secs(5));
    match result {
        Err(ExecError::Timeout { .. }) => {}
        other => panic!("Expected Timeout, got {:?}", other),
    }
}

#[tokio::test]
async fn test_buffered_env_overlay_reaches_child() {
    let runner = runner_for("/bin/sh");
    let request = InvocationRequest {
        argv: vec!["-c".to_string(), "printf '%s' \"$MARKER\"".to_string()],
        env: vec![("MARKER".to_string(), "overlay-value".to_string())],
        timeout: Duration::from_secs(5),
    };

    let output = runner.run_buffered(&request).await.unwrap();
    assert_eq!(output, "overlay-value");
}

#[tokio::test]
async fn test_buffered_spawn_failure() {
    let runner = runner_for("/nonexistent/llm-tool");
    let result = runner
        .run_buffered(&shell("echo never", Duration::from_secs(5)))
        .await;

    match result {
        Err(ExecError::SpawnFailed { command, .. }) => {
            assert_eq!(command, "/nonexistent/llm-tool");
        }
        other => panic!("Expected SpawnFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_streaming_yields_lines_in_order() {
    let runner = runner_for("/bin/sh");
    let events: Vec<StreamEvent> = runner
        .run_streaming(shell("printf 'A\\nB\\n'", Duration::from_secs(5)))
        .collect()
        .await;

    assert_eq!(
        events,
        vec![
            StreamEvent::Line("A".to_string()),
            StreamEvent::Line("B".to_string()),
            StreamEvent::Completed(0),
        ]
    );
}

#[tokio::test]
async fn test_streaming_reconstructs_full_output() {
    let runner = runner_for("/bin/sh");
    let events: Vec<StreamEvent> = runner
        .run_streaming(shell("printf 'one\\ntwo\\nthree\\n'", Duration::from_secs(5)))
        .collect()
        .await;

    // Exactly one terminal event, and it is the last one.
    let terminal_count = events
        .iter()
        .filter(|e| matches!(e, StreamEvent::Completed(_) | StreamEvent::Failed(_)))
        .count();
    assert_eq!(terminal_count, 1);
    assert_eq!(events.last(), Some(&StreamEvent::Completed(0)));

    // Concatenated lines reconstruct stdout.
    let reconstructed: String = events
        .iter()
        .filter_map(|e| match e {
            StreamEvent::Line(text) => Some(format!("{}\n", text)),
            _ => None,
        })
        .collect();
    assert_eq!(reconstructed, "one\ntwo\nthree\n");
}

#[tokio::test]
async fn test_streaming_reports_exit_code() {
    let runner = runner_for("/bin/sh");
    let events: Vec<StreamEvent> = runner
        .run_streaming(shell("exit 7", Duration::from_secs(5)))
        .collect()
        .await;

    assert_eq!(events, vec![StreamEvent::Completed(7)]);
}

#[tokio::test]
async fn test_streaming_spawn_failure_yields_single_failed() {
    let runner = runner_for("/nonexistent/llm-tool");
    let events: Vec<StreamEvent> = runner
        .run_streaming(shell("echo never", Duration::from_secs(5)))
        .collect()
        .await;

    assert_eq!(events.len(), 1);
    match &events[0] {
        StreamEvent::Failed(reason) => assert!(reason.contains("/nonexistent/llm-tool")),
        other => panic!("Expected Failed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_streaming_stderr_is_not_framed() {
    let runner = runner_for("/bin/sh");
    let events: Vec<StreamEvent> = runner
        .run_streaming(shell("echo visible; echo hidden >&2", Duration::from_secs(5)))
        .collect()
        .await;

    assert_eq!(
        events,
        vec![
            StreamEvent::Line("visible".to_string()),
            StreamEvent::Completed(0),
        ]
    );
}
