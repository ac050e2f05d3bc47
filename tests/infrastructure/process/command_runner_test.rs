use std::time::Duration;

use audiograb::infrastructure::process::{ProcessError, run_with_timeout};

fn shell(script: &str) -> Vec<String> {
    vec!["-c".to_string(), script.to_string()]
}

#[tokio::test]
async fn given_successful_command_when_running_then_captures_stdout() {
    let output = run_with_timeout("sh", &shell("printf hello"), Duration::from_secs(5))
        .await
        .unwrap();

    assert!(output.success());
    assert_eq!(output.stdout, b"hello");
}

#[tokio::test]
async fn given_failing_command_when_running_then_prefers_error_line() {
    let script = "echo 'WARNING: slow' >&2; echo 'ERROR: Video unavailable' >&2; echo 'cleanup' >&2; exit 1";
    let output = run_with_timeout("sh", &shell(script), Duration::from_secs(5))
        .await
        .unwrap();

    assert!(!output.success());
    assert_eq!(output.error_message(), "Video unavailable");
}

#[tokio::test]
async fn given_untagged_stderr_when_failing_then_uses_last_line() {
    let output = run_with_timeout(
        "sh",
        &shell("echo first >&2; echo last >&2; exit 2"),
        Duration::from_secs(5),
    )
    .await
    .unwrap();

    assert_eq!(output.error_message(), "last");
}

#[tokio::test]
async fn given_silent_failure_when_failing_then_reports_exit_status() {
    let output = run_with_timeout("sh", &shell("exit 3"), Duration::from_secs(5))
        .await
        .unwrap();

    assert!(output.error_message().contains("exit"));
}

#[tokio::test]
async fn given_slow_command_when_limit_elapses_then_times_out() {
    let result = run_with_timeout("sh", &shell("sleep 5"), Duration::from_millis(100)).await;

    assert!(matches!(result, Err(ProcessError::TimedOut { .. })));
}

#[tokio::test]
async fn given_missing_binary_when_running_then_returns_spawn_error() {
    let result = run_with_timeout(
        "audiograb-no-such-binary",
        &[],
        Duration::from_secs(1),
    )
    .await;

    assert!(matches!(result, Err(ProcessError::Spawn { .. })));
}

#[test]
fn given_wait_failure_when_displayed_then_does_not_claim_start_failure() {
    let error = ProcessError::Wait {
        program: "yt-dlp".to_string(),
        source: std::io::Error::other("broken pipe"),
    };

    let message = error.to_string();

    assert!(!message.contains("failed to start"));
    assert!(message.contains("while waiting"));
    assert!(message.contains("broken pipe"));
}
