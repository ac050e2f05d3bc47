use std::io;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use tokio::process::Command;

/// Captured result of a finished child process.
#[derive(Debug)]
pub struct CommandOutput {
    pub status: ExitStatus,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Last meaningful stderr line, preferring lines tagged `ERROR:`.
    pub fn error_message(&self) -> String {
        let stderr = String::from_utf8_lossy(&self.stderr);
        let lines: Vec<&str> = stderr.lines().map(str::trim).filter(|l| !l.is_empty()).collect();

        lines
            .iter()
            .rev()
            .find(|l| l.starts_with("ERROR:"))
            .or_else(|| lines.last())
            .map(|l| l.trim_start_matches("ERROR:").trim().to_string())
            .unwrap_or_else(|| format!("process exited with {}", self.status))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("{program} timed out after {}s", .after.as_secs())]
    TimedOut { program: String, after: Duration },
    #[error("lost track of {program} while waiting for it: {source}")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Runs `program` to completion, killing it if it outlives `limit`.
pub async fn run_with_timeout(
    program: &str,
    args: &[String],
    limit: Duration,
) -> Result<CommandOutput, ProcessError> {
    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| ProcessError::Spawn {
            program: program.to_string(),
            source,
        })?;

    let output = tokio::time::timeout(limit, child.wait_with_output())
        .await
        .map_err(|_| ProcessError::TimedOut {
            program: program.to_string(),
            after: limit,
        })?
        .map_err(|source| ProcessError::Wait {
            program: program.to_string(),
            source,
        })?;

    Ok(CommandOutput {
        status: output.status,
        stdout: output.stdout,
        stderr: output.stderr,
    })
}
