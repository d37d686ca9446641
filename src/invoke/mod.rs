//! External process invocation.
//!
//! Every routed command ends up here: a shell command line is composed, run as
//! one fresh child process under an enforced timeout, and its outcome is
//! normalized into an [`InvocationResult`]. Failures never propagate past this
//! boundary as errors; they become [`InvocationResult::Failure`] values.

pub mod mock;
pub mod shell;

pub use mock::MockInvoker;
pub use shell::ShellInvoker;

use async_trait::async_trait;
use std::process::ExitStatus;
use std::time::Duration;
use thiserror::Error;

/// Grace period added on top of the timeout handed to the agent CLI.
pub const CEILING_GRACE_SECS: i64 = 10;

/// Trait for executors that run a composed command line.
///
/// Implementations must be thread-safe (Send + Sync) so one executor can be
/// shared by every registered handler.
#[async_trait]
pub trait Invoker: Send + Sync {
    /// Runs the request to completion or until its timeout elapses.
    async fn invoke(&self, request: InvocationRequest) -> InvocationResult;
}

/// A single external process call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    /// Full command line, interpreted by the platform shell.
    pub command_line: String,
    /// Wall-clock limit in milliseconds, as requested.
    pub timeout_ms: i64,
}

impl InvocationRequest {
    /// Creates a request with a timeout in milliseconds.
    pub fn new(command_line: impl Into<String>, timeout_ms: i64) -> Self {
        Self {
            command_line: command_line.into(),
            timeout_ms,
        }
    }

    /// Resolves the wall-clock limit.
    ///
    /// Zero means the call may run indefinitely. Negative values are rejected,
    /// and invokers must fail the call without starting a process.
    pub fn timeout(&self) -> Result<Option<Duration>, InvocationError> {
        match u64::try_from(self.timeout_ms) {
            Ok(0) => Ok(None),
            Ok(ms) => Ok(Some(Duration::from_millis(ms))),
            Err(_) => Err(InvocationError::InvalidTimeout {
                timeout_ms: self.timeout_ms,
            }),
        }
    }
}

/// Outcome of an invocation: output on success, a diagnostic on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationResult {
    /// Process exited successfully. Output is stdout with surrounding
    /// whitespace trimmed, possibly empty.
    Success { output: String },
    /// Process could not be spawned, exited non-zero, or timed out.
    Failure { error_message: String },
}

impl InvocationResult {
    /// Creates a success result.
    pub fn success(output: impl Into<String>) -> Self {
        Self::Success {
            output: output.into(),
        }
    }

    /// Creates a failure result.
    pub fn failure(error_message: impl Into<String>) -> Self {
        Self::Failure {
            error_message: error_message.into(),
        }
    }
}

impl From<std::result::Result<String, InvocationError>> for InvocationResult {
    fn from(result: std::result::Result<String, InvocationError>) -> Self {
        match result {
            Ok(output) => Self::success(output),
            Err(e) => Self::failure(e.to_string()),
        }
    }
}

/// Ways an external process call can fail.
#[derive(Error, Debug)]
pub enum InvocationError {
    /// The requested timeout is negative.
    #[error("Invalid timeout: {timeout_ms}ms is out of range (must be >= 0)")]
    InvalidTimeout { timeout_ms: i64 },

    /// The shell could not be started.
    #[error("Failed to spawn command: {0}")]
    Spawn(#[source] std::io::Error),

    /// Waiting on the child or reading its pipes failed.
    #[error("Failed to collect command output: {0}")]
    Wait(#[source] std::io::Error),

    /// The process exited unsuccessfully.
    #[error("Command failed ({status}): {command_line}{}", stderr_suffix(.stderr))]
    Failed {
        command_line: String,
        status: ExitStatus,
        stderr: String,
    },

    /// The enforced ceiling elapsed before the process finished.
    #[error("Command timed out after {timeout_ms}ms: {command_line}")]
    TimedOut {
        command_line: String,
        timeout_ms: u128,
    },
}

fn stderr_suffix(stderr: &str) -> String {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        String::new()
    } else {
        format!("\n{stderr}")
    }
}

/// Escapes a free-text payload for use inside a double-quoted shell word.
///
/// Only `"` and backticks are escaped. `$`, `\`, `;` and newlines pass
/// through untouched, so this is not a complete defense against shell
/// expansion.
pub fn escape_message(message: &str) -> String {
    message.replace('"', "\\\"").replace('`', "\\`")
}

/// Composes the agent CLI call for one routed message.
pub fn compose_agent_command(
    cli_prefix: &str,
    agent_id: &str,
    message: &str,
    timeout_secs: i64,
) -> String {
    format!(
        "{cli_prefix} agent --agent {agent_id} --message \"{}\" --timeout {timeout_secs}",
        escape_message(message)
    )
}

/// Returns the enforced ceiling in milliseconds for an agent timeout.
///
/// Always [`CEILING_GRACE_SECS`] longer than the timeout given to the agent
/// CLI, so the CLI's own timeout normally fires first.
pub fn enforced_ceiling_ms(timeout_secs: i64) -> i64 {
    timeout_secs
        .saturating_add(CEILING_GRACE_SECS)
        .saturating_mul(1000)
}
