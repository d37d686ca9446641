//! Shell-backed invoker.
//!
//! Runs the composed command line through the platform shell with
//! `tokio::process`, so waiting on the child never blocks the runtime.

use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

use super::{InvocationError, InvocationRequest, InvocationResult, Invoker};

/// Invoker that spawns one shell process per request.
#[derive(Debug, Clone)]
pub struct ShellInvoker {
    /// Shell program (`sh` on Unix, `cmd` on Windows).
    shell: String,
    /// Flag that makes the shell run a single command string.
    command_flag: String,
}

impl Default for ShellInvoker {
    fn default() -> Self {
        if cfg!(windows) {
            Self::with_shell("cmd", "/C")
        } else {
            Self::with_shell("sh", "-c")
        }
    }
}

impl ShellInvoker {
    /// Creates an invoker using the platform shell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an invoker using a specific shell and command flag.
    pub fn with_shell(shell: impl Into<String>, command_flag: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            command_flag: command_flag.into(),
        }
    }

    async fn run(&self, request: &InvocationRequest) -> Result<String, InvocationError> {
        let timeout = request.timeout()?;

        let mut command = Command::new(&self.shell);
        command
            .arg(&self.command_flag)
            .arg(&request.command_line)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // Dropping the wait future on timeout kills the child.
            .kill_on_drop(true);

        let child = command.spawn().map_err(InvocationError::Spawn)?;
        debug!(pid = child.id(), "Spawned agent process");

        let output = match timeout {
            Some(limit) => tokio::time::timeout(limit, child.wait_with_output())
                .await
                .map_err(|_| InvocationError::TimedOut {
                    command_line: request.command_line.clone(),
                    timeout_ms: limit.as_millis(),
                })?,
            None => child.wait_with_output().await,
        }
        .map_err(InvocationError::Wait)?;

        if !output.status.success() {
            return Err(InvocationError::Failed {
                command_line: request.command_line.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[async_trait]
impl Invoker for ShellInvoker {
    async fn invoke(&self, request: InvocationRequest) -> InvocationResult {
        self.run(&request).await.into()
    }
}
