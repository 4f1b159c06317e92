//! Command Executors
//!
//! Implementations of the RemoteExec port.
//!
//! - `SshExec` - runs the command on a remote host through `ssh`
//! - `LocalExec` - runs the command with `sh -c` on this machine

use std::process::{Command, Output, Stdio};

use crate::domain::ports::{ExecError, ExecResult, RemoteExec};
use crate::infrastructure::ssh::{stderr_text, SshSession};

fn check_output(command: &str, output: Output) -> ExecResult<()> {
    if output.status.success() {
        return Ok(());
    }
    Err(ExecError::Failed {
        command: command.to_string(),
        status: output.status.to_string(),
        stderr: stderr_text(&output),
    })
}

/// Executes commands on a remote host via SSH
pub struct SshExec {
    session: SshSession,
}

impl SshExec {
    pub fn new(session: SshSession) -> Self {
        Self { session }
    }
}

impl RemoteExec for SshExec {
    fn exec(&self, command: &str) -> ExecResult<()> {
        let output = self
            .session
            .run(command, None)
            .map_err(|source| ExecError::Spawn {
                program: "ssh".to_string(),
                source,
            })?;
        check_output(command, output)
    }
}

/// Executes commands with the local POSIX shell
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalExec;

impl LocalExec {
    pub fn new() -> Self {
        Self
    }
}

impl RemoteExec for LocalExec {
    fn exec(&self, command: &str) -> ExecResult<()> {
        tracing::debug!(command, "sh -c");
        let output = Command::new("sh")
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ExecError::Spawn {
                program: "sh".to_string(),
                source,
            })?;
        check_output(command, output)
    }
}
