//! RemoteExec port - shell commands on the deploy host
//!
//! Only bundle extraction and staging cleanup go through here; everything
//! else uses `RemoteFs`.

use std::io;
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

/// Result type for command execution
pub type ExecResult<T> = Result<T, ExecError>;

/// Command execution errors
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` exited with {status}: {stderr}")]
    Failed {
        command: String,
        status: String,
        stderr: String,
    },
}

/// Runs a shell command to completion on the deploy host
pub trait RemoteExec {
    fn exec(&self, command: &str) -> ExecResult<()>;
}

impl<T: RemoteExec + ?Sized> RemoteExec for &T {
    fn exec(&self, command: &str) -> ExecResult<()> {
        (**self).exec(command)
    }
}

impl<T: RemoteExec + ?Sized> RemoteExec for Arc<T> {
    fn exec(&self, command: &str) -> ExecResult<()> {
        (**self).exec(command)
    }
}

impl<T: RemoteExec + ?Sized> RemoteExec for Box<T> {
    fn exec(&self, command: &str) -> ExecResult<()> {
        (**self).exec(command)
    }
}

/// Quote a path for safe use in a POSIX shell command
pub fn shell_quote(path: &Path) -> String {
    format!("'{}'", path.to_string_lossy().replace('\'', "'\\''"))
}
