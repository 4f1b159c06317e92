//! SSH Transport
//!
//! Runs one shell command per call through the system `ssh` binary. Key
//! selection, known hosts and multiplexing are left to the user's ssh config.

use std::io::{self, Write};
use std::process::{Command, Output, Stdio};

/// A remote host reachable with `ssh <destination> <command>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshSession {
    /// SSH destination (user@host, host, or an ssh config alias)
    destination: String,
}

impl SshSession {
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
        }
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Run `command` remotely, feeding `input` on stdin
    pub fn run(&self, command: &str, input: Option<&[u8]>) -> io::Result<Output> {
        tracing::debug!(destination = %self.destination, command, "ssh");

        let mut child = Command::new("ssh")
            .arg(&self.destination)
            .arg(command)
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(input) = input {
            if let Some(mut stdin) = child.stdin.take() {
                stdin.write_all(input)?;
            }
        }

        child.wait_with_output()
    }
}

/// Trimmed, lossy stderr of a finished command
pub fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).trim().to_string()
}
