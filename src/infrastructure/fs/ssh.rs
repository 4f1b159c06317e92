//! SSH File System Implementation
//!
//! Implements the RemoteFs port for a remote host via SSH. Every operation
//! is a single POSIX shell command; hashing and stat fall back between the
//! GNU and BSD tool spellings.

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::domain::ports::{shell_quote, FileMeta, FsError, FsResult, RemoteFs};
use crate::domain::value_objects::ContentHash;
use crate::infrastructure::ssh::{stderr_text, SshSession};

/// Remote file system implementation using SSH
pub struct SshRemoteFs {
    session: SshSession,
}

impl SshRemoteFs {
    pub fn new(session: SshSession) -> Self {
        Self { session }
    }

    pub fn destination(&self) -> &str {
        self.session.destination()
    }

    /// Run a command on the remote host, returning its stdout
    fn run_command(&self, command: &str, input: Option<&[u8]>) -> FsResult<Vec<u8>> {
        let output = self
            .session
            .run(command, input)
            .map_err(|e| FsError::Other(format!("ssh to {} failed: {e}", self.destination())))?;

        if !output.status.success() {
            return Err(FsError::Remote {
                command: command.to_string(),
                stderr: stderr_text(&output),
            });
        }

        Ok(output.stdout)
    }

    fn run_text(&self, command: &str) -> FsResult<String> {
        let stdout = self.run_command(command, None)?;
        Ok(String::from_utf8_lossy(&stdout).trim().to_string())
    }
}

/// `d 0`, `f <size>` or `n`
fn metadata_command(path: &Path) -> String {
    let p = shell_quote(path);
    format!("if [ -d {p} ]; then echo 'd 0'; elif [ -e {p} ]; then echo \"f $(wc -c < {p})\"; else echo n; fi")
}

fn parse_metadata(path: &Path, output: &str) -> FsResult<FileMeta> {
    let mut fields = output.split_whitespace();
    match (fields.next(), fields.next()) {
        (Some("n"), _) => Err(FsError::NotFound(path.to_path_buf())),
        (Some("d"), _) => Ok(FileMeta {
            is_dir: true,
            size: 0,
        }),
        (Some("f"), Some(size)) => Ok(FileMeta {
            is_dir: false,
            size: size.parse().unwrap_or(0),
        }),
        _ => Err(FsError::Other(format!(
            "unexpected metadata output for {}: {output:?}",
            path.display()
        ))),
    }
}

fn hash_command(path: &Path) -> String {
    let p = shell_quote(path);
    format!("sha256sum {p} 2>/dev/null || shasum -a 256 {p} 2>/dev/null")
}

fn mtime_command(path: &Path) -> String {
    let p = shell_quote(path);
    format!("stat -c %Y {p} 2>/dev/null || stat -f %m {p}")
}

fn parse_mtime(path: &Path, output: &str) -> FsResult<DateTime<Utc>> {
    output
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .ok_or_else(|| {
            FsError::Other(format!(
                "unexpected mtime output for {}: {output:?}",
                path.display()
            ))
        })
}

fn list_names(output: &str) -> Vec<String> {
    let mut names: Vec<String> = output
        .lines()
        .map(str::to_string)
        .filter(|name| !name.is_empty())
        .collect();
    names.sort();
    names
}

impl RemoteFs for SshRemoteFs {
    fn metadata(&self, path: &Path) -> FsResult<FileMeta> {
        let out = self.run_text(&metadata_command(path))?;
        parse_metadata(path, &out)
    }

    fn exists(&self, path: &Path) -> bool {
        self.run_command(&format!("test -e {}", shell_quote(path)), None)
            .is_ok()
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        self.run_command(&format!("mkdir -p {}", shell_quote(path)), None)?;
        Ok(())
    }

    fn read_dir(&self, path: &Path) -> FsResult<Vec<String>> {
        let stdout = self.run_command(&format!("ls -A1 {}", shell_quote(path)), None)?;
        Ok(list_names(&String::from_utf8_lossy(&stdout)))
    }

    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        self.run_command(&format!("cat {}", shell_quote(path)), None)
    }

    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        let p = shell_quote(path);
        let tmp = shell_quote(&path.with_extension("cast-tmp"));

        // Write to temp file then atomically rename
        self.run_command(&format!("cat > {tmp} && mv -f {tmp} {p}"), Some(content))?;
        Ok(())
    }

    fn remove_all(&self, path: &Path) -> FsResult<()> {
        self.run_command(&format!("rm -rf {}", shell_quote(path)), None)?;
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> FsResult<()> {
        let (f, t) = (shell_quote(from), shell_quote(to));
        // plain `mv` would move into an existing directory instead of replacing it
        self.run_command(
            &format!("if [ -d {t} ]; then echo 'destination is a directory' >&2; exit 1; fi; mv -f {f} {t}"),
            None,
        )?;
        Ok(())
    }

    fn hash(&self, path: &Path) -> FsResult<ContentHash> {
        let command = hash_command(path);
        let out = self.run_text(&command)?;
        ContentHash::from_checksum_output(&out).ok_or(FsError::Remote {
            command,
            stderr: format!("unexpected checksum output: {out:?}"),
        })
    }

    fn modified(&self, path: &Path) -> FsResult<DateTime<Utc>> {
        let out = self.run_text(&mtime_command(path))?;
        parse_mtime(path, &out)
    }
}
