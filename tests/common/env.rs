//! Test environment for running the cast binary in isolation.
//!
//! Every environment gets its own work directory and home directory;
//! `CAST_TEST_HOME` points the binary at the latter so `~/.cast/config.toml`
//! never touches the real home.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Result of running a cast CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse every stdout line as one JSON event
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("invalid JSON line {line:?}: {e}"))
            })
            .collect()
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Scratch directory for bundles and targets
    pub work_dir: TempDir,
    /// Directory standing in for $HOME
    pub home_dir: TempDir,
    cast_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().expect("Failed to create work dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            cast_bin: PathBuf::from(env!("CARGO_BIN_EXE_cast")),
        }
    }

    /// Path relative to the work directory
    pub fn path(&self, relative: &str) -> PathBuf {
        self.work_dir.path().join(relative)
    }

    /// Path relative to the home directory
    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    /// Run cast with no stdin
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_stdin(args, "")
    }

    /// Run cast feeding `input` on stdin (answers for the conflict prompt)
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> TestResult {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to execute cast");

        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input.as_bytes())
            .expect("Failed to write stdin");

        output_to_result(child.wait_with_output().expect("Failed to wait for cast"))
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.cast_bin);
        cmd.current_dir(self.work_dir.path())
            .args(args)
            .env("CAST_TEST_HOME", self.home_dir.path())
            .env_remove("CAST_LANG")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write a file under the work directory, creating parents
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Write `~/.cast/config.toml`
    pub fn write_config(&self, content: &str) {
        let path = self.home_path(".cast/config.toml");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    /// Parsed `<target>/.cast/snapshot.json`
    pub fn read_snapshot(&self, target: &Path) -> serde_json::Value {
        let content = std::fs::read_to_string(target.join(".cast/snapshot.json"))
            .expect("Failed to read snapshot");
        serde_json::from_str(&content).expect("Snapshot is not JSON")
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
