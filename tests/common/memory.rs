//! In-memory deploy harness.
//!
//! `BundleExec` plays the remote shell: the extraction command fills the
//! staging area of a `MemoryFs` with a fixed bundle, the cleanup command
//! removes it again.

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use cast::application::deploy::cleanup_command;
use cast::domain::ports::{
    ConflictDecision, ExecResult, PromptError, RemoteExec, RemoteFs, UserPrompter,
};
use cast::domain::value_objects::Lang;
use cast::infrastructure::fs::MemoryFs;

pub const TARGET: &str = "/srv/app";

/// Fake shell for one target directory
pub struct BundleExec<'a> {
    fs: &'a MemoryFs,
    staging: PathBuf,
    bundle: Vec<(String, String)>,
    commands: RefCell<Vec<String>>,
}

impl<'a> BundleExec<'a> {
    pub fn new(fs: &'a MemoryFs, target: &str, bundle: &[(&str, &str)]) -> Self {
        Self {
            fs,
            staging: Path::new(target).join(".cast/tmp"),
            bundle: bundle
                .iter()
                .map(|(path, content)| (path.to_string(), content.to_string()))
                .collect(),
            commands: RefCell::new(Vec::new()),
        }
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.borrow().clone()
    }
}

impl RemoteExec for BundleExec<'_> {
    fn exec(&self, command: &str) -> ExecResult<()> {
        self.commands.borrow_mut().push(command.to_string());

        if command.contains("tar -xzf") {
            self.fs.remove_all(&self.staging).unwrap();
            self.fs.add_dir(&self.staging);
            for (path, content) in &self.bundle {
                self.fs.add_file(self.staging.join(path), content);
            }
        } else if command == cleanup_command(&self.staging) {
            self.fs.remove_all(&self.staging).unwrap();
        } else {
            panic!("unexpected command: {command}");
        }
        Ok(())
    }
}

/// Prompter answering with a fixed decision and counting how often it is asked
#[derive(Clone)]
pub struct CountingPrompter {
    decision: ConflictDecision,
    calls: Rc<Cell<usize>>,
    files_seen: Rc<RefCell<Vec<Vec<String>>>>,
}

impl CountingPrompter {
    pub fn new(decision: ConflictDecision) -> Self {
        Self {
            decision,
            calls: Rc::new(Cell::new(0)),
            files_seen: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// File lists passed to each prompt, in order
    pub fn files_seen(&self) -> Vec<Vec<String>> {
        self.files_seen.borrow().clone()
    }
}

impl UserPrompter for CountingPrompter {
    fn ask_conflict_action(
        &self,
        files: &[String],
        _lang: Lang,
    ) -> Result<ConflictDecision, PromptError> {
        self.calls.set(self.calls.get() + 1);
        self.files_seen.borrow_mut().push(files.to_vec());
        Ok(self.decision.clone())
    }
}

/// Path under the test target directory
pub fn target_path(relative: &str) -> PathBuf {
    Path::new(TARGET).join(relative)
}
