//! Deploy Use Case
//!
//! Orchestrates one deploy into a target directory:
//! 1. Extract the bundle into `<target>/.cast/tmp`
//! 2. List the staged top-level entries and find the ones already in the target
//! 3. Load the snapshot and classify those conflicts as managed or unmanaged
//! 4. Replace managed files silently; back up or remove unmanaged ones after asking once
//! 5. Move the staged entries into place
//! 6. Append a snapshot entry and persist the snapshot
//!
//! All decisions live in domain services; this file only sequences ports.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::{FileRecord, SnapshotEntry};
use crate::domain::ports::{
    shell_quote, ConflictDecision, DegradedField, DeployEvent, DeployEventSink, NoopEventSink,
    RemoteExec, RemoteFs, SnapshotStore, UserPrompter,
};
use crate::domain::services::{classify_conflicts, next_backup_name, ConflictResult};
use crate::domain::value_objects::{DeployStage, Lang};

use super::error::{ConflictError, DeployError};
use super::options::{DeployRequest, META_DIR};
use super::result::DeployReport;

/// Deploy use case - orchestrates the deploy flow
///
/// Parameterized by its ports so the same sequence runs over SSH, on the
/// local disk, or against in-memory doubles.
pub struct DeployUseCase<FS, EX, SS, UP>
where
    FS: RemoteFs,
    EX: RemoteExec,
    SS: SnapshotStore,
    UP: UserPrompter,
{
    fs: FS,
    exec: EX,
    snapshots: SS,
    prompter: UP,
    lang: Lang,
    events: Arc<dyn DeployEventSink>,
}

impl<FS, EX, SS, UP> DeployUseCase<FS, EX, SS, UP>
where
    FS: RemoteFs,
    EX: RemoteExec,
    SS: SnapshotStore,
    UP: UserPrompter,
{
    pub fn new(fs: FS, exec: EX, snapshots: SS, prompter: UP, lang: Lang) -> Self {
        Self {
            fs,
            exec,
            snapshots,
            prompter,
            lang,
            events: Arc::new(NoopEventSink),
        }
    }

    /// Report progress to `sink`
    pub fn with_events(mut self, sink: Arc<dyn DeployEventSink>) -> Self {
        self.events = sink;
        self
    }

    /// Execute one deploy
    ///
    /// Nothing is retried and nothing is rolled back: on error the target
    /// keeps whatever moves, renames and removals already happened. The
    /// staging area is removed on every path out of this function.
    pub fn execute(&self, request: &DeployRequest) -> Result<DeployReport, DeployError> {
        let target = request.target_dir.as_path();
        let meta_dir = request.meta_dir();
        let staging_dir = request.staging_dir();

        self.emit(DeployEvent::Started {
            bundle: request.bundle.clone(),
            target: target.to_path_buf(),
            bundle_name: request.bundle_name.clone(),
        });

        // A failure here resurfaces as an extraction error with a better message.
        if let Err(err) = self.fs.create_dir_all(&meta_dir) {
            tracing::warn!(
                path = %meta_dir.display(),
                error = %err,
                "could not create metadata directory"
            );
        }

        self.enter(DeployStage::Extracting);
        let _staging = StagingArea::new(&self.exec, staging_dir.clone());
        self.exec
            .exec(&extract_command(&request.bundle, &staging_dir))
            .map_err(DeployError::Extraction)?;

        let mut report = DeployReport::new();

        self.enter(DeployStage::Listing);
        let staged = self.list_staged(&staging_dir, &mut report)?;
        self.emit(DeployEvent::Staged {
            entries: staged.len(),
        });
        let conflicts: Vec<String> = staged
            .iter()
            .filter(|name| self.fs.exists(&target.join(name)))
            .cloned()
            .collect();

        self.enter(DeployStage::ReadingSnapshot);
        let snapshot = self
            .snapshots
            .load(target)
            .map_err(DeployError::SnapshotRead)?;

        if !conflicts.is_empty() {
            self.enter(DeployStage::ClassifyingConflicts);
            let classified = classify_conflicts(&conflicts, snapshot.as_ref());
            tracing::debug!(
                managed = classified.managed.len(),
                unmanaged = classified.unmanaged.len(),
                "classified conflicts"
            );
            self.emit(DeployEvent::ConflictsClassified {
                managed: classified.managed.clone(),
                unmanaged: classified.unmanaged.clone(),
            });

            self.enter(DeployStage::ResolvingConflicts);
            self.resolve_conflicts(target, &staged, &classified, &mut report)?;
        }

        self.enter(DeployStage::Moving);
        for name in &staged {
            self.fs
                .rename(&staging_dir.join(name), &target.join(name))
                .map_err(|source| DeployError::Move {
                    name: name.clone(),
                    source,
                })?;
            self.emit(DeployEvent::Moved { name: name.clone() });
            report.deployed.push(name.clone());
        }

        self.enter(DeployStage::RecordingSnapshot);
        let files: Vec<FileRecord> = staged
            .iter()
            .map(|name| self.record_file(target, name))
            .collect();
        let entry = SnapshotEntry::new(&request.bundle_name, &request.bundle_hash, files);

        report.snapshot_created = snapshot.is_none();
        let mut snapshot = snapshot.unwrap_or_default();
        snapshot.add_entry(entry);
        self.snapshots
            .save(target, &snapshot)
            .map_err(DeployError::SnapshotWrite)?;
        report.snapshot_entries = snapshot.len();

        self.emit(DeployEvent::SnapshotRecorded {
            created: report.snapshot_created,
            entries: report.snapshot_entries,
        });
        self.enter(DeployStage::Done);
        self.emit(DeployEvent::Completed {
            deployed: report.deployed.len(),
        });

        Ok(report)
    }

    /// Direct children of the staging area, minus the reserved metadata name
    fn list_staged(
        &self,
        staging_dir: &Path,
        report: &mut DeployReport,
    ) -> Result<Vec<String>, DeployError> {
        let names = self
            .fs
            .read_dir(staging_dir)
            .map_err(DeployError::Listing)?;

        let mut staged = Vec::with_capacity(names.len());
        for name in names {
            if name == META_DIR {
                self.emit(DeployEvent::ReservedSkipped { name: name.clone() });
                report.skipped.push(name);
            } else {
                staged.push(name);
            }
        }
        Ok(staged)
    }

    /// Backup names avoid both existing files and names the move stage will place
    fn resolve_conflicts(
        &self,
        target: &Path,
        staged: &[String],
        conflicts: &ConflictResult,
        report: &mut DeployReport,
    ) -> Result<(), ConflictError> {
        for name in &conflicts.managed {
            self.fs
                .remove_all(&target.join(name))
                .map_err(|source| ConflictError::RemoveManaged {
                    name: name.clone(),
                    source,
                })?;
            self.emit(DeployEvent::ManagedReplaced { name: name.clone() });
            report.replaced.push(name.clone());
        }

        if conflicts.unmanaged.is_empty() {
            return Ok(());
        }

        let decision = self
            .prompter
            .ask_conflict_action(&conflicts.unmanaged, self.lang)?;

        let taken = |candidate: &str| {
            staged.iter().any(|s| s == candidate) || self.fs.exists(&target.join(candidate))
        };

        for name in &conflicts.unmanaged {
            let path = target.join(name);
            match &decision {
                ConflictDecision::Backup { suffix } => {
                    let backup = next_backup_name(name, suffix, taken);
                    if taken(&backup) {
                        return Err(ConflictError::BackupExhausted {
                            name: name.clone(),
                            candidate: backup,
                        });
                    }
                    self.fs
                        .rename(&path, &target.join(&backup))
                        .map_err(|source| ConflictError::Backup {
                            name: name.clone(),
                            backup: backup.clone(),
                            source,
                        })?;
                    self.emit(DeployEvent::BackedUp {
                        name: name.clone(),
                        backup: backup.clone(),
                    });
                    report.backed_up.push((name.clone(), backup));
                }
                ConflictDecision::Remove => {
                    self.fs
                        .remove_all(&path)
                        .map_err(|source| ConflictError::Remove {
                            name: name.clone(),
                            source,
                        })?;
                    self.emit(DeployEvent::Removed { name: name.clone() });
                    report.removed.push(name.clone());
                }
            }
        }

        Ok(())
    }

    /// Hash and mtime of a placed entry; failures degrade instead of aborting
    ///
    /// Hashes are recorded as bare hex digests, the format `sha256sum` prints.
    fn record_file(&self, target: &Path, name: &str) -> FileRecord {
        let path = target.join(name);

        let hash = match self.fs.hash(&path) {
            Ok(hash) => hash.hex().to_string(),
            Err(err) => {
                self.degraded(name, DegradedField::Hash, &err);
                String::new()
            }
        };

        let mod_time = match self.fs.modified(&path) {
            Ok(time) => time,
            Err(err) => {
                self.degraded(name, DegradedField::ModTime, &err);
                Utc::now()
            }
        };

        FileRecord::new(name, hash, mod_time)
    }

    fn degraded(&self, name: &str, field: DegradedField, err: &dyn std::fmt::Display) {
        tracing::debug!(file = name, field = field.as_str(), error = %err, "metadata degraded");
        self.emit(DeployEvent::MetadataDegraded {
            name: name.to_string(),
            field,
            reason: err.to_string(),
        });
    }

    fn enter(&self, stage: DeployStage) {
        tracing::debug!(stage = %stage, "deploy stage");
        self.emit(DeployEvent::StageEntered { stage });
    }

    fn emit(&self, event: DeployEvent) {
        self.events.on_event(event);
    }
}

/// Shell command that (re)creates the staging area and unpacks the bundle into it
pub fn extract_command(bundle: &Path, staging_dir: &Path) -> String {
    let staging = shell_quote(staging_dir);
    format!(
        "rm -rf {staging} && mkdir -p {staging} && tar -xzf {} -C {staging}",
        shell_quote(bundle)
    )
}

/// Shell command that removes the staging area
pub fn cleanup_command(staging_dir: &Path) -> String {
    format!("rm -rf {}", shell_quote(staging_dir))
}

/// Removes the staging area when dropped, whichever way the deploy ends
struct StagingArea<'a, EX: RemoteExec> {
    exec: &'a EX,
    path: PathBuf,
}

impl<'a, EX: RemoteExec> StagingArea<'a, EX> {
    fn new(exec: &'a EX, path: PathBuf) -> Self {
        Self { exec, path }
    }
}

impl<EX: RemoteExec> Drop for StagingArea<'_, EX> {
    fn drop(&mut self) {
        if let Err(err) = self.exec.exec(&cleanup_command(&self.path)) {
            tracing::warn!(
                path = %self.path.display(),
                error = %err,
                "failed to remove staging area"
            );
        }
    }
}
