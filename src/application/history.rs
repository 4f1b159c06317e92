//! History Use Case
//!
//! Reads the deployment history of a target directory without changing it.

use std::path::{Path, PathBuf};

use crate::domain::entities::{Snapshot, SnapshotEntry};
use crate::domain::ports::{SnapshotResult, SnapshotStore};

/// Options for the history query
#[derive(Debug, Clone)]
pub struct HistoryOptions {
    /// Target directory whose history is read
    pub target_dir: PathBuf,
    /// Only report the most recent `limit` deployments
    pub limit: Option<usize>,
}

impl HistoryOptions {
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Result of the history query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryResult {
    /// Whether the target has a snapshot at all
    pub recorded: bool,
    /// Total number of recorded deployments
    pub total: usize,
    /// Reported deployments, oldest first
    pub entries: Vec<SnapshotEntry>,
    /// Every path any deployment delivered
    pub managed: Vec<String>,
}

/// History use case - loads and summarises the snapshot
pub struct HistoryUseCase<SS: SnapshotStore> {
    snapshots: SS,
}

impl<SS: SnapshotStore> HistoryUseCase<SS> {
    pub fn new(snapshots: SS) -> Self {
        Self { snapshots }
    }

    pub fn execute(&self, options: &HistoryOptions) -> SnapshotResult<HistoryResult> {
        match self.snapshots.load(&options.target_dir)? {
            Some(snapshot) => Ok(summarise(&snapshot, options.limit)),
            None => Ok(HistoryResult::default()),
        }
    }

    /// Shortcut for the full history of `target_dir`
    pub fn load(&self, target_dir: &Path) -> SnapshotResult<HistoryResult> {
        self.execute(&HistoryOptions::new(target_dir))
    }
}

fn summarise(snapshot: &Snapshot, limit: Option<usize>) -> HistoryResult {
    let all = snapshot.entries();
    let skip = limit.map_or(0, |n| all.len().saturating_sub(n));

    HistoryResult {
        recorded: true,
        total: all.len(),
        entries: all[skip..].to_vec(),
        managed: snapshot
            .managed_paths()
            .into_iter()
            .map(str::to_string)
            .collect(),
    }
}
