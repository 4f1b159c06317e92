//! Snapshot entity - deployment history of a target directory
//!
//! The snapshot is the only durable state cast keeps on the remote host.
//! It is a pure data structure - persistence is handled by `SnapshotStore`.

use chrono::{DateTime, Utc};

/// Metadata of one top-level entry delivered by a deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path relative to the target directory
    path: String,
    /// Content hash (empty when it could not be computed)
    hash: String,
    /// Modification time after placement
    mod_time: DateTime<Utc>,
}

impl FileRecord {
    pub fn new(path: impl Into<String>, hash: impl Into<String>, mod_time: DateTime<Utc>) -> Self {
        Self {
            path: path.into(),
            hash: hash.into(),
            mod_time,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn mod_time(&self) -> DateTime<Utc> {
        self.mod_time
    }
}

/// A single recorded deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotEntry {
    bundle_name: String,
    bundle_hash: String,
    deployed_at: DateTime<Utc>,
    files: Vec<FileRecord>,
}

impl SnapshotEntry {
    /// Create an entry stamped with the current UTC time
    pub fn new(
        bundle_name: impl Into<String>,
        bundle_hash: impl Into<String>,
        files: Vec<FileRecord>,
    ) -> Self {
        Self::with_deployed_at(bundle_name, bundle_hash, Utc::now(), files)
    }

    pub fn with_deployed_at(
        bundle_name: impl Into<String>,
        bundle_hash: impl Into<String>,
        deployed_at: DateTime<Utc>,
        files: Vec<FileRecord>,
    ) -> Self {
        Self {
            bundle_name: bundle_name.into(),
            bundle_hash: bundle_hash.into(),
            deployed_at,
            files,
        }
    }

    pub fn bundle_name(&self) -> &str {
        &self.bundle_name
    }

    pub fn bundle_hash(&self) -> &str {
        &self.bundle_hash
    }

    pub fn deployed_at(&self) -> DateTime<Utc> {
        self.deployed_at
    }

    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    /// Check whether this deployment delivered `path`
    pub fn contains(&self, path: &str) -> bool {
        self.files.iter().any(|f| f.path == path)
    }
}

/// Append-only deployment history
///
/// Entries are only ever appended; nothing removes or rewrites an existing
/// entry. A path delivered by any entry, old or new, counts as managed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    entries: Vec<SnapshotEntry>,
}

impl Snapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a snapshot from previously persisted entries
    pub fn from_entries(entries: Vec<SnapshotEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[SnapshotEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent deployment
    pub fn latest(&self) -> Option<&SnapshotEntry> {
        self.entries.last()
    }

    /// Append a new deployment
    pub fn add_entry(&mut self, entry: SnapshotEntry) {
        self.entries.push(entry);
    }

    /// Check if `path` was delivered by any recorded deployment
    pub fn is_managed(&self, path: &str) -> bool {
        self.entries.iter().any(|entry| entry.contains(path))
    }

    /// All managed paths, deduplicated, in first-seen order
    pub fn managed_paths(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.entries
            .iter()
            .flat_map(|entry| entry.files.iter())
            .map(|file| file.path.as_str())
            .filter(|path| seen.insert(*path))
            .collect()
    }
}

/// Managed check that treats a missing snapshot as "nothing is managed"
pub fn is_managed(snapshot: Option<&Snapshot>, path: &str) -> bool {
    snapshot.is_some_and(|s| s.is_managed(path))
}
