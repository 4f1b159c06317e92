//! JSON Snapshot Repository
//!
//! Implements the SnapshotStore port as `<target>/.cast/snapshot.json`,
//! read and written through any `RemoteFs`.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::entities::{FileRecord, Snapshot, SnapshotEntry};
use crate::domain::ports::{
    meta_dir, RemoteFs, SnapshotResult, SnapshotStore, SnapshotStoreError,
};

/// File name of the snapshot document inside the metadata directory
pub const SNAPSHOT_FILE: &str = "snapshot.json";

/// Location of the snapshot document for `target_dir`
pub fn snapshot_path(target_dir: &Path) -> PathBuf {
    meta_dir(target_dir).join(SNAPSHOT_FILE)
}

/// JSON-based snapshot repository
pub struct JsonSnapshotStore<F: RemoteFs> {
    fs: F,
}

impl<F: RemoteFs> JsonSnapshotStore<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }
}

/// JSON representation of the snapshot
#[derive(Debug, Serialize, Deserialize)]
struct JsonSnapshot {
    #[serde(default, deserialize_with = "null_as_empty")]
    entries: Vec<JsonEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonEntry {
    bundle_name: String,
    bundle_hash: String,
    deployed_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_empty")]
    files: Vec<JsonFile>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonFile {
    path: String,
    hash: String,
    mod_time: DateTime<Utc>,
}

/// Empty lists may have been written as `null`
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<&SnapshotEntry> for JsonEntry {
    fn from(entry: &SnapshotEntry) -> Self {
        Self {
            bundle_name: entry.bundle_name().to_string(),
            bundle_hash: entry.bundle_hash().to_string(),
            deployed_at: entry.deployed_at(),
            files: entry
                .files()
                .iter()
                .map(|file| JsonFile {
                    path: file.path().to_string(),
                    hash: file.hash().to_string(),
                    mod_time: file.mod_time(),
                })
                .collect(),
        }
    }
}

impl From<JsonEntry> for SnapshotEntry {
    fn from(entry: JsonEntry) -> Self {
        let files = entry
            .files
            .into_iter()
            .map(|file| FileRecord::new(file.path, file.hash, file.mod_time))
            .collect();
        SnapshotEntry::with_deployed_at(entry.bundle_name, entry.bundle_hash, entry.deployed_at, files)
    }
}

impl<F: RemoteFs> SnapshotStore for JsonSnapshotStore<F> {
    fn load(&self, target_dir: &Path) -> SnapshotResult<Option<Snapshot>> {
        let path = snapshot_path(target_dir);
        if !self.fs.exists(&path) {
            return Ok(None);
        }

        let content = self.fs.read(&path)?;
        let document: JsonSnapshot =
            serde_json::from_slice(&content).map_err(|e| SnapshotStoreError::Decode {
                path: path.clone(),
                message: e.to_string(),
            })?;

        tracing::debug!(path = %path.display(), entries = document.entries.len(), "loaded snapshot");
        Ok(Some(Snapshot::from_entries(
            document.entries.into_iter().map(Into::into).collect(),
        )))
    }

    fn save(&self, target_dir: &Path, snapshot: &Snapshot) -> SnapshotResult<()> {
        let document = JsonSnapshot {
            entries: snapshot.entries().iter().map(Into::into).collect(),
        };
        let content = serde_json::to_vec_pretty(&document)
            .map_err(|e| SnapshotStoreError::Encode(e.to_string()))?;

        self.fs.create_dir_all(&meta_dir(target_dir))?;
        let path = snapshot_path(target_dir);
        self.fs.write(&path, &content)?;

        tracing::debug!(path = %path.display(), entries = snapshot.len(), "saved snapshot");
        Ok(())
    }
}
