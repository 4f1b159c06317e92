//! SnapshotStore port - persistence of deployment history
//!
//! One snapshot per target directory. `load` treats a missing document as
//! "no history"; `save` always writes the full snapshot.
//!
//! There is no version check between `load` and `save`. If concurrent
//! deploys to one target ever need to be safe, a lock or version stamp
//! belongs behind this trait.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::entities::Snapshot;
use crate::domain::ports::FsError;

/// Name of the metadata directory kept inside every target directory
pub const META_DIR: &str = ".cast";

/// Metadata directory of a target directory
pub fn meta_dir(target_dir: &Path) -> PathBuf {
    target_dir.join(META_DIR)
}

/// Result type for snapshot persistence
pub type SnapshotResult<T> = Result<T, SnapshotStoreError>;

/// Snapshot persistence errors
#[derive(Debug, Error)]
pub enum SnapshotStoreError {
    #[error(transparent)]
    Fs(#[from] FsError),

    #[error("invalid snapshot document {}: {message}", .path.display())]
    Decode { path: PathBuf, message: String },

    #[error("failed to encode snapshot: {0}")]
    Encode(String),
}

/// Abstract repository for snapshot persistence
pub trait SnapshotStore {
    /// Load the snapshot of `target_dir`; `Ok(None)` when none was recorded
    fn load(&self, target_dir: &Path) -> SnapshotResult<Option<Snapshot>>;

    /// Persist the full snapshot of `target_dir`
    fn save(&self, target_dir: &Path, snapshot: &Snapshot) -> SnapshotResult<()>;
}

impl<T: SnapshotStore + ?Sized> SnapshotStore for &T {
    fn load(&self, target_dir: &Path) -> SnapshotResult<Option<Snapshot>> {
        (**self).load(target_dir)
    }

    fn save(&self, target_dir: &Path, snapshot: &Snapshot) -> SnapshotResult<()> {
        (**self).save(target_dir, snapshot)
    }
}
