//! Deploy Errors
//!
//! Every fatal failure names the stage it happened in. Files already moved,
//! renamed or removed before the failure stay as they are.

use thiserror::Error;

use crate::domain::ports::{ExecError, FsError, PromptError, SnapshotStoreError};
use crate::domain::value_objects::DeployStage;

/// Failures while resolving conflicts with existing files
#[derive(Debug, Error)]
pub enum ConflictError {
    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error("remove managed file '{name}': {source}")]
    RemoveManaged {
        name: String,
        #[source]
        source: FsError,
    },

    #[error("back up '{name}' as '{backup}': {source}")]
    Backup {
        name: String,
        backup: String,
        #[source]
        source: FsError,
    },

    #[error("no free backup name for '{name}' (last tried '{candidate}')")]
    BackupExhausted { name: String, candidate: String },

    #[error("remove '{name}': {source}")]
    Remove {
        name: String,
        #[source]
        source: FsError,
    },
}

/// Fatal deploy errors
#[derive(Debug, Error)]
pub enum DeployError {
    #[error("extract bundle failed: {0}")]
    Extraction(#[source] ExecError),

    #[error("list extracted files failed: {0}")]
    Listing(#[source] FsError),

    #[error("read snapshot failed: {0}")]
    SnapshotRead(#[source] SnapshotStoreError),

    #[error("resolve conflicts failed: {0}")]
    ConflictResolution(#[from] ConflictError),

    #[error("move '{name}' into target failed: {source}")]
    Move {
        name: String,
        #[source]
        source: FsError,
    },

    #[error("write snapshot failed: {0}")]
    SnapshotWrite(#[source] SnapshotStoreError),
}

impl DeployError {
    /// The stage the deploy was in when it failed
    pub fn stage(&self) -> DeployStage {
        match self {
            DeployError::Extraction(_) => DeployStage::Extracting,
            DeployError::Listing(_) => DeployStage::Listing,
            DeployError::SnapshotRead(_) => DeployStage::ReadingSnapshot,
            DeployError::ConflictResolution(_) => DeployStage::ResolvingConflicts,
            DeployError::Move { .. } => DeployStage::Moving,
            DeployError::SnapshotWrite(_) => DeployStage::RecordingSnapshot,
        }
    }
}
