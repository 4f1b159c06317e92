//! Deploy Event Port
//!
//! Provides an observable interface for deploy operations.
//! Enables localized progress output, JSON event streams, and testing.

use std::path::PathBuf;

use crate::domain::value_objects::DeployStage;

/// Metadata that could not be read for a deployed entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegradedField {
    /// Recorded with an empty hash
    Hash,
    /// Recorded with the time of recording
    ModTime,
}

impl DegradedField {
    pub fn as_str(self) -> &'static str {
        match self {
            DegradedField::Hash => "hash",
            DegradedField::ModTime => "mod_time",
        }
    }
}

/// Event emitted during deploy operations
#[derive(Debug, Clone, PartialEq)]
pub enum DeployEvent {
    /// Deploy started
    Started {
        bundle: PathBuf,
        target: PathBuf,
        bundle_name: String,
    },

    /// A stage of the deploy sequence began
    StageEntered { stage: DeployStage },

    /// Bundle extracted; `entries` top-level entries are staged
    Staged { entries: usize },

    /// Staged entry ignored because its name is reserved for cast metadata
    ReservedSkipped { name: String },

    /// Conflicts were split into managed and unmanaged sets
    ConflictsClassified {
        managed: Vec<String>,
        unmanaged: Vec<String>,
    },

    /// A managed file was removed so the new version can take its place
    ManagedReplaced { name: String },

    /// An unmanaged file was renamed out of the way
    BackedUp { name: String, backup: String },

    /// An unmanaged file was deleted
    Removed { name: String },

    /// A staged entry was moved into the target directory
    Moved { name: String },

    /// Hash or modification time fell back to a substitute value
    MetadataDegraded {
        name: String,
        field: DegradedField,
        reason: String,
    },

    /// Snapshot persisted
    SnapshotRecorded { created: bool, entries: usize },

    /// Deploy completed
    Completed { deployed: usize },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - ConsoleEventSink: localized progress lines in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}
