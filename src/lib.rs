//! cast - conflict-aware bundle deployment with deployment history
//!
//! cast extracts an uploaded bundle next to a target directory, moves its
//! top-level entries into place, and records every deployment in
//! `<target>/.cast/snapshot.json`. Files a previous deployment delivered are
//! replaced silently; anything else already in the way is backed up or
//! removed after asking once.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeployError, DeployReport, DeployRequest, DeployUseCase};
pub use domain::entities::{FileRecord, Snapshot, SnapshotEntry};
pub use domain::value_objects::{ContentHash, DeployStage, Lang};
pub use error::{CastError, CastResult};
