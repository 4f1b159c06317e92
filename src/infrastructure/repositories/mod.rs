//! Repository Implementations
//!
//! Concrete implementations of repository ports.

mod snapshot;

pub use snapshot::{snapshot_path, JsonSnapshotStore, SNAPSHOT_FILE};
