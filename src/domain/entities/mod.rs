//! Domain Entities
//!
//! - `Snapshot` - Append-only deployment history for one target directory
//! - `SnapshotEntry` - One recorded deployment
//! - `FileRecord` - Metadata of one delivered top-level entry

mod snapshot;

pub use snapshot::{is_managed, FileRecord, Snapshot, SnapshotEntry};
