//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (SSH, Local, Memory)
//! - `exec/` - Command executors (SSH, Local)
//! - `repositories/` - Snapshot persistence
//! - `conflict/` - Interactive conflict prompters
//! - `events/` - Deploy event sinks (console, JSON)
//! - `i18n/` - Built-in message catalog

pub mod conflict;
pub mod events;
pub mod exec;
pub mod fs;
pub mod i18n;
pub mod repositories;
pub mod ssh;

// Re-export for convenience
pub use conflict::{DialoguerPrompter, LinePrompter};
pub use events::{ConsoleEventSink, JsonEventSink};
pub use exec::{LocalExec, SshExec};
pub use fs::{LocalFs, MemoryFs, SshRemoteFs};
pub use i18n::Catalog;
pub use repositories::JsonSnapshotStore;
pub use ssh::SshSession;
