//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations; the deploy use
//! case only ever talks to these.

pub mod deploy_events;
pub mod localizer;
pub mod remote_exec;
pub mod remote_fs;
pub mod snapshot_store;
pub mod user_prompter;

pub use deploy_events::{DegradedField, DeployEvent, DeployEventSink, NoopEventSink};
pub use localizer::{Localizer, Message};
pub use remote_exec::{shell_quote, ExecError, ExecResult, RemoteExec};
pub use remote_fs::{FileMeta, FsError, FsResult, RemoteFs};
pub use snapshot_store::{meta_dir, SnapshotResult, SnapshotStore, SnapshotStoreError, META_DIR};
pub use user_prompter::{
    ConflictDecision, FixedPrompter, PromptError, UserPrompter, DEFAULT_BACKUP_SUFFIX,
};
