//! Domain Services
//!
//! Pure decision logic used by the deploy orchestrator.
//! These services have no I/O dependencies and are easily testable.

mod backup_name;
mod conflict_classifier;

pub use backup_name::{next_backup_name, MAX_BACKUP_SEQUENCE};
pub use conflict_classifier::{classify_conflicts, ConflictResult};
