//! Deploy Result
//!
//! Summary of a successful deploy operation.

/// Result of a deploy operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployReport {
    /// Entries placed into the target directory, in staging order
    pub deployed: Vec<String>,
    /// Managed files replaced without asking
    pub replaced: Vec<String>,
    /// Unmanaged files renamed out of the way: (original, backup)
    pub backed_up: Vec<(String, String)>,
    /// Unmanaged files deleted
    pub removed: Vec<String>,
    /// Staged entries ignored because their name is reserved
    pub skipped: Vec<String>,
    /// Whether this deploy created the snapshot
    pub snapshot_created: bool,
    /// Number of entries in the snapshot after this deploy
    pub snapshot_entries: usize,
}

impl DeployReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any pre-existing file was touched
    pub fn had_conflicts(&self) -> bool {
        !self.replaced.is_empty() || !self.backed_up.is_empty() || !self.removed.is_empty()
    }
}
