//! Conflict Classifier
//!
//! Splits the names that already exist in the target directory into files a
//! previous deployment delivered (safe to replace) and files that came from
//! somewhere else (the user has to decide).

use crate::domain::entities::{is_managed, Snapshot};

/// Partition of conflicting names
///
/// Every input name lands in exactly one list; both lists keep the input's
/// relative order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConflictResult {
    /// Names recorded in the snapshot history
    pub managed: Vec<String>,
    /// Names never delivered by a recorded deployment
    pub unmanaged: Vec<String>,
}

impl ConflictResult {
    pub fn is_empty(&self) -> bool {
        self.managed.is_empty() && self.unmanaged.is_empty()
    }

    pub fn len(&self) -> usize {
        self.managed.len() + self.unmanaged.len()
    }
}

/// Classify conflicting names against the deployment history
///
/// An absent snapshot makes every conflict unmanaged.
pub fn classify_conflicts<S: AsRef<str>>(
    conflicts: &[S],
    snapshot: Option<&Snapshot>,
) -> ConflictResult {
    let mut result = ConflictResult::default();
    for name in conflicts {
        let name = name.as_ref();
        if is_managed(snapshot, name) {
            result.managed.push(name.to_string());
        } else {
            result.unmanaged.push(name.to_string());
        }
    }
    result
}
