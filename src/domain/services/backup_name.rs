//! Backup Name Generator
//!
//! Picks the name an unmanaged file is renamed to before a deployment takes
//! its place. The existence check is injected so the search stays pure.

/// Highest sequence number tried before giving up
pub const MAX_BACKUP_SEQUENCE: u32 = 99_999;

/// Return the first free backup name for `filename`
///
/// Tries `filename + suffix` first (sequence 1 is implicit and never shown),
/// then `filename + suffix + ".2"`, `".3"`, ... in increasing order.
///
/// When every candidate up to [`MAX_BACKUP_SEQUENCE`] is taken the last
/// candidate is returned anyway. That name is not guaranteed to be free;
/// callers that must not overwrite have to check it again.
pub fn next_backup_name<F>(filename: &str, suffix: &str, exists: F) -> String
where
    F: Fn(&str) -> bool,
{
    let mut candidate = format!("{filename}{suffix}");
    if !exists(&candidate) {
        return candidate;
    }

    for seq in 2..=MAX_BACKUP_SEQUENCE {
        candidate = format!("{filename}{suffix}.{seq}");
        if !exists(&candidate) {
            return candidate;
        }
    }

    candidate
}
