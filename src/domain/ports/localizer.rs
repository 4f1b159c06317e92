//! Localizer Port
//!
//! Renders user-facing messages in the configured language. Injected into
//! the prompters and the console sink instead of living in global tables.

use crate::domain::value_objects::Lang;

/// Every user-facing message, with its arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message<'a> {
    /// Unmanaged files that already exist in the target directory
    ConflictFound { files: &'a [String] },
    /// Numbered action menu for line prompts
    ChooseAction,
    /// Label of the backup option in a select prompt
    ActionBackup,
    /// Label of the remove option in a select prompt
    ActionRemove,
    /// Question for a select prompt
    ActionQuestion,
    /// Backup suffix question, with the default shown
    BackupSuffix { default: &'a str },
    Deploying { bundle: &'a str, target: &'a str },
    ReplacingManaged { file: &'a str },
    BackingUp { from: &'a str, to: &'a str },
    Removing { file: &'a str },
    SkippedReserved { name: &'a str },
    Moved { file: &'a str },
    HashUnavailable { file: &'a str },
    ModTimeUnavailable { file: &'a str },
    SnapshotCreated,
    SnapshotUpdated { entries: usize },
    DeployComplete { files: usize },
}

/// Message rendering provider
pub trait Localizer: Send + Sync {
    fn render(&self, message: &Message<'_>, lang: Lang) -> String;
}

impl<T: Localizer + ?Sized> Localizer for std::sync::Arc<T> {
    fn render(&self, message: &Message<'_>, lang: Lang) -> String {
        (**self).render(message, lang)
    }
}
