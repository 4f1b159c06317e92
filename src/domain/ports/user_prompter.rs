//! User Prompter Port
//!
//! Asks how to handle existing files the deployment history does not know
//! about. One decision covers the whole unmanaged set.

use std::io;

use thiserror::Error;

use crate::domain::value_objects::Lang;

/// Suffix used when the user accepts the default backup
pub const DEFAULT_BACKUP_SUFFIX: &str = ".bak";

/// User's choice for unmanaged conflicts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictDecision {
    /// Rename each existing file with `suffix` (plus a sequence number if needed)
    Backup { suffix: String },
    /// Delete each existing file
    Remove,
}

impl ConflictDecision {
    pub fn backup(suffix: impl Into<String>) -> Self {
        ConflictDecision::Backup {
            suffix: suffix.into(),
        }
    }
}

/// Prompt errors
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("failed to read answer: {0}")]
    Io(#[from] io::Error),

    #[error("prompt failed: {0}")]
    Interaction(String),
}

/// Trait for deciding about unmanaged conflicts.
///
/// Implementations can be:
/// - `DialoguerPrompter`: Select/Input prompts on a terminal
/// - `LinePrompter`: numbered answers read line by line
/// - `FixedPrompter`: a decision fixed up front (`--on-conflict`)
pub trait UserPrompter {
    fn ask_conflict_action(
        &self,
        files: &[String],
        lang: Lang,
    ) -> Result<ConflictDecision, PromptError>;
}

impl<T: UserPrompter + ?Sized> UserPrompter for Box<T> {
    fn ask_conflict_action(
        &self,
        files: &[String],
        lang: Lang,
    ) -> Result<ConflictDecision, PromptError> {
        (**self).ask_conflict_action(files, lang)
    }
}

/// Prompter that always answers with the same decision.
///
/// Use this when the decision was given on the command line.
#[derive(Debug, Clone)]
pub struct FixedPrompter(pub ConflictDecision);

impl UserPrompter for FixedPrompter {
    fn ask_conflict_action(
        &self,
        _files: &[String],
        _lang: Lang,
    ) -> Result<ConflictDecision, PromptError> {
        Ok(self.0.clone())
    }
}
