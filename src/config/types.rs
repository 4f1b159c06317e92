//! Configuration types

use serde::{Deserialize, Serialize};

use crate::domain::ports::DEFAULT_BACKUP_SUFFIX;
use crate::domain::value_objects::Lang;

/// Contents of `~/.cast/config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// Message language code (`zh` or `en`)
    pub lang: String,

    /// Suffix offered when backing up unmanaged files
    pub backup_suffix: String,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            lang: Lang::default().code().to_string(),
            backup_suffix: DEFAULT_BACKUP_SUFFIX.to_string(),
        }
    }
}

impl UserConfig {
    /// Configured language; an unsupported code means the default language
    pub fn lang(&self) -> Lang {
        self.lang.parse().unwrap_or_default()
    }

    pub fn set_lang(&mut self, lang: Lang) {
        self.lang = lang.code().to_string();
    }

    /// Configured suffix; blank means the default suffix
    pub fn backup_suffix(&self) -> &str {
        if self.backup_suffix.trim().is_empty() {
            DEFAULT_BACKUP_SUFFIX
        } else {
            self.backup_suffix.trim()
        }
    }
}
