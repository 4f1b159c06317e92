//! Configuration loading and persistence

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::Lang;
use crate::error::{CastError, CastResult};
use crate::infrastructure::fs::cast_user_dir;

use super::types::UserConfig;

/// File name of the user config inside `~/.cast`
pub const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the configured language
pub const LANG_ENV_VAR: &str = "CAST_LANG";

const KNOWN_KEYS: [&str; 2] = ["lang", "backup_suffix"];

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// `~/.cast/config.toml`
pub fn config_path() -> CastResult<PathBuf> {
    cast_user_dir()
        .map(|dir| dir.join(CONFIG_FILE))
        .ok_or(CastError::NoHomeDir)
}

/// Load configuration and collect non-fatal warnings (unknown keys,
/// unsupported language codes).
pub fn load_with_warnings(path: &Path) -> CastResult<(UserConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: UserConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CastError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut warnings: Vec<ConfigWarning> = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    if config.lang.parse::<Lang>().is_err() {
        warnings.push(ConfigWarning {
            key: "lang".to_string(),
            file: path.to_path_buf(),
            line: find_line_number(&content, "lang"),
            suggestion: Some(Lang::ALL.map(Lang::code).join(" | ")),
        });
    }

    Ok((config, warnings))
}

/// Load the user config, or defaults when it is missing or unreadable
///
/// Warnings and load failures are logged, never fatal.
pub fn load_or_default() -> UserConfig {
    let config = match config_path() {
        Ok(path) if path.exists() => match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                for warning in &warnings {
                    tracing::warn!(
                        key = %warning.key,
                        file = %warning.file.display(),
                        line = ?warning.line,
                        suggestion = ?warning.suggestion,
                        "ignoring config value"
                    );
                }
                config
            }
            Err(err) => {
                tracing::warn!(error = %err, "using default config");
                UserConfig::default()
            }
        },
        _ => UserConfig::default(),
    };

    with_env_overrides(config)
}

/// Apply environment variable overrides (CAST_* prefix)
pub fn with_env_overrides(mut config: UserConfig) -> UserConfig {
    // CAST_LANG
    if let Ok(lang) = std::env::var(LANG_ENV_VAR) {
        match lang.parse::<Lang>() {
            Ok(lang) => config.set_lang(lang),
            Err(err) => tracing::warn!(error = %err, "ignoring {LANG_ENV_VAR}"),
        }
    }

    config
}

/// Write `config` to `path`, creating its directory
pub fn save(path: &Path, config: &UserConfig) -> CastResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            line.trim_start()
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='))
        })
        .map(|idx| idx + 1)
}

/// Closest known key, for typos like `language` or `backup-suffix`
fn suggest_key(key: &str) -> Option<String> {
    let normalized = key.to_ascii_lowercase().replace('-', "_");
    KNOWN_KEYS
        .iter()
        .find(|known| {
            normalized == **known
                || normalized.starts_with(*known)
                || known.starts_with(normalized.as_str())
        })
        .map(|known| known.to_string())
}
