//! Configuration module for cast
//!
//! Per-user settings, resolved in this order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CAST_*)
//! 3. User config (~/.cast/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    config_path, load_or_default, load_with_warnings, save, with_env_overrides, ConfigWarning,
    CONFIG_FILE, LANG_ENV_VAR,
};
pub use types::UserConfig;
