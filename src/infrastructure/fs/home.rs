//! Home directory resolution with test isolation support.
//!
//! `dirs::home_dir()` ignores `HOME` on Windows, so tests cannot redirect it.
//! `cast_home_dir()` checks `CAST_TEST_HOME` first and falls back to
//! `dirs::home_dir()`. Every path under `~/.cast` should be built from it.

use std::path::PathBuf;

/// Environment variable for test isolation of home directory.
pub const CAST_TEST_HOME_VAR: &str = "CAST_TEST_HOME";

/// Name of the per-user directory under the home directory
pub const CAST_HOME_DIR: &str = ".cast";

/// Get the home directory for cast-internal paths.
///
/// # Example
///
/// ```
/// use cast::infrastructure::fs::cast_home_dir;
///
/// if let Some(home) = cast_home_dir() {
///     let config = home.join(".cast/config.toml");
/// }
/// ```
pub fn cast_home_dir() -> Option<PathBuf> {
    std::env::var(CAST_TEST_HOME_VAR)
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// `~/.cast`
pub fn cast_user_dir() -> Option<PathBuf> {
    cast_home_dir().map(|home| home.join(CAST_HOME_DIR))
}
