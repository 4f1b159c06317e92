//! Error types for cast
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::deploy::DeployError;
use crate::domain::ports::{FsError, SnapshotStoreError};
use crate::domain::value_objects::UnknownLang;

/// Result type alias for cast operations
pub type CastResult<T> = Result<T, CastError>;

/// Main error type for cast operations
#[derive(Error, Debug)]
pub enum CastError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for the expected schema
    #[error("invalid config in {}: {message}", .file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// Config could not be serialized
    #[error("failed to encode config: {0}")]
    ConfigEncode(#[from] toml::ser::Error),

    /// Neither `CAST_TEST_HOME` nor a system home directory is available
    #[error("could not determine the home directory")]
    NoHomeDir,

    #[error(transparent)]
    UnknownLang(#[from] UnknownLang),

    #[error(transparent)]
    Fs(#[from] FsError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotStoreError),

    #[error(transparent)]
    Deploy(#[from] DeployError),
}
