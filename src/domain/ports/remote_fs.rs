//! RemoteFs port - file operations on the deploy host
//!
//! The deploy use case reads, moves and hashes files in the target directory
//! through this trait only, so the same orchestration runs over SSH, on the
//! local disk, or against an in-memory tree in tests.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::value_objects::ContentHash;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug, Error)]
pub enum FsError {
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A command run on the remote host exited unsuccessfully
    #[error("remote command `{command}` failed: {stderr}")]
    Remote { command: String, stderr: String },

    #[error("{0}")]
    Other(String),
}

impl FsError {
    /// Classify an `io::Error` for `path`
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound(_))
    }
}

/// Basic metadata of a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMeta {
    pub is_dir: bool,
    pub size: u64,
}

/// Abstract file system of the deploy host
///
/// Implementations:
/// - `SshRemoteFs` - commands over `ssh`
/// - `LocalFs` - the local disk
/// - `MemoryFs` - in-memory for testing
pub trait RemoteFs {
    /// Metadata of `path`; `FsError::NotFound` if it does not exist
    fn metadata(&self, path: &Path) -> FsResult<FileMeta>;

    /// Check if `path` exists (any error counts as absent)
    fn exists(&self, path: &Path) -> bool {
        self.metadata(path).is_ok()
    }

    /// Create directory and parents (idempotent)
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Names of the direct children of `path`, sorted
    fn read_dir(&self, path: &Path) -> FsResult<Vec<String>>;

    /// Read a whole file
    fn read(&self, path: &Path) -> FsResult<Vec<u8>>;

    /// Replace a whole file
    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()>;

    /// Remove a file or a directory tree; a missing path is not an error
    fn remove_all(&self, path: &Path) -> FsResult<()>;

    /// Rename `from` to `to` (single atomic rename on the host)
    fn rename(&self, from: &Path, to: &Path) -> FsResult<()>;

    /// SHA-256 of a file's content
    fn hash(&self, path: &Path) -> FsResult<ContentHash>;

    /// Modification time in UTC
    fn modified(&self, path: &Path) -> FsResult<DateTime<Utc>>;
}

macro_rules! forward_remote_fs {
    ($ty:ty) => {
        impl<T: RemoteFs + ?Sized> RemoteFs for $ty {
            fn metadata(&self, path: &Path) -> FsResult<FileMeta> {
                (**self).metadata(path)
            }
            fn exists(&self, path: &Path) -> bool {
                (**self).exists(path)
            }
            fn create_dir_all(&self, path: &Path) -> FsResult<()> {
                (**self).create_dir_all(path)
            }
            fn read_dir(&self, path: &Path) -> FsResult<Vec<String>> {
                (**self).read_dir(path)
            }
            fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
                (**self).read(path)
            }
            fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
                (**self).write(path, content)
            }
            fn remove_all(&self, path: &Path) -> FsResult<()> {
                (**self).remove_all(path)
            }
            fn rename(&self, from: &Path, to: &Path) -> FsResult<()> {
                (**self).rename(from, to)
            }
            fn hash(&self, path: &Path) -> FsResult<ContentHash> {
                (**self).hash(path)
            }
            fn modified(&self, path: &Path) -> FsResult<DateTime<Utc>> {
                (**self).modified(path)
            }
        }
    };
}

forward_remote_fs!(&T);
forward_remote_fs!(Arc<T>);
forward_remote_fs!(Box<T>);
