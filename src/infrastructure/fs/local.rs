//! Local File System Implementation
//!
//! Implements the RemoteFs port for the machine cast runs on, for deploys
//! without `--host`.

use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::domain::ports::{FileMeta, FsError, FsResult, RemoteFs};
use crate::domain::value_objects::ContentHash;

/// Local file system implementation
///
/// Writes go through a temporary file in the same directory and are
/// persisted with a rename.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl RemoteFs for LocalFs {
    fn metadata(&self, path: &Path) -> FsResult<FileMeta> {
        let meta = fs::metadata(path).map_err(|e| FsError::from_io(path, e))?;
        Ok(FileMeta {
            is_dir: meta.is_dir(),
            size: if meta.is_dir() { 0 } else { meta.len() },
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        fs::create_dir_all(path).map_err(|e| FsError::from_io(path, e))
    }

    fn read_dir(&self, path: &Path) -> FsResult<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(path).map_err(|e| FsError::from_io(path, e))? {
            let entry = entry.map_err(|e| FsError::from_io(path, e))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        fs::read(path).map_err(|e| FsError::from_io(path, e))
    }

    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));

        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| FsError::from_io(dir, e))?;
        tmp.write_all(content)
            .map_err(|e| FsError::from_io(tmp.path(), e))?;
        tmp.persist(path)
            .map_err(|e| FsError::from_io(path, e.error))?;
        Ok(())
    }

    fn remove_all(&self, path: &Path) -> FsResult<()> {
        let result = match fs::symlink_metadata(path) {
            Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
            Ok(_) => fs::remove_file(path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => Err(e),
        };
        result.map_err(|e| FsError::from_io(path, e))
    }

    fn rename(&self, from: &Path, to: &Path) -> FsResult<()> {
        fs::rename(from, to).map_err(|e| FsError::from_io(from, e))
    }

    fn hash(&self, path: &Path) -> FsResult<ContentHash> {
        let content = fs::read(path).map_err(|e| FsError::from_io(path, e))?;
        Ok(ContentHash::from_bytes(&content))
    }

    fn modified(&self, path: &Path) -> FsResult<DateTime<Utc>> {
        let time = fs::metadata(path)
            .and_then(|meta| meta.modified())
            .map_err(|e| FsError::from_io(path, e))?;
        Ok(DateTime::<Utc>::from(time))
    }
}
