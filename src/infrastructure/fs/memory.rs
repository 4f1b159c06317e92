//! In-Memory File System
//!
//! Implements the RemoteFs port over a tree held in memory. Used by tests
//! that must not touch a real host.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::domain::ports::{FileMeta, FsError, FsResult, RemoteFs};
use crate::domain::value_objects::ContentHash;

#[derive(Debug, Clone)]
enum Node {
    Dir { modified: DateTime<Utc> },
    File { content: Vec<u8>, modified: DateTime<Utc> },
}

impl Node {
    fn modified(&self) -> DateTime<Utc> {
        match self {
            Node::Dir { modified } | Node::File { modified, .. } => *modified,
        }
    }
}

/// In-memory file system
///
/// Paths are stored as given; callers are expected to use absolute paths.
/// Writing a file creates its missing parent directories.
#[derive(Debug, Default)]
pub struct MemoryFs {
    nodes: RefCell<BTreeMap<PathBuf, Node>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style file insertion
    pub fn with_file(self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) -> Self {
        self.add_file(path, content);
        self
    }

    /// Insert or replace a file, creating its parents
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.nodes.borrow_mut().insert(
            path.to_path_buf(),
            Node::File {
                content: content.as_ref().to_vec(),
                modified: Utc::now(),
            },
        );
    }

    /// Create a directory and its parents
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut nodes = self.nodes.borrow_mut();
        for ancestor in path.as_ref().ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            nodes.entry(ancestor.to_path_buf()).or_insert(Node::Dir {
                modified: Utc::now(),
            });
        }
    }

    /// Content of a file as UTF-8, if it is a file
    pub fn file_content(&self, path: impl AsRef<Path>) -> Option<String> {
        match self.nodes.borrow().get(path.as_ref()) {
            Some(Node::File { content, .. }) => Some(String::from_utf8_lossy(content).into_owned()),
            _ => None,
        }
    }

    pub fn is_file(&self, path: impl AsRef<Path>) -> bool {
        matches!(self.nodes.borrow().get(path.as_ref()), Some(Node::File { .. }))
    }

    pub fn is_dir(&self, path: impl AsRef<Path>) -> bool {
        matches!(self.nodes.borrow().get(path.as_ref()), Some(Node::Dir { .. }))
    }

    /// Every stored path, sorted
    pub fn paths(&self) -> Vec<PathBuf> {
        self.nodes.borrow().keys().cloned().collect()
    }
}

impl RemoteFs for MemoryFs {
    fn metadata(&self, path: &Path) -> FsResult<FileMeta> {
        match self.nodes.borrow().get(path) {
            Some(Node::Dir { .. }) => Ok(FileMeta {
                is_dir: true,
                size: 0,
            }),
            Some(Node::File { content, .. }) => Ok(FileMeta {
                is_dir: false,
                size: content.len() as u64,
            }),
            None => Err(FsError::NotFound(path.to_path_buf())),
        }
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        if self.is_file(path) {
            return Err(FsError::Other(format!(
                "{} exists and is not a directory",
                path.display()
            )));
        }
        self.add_dir(path);
        Ok(())
    }

    fn read_dir(&self, path: &Path) -> FsResult<Vec<String>> {
        let nodes = self.nodes.borrow();
        match nodes.get(path) {
            Some(Node::Dir { .. }) => {}
            Some(Node::File { .. }) => {
                return Err(FsError::Other(format!(
                    "{} is not a directory",
                    path.display()
                )))
            }
            None => return Err(FsError::NotFound(path.to_path_buf())),
        }

        Ok(nodes
            .keys()
            .filter(|key| key.parent() == Some(path))
            .filter_map(|key| key.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect())
    }

    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        match self.nodes.borrow().get(path) {
            Some(Node::File { content, .. }) => Ok(content.clone()),
            Some(Node::Dir { .. }) => Err(FsError::Other(format!(
                "{} is a directory",
                path.display()
            ))),
            None => Err(FsError::NotFound(path.to_path_buf())),
        }
    }

    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        if self.is_dir(path) {
            return Err(FsError::Other(format!("{} is a directory", path.display())));
        }
        self.add_file(path, content);
        Ok(())
    }

    fn remove_all(&self, path: &Path) -> FsResult<()> {
        self.nodes
            .borrow_mut()
            .retain(|key, _| !key.starts_with(path));
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> FsResult<()> {
        if !self.exists(from) {
            return Err(FsError::NotFound(from.to_path_buf()));
        }
        if to.starts_with(from) && to != from {
            return Err(FsError::Other(format!(
                "cannot move {} into itself",
                from.display()
            )));
        }
        if let Some(parent) = to.parent() {
            if !parent.as_os_str().is_empty() && !self.is_dir(parent) {
                return Err(FsError::NotFound(parent.to_path_buf()));
            }
        }

        let mut nodes = self.nodes.borrow_mut();
        if let Some(Node::Dir { .. }) = nodes.get(to) {
            if nodes.keys().any(|key| key.parent() == Some(to)) {
                return Err(FsError::Other(format!(
                    "{} is a non-empty directory",
                    to.display()
                )));
            }
        }
        nodes.retain(|key, _| !key.starts_with(to));

        let moved: Vec<PathBuf> = nodes
            .keys()
            .filter(|key| key.starts_with(from))
            .cloned()
            .collect();
        for old in moved {
            if let Some(node) = nodes.remove(&old) {
                let rest = old.strip_prefix(from).unwrap_or(Path::new(""));
                let new = if rest.as_os_str().is_empty() {
                    to.to_path_buf()
                } else {
                    to.join(rest)
                };
                nodes.insert(new, node);
            }
        }
        Ok(())
    }

    fn hash(&self, path: &Path) -> FsResult<ContentHash> {
        match self.nodes.borrow().get(path) {
            Some(Node::File { content, .. }) => Ok(ContentHash::from_bytes(content)),
            Some(Node::Dir { .. }) => Err(FsError::Other(format!(
                "{} is a directory",
                path.display()
            ))),
            None => Err(FsError::NotFound(path.to_path_buf())),
        }
    }

    fn modified(&self, path: &Path) -> FsResult<DateTime<Utc>> {
        self.nodes
            .borrow()
            .get(path)
            .map(Node::modified)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }
}
