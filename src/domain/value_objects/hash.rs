//! Content Hash Value Object
//!
//! A validated, immutable hash representing the content of a deployed file.
//! Recorded in every `FileRecord` of the snapshot.

use std::fmt;

/// Content hash value object
///
/// Wraps a SHA-256 hash string with the `sha256:` prefix so hashes computed
/// locally and by remote `sha256sum` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    /// Prefix for SHA-256 hashes
    pub const PREFIX: &'static str = "sha256:";

    /// Create a new ContentHash from a raw hex digest (prefix optional)
    pub fn new(raw_hash: &str) -> Self {
        if raw_hash.starts_with(Self::PREFIX) {
            Self(raw_hash.to_string())
        } else {
            Self(format!("{}{}", Self::PREFIX, raw_hash))
        }
    }

    /// Compute the SHA-256 of raw bytes
    pub fn from_bytes(content: &[u8]) -> Self {
        use sha2::{Digest, Sha256};
        let hash = Sha256::digest(content);
        Self(format!("{}{:x}", Self::PREFIX, hash))
    }

    /// Parse the output of `sha256sum` / `shasum -a 256` (`<hex>  <path>`)
    ///
    /// Returns `None` when the first field is not a 64-char hex digest.
    pub fn from_checksum_output(output: &str) -> Option<Self> {
        let hex = output.split_whitespace().next()?;
        if hex.len() == 64 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            Some(Self::new(&hex.to_ascii_lowercase()))
        } else {
            None
        }
    }

    /// Get the full hash string with prefix
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get just the hex part without prefix
    pub fn hex(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ContentHash {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<ContentHash> for String {
    fn from(hash: ContentHash) -> Self {
        hash.0
    }
}

impl AsRef<str> for ContentHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
