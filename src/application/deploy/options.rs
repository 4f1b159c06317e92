//! Deploy Request
//!
//! Input of one deploy operation.

use std::path::PathBuf;

pub use crate::domain::ports::{meta_dir, META_DIR};

/// Staging directory name, nested under [`META_DIR`]
pub const STAGING_DIR: &str = "tmp";

/// What to deploy and where
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployRequest {
    /// Location of the uploaded bundle on the deploy host
    pub bundle: PathBuf,
    /// Directory the bundle's entries are placed into
    pub target_dir: PathBuf,
    /// Bundle name recorded in the snapshot
    pub bundle_name: String,
    /// Bundle hash recorded in the snapshot
    pub bundle_hash: String,
}

impl DeployRequest {
    pub fn new(
        bundle: impl Into<PathBuf>,
        target_dir: impl Into<PathBuf>,
        bundle_name: impl Into<String>,
        bundle_hash: impl Into<String>,
    ) -> Self {
        Self {
            bundle: bundle.into(),
            target_dir: target_dir.into(),
            bundle_name: bundle_name.into(),
            bundle_hash: bundle_hash.into(),
        }
    }

    /// `<target>/.cast`
    pub fn meta_dir(&self) -> PathBuf {
        meta_dir(&self.target_dir)
    }

    /// `<target>/.cast/tmp`
    pub fn staging_dir(&self) -> PathBuf {
        self.meta_dir().join(STAGING_DIR)
    }
}
