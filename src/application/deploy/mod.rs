//! Deploy Module
//!
//! Orchestrates one bundle deploy into a target directory.
//!
//! ## Structure
//!
//! - `options` - Request type and metadata paths (`DeployRequest`)
//! - `result` - Outcome of a successful deploy (`DeployReport`)
//! - `error` - Failures, tagged with the stage they happened in (`DeployError`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use cast::application::deploy::{DeployRequest, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(fs, exec, snapshots, prompter, lang);
//! let report = use_case.execute(&DeployRequest::new(bundle, target, name, hash))?;
//! ```

mod error;
mod options;
mod result;
mod use_case;

pub use error::{ConflictError, DeployError};
pub use options::{meta_dir, DeployRequest, META_DIR, STAGING_DIR};
pub use result::DeployReport;
pub use use_case::{cleanup_command, extract_command, DeployUseCase};
