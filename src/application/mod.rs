//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Orchestrates the deploy flow (extract, classify, resolve, move, record)
//! - `HistoryUseCase` - Reads the deployment history of a target

pub mod deploy;
pub mod history;

pub use deploy::{
    ConflictError, DeployError, DeployReport, DeployRequest, DeployUseCase, META_DIR, STAGING_DIR,
};
pub use history::{HistoryOptions, HistoryResult, HistoryUseCase};
