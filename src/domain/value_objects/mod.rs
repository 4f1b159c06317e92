//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod deploy_stage;
mod hash;
mod lang;

pub use deploy_stage::DeployStage;
pub use hash::ContentHash;
pub use lang::{Lang, UnknownLang};
