//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Output rendering for finished commands
//!
//! ## Usage
//!
//! ```ignore
//! use cast::presentation::factory;
//!
//! let events = factory::create_event_sink(false, factory::create_localizer(), lang);
//! let use_case = factory::create_deploy_use_case(None, prompter, events, lang);
//! let report = use_case.execute(&request)?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands, ConfigAction, DeployArgs, OnConflict};
pub use factory::{create_deploy_use_case, create_history_use_case};
