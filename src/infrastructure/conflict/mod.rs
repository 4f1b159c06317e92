//! Infrastructure implementations for UserPrompter
//!
//! This module provides the interactive implementations of the
//! `UserPrompter` trait. `FixedPrompter` lives next to the port.

mod interactive;

pub use interactive::{DialoguerPrompter, LinePrompter};
