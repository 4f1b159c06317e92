//! Command implementations for the cast binary.

pub mod config;
pub mod deploy;
pub mod history;
