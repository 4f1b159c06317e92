//! Common test utilities for cast integration and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated environment (work dir + home dir) for running the binary
//! - Bundle fixtures built with the system `tar`
//! - In-memory deploy harness over `MemoryFs`

#![allow(dead_code)]

pub mod env;
pub mod fixtures;
pub mod memory;

pub use env::*;
pub use fixtures::*;
pub use memory::*;
