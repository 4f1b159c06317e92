//! File System Implementations
//!
//! Concrete implementations of the RemoteFs port.

mod home;
mod local;
mod memory;
mod ssh;

pub use home::{cast_home_dir, cast_user_dir, CAST_HOME_DIR, CAST_TEST_HOME_VAR};
pub use local::LocalFs;
pub use memory::MemoryFs;
pub use ssh::SshRemoteFs;
