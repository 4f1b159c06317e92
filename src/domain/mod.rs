//! Domain Layer
//!
//! The core of cast - deployment history and conflict rules without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Deployment history (Snapshot, SnapshotEntry, FileRecord)
//! - `value_objects/` - Immutable value types (ContentHash, Lang)
//! - `services/` - Pure functions (conflict classification, backup naming)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
