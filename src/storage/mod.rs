//! Storage layer for Foyer
//!
//! JSON file helpers and the snapshot sources the CLI reads from. The
//! computation never touches storage directly.

pub mod file_io;
pub mod snapshot;

pub use snapshot::{SnapshotSource, SnapshotStore};
