//! Snapshot sources
//!
//! The household's records live in an external document store. Whatever
//! delivers them hands the computation a complete [`HouseholdSnapshot`];
//! the file-backed store here is what the CLI uses.

use std::path::{Path, PathBuf};
use tracing::info;

use super::file_io::{read_json_required, write_json_atomic};
use crate::error::FoyerResult;
use crate::models::HouseholdSnapshot;

/// Anything that can produce a consistent household snapshot
pub trait SnapshotSource {
    fn load_snapshot(&self) -> FoyerResult<HouseholdSnapshot>;
}

/// An in-memory snapshot is its own source
impl SnapshotSource for HouseholdSnapshot {
    fn load_snapshot(&self) -> FoyerResult<HouseholdSnapshot> {
        Ok(self.clone())
    }
}

/// A snapshot stored as one JSON file
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the snapshot atomically
    pub fn save(&self, snapshot: &HouseholdSnapshot) -> FoyerResult<()> {
        write_json_atomic(&self.path, snapshot)?;
        info!(path = %self.path.display(), "saved household snapshot");
        Ok(())
    }

    /// Create an empty snapshot file unless one already exists
    ///
    /// Returns whether a file was written.
    pub fn initialize(&self) -> FoyerResult<bool> {
        if self.exists() {
            return Ok(false);
        }
        self.save(&HouseholdSnapshot::default())?;
        Ok(true)
    }
}

impl SnapshotSource for SnapshotStore {
    fn load_snapshot(&self) -> FoyerResult<HouseholdSnapshot> {
        let snapshot: HouseholdSnapshot = read_json_required(&self.path)?;
        info!(
            path = %self.path.display(),
            members = snapshot.household.members.len(),
            expenses = snapshot.expenses.len(),
            "loaded household snapshot"
        );
        Ok(snapshot)
    }
}
