//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the snapshot store and the report layer.

pub mod household;
pub mod report;

use std::path::PathBuf;
use tracing::warn;

use crate::config::{FoyerPaths, Settings};
use crate::error::{FoyerError, FoyerResult};
use crate::models::{HouseholdSnapshot, Member, MonthKey};
use crate::services::validate_snapshot;
use crate::storage::{SnapshotSource, SnapshotStore};

pub use household::{handle_config_command, handle_init_command, handle_members_command, handle_validate_command};
pub use report::{handle_categories_command, handle_report_command, ExportFormat, ReportArgs};

/// Everything a command handler needs
#[derive(Debug, Clone)]
pub struct CliContext {
    pub paths: FoyerPaths,
    pub settings: Settings,
    snapshot_path: PathBuf,
}

impl CliContext {
    /// `snapshot_override` wins over the location from the settings
    pub fn new(paths: FoyerPaths, settings: Settings, snapshot_override: Option<PathBuf>) -> Self {
        let snapshot_path = snapshot_override.unwrap_or_else(|| settings.snapshot_path(&paths));
        Self {
            paths,
            settings,
            snapshot_path,
        }
    }

    pub fn snapshot_path(&self) -> &PathBuf {
        &self.snapshot_path
    }

    pub fn store(&self) -> SnapshotStore {
        SnapshotStore::new(self.snapshot_path.clone())
    }

    /// Load the snapshot, logging any lint findings
    pub fn load_snapshot(&self) -> FoyerResult<HouseholdSnapshot> {
        let snapshot = self.store().load_snapshot()?;
        for warning in validate_snapshot(&snapshot) {
            warn!("{}", warning);
        }
        Ok(snapshot)
    }

    pub fn currency(&self) -> &str {
        &self.settings.currency_symbol
    }
}

/// Parse a `YYYY-MM` argument, defaulting to the current month
pub fn parse_month(month: Option<&str>) -> FoyerResult<MonthKey> {
    match month {
        Some(s) => Ok(MonthKey::parse(s)?),
        None => Ok(MonthKey::current()),
    }
}

/// Resolve a member argument by id or display name
pub fn resolve_member<'a>(snapshot: &'a HouseholdSnapshot, id_or_name: &str) -> FoyerResult<&'a Member> {
    snapshot
        .find_member(id_or_name)
        .ok_or_else(|| FoyerError::member_not_found(id_or_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Household;
    use tempfile::TempDir;

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month(Some("2025-03")).unwrap(), MonthKey::new(2025, 3).unwrap());
        assert_eq!(parse_month(None).unwrap(), MonthKey::current());
        assert!(parse_month(Some("March")).unwrap_err().is_validation());
    }

    #[test]
    fn test_resolve_member() {
        let snapshot = HouseholdSnapshot::new(Household::new("Home").with_member(Member::new("m1", "Alice")));

        assert_eq!(resolve_member(&snapshot, "ALICE").unwrap().id.as_str(), "m1");
        assert!(resolve_member(&snapshot, "bob").unwrap_err().is_not_found());
    }

    #[test]
    fn test_snapshot_override() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FoyerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let ctx = CliContext::new(paths.clone(), Settings::default(), None);
        assert_eq!(ctx.snapshot_path(), &paths.snapshot_file());

        let custom = temp_dir.path().join("other.json");
        let ctx = CliContext::new(paths, Settings::default(), Some(custom.clone()));
        assert_eq!(ctx.snapshot_path(), &custom);
        assert!(ctx.load_snapshot().is_err());
    }
}
