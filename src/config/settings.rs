//! User settings for Foyer
//!
//! Display preferences and where to find the household snapshot.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::paths::FoyerPaths;
use crate::error::FoyerError;
use crate::models::MemberId;
use crate::storage::file_io::{read_json_or_default, write_json_atomic};

/// User settings for Foyer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Member shown by `foyer report` when no `--member` is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_member: Option<MemberId>,

    /// Snapshot location, when not the default one in the base directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_file: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "€".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_member: None,
            snapshot_file: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &FoyerPaths) -> Result<Self, FoyerError> {
        read_json_or_default(paths.settings_file()).map_err(|e| {
            FoyerError::Config(format!("Failed to load settings: {}", e))
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FoyerPaths) -> Result<(), FoyerError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Where the household snapshot lives
    pub fn snapshot_path(&self, paths: &FoyerPaths) -> PathBuf {
        self.snapshot_file
            .clone()
            .unwrap_or_else(|| paths.snapshot_file())
    }
}
