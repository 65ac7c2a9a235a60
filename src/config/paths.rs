//! Path management for Foyer
//!
//! ## Path Resolution Order
//!
//! 1. `FOYER_HOME` environment variable (if set)
//! 2. The platform configuration directory (`~/.config/foyer` on Linux,
//!    `~/Library/Application Support/foyer` on macOS, `%APPDATA%\foyer` on
//!    Windows)

use directories::ProjectDirs;
use std::path::PathBuf;

use crate::error::FoyerError;

/// Environment variable overriding the base directory
pub const HOME_ENV_VAR: &str = "FOYER_HOME";

/// Manages all paths used by Foyer
#[derive(Debug, Clone)]
pub struct FoyerPaths {
    base_dir: PathBuf,
}

impl FoyerPaths {
    /// Resolve the base directory from the environment or the platform
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, FoyerError> {
        let base_dir = match std::env::var(HOME_ENV_VAR) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create FoyerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path to settings.json
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("settings.json")
    }

    /// Default location of the household snapshot
    pub fn snapshot_file(&self) -> PathBuf {
        self.base_dir.join("household.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), FoyerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FoyerError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if Foyer has been initialized (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, FoyerError> {
    ProjectDirs::from("", "", "foyer")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| FoyerError::Config("Could not determine home directory".into()))
}
