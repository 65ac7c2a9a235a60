//! Configuration module for Foyer
//!
//! This module provides configuration management including:
//! - Base directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FoyerPaths;
pub use settings::Settings;
