//! Display formatting for terminal output
//!
//! Provides utilities for formatting reports and household data for terminal
//! display.

pub mod format;
pub mod tables;

pub use format::{double_separator, format_bar, format_percentage, format_ratio, separator, truncate};
