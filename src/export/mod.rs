//! Export module for Foyer
//!
//! Writes a month's household report in several formats:
//! - CSV: per-member rows plus a household total (spreadsheet-compatible)
//! - JSON: machine-readable report with the category breakdown
//! - YAML: human-readable version of the JSON export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_report_csv, HOUSEHOLD_ROW};
pub use self::json::{export_report_json, ReportExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_report_yaml;
