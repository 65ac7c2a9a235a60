//! JSON Export functionality
//!
//! Exports a month's household report to JSON with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{FoyerError, FoyerResult};
use crate::reports::{CategoryBreakdownReport, HouseholdReport};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Report export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub report: HouseholdReport,

    pub categories: CategoryBreakdownReport,
}

impl ReportExport {
    pub fn new(report: &HouseholdReport, categories: &CategoryBreakdownReport) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            report: report.clone(),
            categories: categories.clone(),
        }
    }
}

/// Export a report to pretty-printed JSON
pub fn export_report_json<W: Write>(
    report: &HouseholdReport,
    categories: &CategoryBreakdownReport,
    writer: &mut W,
) -> FoyerResult<()> {
    let export = ReportExport::new(report, categories);

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| FoyerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FoyerError::Export(e.to_string()))?;

    Ok(())
}
