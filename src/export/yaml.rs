//! YAML Export functionality
//!
//! Exports a month's household report to YAML for human reading.

use std::io::Write;

use crate::error::{FoyerError, FoyerResult};
use crate::export::json::ReportExport;
use crate::reports::{CategoryBreakdownReport, HouseholdReport};

/// Export a report to YAML, preceded by a comment header
pub fn export_report_yaml<W: Write>(
    report: &HouseholdReport,
    categories: &CategoryBreakdownReport,
    writer: &mut W,
) -> FoyerResult<()> {
    let export = ReportExport::new(report, categories);
    let io_err = |e: std::io::Error| FoyerError::Export(e.to_string());

    writeln!(writer, "# Foyer household report").map_err(io_err)?;
    writeln!(writer, "# Month: {}", report.month).map_err(io_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(io_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(io_err)?;
    writeln!(writer).map_err(io_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| FoyerError::Export(e.to_string()))?;

    Ok(())
}
