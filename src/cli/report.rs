//! CLI commands for reports
//!
//! Terminal output of the household and category reports, and report
//! export to a file.

use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;

use super::{parse_month, resolve_member, CliContext};
use crate::error::{FoyerError, FoyerResult};
use crate::export::{export_report_csv, export_report_json, export_report_yaml};
use crate::models::HouseholdSnapshot;
use crate::reports::{CategoryBreakdownReport, HouseholdReport};

/// Export file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
    Csv,
}

/// Arguments of `foyer report`
#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Month to report on (YYYY-MM, defaults to the current month)
    #[arg(short, long)]
    pub month: Option<String>,

    /// Show one member's breakdown (id or display name)
    #[arg(short = 'M', long)]
    pub member: Option<String>,

    /// Export the report to this file instead of printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,
}

/// Handle `foyer report`
pub fn handle_report_command(ctx: &CliContext, args: ReportArgs) -> FoyerResult<()> {
    let month = parse_month(args.month.as_deref())?;
    let snapshot = ctx.load_snapshot()?;
    let report = HouseholdReport::generate(&snapshot, month);

    if let Some(path) = args.output {
        write_export(&snapshot, &report, &path, args.format)?;
        println!("Exported {} report to {}", month, path.display());
        return Ok(());
    }

    let member = args
        .member
        .or_else(|| ctx.settings.default_member.as_ref().map(|m| m.to_string()));

    match member {
        Some(identifier) => {
            let member = resolve_member(&snapshot, &identifier)?;
            let row = report
                .member(&member.id)
                .ok_or_else(|| FoyerError::member_not_found(identifier.as_str()))?;
            print!("{}", report.format_member(row, ctx.currency()));
        }
        None => print!("{}", report.format_terminal(ctx.currency())),
    }

    Ok(())
}

/// Handle `foyer categories`
pub fn handle_categories_command(
    ctx: &CliContext,
    month: Option<String>,
    top: Option<usize>,
) -> FoyerResult<()> {
    let month = parse_month(month.as_deref())?;
    let snapshot = ctx.load_snapshot()?;
    let mut report = CategoryBreakdownReport::generate(&snapshot, month);

    if let Some(n) = top {
        report.rows.truncate(n);
    }

    print!("{}", report.format_terminal(ctx.currency()));
    Ok(())
}

fn write_export(
    snapshot: &HouseholdSnapshot,
    report: &HouseholdReport,
    path: &Path,
    format: ExportFormat,
) -> FoyerResult<()> {
    let file = File::create(path)
        .map_err(|e| FoyerError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Json => {
            let categories = CategoryBreakdownReport::generate(snapshot, report.month);
            export_report_json(report, &categories, &mut writer)?;
        }
        ExportFormat::Yaml => {
            let categories = CategoryBreakdownReport::generate(snapshot, report.month);
            export_report_yaml(report, &categories, &mut writer)?;
        }
        ExportFormat::Csv => export_report_csv(report, &mut writer)?,
    }

    info!(path = %path.display(), format = ?format, "exported report");
    Ok(())
}
