//! CSV Export functionality
//!
//! Exports the per-member rows of a household report, followed by a
//! household total row.

use std::io::Write;

use crate::error::{FoyerError, FoyerResult};
use crate::models::Money;
use crate::reports::HouseholdReport;

/// Member id used for the household total row
pub const HOUSEHOLD_ROW: &str = "HOUSEHOLD";

const HEADER: [&str; 9] = [
    "member",
    "name",
    "salary",
    "split_ratio",
    "fixed_share",
    "reserves_share",
    "wishlist_savings",
    "expenses_share",
    "disposable",
];

/// Export a household report to CSV
pub fn export_report_csv<W: Write>(report: &HouseholdReport, writer: W) -> FoyerResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(HEADER)?;

    for row in &report.members {
        wtr.write_record([
            row.member.to_string(),
            row.display_name.clone(),
            row.salary.to_string(),
            row.split_ratio.round_dp(4).to_string(),
            row.fixed_share.to_string(),
            row.reserves_share.to_string(),
            row.wishlist_savings.to_string(),
            row.expenses_share.to_string(),
            row.disposable.to_string(),
        ])?;
    }

    let wishlist_total: Money = report.members.iter().map(|r| r.wishlist_savings).sum();
    let ratio_total = if report.total_household_salary.is_zero() { "0" } else { "1" };
    wtr.write_record([
        HOUSEHOLD_ROW.to_string(),
        report.household_name.clone(),
        report.total_household_salary.to_string(),
        ratio_total.to_string(),
        report.household_fixed_total.to_string(),
        report.household_reserves_total.to_string(),
        wishlist_total.to_string(),
        report.household_expenses_total.to_string(),
        report.household_disposable.to_string(),
    ])?;

    wtr.flush().map_err(|e| FoyerError::Export(e.to_string()))?;
    Ok(())
}
