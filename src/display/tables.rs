//! Table rendering for reports
//!
//! Rows are flattened to strings before rendering so the currency symbol
//! from the settings is applied consistently.

use std::collections::BTreeMap;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::format::{format_percentage, format_ratio, truncate};
use crate::models::{BudgetCategory, Household, Money, MonthKey};
use crate::reports::{CategoryRow, MemberBudgetRow};
use crate::services::ShareContext;

const NAME_WIDTH: usize = 24;

#[derive(Tabled)]
struct MemberLine {
    #[tabled(rename = "Member")]
    name: String,
    #[tabled(rename = "Salary")]
    salary: String,
    #[tabled(rename = "Share")]
    ratio: String,
    #[tabled(rename = "Fixed")]
    fixed: String,
    #[tabled(rename = "Reserves")]
    reserves: String,
    #[tabled(rename = "Expenses")]
    expenses: String,
    #[tabled(rename = "Disposable")]
    disposable: String,
}

#[derive(Tabled)]
struct CategoryLine {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "%")]
    percentage: String,
}

#[derive(Tabled)]
struct SalaryLine {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Salary")]
    salary: String,
    #[tabled(rename = "Share")]
    ratio: String,
}

fn render<T: Tabled>(rows: Vec<T>) -> String {
    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()));
    table.to_string()
}

/// Per-member budget table of the household report
pub fn member_table(rows: &[MemberBudgetRow], symbol: &str) -> String {
    let lines = rows
        .iter()
        .map(|row| MemberLine {
            name: truncate(&row.display_name, NAME_WIDTH),
            salary: row.salary.format_with_symbol(symbol),
            ratio: format_ratio(row.split_ratio),
            fixed: row.fixed_share.format_with_symbol(symbol),
            reserves: row.reserves_share.format_with_symbol(symbol),
            expenses: row.expenses_share.format_with_symbol(symbol),
            disposable: row.disposable.format_with_symbol(symbol),
        })
        .collect();
    render(lines)
}

/// Category totals without percentages
pub fn category_totals_table(totals: &BTreeMap<BudgetCategory, Money>, symbol: &str) -> String {
    let grand_total: Money = totals.values().sum();
    let lines = totals
        .iter()
        .map(|(category, amount)| CategoryLine {
            category: category.label().to_string(),
            amount: amount.format_with_symbol(symbol),
            percentage: format_percentage(share_of(*amount, grand_total)),
        })
        .collect();
    render(lines)
}

/// Category breakdown rows with their precomputed percentages
pub fn category_breakdown_table(rows: &[CategoryRow], symbol: &str) -> String {
    let lines = rows
        .iter()
        .map(|row| CategoryLine {
            category: row.category.label().to_string(),
            amount: row.amount.format_with_symbol(symbol),
            percentage: format_percentage(row.percentage),
        })
        .collect();
    render(lines)
}

/// Members with their resolved salary and split ratio for a month
pub fn member_salary_table(household: &Household, month: MonthKey, symbol: &str) -> String {
    let ctx = ShareContext::for_household(household, month);
    let lines = household
        .members
        .iter()
        .map(|member| SalaryLine {
            id: member.id.to_string(),
            name: truncate(member.name(), NAME_WIDTH),
            salary: ctx.salary_of(&member.id).format_with_symbol(symbol),
            ratio: format_ratio(ctx.ratio_of(&member.id)),
        })
        .collect();
    render(lines)
}

fn share_of(amount: Money, total: Money) -> f64 {
    if total.is_zero() {
        0.0
    } else {
        amount.to_f64() / total.to_f64() * 100.0
    }
}
