//! Category Breakdown Report
//!
//! Household-wide spending per category for one month: in-month expenses
//! plus the monthly amount of every fixed charge and reserve.

use serde::{Deserialize, Serialize};

use crate::display::{double_separator, format_bar, separator, tables};
use crate::models::{BudgetCategory, Expense, HouseholdSnapshot, Money, MonthKey};
use crate::services::category_totals;

/// One category line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRow {
    pub category: BudgetCategory,
    pub amount: Money,
    /// Percentage of the breakdown total
    pub percentage: f64,
}

/// Category Breakdown Report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdownReport {
    pub month: MonthKey,
    /// Sorted by amount, largest first
    pub rows: Vec<CategoryRow>,
    pub total: Money,
}

impl CategoryBreakdownReport {
    /// Generate the breakdown for `month`
    pub fn generate(snapshot: &HouseholdSnapshot, month: MonthKey) -> Self {
        let in_month: Vec<&Expense> = snapshot
            .expenses
            .iter()
            .filter(|e| month.contains(e.date))
            .collect();
        let totals = category_totals(&snapshot.household, &in_month);
        let total: Money = totals.values().sum();

        let mut rows: Vec<CategoryRow> = totals
            .into_iter()
            .map(|(category, amount)| CategoryRow {
                category,
                amount,
                percentage: if total.is_zero() {
                    0.0
                } else {
                    amount.to_f64() / total.to_f64() * 100.0
                },
            })
            .collect();

        // Largest first; ties keep category order
        rows.sort_by(|a, b| b.amount.cmp(&a.amount));

        Self { month, rows, total }
    }

    /// The amount recorded for `category`, zero when absent
    pub fn amount_for(&self, category: BudgetCategory) -> Money {
        self.rows
            .iter()
            .find(|row| row.category == category)
            .map(|row| row.amount)
            .unwrap_or_default()
    }

    /// The `n` largest categories
    pub fn top(&self, n: usize) -> &[CategoryRow] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Spending by category: {}\n", self.month.label()));
        output.push_str(&double_separator(48));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("Nothing recorded for this month.\n");
            return output;
        }

        output.push_str(&tables::category_breakdown_table(&self.rows, symbol));
        output.push('\n');

        let max = self.rows.first().map(|r| r.amount.to_f64()).unwrap_or(0.0);
        for row in &self.rows {
            output.push_str(&format!(
                "{:<16} {}\n",
                row.category.label(),
                format_bar(row.amount.to_f64(), max, 30)
            ));
        }

        output.push_str(&separator(48));
        output.push('\n');
        output.push_str(&format!(
            "{:<16} {:>16}\n",
            "Total:",
            self.total.format_with_symbol(symbol)
        ));

        output
    }
}
