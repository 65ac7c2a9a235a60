//! Household Report
//!
//! Disposable income of every member plus the household totals for one
//! month, the view a household looks at when planning the month.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::display::{double_separator, format_ratio, separator, tables};
use crate::models::{BudgetCategory, HouseholdSnapshot, MemberId, Money, MonthKey};
use crate::services::{compute_with_context, DisposableIncome, ShareContext};

/// One member's figures for the month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberBudgetRow {
    pub member: MemberId,
    pub display_name: String,
    pub salary: Money,
    /// Share of the household's total salary
    pub split_ratio: Decimal,
    pub fixed_share: Money,
    /// Reserve shares including wishlist savings
    pub reserves_share: Money,
    pub wishlist_savings: Money,
    pub expenses_share: Money,
    pub disposable: Money,
}

impl MemberBudgetRow {
    fn from_result(result: &DisposableIncome, display_name: String, split_ratio: Decimal) -> Self {
        Self {
            member: result.member.clone(),
            display_name,
            salary: result.member_salary,
            split_ratio,
            fixed_share: result.fixed_share,
            reserves_share: result.reserves_share,
            wishlist_savings: result.wishlist_savings,
            expenses_share: result.expenses_share,
            disposable: result.personal,
        }
    }
}

/// Household Report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdReport {
    pub month: MonthKey,
    pub household_name: String,
    pub total_household_salary: Money,
    pub household_fixed_total: Money,
    pub household_reserves_total: Money,
    pub household_expenses_total: Money,
    pub household_disposable: Money,
    pub members: Vec<MemberBudgetRow>,
    pub by_category: BTreeMap<BudgetCategory, Money>,
}

impl HouseholdReport {
    /// Generate the report for every member of the snapshot's household
    pub fn generate(snapshot: &HouseholdSnapshot, month: MonthKey) -> Self {
        let household = &snapshot.household;
        let ctx = ShareContext::for_household(household, month);
        let compute = |member: &MemberId| {
            compute_with_context(household, &snapshot.expenses, &snapshot.wishlist, &ctx, member)
        };

        let results: Vec<DisposableIncome> =
            household.members.iter().map(|m| compute(&m.id)).collect();

        let members = household
            .members
            .iter()
            .zip(&results)
            .map(|(member, result)| {
                MemberBudgetRow::from_result(result, member.name().to_string(), ctx.ratio_of(&member.id))
            })
            .collect();

        // Household figures do not depend on the member; an empty household
        // still gets its charges and expenses totalled.
        let totals = match results.into_iter().next() {
            Some(result) => result,
            None => compute(&MemberId::default()),
        };

        Self {
            month,
            household_name: household.name.clone(),
            total_household_salary: totals.total_household_salary,
            household_fixed_total: totals.household_fixed_total,
            household_reserves_total: totals.household_reserves_total,
            household_expenses_total: totals.household_expenses_total,
            household_disposable: totals.household,
            members,
            by_category: totals.by_category,
        }
    }

    /// The row for `member`, if they belong to the household
    pub fn member(&self, member: &MemberId) -> Option<&MemberBudgetRow> {
        self.members.iter().find(|row| &row.member == member)
    }

    fn title(&self) -> String {
        if self.household_name.trim().is_empty() {
            format!("Household budget: {}", self.month.label())
        } else {
            format!("{}: {}", self.household_name, self.month.label())
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&self.title());
        output.push('\n');
        output.push_str(&double_separator(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>16}\n",
            "Household salary:",
            self.total_household_salary.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<28} {:>16}\n",
            "Fixed charges:",
            self.household_fixed_total.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<28} {:>16}\n",
            "Reserves:",
            self.household_reserves_total.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<28} {:>16}\n",
            "Expenses:",
            self.household_expenses_total.format_with_symbol(symbol)
        ));
        output.push_str(&separator(45));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>16}\n\n",
            "Household disposable:",
            self.household_disposable.format_with_symbol(symbol)
        ));

        if self.members.is_empty() {
            output.push_str("No members in this household.\n");
        } else {
            output.push_str(&tables::member_table(&self.members, symbol));
            output.push('\n');
        }

        if !self.by_category.is_empty() {
            output.push('\n');
            output.push_str(&tables::category_totals_table(&self.by_category, symbol));
            output.push('\n');
        }

        output
    }

    /// Format one member's breakdown for terminal display
    pub fn format_member(&self, row: &MemberBudgetRow, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} - {}\n", row.display_name, self.month.label()));
        output.push_str(&double_separator(48));
        output.push('\n');

        let lines = [
            ("Salary:", row.salary),
            ("Fixed charges share:", -row.fixed_share),
            ("Reserves share:", -row.reserves_share),
            ("  of which wishlist:", row.wishlist_savings),
            ("Expenses share:", -row.expenses_share),
        ];
        for (label, amount) in lines {
            output.push_str(&format!("{:<28} {:>16}\n", label, amount.format_with_symbol(symbol)));
        }

        output.push_str(&separator(45));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>16}\n",
            "Disposable:",
            row.disposable.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<28} {:>16}\n",
            "Share of household salary:",
            format_ratio(row.split_ratio)
        ));

        output
    }
}
