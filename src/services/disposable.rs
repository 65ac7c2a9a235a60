//! Disposable income
//!
//! Reduces a household snapshot to what one member, and the household as a
//! whole, have left for a month once fixed charges, reserves, wishlist
//! savings and variable expenses are accounted for.
//!
//! The household figure is unsplit: total salary minus every fixed charge,
//! reserve and in-month expense. Wishlist savings only reduce the members'
//! own figures. The category breakdown is household-wide as well.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::models::{
    BudgetCategory, Expense, Household, HouseholdSnapshot, MemberId, Money, MonthKey,
    WishlistItem,
};
use crate::services::allocation::{charge_share, expense_share, wishlist_saving, ShareContext};
use crate::services::salary::resolve_salary;

/// Disposable income of one member and of the household for one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisposableIncome {
    pub month: MonthKey,
    pub member: MemberId,

    /// Sum of every member's resolved salary
    pub total_household_salary: Money,
    pub household_fixed_total: Money,
    pub household_reserves_total: Money,
    pub household_expenses_total: Money,
    /// Household salary minus all charges, reserves and expenses
    pub household: Money,

    pub member_salary: Money,
    pub fixed_share: Money,
    pub wishlist_savings: Money,
    /// Reserve shares plus wishlist savings
    pub reserves_share: Money,
    pub expenses_share: Money,
    /// Member salary minus the member's shares
    pub personal: Money,

    /// Household-wide totals per category; categories at zero are left out
    pub by_category: BTreeMap<BudgetCategory, Money>,
}

/// Compute disposable income for `member` in `month`
///
/// `expenses` may contain other months; only expenses dated within `month`
/// are counted.
pub fn compute_disposable_income(
    household: &Household,
    expenses: &[Expense],
    wishlist: &[WishlistItem],
    month: MonthKey,
    member: &MemberId,
) -> DisposableIncome {
    let ctx = ShareContext::for_household(household, month);
    compute_with_context(household, expenses, wishlist, &ctx, member)
}

/// Compute disposable income for `member` from a snapshot
pub fn disposable_income_for(
    snapshot: &HouseholdSnapshot,
    month: MonthKey,
    member: &MemberId,
) -> DisposableIncome {
    compute_disposable_income(
        &snapshot.household,
        &snapshot.expenses,
        &snapshot.wishlist,
        month,
        member,
    )
}

/// Same as [`compute_disposable_income`] with a prepared context, so that
/// computing every member of a household resolves salaries once
pub fn compute_with_context(
    household: &Household,
    expenses: &[Expense],
    wishlist: &[WishlistItem],
    ctx: &ShareContext,
    member: &MemberId,
) -> DisposableIncome {
    let month = ctx.month();
    let config = &household.budget_config;
    let in_month: Vec<&Expense> = expenses.iter().filter(|e| month.contains(e.date)).collect();

    let total_household_salary = ctx.total_salary();
    let household_fixed_total: Money = config
        .fixed_charges
        .iter()
        .map(|c| c.monthly_amount())
        .sum();
    let household_reserves_total: Money =
        config.reserves.iter().map(|r| r.monthly_amount()).sum();
    let household_expenses_total: Money = in_month.iter().map(|e| e.amount).sum();
    let household_disposable = total_household_salary
        - household_fixed_total
        - household_reserves_total
        - household_expenses_total;

    let fixed_share: Money = config
        .fixed_charges
        .iter()
        .map(|c| charge_share(c, member, ctx))
        .sum();
    let wishlist_savings: Money = wishlist
        .iter()
        .map(|item| wishlist_saving(item, member, ctx))
        .sum();
    let reserves_share: Money = config
        .reserves
        .iter()
        .map(|r| charge_share(r, member, ctx))
        .sum::<Money>()
        + wishlist_savings;
    let expenses_share: Money = in_month
        .iter()
        .map(|e| expense_share(e, member, ctx))
        .sum();

    // Resolved from the config directly so a non-member still gets their salary
    let member_salary = resolve_salary(config, member, month);
    let personal = member_salary - fixed_share - reserves_share - expenses_share;

    let by_category = category_totals(household, &in_month);

    debug!(
        member = %member,
        month = %month,
        personal = %personal,
        household = %household_disposable,
        "computed disposable income"
    );

    DisposableIncome {
        month,
        member: member.clone(),
        total_household_salary,
        household_fixed_total,
        household_reserves_total,
        household_expenses_total,
        household: household_disposable,
        member_salary,
        fixed_share,
        wishlist_savings,
        reserves_share,
        expenses_share,
        personal,
        by_category,
    }
}

/// Household-wide totals per category for the given in-month expenses,
/// plus the monthly amount of every fixed charge and the stated amount of
/// every reserve
pub fn category_totals(
    household: &Household,
    in_month: &[&Expense],
) -> BTreeMap<BudgetCategory, Money> {
    let config = &household.budget_config;
    let mut totals: BTreeMap<BudgetCategory, Money> = BTreeMap::new();

    for expense in in_month {
        *totals.entry(expense.category).or_default() += expense.amount;
    }
    for charge in &config.fixed_charges {
        *totals.entry(charge.category).or_default() += charge.monthly_amount();
    }
    for reserve in &config.reserves {
        *totals.entry(reserve.category).or_default() += reserve.amount;
    }

    totals.retain(|_, amount| !amount.is_zero());
    totals
}
