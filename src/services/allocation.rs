//! Share allocation
//!
//! One allocator decides how much of any amount a member carries, whatever
//! the amount comes from: fixed charges, reserves, wishlist savings or
//! variable expenses.
//!
//! Policies apply in this order, first match wins:
//!
//! 1. `custom` with a shares map: the member's percentage of the amount, or
//!    nothing when the map does not list them
//! 2. `rounded`: the proportional share rounded half up to whole units
//! 3. `proportional`: amount times the member's salary ratio
//! 4. anything else: an equal share
//!
//! A custom split without a shares map therefore falls through to an equal
//! share.

use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::models::{
    BudgetConfig, CustomShares, Expense, Household, MemberId, Money, MonthKey, RecurringCharge,
    SplitType, WishlistItem,
};
use crate::services::salary::resolve_salary;

/// Resolved salaries for one household and one month
///
/// Built once per computation so every allocation within it sees the same
/// salary figures.
#[derive(Debug, Clone)]
pub struct ShareContext {
    month: MonthKey,
    members: Vec<MemberId>,
    salaries: HashMap<MemberId, Money>,
    total_salary: Money,
}

impl ShareContext {
    /// Build a context for `members` from a budget configuration
    pub fn new(config: &BudgetConfig, members: Vec<MemberId>, month: MonthKey) -> Self {
        let salaries: HashMap<MemberId, Money> = members
            .iter()
            .map(|m| (m.clone(), resolve_salary(config, m, month)))
            .collect();
        let total_salary = members
            .iter()
            .map(|m| salaries.get(m).copied().unwrap_or_default())
            .sum();

        Self {
            month,
            members,
            salaries,
            total_salary,
        }
    }

    /// Build a context for every member of a household
    pub fn for_household(household: &Household, month: MonthKey) -> Self {
        Self::new(&household.budget_config, household.member_ids(), month)
    }

    pub fn month(&self) -> MonthKey {
        self.month
    }

    pub fn members(&self) -> &[MemberId] {
        &self.members
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn total_salary(&self) -> Money {
        self.total_salary
    }

    /// The member's resolved salary; zero for ids outside the household
    pub fn salary_of(&self, member: &MemberId) -> Money {
        self.salaries.get(member).copied().unwrap_or_default()
    }

    /// The member's share of the total household salary
    pub fn ratio_of(&self, member: &MemberId) -> Decimal {
        self.salary_of(member)
            .amount()
            .checked_div(self.total_salary.amount())
            .unwrap_or(Decimal::ZERO)
    }

    fn proportional_share(&self, amount: Money, member: &MemberId) -> Money {
        amount.proportion(self.salary_of(member), self.total_salary)
    }
}

/// The part of `amount` that `member` carries under `split_type`
pub fn share_for(
    amount: Money,
    split_type: SplitType,
    custom_shares: Option<&CustomShares>,
    member: &MemberId,
    ctx: &ShareContext,
) -> Money {
    match (split_type, custom_shares) {
        (SplitType::Custom, Some(shares)) => shares
            .percentage_for(member)
            .map(|pct| amount.percent(pct))
            .unwrap_or_default(),
        (SplitType::Rounded, _) => ctx.proportional_share(amount, member).round_half_up(),
        (SplitType::Proportional, _) => ctx.proportional_share(amount, member),
        _ => amount.divide_by(ctx.member_count()),
    }
}

/// A member's share of a fixed charge or reserve, per month
pub fn charge_share(charge: &RecurringCharge, member: &MemberId, ctx: &ShareContext) -> Money {
    share_for(
        charge.monthly_amount(),
        charge.split_type,
        charge.custom_shares.as_ref(),
        member,
        ctx,
    )
}

/// A member's share of a variable expense
///
/// Personal expenses belong entirely to their payer, whatever split policy
/// they were recorded with.
pub fn expense_share(expense: &Expense, member: &MemberId, ctx: &ShareContext) -> Money {
    if expense.is_personal() {
        return if &expense.paid_by == member {
            expense.amount
        } else {
            Money::zero()
        };
    }

    share_for(
        expense.amount,
        expense.split_type,
        expense.custom_shares.as_ref(),
        member,
        ctx,
    )
}

/// A member's monthly saving toward a wishlist goal
pub fn wishlist_saving(item: &WishlistItem, member: &MemberId, ctx: &ShareContext) -> Money {
    if item.is_shared() {
        item.monthly_saving.divide_by(ctx.member_count())
    } else if &item.created_by == member {
        item.monthly_saving
    } else {
        Money::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BudgetCategory;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn alice() -> MemberId {
        MemberId::from("alice")
    }

    fn bob() -> MemberId {
        MemberId::from("bob")
    }

    fn context(alice_salary: i64, bob_salary: i64) -> ShareContext {
        let config = BudgetConfig::default()
            .with_salary("alice", Money::from_major(alice_salary))
            .with_salary("bob", Money::from_major(bob_salary));
        ShareContext::new(&config, vec![alice(), bob()], MonthKey::parse("2025-01").unwrap())
    }

    fn close(a: Money, b: Money) -> bool {
        (a - b).abs().amount() < dec!(0.000001)
    }

    #[test]
    fn test_equal_split() {
        let ctx = context(2000, 1000);
        let amount = Money::from_major(1000);
        assert_eq!(share_for(amount, SplitType::Equal, None, &alice(), &ctx), Money::from_major(500));
        assert_eq!(share_for(amount, SplitType::Equal, None, &bob(), &ctx), Money::from_major(500));
    }

    #[test]
    fn test_equal_shares_sum_to_amount() {
        let config = BudgetConfig::default();
        let members: Vec<MemberId> = ["a", "b", "c"].into_iter().map(MemberId::from).collect();
        let ctx = ShareContext::new(&config, members.clone(), MonthKey::parse("2025-01").unwrap());

        let amount = Money::from_major(100);
        let total: Money = members
            .iter()
            .map(|m| share_for(amount, SplitType::Equal, None, m, &ctx))
            .sum();
        assert!(close(total, amount));
    }

    #[test]
    fn test_proportional_split() {
        let ctx = context(2000, 1000);
        let amount = Money::from_major(900);
        assert_eq!(
            share_for(amount, SplitType::Proportional, None, &alice(), &ctx),
            Money::from_major(600)
        );
        assert_eq!(
            share_for(amount, SplitType::Proportional, None, &bob(), &ctx),
            Money::from_major(300)
        );
    }

    #[test]
    fn test_proportional_shares_sum_to_amount() {
        let ctx = context(2345, 1789);
        let amount = Money::from_cents(123_456);
        let total = share_for(amount, SplitType::Proportional, None, &alice(), &ctx)
            + share_for(amount, SplitType::Proportional, None, &bob(), &ctx);
        assert!(close(total, amount));
    }

    #[test]
    fn test_proportional_without_income_is_zero() {
        let ctx = context(0, 0);
        let amount = Money::from_major(900);
        assert_eq!(share_for(amount, SplitType::Proportional, None, &alice(), &ctx), Money::zero());
        assert_eq!(share_for(amount, SplitType::Rounded, None, &bob(), &ctx), Money::zero());
    }

    #[test]
    fn test_custom_split() {
        let ctx = context(2000, 1000);
        let shares = CustomShares::new().with("alice", dec!(70));
        let amount = Money::from_major(100);

        assert_eq!(
            share_for(amount, SplitType::Custom, Some(&shares), &alice(), &ctx),
            Money::from_major(70)
        );
        assert_eq!(share_for(amount, SplitType::Custom, Some(&shares), &bob(), &ctx), Money::zero());
    }

    #[test]
    fn test_custom_percentages_need_not_sum_to_100() {
        let ctx = context(2000, 1000);
        let shares = CustomShares::new().with("alice", dec!(80)).with("bob", dec!(40));
        let amount = Money::from_major(100);
        let total = share_for(amount, SplitType::Custom, Some(&shares), &alice(), &ctx)
            + share_for(amount, SplitType::Custom, Some(&shares), &bob(), &ctx);
        assert_eq!(total, Money::from_major(120));
    }

    #[test]
    fn test_custom_without_shares_falls_back_to_equal() {
        let ctx = context(2000, 1000);
        let amount = Money::from_major(100);
        assert_eq!(share_for(amount, SplitType::Custom, None, &alice(), &ctx), Money::from_major(50));
    }

    #[test]
    fn test_shares_map_ignored_for_other_policies() {
        let ctx = context(2000, 1000);
        let shares = CustomShares::new().with("alice", dec!(100));
        let amount = Money::from_major(900);
        assert_eq!(
            share_for(amount, SplitType::Proportional, Some(&shares), &bob(), &ctx),
            Money::from_major(300)
        );
    }

    #[test]
    fn test_rounded_split_is_whole_units() {
        let ctx = context(2000, 1000);
        let amount = Money::from_major(100);
        let a = share_for(amount, SplitType::Rounded, None, &alice(), &ctx);
        let b = share_for(amount, SplitType::Rounded, None, &bob(), &ctx);

        assert_eq!(a, Money::from_major(67));
        assert_eq!(b, Money::from_major(33));
        assert!(a.is_whole() && b.is_whole());
    }

    #[test]
    fn test_rounded_split_may_drift() {
        let config = BudgetConfig::default()
            .with_salary("a", Money::from_major(1000))
            .with_salary("b", Money::from_major(1000));
        let ctx = ShareContext::new(
            &config,
            vec![MemberId::from("a"), MemberId::from("b")],
            MonthKey::parse("2025-01").unwrap(),
        );

        // 0.5 each, both rounded up
        let amount = Money::from_major(1);
        let total = share_for(amount, SplitType::Rounded, None, &MemberId::from("a"), &ctx)
            + share_for(amount, SplitType::Rounded, None, &MemberId::from("b"), &ctx);
        assert_eq!(total, Money::from_major(2));
        assert!((total - amount).abs() <= Money::from_major(1));
    }

    #[test]
    fn test_individual_is_allocated_equally() {
        let ctx = context(2000, 1000);
        let amount = Money::from_major(80);
        assert_eq!(
            share_for(amount, SplitType::Individual, None, &bob(), &ctx),
            Money::from_major(40)
        );
    }

    #[test]
    fn test_no_members_yields_zero() {
        let ctx = ShareContext::new(&BudgetConfig::default(), Vec::new(), MonthKey::parse("2025-01").unwrap());
        assert_eq!(
            share_for(Money::from_major(100), SplitType::Equal, None, &alice(), &ctx),
            Money::zero()
        );
    }

    #[test]
    fn test_personal_expense_belongs_to_payer() {
        let ctx = context(2000, 1000);
        let date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let expense = Expense::personal("alice", Money::from_major(50), BudgetCategory::Leisure, date);

        assert_eq!(expense_share(&expense, &alice(), &ctx), Money::from_major(50));
        assert_eq!(expense_share(&expense, &bob(), &ctx), Money::zero());

        let proportional = expense.clone().split(SplitType::Proportional);
        assert_eq!(expense_share(&proportional, &alice(), &ctx), Money::from_major(50));
        assert_eq!(expense_share(&proportional, &bob(), &ctx), Money::zero());
    }

    #[test]
    fn test_shared_expense_uses_policy() {
        let ctx = context(2000, 1000);
        let date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let expense = Expense::shared("bob", Money::from_major(90), BudgetCategory::Groceries, date)
            .split(SplitType::Proportional);

        assert_eq!(expense_share(&expense, &alice(), &ctx), Money::from_major(60));
        assert_eq!(expense_share(&expense, &bob(), &ctx), Money::from_major(30));
    }

    #[test]
    fn test_yearly_charge_matches_monthly_equivalent() {
        let ctx = context(2345, 1000);
        let yearly = RecurringCharge::yearly("Insurance", Money::from_major(1000), BudgetCategory::Insurance)
            .split(SplitType::Proportional);
        let monthly = RecurringCharge::monthly(
            "Insurance",
            Money::from_major(1000).divide_by(12),
            BudgetCategory::Insurance,
        )
        .split(SplitType::Proportional);

        assert_eq!(charge_share(&yearly, &alice(), &ctx), charge_share(&monthly, &alice(), &ctx));
        assert_eq!(charge_share(&yearly, &bob(), &ctx), charge_share(&monthly, &bob(), &ctx));
    }

    #[test]
    fn test_wishlist_saving() {
        let ctx = context(2000, 1000);
        let shared = WishlistItem::shared("Holidays", Money::from_major(100), "bob");
        let personal = WishlistItem::personal("Bike", Money::from_major(40), "bob");

        assert_eq!(wishlist_saving(&shared, &alice(), &ctx), Money::from_major(50));
        assert_eq!(wishlist_saving(&personal, &bob(), &ctx), Money::from_major(40));
        assert_eq!(wishlist_saving(&personal, &alice(), &ctx), Money::zero());
    }

    #[test]
    fn test_context_ratio() {
        let ctx = context(2000, 1000);
        assert_eq!(ctx.total_salary(), Money::from_major(3000));
        assert!((ctx.ratio_of(&alice()) - dec!(0.666666)).abs() < dec!(0.00001));
        assert_eq!(ctx.ratio_of(&MemberId::from("carol")), Decimal::ZERO);
    }
}
