//! Salary resolution and split ratios
//!
//! A member's salary for a month is the month's override when one exists
//! (an explicit zero included), else their default salary, else zero.

use rust_decimal::Decimal;

use crate::models::{BudgetConfig, MemberId, Money, MonthKey};

/// Effective salary of `member` for `month`
pub fn resolve_salary(config: &BudgetConfig, member: &MemberId, month: MonthKey) -> Money {
    config
        .monthly_salaries
        .get(&month)
        .and_then(|overrides| overrides.get(member))
        .or_else(|| config.salaries.get(member))
        .copied()
        .unwrap_or_default()
}

/// Sum of the resolved salaries of `members` for `month`
pub fn total_salary(config: &BudgetConfig, members: &[MemberId], month: MonthKey) -> Money {
    members
        .iter()
        .map(|m| resolve_salary(config, m, month))
        .sum()
}

/// Fraction of the household's total salary earned by `member`
///
/// Zero for everyone when the household has no recorded income.
pub fn split_ratio(
    config: &BudgetConfig,
    member: &MemberId,
    month: MonthKey,
    members: &[MemberId],
) -> Decimal {
    let total = total_salary(config, members, month);
    resolve_salary(config, member, month)
        .amount()
        .checked_div(total.amount())
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn month(s: &str) -> MonthKey {
        MonthKey::parse(s).unwrap()
    }

    fn members() -> Vec<MemberId> {
        vec![MemberId::from("alice"), MemberId::from("bob")]
    }

    fn config() -> BudgetConfig {
        BudgetConfig::default()
            .with_salary("alice", Money::from_major(2000))
            .with_salary("bob", Money::from_major(1000))
    }

    #[test]
    fn test_default_salary() {
        let salary = resolve_salary(&config(), &MemberId::from("alice"), month("2025-01"));
        assert_eq!(salary, Money::from_major(2000));
    }

    #[test]
    fn test_override_takes_precedence() {
        let config = config().with_monthly_salary(month("2025-02"), "alice", Money::from_major(2600));

        assert_eq!(
            resolve_salary(&config, &MemberId::from("alice"), month("2025-02")),
            Money::from_major(2600)
        );
        assert_eq!(
            resolve_salary(&config, &MemberId::from("alice"), month("2025-03")),
            Money::from_major(2000)
        );
    }

    #[test]
    fn test_explicit_zero_override() {
        let config = config().with_monthly_salary(month("2025-02"), "bob", Money::zero());
        assert_eq!(
            resolve_salary(&config, &MemberId::from("bob"), month("2025-02")),
            Money::zero()
        );
    }

    #[test]
    fn test_missing_salary_is_zero() {
        assert_eq!(
            resolve_salary(&config(), &MemberId::from("carol"), month("2025-01")),
            Money::zero()
        );
    }

    #[test]
    fn test_split_ratio() {
        let jan = month("2025-01");
        let alice = split_ratio(&config(), &MemberId::from("alice"), jan, &members());
        let bob = split_ratio(&config(), &MemberId::from("bob"), jan, &members());

        assert!((alice - dec!(0.6666666667)).abs() < dec!(0.000001));
        assert!((alice + bob - Decimal::ONE).abs() < dec!(0.000001));
    }

    #[test]
    fn test_split_ratio_without_income() {
        let config = BudgetConfig::default();
        let ratio = split_ratio(&config, &MemberId::from("alice"), month("2025-01"), &members());
        assert_eq!(ratio, Decimal::ZERO);
    }

    #[test]
    fn test_total_salary_uses_overrides() {
        let config = config().with_monthly_salary(month("2025-02"), "bob", Money::from_major(1500));
        assert_eq!(total_salary(&config, &members(), month("2025-02")), Money::from_major(3500));
        assert_eq!(total_salary(&config, &members(), month("2025-01")), Money::from_major(3000));
    }
}
