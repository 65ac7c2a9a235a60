//! Snapshot lint
//!
//! The budget computation accepts any snapshot as-is. This module points out
//! records that are probably mistakes (custom splits that do not add up,
//! expenses paid by someone outside the household) so a user can fix them
//! at the source. Nothing here changes a computed figure.

use rust_decimal::Decimal;
use std::collections::HashSet;
use std::fmt;

use crate::models::{
    CustomShares, ExpenseId, Household, HouseholdSnapshot, MemberId, Money, MonthKey,
    RecurringCharge, SplitType, WishlistItemId,
};

/// The record a warning is about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordRef {
    FixedCharge(String),
    Reserve(String),
    Expense(ExpenseId),
    Wishlist(WishlistItemId),
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FixedCharge(label) => write!(f, "fixed charge '{}'", label),
            Self::Reserve(label) => write!(f, "reserve '{}'", label),
            Self::Expense(id) if id.is_empty() => write!(f, "expense (no id)"),
            Self::Expense(id) => write!(f, "expense {}", id),
            Self::Wishlist(id) if id.is_empty() => write!(f, "wishlist item (no id)"),
            Self::Wishlist(id) => write!(f, "wishlist item {}", id),
        }
    }
}

/// Something suspicious in a snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotWarning {
    EmptyHousehold,
    BlankMemberId,
    DuplicateMember(MemberId),
    SalaryForNonMember {
        member: MemberId,
        month: Option<MonthKey>,
    },
    NegativeSalary {
        member: MemberId,
        month: Option<MonthKey>,
    },
    NegativeAmount {
        record: RecordRef,
        amount: Money,
    },
    CustomSharesTotal {
        record: RecordRef,
        total: Decimal,
    },
    CustomShareForNonMember {
        record: RecordRef,
        member: MemberId,
    },
    CustomSplitWithoutShares(RecordRef),
    UnknownPayer {
        record: RecordRef,
        member: MemberId,
    },
    UnknownWishlistOwner {
        record: RecordRef,
        member: MemberId,
    },
}

impl fmt::Display for SnapshotWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyHousehold => write!(f, "household has no members"),
            Self::BlankMemberId => write!(f, "a member has a blank id"),
            Self::DuplicateMember(id) => write!(f, "member {} is listed more than once", id),
            Self::SalaryForNonMember { member, month: None } => {
                write!(f, "salary set for {} who is not a member", member)
            }
            Self::SalaryForNonMember {
                member,
                month: Some(month),
            } => write!(f, "{} salary override set for {} who is not a member", month, member),
            Self::NegativeSalary { member, month: None } => {
                write!(f, "negative salary for {}", member)
            }
            Self::NegativeSalary {
                member,
                month: Some(month),
            } => write!(f, "negative {} salary override for {}", month, member),
            Self::NegativeAmount { record, amount } => {
                write!(f, "{} has a negative amount ({})", record, amount)
            }
            Self::CustomSharesTotal { record, total } => write!(
                f,
                "{} custom shares add up to {}%, the rest is not allocated",
                record, total
            ),
            Self::CustomShareForNonMember { record, member } => {
                write!(f, "{} gives a custom share to non-member {}", record, member)
            }
            Self::CustomSplitWithoutShares(record) => write!(
                f,
                "{} uses a custom split without shares and is split equally",
                record
            ),
            Self::UnknownPayer { record, member } => {
                write!(f, "{} was paid by non-member {}", record, member)
            }
            Self::UnknownWishlistOwner { record, member } => {
                write!(f, "{} was created by non-member {}", record, member)
            }
        }
    }
}

/// Collect every warning for a snapshot, in a stable order
pub fn validate_snapshot(snapshot: &HouseholdSnapshot) -> Vec<SnapshotWarning> {
    let household = &snapshot.household;
    let config = &household.budget_config;
    let mut warnings = Vec::new();

    check_members(household, &mut warnings);

    for (member, salary) in &config.salaries {
        check_salary(household, member, *salary, None, &mut warnings);
    }
    for (month, overrides) in &config.monthly_salaries {
        for (member, salary) in overrides {
            check_salary(household, member, *salary, Some(*month), &mut warnings);
        }
    }

    for charge in &config.fixed_charges {
        check_charge(household, charge, RecordRef::FixedCharge(charge.label.clone()), &mut warnings);
    }
    for reserve in &config.reserves {
        check_charge(household, reserve, RecordRef::Reserve(reserve.label.clone()), &mut warnings);
    }

    for expense in &snapshot.expenses {
        let record = RecordRef::Expense(expense.id.clone());
        check_amount(&record, expense.amount, &mut warnings);
        check_split(
            household,
            &record,
            expense.split_type,
            expense.custom_shares.as_ref(),
            &mut warnings,
        );
        if !household.is_member(&expense.paid_by) {
            warnings.push(SnapshotWarning::UnknownPayer {
                record,
                member: expense.paid_by.clone(),
            });
        }
    }

    for item in &snapshot.wishlist {
        let record = RecordRef::Wishlist(item.id.clone());
        check_amount(&record, item.monthly_saving, &mut warnings);
        if !household.is_member(&item.created_by) {
            warnings.push(SnapshotWarning::UnknownWishlistOwner {
                record,
                member: item.created_by.clone(),
            });
        }
    }

    warnings
}

fn check_members(household: &Household, warnings: &mut Vec<SnapshotWarning>) {
    if household.members.is_empty() {
        warnings.push(SnapshotWarning::EmptyHousehold);
        return;
    }

    let mut seen = HashSet::new();
    for member in &household.members {
        if member.id.is_empty() {
            warnings.push(SnapshotWarning::BlankMemberId);
        } else if !seen.insert(&member.id) {
            warnings.push(SnapshotWarning::DuplicateMember(member.id.clone()));
        }
    }
}

fn check_salary(
    household: &Household,
    member: &MemberId,
    salary: Money,
    month: Option<MonthKey>,
    warnings: &mut Vec<SnapshotWarning>,
) {
    if !household.is_member(member) {
        warnings.push(SnapshotWarning::SalaryForNonMember {
            member: member.clone(),
            month,
        });
    }
    if salary.is_negative() {
        warnings.push(SnapshotWarning::NegativeSalary {
            member: member.clone(),
            month,
        });
    }
}

fn check_charge(
    household: &Household,
    charge: &RecurringCharge,
    record: RecordRef,
    warnings: &mut Vec<SnapshotWarning>,
) {
    check_amount(&record, charge.amount, warnings);
    check_split(
        household,
        &record,
        charge.split_type,
        charge.custom_shares.as_ref(),
        warnings,
    );
}

fn check_amount(record: &RecordRef, amount: Money, warnings: &mut Vec<SnapshotWarning>) {
    if amount.is_negative() {
        warnings.push(SnapshotWarning::NegativeAmount {
            record: record.clone(),
            amount,
        });
    }
}

fn check_split(
    household: &Household,
    record: &RecordRef,
    split_type: SplitType,
    custom_shares: Option<&CustomShares>,
    warnings: &mut Vec<SnapshotWarning>,
) {
    if split_type != SplitType::Custom {
        return;
    }

    let Some(shares) = custom_shares else {
        warnings.push(SnapshotWarning::CustomSplitWithoutShares(record.clone()));
        return;
    };

    let total = shares.total();
    if total != Decimal::ONE_HUNDRED {
        warnings.push(SnapshotWarning::CustomSharesTotal {
            record: record.clone(),
            total,
        });
    }

    for member in shares.members() {
        if !household.is_member(member) {
            warnings.push(SnapshotWarning::CustomShareForNonMember {
                record: record.clone(),
                member: member.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetCategory, BudgetConfig, Expense, Member, WishlistItem};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn household() -> Household {
        Household::new("Home")
            .with_member(Member::new("alice", "Alice"))
            .with_member(Member::new("bob", "Bob"))
    }

    #[test]
    fn test_clean_snapshot_has_no_warnings() {
        let household = household().with_budget_config(
            BudgetConfig::default()
                .with_salary("alice", Money::from_major(2000))
                .with_fixed_charge(
                    RecurringCharge::monthly("Rent", Money::from_major(900), BudgetCategory::Housing)
                        .custom(CustomShares::new().with("alice", dec!(60)).with("bob", dec!(40))),
                ),
        );
        assert!(validate_snapshot(&HouseholdSnapshot::new(household)).is_empty());
    }

    #[test]
    fn test_empty_household() {
        let warnings = validate_snapshot(&HouseholdSnapshot::default());
        assert_eq!(warnings, vec![SnapshotWarning::EmptyHousehold]);
    }

    #[test]
    fn test_duplicate_member() {
        let household = household().with_member(Member::new("bob", "Bobby"));
        let warnings = validate_snapshot(&HouseholdSnapshot::new(household));
        assert_eq!(warnings, vec![SnapshotWarning::DuplicateMember(MemberId::from("bob"))]);
    }

    #[test]
    fn test_custom_shares_warnings() {
        let household = household().with_budget_config(
            BudgetConfig::default().with_fixed_charge(
                RecurringCharge::monthly("Car", Money::from_major(100), BudgetCategory::Transport)
                    .custom(CustomShares::new().with("alice", dec!(70)).with("carol", dec!(10))),
            ),
        );
        let warnings = validate_snapshot(&HouseholdSnapshot::new(household));

        assert_eq!(warnings.len(), 2);
        assert!(matches!(
            &warnings[0],
            SnapshotWarning::CustomSharesTotal { total, .. } if *total == dec!(80)
        ));
        assert!(matches!(
            &warnings[1],
            SnapshotWarning::CustomShareForNonMember { member, .. } if member.as_str() == "carol"
        ));
        assert!(warnings[0].to_string().contains("fixed charge 'Car'"));
    }

    #[test]
    fn test_custom_split_without_shares() {
        let mut charge = RecurringCharge::monthly("Gym", Money::from_major(30), BudgetCategory::Leisure);
        charge.split_type = SplitType::Custom;
        let household = household().with_budget_config(BudgetConfig::default().with_reserve(charge));

        let warnings = validate_snapshot(&HouseholdSnapshot::new(household));
        assert_eq!(
            warnings,
            vec![SnapshotWarning::CustomSplitWithoutShares(RecordRef::Reserve("Gym".into()))]
        );
    }

    #[test]
    fn test_unknown_people_and_negative_amounts() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 4).unwrap();
        let household = household().with_budget_config(
            BudgetConfig::default().with_salary("dave", Money::from_major(-10)),
        );
        let snapshot = HouseholdSnapshot::new(household)
            .with_expense(
                Expense::shared("zoe", Money::from_major(-5), BudgetCategory::Groceries, date)
                    .with_id("e1"),
            )
            .with_wishlist_item(WishlistItem::personal("Drone", Money::from_major(20), "zoe"));

        let warnings = validate_snapshot(&snapshot);
        assert_eq!(warnings.len(), 5);
        assert!(warnings.contains(&SnapshotWarning::SalaryForNonMember {
            member: MemberId::from("dave"),
            month: None
        }));
        assert!(warnings.contains(&SnapshotWarning::NegativeSalary {
            member: MemberId::from("dave"),
            month: None
        }));
        assert!(warnings.iter().any(|w| w.to_string() == "expense e1 was paid by non-member zoe"));
        assert!(warnings
            .iter()
            .any(|w| matches!(w, SnapshotWarning::UnknownWishlistOwner { .. })));
    }
}
