//! Household aggregate
//!
//! A household owns its members and its budget configuration: salaries,
//! per-month salary overrides, fixed charges and reserves.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::charge::RecurringCharge;
use super::ids::{HouseholdId, MemberId};
use super::money::Money;
use super::month::MonthKey;

/// A household member
///
/// Snapshots may list members either as bare ids or as objects with a
/// display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "MemberRecord")]
pub struct Member {
    pub id: MemberId,

    #[serde(default)]
    pub display_name: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MemberRecord {
    Id(MemberId),
    #[serde(rename_all = "camelCase")]
    Full {
        id: MemberId,
        #[serde(default)]
        display_name: String,
    },
}

impl From<MemberRecord> for Member {
    fn from(record: MemberRecord) -> Self {
        match record {
            MemberRecord::Id(id) => Self {
                id,
                display_name: String::new(),
            },
            MemberRecord::Full { id, display_name } => Self { id, display_name },
        }
    }
}

impl Member {
    pub fn new(id: impl Into<MemberId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }

    /// Display name, falling back to the id
    pub fn name(&self) -> &str {
        if self.display_name.trim().is_empty() {
            self.id.as_str()
        } else {
            &self.display_name
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Budget configuration shared by the household
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetConfig {
    /// Default monthly salary per member
    #[serde(default)]
    pub salaries: BTreeMap<MemberId, Money>,

    /// Salary overrides per month, then per member
    #[serde(default)]
    pub monthly_salaries: BTreeMap<MonthKey, BTreeMap<MemberId, Money>>,

    #[serde(default)]
    pub fixed_charges: Vec<RecurringCharge>,

    #[serde(default)]
    pub reserves: Vec<RecurringCharge>,
}

impl BudgetConfig {
    /// Set a member's default salary
    pub fn with_salary(mut self, member: impl Into<MemberId>, salary: Money) -> Self {
        self.salaries.insert(member.into(), salary);
        self
    }

    /// Override a member's salary for one month
    pub fn with_monthly_salary(
        mut self,
        month: MonthKey,
        member: impl Into<MemberId>,
        salary: Money,
    ) -> Self {
        self.monthly_salaries
            .entry(month)
            .or_default()
            .insert(member.into(), salary);
        self
    }

    pub fn with_fixed_charge(mut self, charge: RecurringCharge) -> Self {
        self.fixed_charges.push(charge);
        self
    }

    pub fn with_reserve(mut self, reserve: RecurringCharge) -> Self {
        self.reserves.push(reserve);
        self
    }
}

/// The household aggregate root
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Household {
    #[serde(default)]
    pub id: HouseholdId,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub members: Vec<Member>,

    #[serde(default)]
    pub budget_config: BudgetConfig,
}

impl Household {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn with_budget_config(mut self, config: BudgetConfig) -> Self {
        self.budget_config = config;
        self
    }

    /// Member ids, in household order
    pub fn member_ids(&self) -> Vec<MemberId> {
        self.members.iter().map(|m| m.id.clone()).collect()
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn is_member(&self, id: &MemberId) -> bool {
        self.members.iter().any(|m| &m.id == id)
    }

    pub fn member(&self, id: &MemberId) -> Option<&Member> {
        self.members.iter().find(|m| &m.id == id)
    }

    /// Find a member by exact id, then by case-insensitive display name
    pub fn find_member(&self, id_or_name: &str) -> Option<&Member> {
        let needle = id_or_name.trim();
        self.members
            .iter()
            .find(|m| m.id.as_str() == needle)
            .or_else(|| {
                self.members
                    .iter()
                    .find(|m| m.display_name.eq_ignore_ascii_case(needle))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_members_as_ids_or_objects() {
        let household: Household = serde_json::from_str(
            r#"{"name": "Home", "members": ["alice", {"id": "bob", "displayName": "Bob"}]}"#,
        )
        .unwrap();

        assert_eq!(household.member_count(), 2);
        assert_eq!(household.members[0].name(), "alice");
        assert_eq!(household.members[1].name(), "Bob");
    }

    #[test]
    fn test_find_member() {
        let household = Household::new("Home")
            .with_member(Member::new("u1", "Alice"))
            .with_member(Member::new("u2", "Bob"));

        assert_eq!(household.find_member("u2").unwrap().display_name, "Bob");
        assert_eq!(household.find_member("alice").unwrap().id, MemberId::from("u1"));
        assert!(household.find_member("carol").is_none());
    }

    #[test]
    fn test_budget_config_json_shape() {
        let config: BudgetConfig = serde_json::from_str(
            r#"{
                "salaries": {"alice": 2000, "bob": 1000},
                "monthlySalaries": {"2025-01": {"bob": 0}},
                "fixedCharges": [{"label": "Rent", "amount": 1000}],
                "reserves": []
            }"#,
        )
        .unwrap();

        assert_eq!(config.salaries.len(), 2);
        let jan = MonthKey::parse("2025-01").unwrap();
        assert_eq!(config.monthly_salaries[&jan]["bob"], Money::zero());
        assert_eq!(config.fixed_charges.len(), 1);
    }

    #[test]
    fn test_budget_config_builder() {
        let jan = MonthKey::parse("2025-01").unwrap();
        let config = BudgetConfig::default()
            .with_salary("alice", Money::from_major(2000))
            .with_monthly_salary(jan, "alice", Money::from_major(2500));

        assert_eq!(config.salaries["alice"], Money::from_major(2000));
        assert_eq!(config.monthly_salaries[&jan]["alice"], Money::from_major(2500));
    }
}
