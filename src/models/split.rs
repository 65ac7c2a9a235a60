//! Split policies
//!
//! A split policy says how a shared amount is divided between the members
//! of a household. The allocation rules themselves live in
//! [`crate::services::allocation`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::ids::MemberId;

/// How an amount is divided between household members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SplitType {
    /// In proportion to each member's salary for the month
    Proportional,
    /// Fixed percentage per member from `custom_shares`
    Custom,
    /// Proportional, rounded half up to whole currency units per item
    Rounded,
    /// Marks an expense as belonging to its payer; allocated like `Equal`
    Individual,
    /// Same share for every member; also the fallback for unknown policies
    #[default]
    #[serde(other)]
    Equal,
}

impl SplitType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::Proportional => "proportional",
            Self::Custom => "custom",
            Self::Rounded => "rounded",
            Self::Individual => "individual",
        }
    }
}

impl fmt::Display for SplitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Percentages (0-100) per member for a custom split
///
/// Percentages are not required to add up to 100; whatever is left over is
/// simply not allocated to anyone.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomShares(BTreeMap<MemberId, Decimal>);

impl CustomShares {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, member: impl Into<MemberId>, percentage: Decimal) -> Self {
        self.0.insert(member.into(), percentage);
        self
    }

    /// The percentage assigned to `member`, if any
    pub fn percentage_for(&self, member: &MemberId) -> Option<Decimal> {
        self.0.get(member).copied()
    }

    /// Sum of all percentages
    pub fn total(&self) -> Decimal {
        self.0
            .values()
            .fold(Decimal::ZERO, |total, share| total.saturating_add(*share))
    }

    pub fn members(&self) -> impl Iterator<Item = &MemberId> {
        self.0.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(MemberId, Decimal)> for CustomShares {
    fn from_iter<I: IntoIterator<Item = (MemberId, Decimal)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_split_type_serde() {
        let parsed: SplitType = serde_json::from_str("\"proportional\"").unwrap();
        assert_eq!(parsed, SplitType::Proportional);
        assert_eq!(serde_json::to_string(&SplitType::Rounded).unwrap(), "\"rounded\"");
    }

    #[test]
    fn test_unknown_split_type_falls_back_to_equal() {
        let parsed: SplitType = serde_json::from_str("\"by-age\"").unwrap();
        assert_eq!(parsed, SplitType::Equal);
    }

    #[test]
    fn test_equal_is_default_and_round_trips_by_name() {
        assert_eq!(SplitType::default(), SplitType::Equal);
        assert_eq!(serde_json::to_string(&SplitType::Equal).unwrap(), "\"equal\"");
        let parsed: SplitType = serde_json::from_str("\"equal\"").unwrap();
        assert_eq!(parsed, SplitType::Equal);
        let parsed: SplitType = serde_json::from_str("\"individual\"").unwrap();
        assert_eq!(parsed, SplitType::Individual);
    }

    #[test]
    fn test_custom_shares() {
        let shares = CustomShares::new().with("alice", dec!(70)).with("bob", dec!(20));
        assert_eq!(shares.percentage_for(&MemberId::from("alice")), Some(dec!(70)));
        assert_eq!(shares.percentage_for(&MemberId::from("carol")), None);
        assert_eq!(shares.total(), dec!(90));
    }

    #[test]
    fn test_custom_shares_from_json_numbers() {
        let shares: CustomShares = serde_json::from_str(r#"{"alice": 60, "bob": 40.5}"#).unwrap();
        assert_eq!(shares.total(), dec!(100.5));
    }
}
