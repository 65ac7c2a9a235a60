//! Recurring charges
//!
//! Fixed charges (rent, insurance, energy) and reserves (monthly savings
//! set aside for the household) share one shape: a labelled amount that
//! repeats monthly or yearly.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::BudgetCategory;
use super::money::Money;
use super::split::{CustomShares, SplitType};

/// How often a recurring amount is due
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Monthly,
    Yearly,
}

impl Frequency {
    /// Convert an amount at this frequency to its monthly equivalent
    ///
    /// No rounding happens here; a yearly 1000 becomes 83.333... per month.
    pub fn to_monthly(&self, amount: Money) -> Money {
        match self {
            Self::Monthly => amount,
            Self::Yearly => amount.divide_by(12),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "monthly"),
            Self::Yearly => write!(f, "yearly"),
        }
    }
}

/// A fixed charge or a reserve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringCharge {
    /// Display name
    pub label: String,

    /// Amount per `frequency` period
    pub amount: Money,

    #[serde(default)]
    pub frequency: Frequency,

    #[serde(default)]
    pub category: BudgetCategory,

    /// Split policy; reserves usually leave this unset (equal)
    #[serde(default)]
    pub split_type: SplitType,

    /// Percentages per member when `split_type` is custom
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_shares: Option<CustomShares>,
}

impl RecurringCharge {
    /// Create a monthly charge split equally
    pub fn monthly(label: impl Into<String>, amount: Money, category: BudgetCategory) -> Self {
        Self {
            label: label.into(),
            amount,
            frequency: Frequency::Monthly,
            category,
            split_type: SplitType::Equal,
            custom_shares: None,
        }
    }

    /// Create a yearly charge split equally
    pub fn yearly(label: impl Into<String>, amount: Money, category: BudgetCategory) -> Self {
        Self {
            frequency: Frequency::Yearly,
            ..Self::monthly(label, amount, category)
        }
    }

    /// Set the split policy
    pub fn split(mut self, split_type: SplitType) -> Self {
        self.split_type = split_type;
        self
    }

    /// Use a custom split with the given percentages
    pub fn custom(mut self, shares: CustomShares) -> Self {
        self.split_type = SplitType::Custom;
        self.custom_shares = Some(shares);
        self
    }

    /// The charge's monthly equivalent
    pub fn monthly_amount(&self) -> Money {
        self.frequency.to_monthly(self.amount)
    }
}
