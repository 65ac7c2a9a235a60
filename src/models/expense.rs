//! Variable expenses
//!
//! Day-to-day spending recorded by a member during the month.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::BudgetCategory;
use super::ids::{ExpenseId, MemberId};
use super::money::Money;
use super::split::{CustomShares, SplitType};

/// Whether an expense is the payer's own or shared by the household
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseType {
    /// Counts only against the payer
    Personal,
    #[default]
    Shared,
}

impl fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Personal => write!(f, "personal"),
            Self::Shared => write!(f, "shared"),
        }
    }
}

/// A variable expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    #[serde(default)]
    pub id: ExpenseId,

    #[serde(default)]
    pub label: String,

    pub amount: Money,

    #[serde(default)]
    pub category: BudgetCategory,

    pub date: NaiveDate,

    pub paid_by: MemberId,

    #[serde(default)]
    pub split_type: SplitType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_shares: Option<CustomShares>,

    #[serde(rename = "type", default)]
    pub expense_type: ExpenseType,
}

impl Expense {
    /// Create a shared expense split equally
    pub fn shared(
        paid_by: impl Into<MemberId>,
        amount: Money,
        category: BudgetCategory,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: ExpenseId::default(),
            label: String::new(),
            amount,
            category,
            date,
            paid_by: paid_by.into(),
            split_type: SplitType::Equal,
            custom_shares: None,
            expense_type: ExpenseType::Shared,
        }
    }

    /// Create a personal expense
    pub fn personal(
        paid_by: impl Into<MemberId>,
        amount: Money,
        category: BudgetCategory,
        date: NaiveDate,
    ) -> Self {
        Self {
            expense_type: ExpenseType::Personal,
            ..Self::shared(paid_by, amount, category, date)
        }
    }

    pub fn with_id(mut self, id: impl Into<ExpenseId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
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

    pub fn is_personal(&self) -> bool {
        self.expense_type == ExpenseType::Personal
    }
}
