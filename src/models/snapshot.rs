//! Household snapshot
//!
//! An immutable image of everything the budget computation reads: the
//! household with its budget configuration, the recorded expenses and the
//! wishlist. Callers rebuild a snapshot whenever the underlying records
//! change and compute again.

use serde::{Deserialize, Serialize};

use super::expense::Expense;
use super::household::{Household, Member};
use super::ids::MemberId;
use super::month::MonthKey;
use super::wishlist::WishlistItem;

/// Current snapshot schema version
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    SNAPSHOT_SCHEMA_VERSION
}

/// Everything needed to compute a household's budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdSnapshot {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub household: Household,

    #[serde(default)]
    pub expenses: Vec<Expense>,

    #[serde(default)]
    pub wishlist: Vec<WishlistItem>,
}

impl Default for HouseholdSnapshot {
    fn default() -> Self {
        Self {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            household: Household::default(),
            expenses: Vec::new(),
            wishlist: Vec::new(),
        }
    }
}

impl HouseholdSnapshot {
    pub fn new(household: Household) -> Self {
        Self {
            household,
            ..Self::default()
        }
    }

    pub fn with_expense(mut self, expense: Expense) -> Self {
        self.expenses.push(expense);
        self
    }

    pub fn with_wishlist_item(mut self, item: WishlistItem) -> Self {
        self.wishlist.push(item);
        self
    }

    /// Expenses dated within `month`
    pub fn expenses_in_month(&self, month: MonthKey) -> Vec<Expense> {
        self.expenses
            .iter()
            .filter(|e| month.contains(e.date))
            .cloned()
            .collect()
    }

    pub fn member_ids(&self) -> Vec<MemberId> {
        self.household.member_ids()
    }

    /// Look up a member by id, then by display name
    pub fn find_member(&self, id_or_name: &str) -> Option<&Member> {
        self.household.find_member(id_or_name)
    }
}
