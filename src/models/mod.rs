//! Core data models for Foyer
//!
//! This module contains the data structures of the household budget: money,
//! months, members, salaries, recurring charges, expenses and wishlist goals.

pub mod category;
pub mod charge;
pub mod expense;
pub mod household;
pub mod ids;
pub mod money;
pub mod month;
pub mod snapshot;
pub mod split;
pub mod wishlist;

pub use category::BudgetCategory;
pub use charge::{Frequency, RecurringCharge};
pub use expense::{Expense, ExpenseType};
pub use household::{BudgetConfig, Household, Member};
pub use ids::{ExpenseId, HouseholdId, MemberId, WishlistItemId};
pub use money::{Money, MoneyParseError};
pub use month::{MonthKey, MonthKeyParseError};
pub use snapshot::{HouseholdSnapshot, SNAPSHOT_SCHEMA_VERSION};
pub use split::{CustomShares, SplitType};
pub use wishlist::{WishlistItem, WishlistType};
