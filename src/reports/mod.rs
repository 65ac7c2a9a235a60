//! Reports module for Foyer
//!
//! Month-level views over a household snapshot: the per-member budget
//! report and the household spending breakdown by category.

pub mod category_breakdown;
pub mod household;

pub use category_breakdown::{CategoryBreakdownReport, CategoryRow};
pub use household::{HouseholdReport, MemberBudgetRow};
