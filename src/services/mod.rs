//! Service layer for Foyer
//!
//! Pure computations over a household snapshot: salary resolution, share
//! allocation, disposable income and snapshot lint. Nothing in this layer
//! performs I/O or mutates its inputs.

pub mod allocation;
pub mod disposable;
pub mod salary;
pub mod validation;

pub use allocation::{charge_share, expense_share, share_for, wishlist_saving, ShareContext};
pub use disposable::{
    category_totals, compute_disposable_income, compute_with_context, disposable_income_for,
    DisposableIncome,
};
pub use salary::{resolve_salary, split_ratio, total_salary};
pub use validation::{validate_snapshot, RecordRef, SnapshotWarning};
