//! Foyer - household budget splitting
//!
//! This library computes how much each member of a household has left to
//! spend in a month once shared fixed charges, savings reserves, wishlist
//! goals and variable expenses have been split between the members, and how
//! much the household as a whole has left.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core data models (money, months, members, charges, expenses)
//! - `services`: Pure budget computation (salaries, shares, disposable income)
//! - `storage`: JSON snapshot storage
//! - `reports`: Household and category reports
//! - `export`: Report export to JSON, YAML and CSV
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `foyer` binary
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing setup
//!
//! # Example
//!
//! ```
//! use foyer::models::{BudgetConfig, Household, Member, MemberId, Money, MonthKey};
//! use foyer::services::compute_disposable_income;
//!
//! let household = Household::new("Home")
//!     .with_member(Member::new("alice", "Alice"))
//!     .with_member(Member::new("bob", "Bob"))
//!     .with_budget_config(
//!         BudgetConfig::default()
//!             .with_salary("alice", Money::from_major(2000))
//!             .with_salary("bob", Money::from_major(1000)),
//!     );
//!
//! let month = MonthKey::parse("2025-01").unwrap();
//! let result = compute_disposable_income(&household, &[], &[], month, &MemberId::from("bob"));
//! assert_eq!(result.personal, Money::from_major(1000));
//! assert_eq!(result.household, Money::from_major(3000));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FoyerError, FoyerResult};
