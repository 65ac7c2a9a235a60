//! Budget categories
//!
//! Categories classify charges, reserves and expenses for the category
//! breakdown. They carry no behaviour of their own: a charge in the wrong
//! category still counts toward every disposable-income figure.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of household budget categories
///
/// Unknown category names in a snapshot deserialize as [`BudgetCategory::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetCategory {
    Housing,
    Groceries,
    Transport,
    Utilities,
    Insurance,
    Health,
    Children,
    Education,
    Leisure,
    Subscriptions,
    Savings,
    #[default]
    #[serde(other)]
    Other,
}

impl BudgetCategory {
    /// All categories, in display order
    pub const ALL: [BudgetCategory; 12] = [
        Self::Housing,
        Self::Groceries,
        Self::Transport,
        Self::Utilities,
        Self::Insurance,
        Self::Health,
        Self::Children,
        Self::Education,
        Self::Leisure,
        Self::Subscriptions,
        Self::Savings,
        Self::Other,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Housing => "Housing",
            Self::Groceries => "Groceries",
            Self::Transport => "Transport",
            Self::Utilities => "Utilities",
            Self::Insurance => "Insurance",
            Self::Health => "Health",
            Self::Children => "Children",
            Self::Education => "Education",
            Self::Leisure => "Leisure",
            Self::Subscriptions => "Subscriptions",
            Self::Savings => "Savings",
            Self::Other => "Other",
        }
    }

    /// Key as stored in snapshots
    pub fn key(&self) -> &'static str {
        match self {
            Self::Housing => "housing",
            Self::Groceries => "groceries",
            Self::Transport => "transport",
            Self::Utilities => "utilities",
            Self::Insurance => "insurance",
            Self::Health => "health",
            Self::Children => "children",
            Self::Education => "education",
            Self::Leisure => "leisure",
            Self::Subscriptions => "subscriptions",
            Self::Savings => "savings",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
