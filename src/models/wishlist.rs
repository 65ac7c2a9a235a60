//! Wishlist savings goals

use serde::{Deserialize, Serialize};

use super::ids::{MemberId, WishlistItemId};
use super::money::Money;

/// Whether a wishlist goal belongs to one member or to the household
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WishlistType {
    Personal,
    #[default]
    Shared,
}

/// Something the household (or one member) is saving toward
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    #[serde(default)]
    pub id: WishlistItemId,

    #[serde(default)]
    pub label: String,

    /// Amount earmarked every month
    pub monthly_saving: Money,

    #[serde(rename = "type", default)]
    pub item_type: WishlistType,

    pub created_by: MemberId,
}

impl WishlistItem {
    pub fn shared(label: impl Into<String>, monthly_saving: Money, created_by: impl Into<MemberId>) -> Self {
        Self {
            id: WishlistItemId::default(),
            label: label.into(),
            monthly_saving,
            item_type: WishlistType::Shared,
            created_by: created_by.into(),
        }
    }

    pub fn personal(
        label: impl Into<String>,
        monthly_saving: Money,
        created_by: impl Into<MemberId>,
    ) -> Self {
        Self {
            item_type: WishlistType::Personal,
            ..Self::shared(label, monthly_saving, created_by)
        }
    }

    pub fn is_shared(&self) -> bool {
        self.item_type == WishlistType::Shared
    }
}
