//! Marketplace item types as they appear on the wire.

use serde::{Deserialize, Serialize};

/// Per-item counters maintained by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub likes: i64,
    pub view_count: i64,
    pub contacts: i64,
}

impl Statistics {
    pub fn zeroed() -> Self {
        Self::default()
    }

    pub fn new(likes: i64, view_count: i64, contacts: i64) -> Self {
        Self {
            likes,
            view_count,
            contacts,
        }
    }
}

/// Request body for item creation.
///
/// The service expects `sellerID` on input but answers with `sellerId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    #[serde(rename = "sellerID")]
    pub seller_id: i64,
    pub name: String,
    pub price: i64,
    pub statistics: Statistics,
}

impl NewItem {
    pub fn new(seller_id: i64, name: impl Into<String>, price: i64) -> Self {
        Self {
            seller_id,
            name: name.into(),
            price,
            statistics: Statistics::zeroed(),
        }
    }

    pub fn with_statistics(mut self, statistics: Statistics) -> Self {
        self.statistics = statistics;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub seller_id: i64,
    pub name: String,
    pub price: i64,
    pub statistics: Statistics,
    pub created_at: String,
}
