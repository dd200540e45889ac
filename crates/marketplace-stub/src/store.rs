//! In-memory item storage

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredStatistics {
    pub likes: i64,
    pub view_count: i64,
    pub contacts: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredItem {
    pub id: String,
    pub seller_id: i64,
    pub name: String,
    pub price: i64,
    pub statistics: StoredStatistics,
    pub created_at: String,
}

/// Items in creation order.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: RwLock<Vec<StoredItem>>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &self,
        seller_id: i64,
        name: String,
        price: i64,
        statistics: StoredStatistics,
    ) -> StoredItem {
        let item = StoredItem {
            id: uuid::Uuid::new_v4().to_string(),
            seller_id,
            name,
            price,
            statistics,
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        self.items.write().push(item.clone());
        item
    }

    pub fn get(&self, id: &str) -> Option<StoredItem> {
        self.items.read().iter().find(|item| item.id == id).cloned()
    }

    pub fn by_seller(&self, seller_id: i64) -> Vec<StoredItem> {
        self.items
            .read()
            .iter()
            .filter(|item| item.seller_id == seller_id)
            .cloned()
            .collect()
    }

    pub fn remove(&self, id: &str) -> Option<StoredItem> {
        let mut items = self.items.write();
        let position = items.iter().position(|item| item.id == id)?;
        Some(items.remove(position))
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}
