//! Test data generation and create-then-cleanup fixtures.

use crate::client::MarketplaceClient;
use crate::error::ClientError;
use crate::model::{Item, NewItem, Statistics};
use futures_util::FutureExt;
use log::{debug, warn};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::future::Future;
use std::ops::RangeInclusive;
use std::panic::{AssertUnwindSafe, resume_unwind};
use std::sync::Arc;

pub const SELLER_ID_RANGE: RangeInclusive<i64> = 111_111..=999_999;
pub const PRICE_RANGE: RangeInclusive<i64> = 100..=10_000;
pub const NAME_PREFIX: &str = "Test Item";

// =============================================================================
// DATA GENERATION
// =============================================================================

/// Source of seller ids, prices and item names.
///
/// A fixed seed reproduces the same seller ids and prices. Names always carry
/// a fresh UUID fragment so reruns against a shared service never collide.
#[derive(Debug)]
pub struct TestDataGenerator {
    rng: StdRng,
}

impl TestDataGenerator {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded generator for one test within a seeded session.
    ///
    /// Tests sharing a session seed get distinct but reproducible streams.
    pub fn derived(seed: u64, scope: &str) -> Self {
        Self::with_seed(seed ^ fnv1a(scope.as_bytes()))
    }

    pub fn next_seller_id(&mut self) -> i64 {
        self.rng.gen_range(SELLER_ID_RANGE)
    }

    /// Seller id from a caller-chosen sub-range, used to pick disjoint sellers.
    pub fn next_seller_id_in(&mut self, range: RangeInclusive<i64>) -> i64 {
        self.rng.gen_range(range)
    }

    pub fn next_price(&mut self) -> i64 {
        self.rng.gen_range(PRICE_RANGE)
    }

    /// `Test Item <8 hex chars>`. The seed does not cover names: every call
    /// takes its suffix from a fresh v4 UUID.
    pub fn unique_name(&mut self) -> String {
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        format!("{NAME_PREFIX} {}", &suffix[..8])
    }

    pub fn valid_item_payload(&mut self) -> NewItem {
        let seller_id = self.next_seller_id();
        self.valid_item_payload_for(seller_id)
    }

    pub fn valid_item_payload_for(&mut self, seller_id: i64) -> NewItem {
        NewItem {
            seller_id,
            name: self.unique_name(),
            price: self.next_price(),
            statistics: Statistics::zeroed(),
        }
    }
}

fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ u64::from(*byte)).wrapping_mul(0x0100_0000_01b3)
    })
}

// =============================================================================
// ITEM FIXTURES
// =============================================================================

/// Creates items and guarantees their deletion.
///
/// Cleanup is best-effort: a failed delete is logged and never fails the test.
#[derive(Debug, Clone)]
pub struct ItemFixture {
    client: MarketplaceClient,
    tracked: Arc<Mutex<Vec<String>>>,
}

impl ItemFixture {
    pub fn new(client: MarketplaceClient) -> Self {
        Self {
            client,
            tracked: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn client(&self) -> &MarketplaceClient {
        &self.client
    }

    /// Creates an item and decodes it, requiring a 200. The item is not tracked.
    pub async fn create(&self, payload: &NewItem) -> Result<Item, ClientError> {
        self.client
            .create_item(payload)
            .await?
            .require_status("create item", 200)?
            .json()
    }

    pub async fn create_tracked(&self, payload: &NewItem) -> Result<Item, ClientError> {
        let item = self.create(payload).await?;
        self.track(&item.id);
        Ok(item)
    }

    /// Registers an id created outside the fixture for cleanup.
    pub fn track(&self, id: &str) {
        self.tracked.lock().push(id.to_string());
    }

    pub fn tracked_ids(&self) -> Vec<String> {
        self.tracked.lock().clone()
    }

    /// Deletes every tracked item.
    pub async fn cleanup(&self) {
        let ids: Vec<String> = std::mem::take(&mut *self.tracked.lock());
        for id in ids {
            self.delete_best_effort(&id).await;
        }
    }

    /// Creates an item, runs `test` with it, then deletes it on both the
    /// success and the panic path. A panic from `test` is resumed after cleanup.
    pub async fn with_created_item<F, Fut, T>(
        &self,
        payload: &NewItem,
        test: F,
    ) -> Result<T, ClientError>
    where
        F: FnOnce(Item) -> Fut,
        Fut: Future<Output = T>,
    {
        let item = self.create(payload).await?;
        let id = item.id.clone();
        let outcome = AssertUnwindSafe(test(item)).catch_unwind().await;
        self.delete_best_effort(&id).await;
        match outcome {
            Ok(value) => Ok(value),
            Err(panic) => resume_unwind(panic),
        }
    }

    /// Runs `test` with a handle to this fixture and sweeps every item it
    /// tracked afterwards, including when `test` panics.
    pub async fn scoped<F, Fut, T>(&self, test: F) -> T
    where
        F: FnOnce(ItemFixture) -> Fut,
        Fut: Future<Output = T>,
    {
        let outcome = AssertUnwindSafe(test(self.clone())).catch_unwind().await;
        self.cleanup().await;
        match outcome {
            Ok(value) => value,
            Err(panic) => resume_unwind(panic),
        }
    }

    async fn delete_best_effort(&self, id: &str) {
        match self.client.delete_item(id).await {
            Ok(response) if response.is_success() => debug!("Cleaned up item {id}"),
            Ok(response) => warn!(
                "Cleanup of item {id} returned {}: {}",
                response.status(),
                response.body().trim()
            ),
            Err(e) => warn!("Cleanup of item {id} failed: {e}"),
        }
    }
}
