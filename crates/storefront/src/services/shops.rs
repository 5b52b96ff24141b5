//! Server-side shopper state.
//!
//! Each shopper's [`ShopSession`] sits behind its own lock, so requests on
//! one session apply one at a time: a checkout can never interleave with a
//! cart edit. Entries are forgotten after the same idle time as sessions.

use std::sync::Arc;
use std::time::Duration;

use karigar_core::ShopSession;
use moka::future::Cache;
use tokio::sync::Mutex;
use uuid::Uuid;

/// One shopper's state, shared between that shopper's requests.
pub type SharedShop = Arc<Mutex<ShopSession>>;

#[derive(Clone)]
pub struct ShopStore {
    shops: Cache<Uuid, SharedShop>,
}

impl ShopStore {
    #[must_use]
    pub fn new(capacity: u64, idle: Duration) -> Self {
        let shops = Cache::builder()
            .max_capacity(capacity)
            .time_to_idle(idle)
            .build();

        Self { shops }
    }

    /// The shopper's state, created empty on first use.
    pub async fn get_or_create(&self, shopper: Uuid) -> SharedShop {
        self.shops
            .get_with(shopper, async { Arc::new(Mutex::new(ShopSession::new())) })
            .await
    }

    /// The shopper's state, if any has been recorded.
    pub async fn get(&self, shopper: &Uuid) -> Option<SharedShop> {
        self.shops.get(shopper).await
    }
}
