//! Session middleware configuration.
//!
//! Session records live in a bounded in-memory store. A record is dropped
//! after [`SESSION_IDLE_TIMEOUT`] without use, or earliest-first once
//! [`MAX_SESSIONS`] records are held.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use tower_sessions::cookie::time::OffsetDateTime;
use tower_sessions::session::{Id, Record};
use tower_sessions::session_store::{self, SessionStore};
use tower_sessions::{Expiry, SessionManagerLayer};

use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "karigar_session";

/// Session expiry time in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Idle time after which a session and its shopper state are forgotten.
pub const SESSION_IDLE_TIMEOUT: Duration =
    Duration::from_secs(SESSION_EXPIRY_SECONDS.unsigned_abs());

/// Upper bound on concurrently held sessions.
pub const MAX_SESSIONS: u64 = 100_000;

/// Session store backed by a bounded `moka` cache.
#[derive(Clone)]
pub struct MokaSessionStore {
    records: Cache<Id, Record>,
}

impl MokaSessionStore {
    #[must_use]
    pub fn new(capacity: u64, idle: Duration) -> Self {
        let records = Cache::builder()
            .max_capacity(capacity)
            .time_to_idle(idle)
            .build();

        Self { records }
    }
}

impl Default for MokaSessionStore {
    fn default() -> Self {
        Self::new(MAX_SESSIONS, SESSION_IDLE_TIMEOUT)
    }
}

impl fmt::Debug for MokaSessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MokaSessionStore")
            .field("entries", &self.records.entry_count())
            .finish()
    }
}

#[async_trait]
impl SessionStore for MokaSessionStore {
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        while self.records.contains_key(&record.id) {
            record.id = Id::default();
        }
        self.records.insert(record.id, record.clone()).await;
        Ok(())
    }

    async fn save(&self, record: &Record) -> session_store::Result<()> {
        self.records.insert(record.id, record.clone()).await;
        Ok(())
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        Ok(self
            .records
            .get(session_id)
            .await
            .filter(|record| record.expiry_date > OffsetDateTime::now_utc()))
    }

    async fn delete(&self, session_id: &Id) -> session_store::Result<()> {
        self.records.invalidate(session_id).await;
        Ok(())
    }
}

/// Create the session layer over a bounded in-memory store.
#[must_use]
pub fn create_session_layer(config: &StorefrontConfig) -> SessionManagerLayer<MokaSessionStore> {
    SessionManagerLayer::new(MokaSessionStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn record(expires_in: tower_sessions::cookie::time::Duration) -> Record {
        Record {
            id: Id::default(),
            data: HashMap::new(),
            expiry_date: OffsetDateTime::now_utc() + expires_in,
        }
    }

    #[tokio::test]
    async fn test_records_round_trip_and_delete() {
        let store = MokaSessionStore::default();
        let mut rec = record(tower_sessions::cookie::time::Duration::hours(1));
        store.create(&mut rec).await.expect("create");

        let loaded = store.load(&rec.id).await.expect("load");
        assert_eq!(loaded.map(|r| r.id), Some(rec.id));

        store.delete(&rec.id).await.expect("delete");
        assert!(store.load(&rec.id).await.expect("load").is_none());
    }

    #[tokio::test]
    async fn test_expired_records_are_not_loaded() {
        let store = MokaSessionStore::default();
        let rec = record(tower_sessions::cookie::time::Duration::seconds(-1));
        store.save(&rec).await.expect("save");

        assert!(store.load(&rec.id).await.expect("load").is_none());
    }

    #[tokio::test]
    async fn test_store_is_bounded() {
        let store = MokaSessionStore::new(10, SESSION_IDLE_TIMEOUT);
        for _ in 0..100 {
            let mut rec = record(tower_sessions::cookie::time::Duration::hours(1));
            store.create(&mut rec).await.expect("create");
        }
        store.records.run_pending_tasks().await;

        assert!(store.records.entry_count() <= 10);
    }
}
