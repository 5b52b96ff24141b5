//! Application state shared across handlers.

use std::sync::Arc;

use karigar_core::Catalog;
use tokio::sync::RwLock;

use crate::config::StorefrontConfig;
use crate::middleware::{MAX_SESSIONS, SESSION_IDLE_TIMEOUT};
use crate::services::{ListingAssistant, ShopStore, Translator};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The catalog is shared by every
/// shopper; each shopper's own state sits in [`ShopStore`] under a lock of
/// its own.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: RwLock<Catalog>,
    assistant: Arc<dyn ListingAssistant>,
    translator: Translator,
    shops: ShopStore,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(
        config: StorefrontConfig,
        catalog: Catalog,
        assistant: Arc<dyn ListingAssistant>,
    ) -> Self {
        let translator = Translator::new(Arc::clone(&assistant));

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: RwLock::new(catalog),
                assistant,
                translator,
                shops: ShopStore::new(MAX_SESSIONS, SESSION_IDLE_TIMEOUT),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// The shared product catalog.
    #[must_use]
    pub fn catalog(&self) -> &RwLock<Catalog> {
        &self.inner.catalog
    }

    /// The AI listing assistant.
    #[must_use]
    pub fn assistant(&self) -> &dyn ListingAssistant {
        self.inner.assistant.as_ref()
    }

    /// The cached translator.
    #[must_use]
    pub fn translator(&self) -> &Translator {
        &self.inner.translator
    }

    /// Per-shopper carts, wishlists and orders.
    #[must_use]
    pub fn shops(&self) -> &ShopStore {
        &self.inner.shops
    }
}
