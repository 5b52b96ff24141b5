//! Integration tests for Karigar.
//!
//! Each test spawns its own storefront on an ephemeral port and drives it
//! over HTTP with a cookie-keeping client, so session handling is exercised
//! the way a browser would.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p karigar-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use karigar_core::Catalog;
use karigar_storefront::config::StorefrontConfig;
use karigar_storefront::services::{ListingAssistant, UnavailableAssistant};
use karigar_storefront::state::AppState;
use reqwest::Client;
use tokio::task::JoinHandle;

/// A storefront running in the background for the duration of a test.
pub struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

/// Configuration for a local, non-HTTPS test server with AI disabled.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        base_url: "http://127.0.0.1".to_string(),
        seed_catalog: true,
        gemini: None,
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 0.0,
    }
}

impl TestServer {
    /// Start a storefront with the demo catalog and no AI model.
    ///
    /// # Errors
    ///
    /// Returns an error if no local port can be bound.
    pub async fn start() -> std::io::Result<Self> {
        Self::with_assistant(Arc::new(UnavailableAssistant)).await
    }

    /// Start a storefront with the demo catalog and the given assistant.
    ///
    /// # Errors
    ///
    /// Returns an error if no local port can be bound.
    pub async fn with_assistant(assistant: Arc<dyn ListingAssistant>) -> std::io::Result<Self> {
        let state = AppState::new(test_config(), Catalog::demo(), assistant);
        let app = karigar_storefront::app(state);

        let listener = tokio::net::TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(error = %e, "Test server stopped");
            }
        });

        Ok(Self { addr, handle })
    }

    /// Absolute URL for a path on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}

/// A fresh client with its own cookie jar, i.e. its own session.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn client() -> reqwest::Result<Client> {
    Client::builder().cookie_store(true).build()
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

