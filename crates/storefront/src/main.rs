//! Karigar Storefront - JSON API for the handmade marketplace.
//!
//! This binary serves the storefront API on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework serving JSON
//! - Per-shopper cart, wishlist and orders in an in-memory session store
//! - Shared in-memory catalog, optionally seeded with demo listings
//! - Hosted Gemini models for listing enrichment, room analysis, images and
//!   translation; every AI feature degrades gracefully without an API key

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use karigar_core::Catalog;
use karigar_storefront::config::StorefrontConfig;
use karigar_storefront::gemini::GeminiClient;
use karigar_storefront::services::{ListingAssistant, UnavailableAssistant};
use karigar_storefront::state::AppState;
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            sample_rate: config.sentry_sample_rate,
            traces_sample_rate: config.sentry_traces_sample_rate,
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

/// Pick the Gemini-backed assistant when configured, otherwise the
/// assistant that reports every feature as unavailable.
fn build_assistant(config: &StorefrontConfig) -> Arc<dyn ListingAssistant> {
    let Some(gemini) = config.gemini.as_ref() else {
        tracing::warn!("GEMINI_API_KEY not set, AI features disabled");
        return Arc::new(UnavailableAssistant);
    };

    match GeminiClient::new(gemini) {
        Ok(client) => {
            tracing::info!(text_model = %gemini.text_model, "Gemini client initialized");
            Arc::new(client)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to build Gemini client, AI features disabled");
            Arc::new(UnavailableAssistant)
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "karigar_storefront=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    let catalog = if config.seed_catalog {
        Catalog::demo()
    } else {
        Catalog::default()
    };
    tracing::info!(products = catalog.len(), "Catalog loaded");

    let assistant = build_assistant(&config);
    let addr = config.socket_addr();
    let state = AppState::new(config, catalog, assistant);

    let app = karigar_storefront::app(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("storefront listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
