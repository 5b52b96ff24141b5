//! HTTP middleware stack for the storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, added by the binary)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Session layer (tower-sessions over a bounded moka store)

pub mod request_id;
pub mod session;

pub use request_id::request_id_middleware;
pub use session::{MAX_SESSIONS, MokaSessionStore, SESSION_IDLE_TIMEOUT, create_session_layer};
