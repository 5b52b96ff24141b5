//! Storefront models.
//!
//! Domain types come from `karigar_core`; this module holds what the
//! storefront adds around them.

pub mod session;

pub use session::{find_shop, load_shop};
