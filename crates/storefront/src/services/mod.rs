//! Services behind the route handlers.
//!
//! - [`assistant`] - The AI listing assistant capability and its fallback
//! - [`images`] - Parsing and rendering base64 image payloads
//! - [`shops`] - Per-shopper cart, wishlist and orders behind a lock
//! - [`translation`] - Cached translation with pass-through on failure

pub mod assistant;
pub mod images;
pub mod shops;
pub mod translation;

pub use assistant::{AssistantError, ListingAssistant, MockListingAssistant, UnavailableAssistant};
pub use images::{ImageError, ImagePayload};
pub use shops::{SharedShop, ShopStore};
pub use translation::Translator;
