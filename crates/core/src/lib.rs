//! Karigar Core - Cart, shipping and order engine.
//!
//! This crate holds the pricing and derived-state rules of the Karigar
//! handmade marketplace. It is used by:
//! - `storefront` - JSON API serving buyers and sellers
//! - `cli` - Offline shipping quotes and catalog listing
//!
//! # Architecture
//!
//! The core crate contains only types and pure state transitions - no I/O,
//! no HTTP clients, no clocks. Callers pass timestamps and identifiers in, so
//! every operation is deterministic and easy to test.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices and order status
//! - [`catalog`] - Products, categories and the in-memory catalog store
//! - [`cart`] - The cart aggregator
//! - [`shipping`] - Delivery regions and the weight-based fee calculator
//! - [`order`] - Checkout validation and the order builder
//! - [`wishlist`] - Toggle-set of saved products
//! - [`session`] - Session-scoped state tying the pieces together
//! - [`enrichment`] - Contracts exchanged with the AI listing assistant

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod enrichment;
pub mod order;
pub mod session;
pub mod shipping;
pub mod types;
pub mod wishlist;

pub use cart::{Cart, CartLine};
pub use catalog::{CATEGORIES, Catalog, Category, Product};
pub use enrichment::{ListingDraft, ListingError, ListingSeller, RoomAnalysis, SalesInsights};
pub use order::{
    AddressField, CheckoutDetails, CheckoutError, Order, ShippingAddress, ValidationError,
    place_order,
};
pub use session::ShopSession;
pub use shipping::{DeliveryRegion, RegionId, ShippingQuote, shipping_fee};
pub use types::*;
pub use wishlist::Wishlist;
