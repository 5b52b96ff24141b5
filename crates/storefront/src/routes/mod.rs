//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                          - Health check
//!
//! # Catalog
//! GET  /api/products                    - Product listing (?q=, ?category=)
//! GET  /api/products/{id}               - Product detail
//! GET  /api/categories                  - Category list
//! GET  /api/regions                     - Delivery regions
//!
//! # Cart (session scoped)
//! GET    /api/cart                      - Cart with shipping quote
//! POST   /api/cart/items                - Add one unit of a product
//! PUT    /api/cart/items/{id}           - Set quantity (minimum 1)
//! DELETE /api/cart/items/{id}           - Remove a line
//! PUT    /api/cart/region               - Select delivery region
//!
//! # Wishlist (session scoped)
//! GET  /api/wishlist                    - Saved products
//! POST /api/wishlist/{id}               - Toggle a product
//!
//! # Checkout
//! POST /api/checkout                    - Place an order
//! GET  /api/orders                      - Orders placed in this session
//!
//! # Seller tools
//! POST /api/seller/listings/enrich      - Suggest a listing from a description
//! POST /api/seller/listings             - Publish a listing
//! GET  /api/seller/{seller_id}/products - A seller's listings
//! POST /api/seller/insights             - Sales tips
//! POST /api/seller/images/enhance       - Studio-background product photo
//! POST /api/seller/images/generate      - Product photo from a prompt
//!
//! # Buyer tools
//! POST /api/decor/analyze               - Room style and matching products
//! POST /api/translate                   - Translate listing text
//! ```

pub mod cart;
pub mod checkout;
pub mod decor;
pub mod products;
pub mod seller;
pub mod translate;
pub mod wishlist;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/items", post(cart::add))
        .route("/items/{id}", put(cart::update).delete(cart::remove))
        .route("/region", put(cart::select_region))
}

/// Create the wishlist routes router.
pub fn wishlist_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(wishlist::show))
        .route("/{id}", post(wishlist::toggle))
}

/// Create the seller routes router.
pub fn seller_routes() -> Router<AppState> {
    Router::new()
        .route("/listings", post(seller::publish))
        .route("/listings/enrich", post(seller::enrich))
        .route("/insights", post(seller::insights))
        .route("/images/enhance", post(seller::enhance_image))
        .route("/images/generate", post(seller::generate_image))
        .route("/{seller_id}/products", get(seller::inventory))
}

/// Create all API routes for the storefront.
pub fn routes() -> Router<AppState> {
    let api = Router::new()
        .nest("/products", product_routes())
        .route("/categories", get(products::categories))
        .route("/regions", get(products::regions))
        .nest("/cart", cart_routes())
        .nest("/wishlist", wishlist_routes())
        .route("/checkout", post(checkout::checkout))
        .route("/orders", get(checkout::orders))
        .nest("/seller", seller_routes())
        .route("/decor/analyze", post(decor::analyze))
        .route("/translate", post(translate::translate));

    Router::new().nest("/api", api)
}
