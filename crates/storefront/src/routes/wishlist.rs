//! Wishlist route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use karigar_core::{Product, ProductId, Wishlist};
use serde::Serialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::models::{find_shop, load_shop};
use crate::routes::products::find_product;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct WishlistView {
    pub items: Vec<Product>,
    pub count: usize,
}

impl From<&Wishlist> for WishlistView {
    fn from(wishlist: &Wishlist) -> Self {
        Self {
            items: wishlist.items().to_vec(),
            count: wishlist.len(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    /// Whether the product is saved after the toggle.
    pub saved: bool,
    pub wishlist: WishlistView,
}

#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<WishlistView>> {
    let view = match find_shop(&state, &session).await? {
        Some(shop) => {
            let shop = shop.lock().await;
            WishlistView::from(&shop.wishlist)
        }
        None => WishlistView::from(&Wishlist::default()),
    };
    Ok(Json(view))
}

/// Save or unsave a product.
#[instrument(skip(state, session))]
pub async fn toggle(
    State(state): State<AppState>,
    session: Session,
    Path(product_id): Path<ProductId>,
) -> Result<Json<ToggleResponse>> {
    let product = find_product(&state, &product_id).await?;

    let shop = load_shop(&state, &session).await?;
    let mut shop = shop.lock().await;
    let saved = shop.wishlist.toggle(&product);

    Ok(Json(ToggleResponse {
        saved,
        wishlist: WishlistView::from(&shop.wishlist),
    }))
}
