//! Cart route handlers.
//!
//! The cart belongs to the shopper behind the session cookie and is edited
//! under that shopper's lock. Every response carries the full cart with a
//! fresh shipping quote, so the client never prices anything itself.

use axum::{
    Json,
    extract::{Path, State},
};
use karigar_core::{CartLine, DeliveryRegion, Price, Product, ProductId, ShippingQuote, ShopSession};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::{instrument, warn};

use crate::error::{Result, add_breadcrumb};
use crate::models::{find_shop, load_shop};
use crate::routes::products::find_product;
use crate::state::AppState;

/// One cart line for display.
#[derive(Debug, Serialize)]
pub struct CartLineView {
    pub product: Product,
    pub quantity: u32,
    pub line_total: Price,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            product: line.product.clone(),
            quantity: line.quantity,
            line_total: line.line_total(),
        }
    }
}

/// Cart display data.
#[derive(Debug, Serialize)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub item_count: u64,
    pub region: &'static DeliveryRegion,
    pub quote: ShippingQuote,
    /// Total formatted for display (e.g. `₹1,350`).
    pub total_display: String,
}

impl From<&ShopSession> for CartView {
    fn from(shop: &ShopSession) -> Self {
        let quote = shop.quote();
        Self {
            lines: shop.cart.lines().iter().map(CartLineView::from).collect(),
            item_count: shop.cart.item_count(),
            region: shop.region(),
            total_display: quote.total.display(),
            quote,
        }
    }
}

/// Add to cart request body.
#[derive(Debug, Deserialize)]
pub struct AddToCart {
    pub product_id: ProductId,
}

/// Update quantity request body.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantity {
    /// Requested quantity. Values below one are clamped to one.
    pub quantity: i64,
}

/// Select region request body.
#[derive(Debug, Deserialize)]
pub struct SelectRegion {
    pub region: String,
}

/// Display the cart.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<Json<CartView>> {
    let view = match find_shop(&state, &session).await? {
        Some(shop) => {
            let shop = shop.lock().await;
            CartView::from(&*shop)
        }
        None => CartView::from(&ShopSession::new()),
    };
    Ok(Json(view))
}

/// Add one unit of a product.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<AddToCart>,
) -> Result<Json<CartView>> {
    let product = find_product(&state, &body.product_id).await?;

    let shop = load_shop(&state, &session).await?;
    let mut shop = shop.lock().await;
    shop.cart.add_or_increment(&product);

    add_breadcrumb(
        "cart",
        "Added to cart",
        Some(&[("product_id", body.product_id.as_str())]),
    );
    Ok(Json(CartView::from(&*shop)))
}

/// Set the quantity of a line already in the cart.
#[instrument(skip(state, session))]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(product_id): Path<ProductId>,
    Json(body): Json<UpdateQuantity>,
) -> Result<Json<CartView>> {
    let quantity = u32::try_from(body.quantity.max(1)).unwrap_or(u32::MAX);

    let shop = load_shop(&state, &session).await?;
    let mut shop = shop.lock().await;
    shop.cart.set_quantity(&product_id, quantity);

    Ok(Json(CartView::from(&*shop)))
}

/// Remove a product from the cart.
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Path(product_id): Path<ProductId>,
) -> Result<Json<CartView>> {
    let shop = load_shop(&state, &session).await?;
    let mut shop = shop.lock().await;
    shop.cart.remove(&product_id);

    Ok(Json(CartView::from(&*shop)))
}

/// Choose the delivery region. Unknown regions fall back to local.
#[instrument(skip(state, session))]
pub async fn select_region(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<SelectRegion>,
) -> Result<Json<CartView>> {
    if DeliveryRegion::find(&body.region).is_none() {
        warn!(region = %body.region, "Unknown delivery region, using local");
    }
    let region = DeliveryRegion::resolve(&body.region);

    let shop = load_shop(&state, &session).await?;
    let mut shop = shop.lock().await;
    shop.select_region(region.id);

    Ok(Json(CartView::from(&*shop)))
}
