//! Checkout and order history.

use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use karigar_core::{CheckoutDetails, Order};
use serde::Serialize;
use tower_sessions::Session;
use tracing::{info, instrument};

use crate::error::{Result, add_breadcrumb};
use crate::models::{find_shop, load_shop};
use crate::state::AppState;

/// An order as shown to the shopper.
#[derive(Debug, Serialize)]
pub struct OrderView {
    /// Human-facing order number (`ORD-...`).
    pub order_number: String,
    pub status_label: &'static str,
    pub total_display: String,
    #[serde(flatten)]
    pub order: Order,
}

impl From<Order> for OrderView {
    fn from(order: Order) -> Self {
        Self {
            order_number: order.id.to_string(),
            status_label: order.status.label(),
            total_display: order.total.display(),
            order,
        }
    }
}

/// Place an order for the session's cart.
///
/// Runs under the shopper's lock, so no other request on the session sees
/// the cart between the order being placed and the cart being cleared. On a
/// validation error or an empty cart nothing changes.
#[instrument(skip(state, session, details), fields(payment_method = %details.payment_method))]
pub async fn checkout(
    State(state): State<AppState>,
    session: Session,
    Json(details): Json<CheckoutDetails>,
) -> Result<(StatusCode, Json<OrderView>)> {
    let shop = load_shop(&state, &session).await?;
    let order = shop.lock().await.checkout(&details, Utc::now())?;

    info!(
        order_id = %order.id,
        region = %order.region,
        total = %order.total.amount(),
        "Order placed"
    );
    add_breadcrumb("checkout", "Order placed", None);

    Ok((StatusCode::CREATED, Json(OrderView::from(order))))
}

/// Orders placed in this session, most recent first.
#[instrument(skip(state, session))]
pub async fn orders(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<Vec<OrderView>>> {
    let Some(shop) = find_shop(&state, &session).await? else {
        return Ok(Json(Vec::new()));
    };
    let orders = shop
        .lock()
        .await
        .orders()
        .iter()
        .cloned()
        .map(OrderView::from)
        .collect();
    Ok(Json(orders))
}
