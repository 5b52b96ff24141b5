//! Catalog browsing: products, categories and delivery regions.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use karigar_core::{CATEGORIES, Category, DeliveryRegion, Product, ProductId};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Product listing query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    /// Free-text search over name, tags and category.
    #[serde(default)]
    pub q: String,
    /// Category id; `all` or absent means every category.
    pub category: Option<String>,
}

/// List products, newest first, filtered by query and category.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ProductsQuery>,
) -> Json<Vec<Product>> {
    let catalog = state.catalog().read().await;
    let products = catalog
        .search(&query.q, query.category.as_deref())
        .into_iter()
        .cloned()
        .collect();

    Json(products)
}

/// Show a single product.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    find_product(&state, &id).await.map(Json)
}

/// Marketplace categories, `all` first.
pub async fn categories() -> Json<&'static [Category]> {
    Json(&CATEGORIES)
}

/// Delivery regions, default first.
pub async fn regions() -> Json<&'static [DeliveryRegion]> {
    Json(DeliveryRegion::all())
}

/// Look up a product the shopper referred to, or 404.
pub(crate) async fn find_product(state: &AppState, id: &ProductId) -> Result<Product> {
    state
        .catalog()
        .read()
        .await
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}
