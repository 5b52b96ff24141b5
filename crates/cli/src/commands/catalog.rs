//! Catalog and region listings.

use karigar_core::{Catalog, DeliveryRegion};
use tracing::info;

/// Log every demo product matching the query and category.
pub fn list(query: &str, category: Option<&str>) {
    let catalog = Catalog::demo();
    let products = catalog.search(query, category);

    info!(count = products.len(), "Matching products");
    for product in products {
        info!(
            id = %product.id,
            category = %product.category,
            price = %product.price,
            weight_grams = product.effective_weight_grams(),
            seller = %product.seller_name,
            "{}",
            product.name
        );
    }
}

/// Log the delivery regions with their rates.
pub fn regions() {
    for region in DeliveryRegion::all() {
        info!(
            id = %region.id,
            base = %region.base,
            multiplier = %region.multiplier,
            "{}",
            region.name
        );
    }
}
