//! Offline shipping quotes for a cart described in YAML.
//!
//! ```yaml
//! region: national
//! items:
//!   - product_id: "1"
//!     quantity: 2
//!   - product_id: "3"
//! ```
//!
//! Products are resolved against the demo catalog.

use std::path::Path;

use karigar_core::{Cart, Catalog, DeliveryRegion, ProductId, RegionId, ShippingQuote};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

/// A cart file.
#[derive(Debug, Deserialize)]
pub struct CartFile {
    #[serde(default)]
    pub region: Option<RegionId>,
    pub items: Vec<CartItem>,
}

/// One line of a cart file.
#[derive(Debug, Deserialize)]
pub struct CartItem {
    pub product_id: ProductId,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

const fn default_quantity() -> u32 {
    1
}

/// Errors building a quote.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid cart file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error(transparent)]
    Region(#[from] karigar_core::shipping::UnknownRegion),

    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),
}

/// Build a cart from a parsed file, resolving products in `catalog`.
///
/// # Errors
///
/// Returns [`QuoteError::UnknownProduct`] if an item is not in the catalog.
pub fn build_cart(file: &CartFile, catalog: &Catalog) -> Result<Cart, QuoteError> {
    let mut cart = Cart::new();
    for item in &file.items {
        let product = catalog
            .get(&item.product_id)
            .ok_or_else(|| QuoteError::UnknownProduct(item.product_id.clone()))?;
        cart.add_or_increment(product);
        cart.set_quantity(&product.id, item.quantity);
    }
    Ok(cart)
}

/// Pick the region: the command-line flag wins over the file, and the
/// default region applies when neither names one.
///
/// # Errors
///
/// Returns [`QuoteError::Region`] if the flag names an unknown region.
pub fn pick_region(
    flag: Option<&str>,
    file: Option<RegionId>,
) -> Result<&'static DeliveryRegion, QuoteError> {
    let id = match flag {
        Some(name) => name.parse()?,
        None => file.unwrap_or_default(),
    };
    Ok(DeliveryRegion::get(id))
}

/// Quote a cart file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, the region is
/// unknown, or an item is not in the demo catalog.
pub async fn run(file_path: &str, region: Option<&str>) -> Result<(), QuoteError> {
    let path = Path::new(file_path);
    if !path.exists() {
        return Err(QuoteError::NotFound(file_path.to_string()));
    }

    info!(path = %file_path, "Loading cart file");
    let content = tokio::fs::read_to_string(path).await?;
    let file: CartFile = serde_yaml::from_str(&content)?;

    let region = pick_region(region, file.region)?;
    let cart = build_cart(&file, &Catalog::demo())?;
    let quote = ShippingQuote::compute(&cart, region);

    for line in cart.lines() {
        info!(
            product = %line.product.name,
            quantity = line.quantity,
            line_total = %line.line_total(),
            "Line"
        );
    }
    info!(
        region = region.name,
        weight_grams = quote.weight_grams,
        weight_units = quote.weight_units,
        subtotal = %quote.subtotal,
        shipping = %quote.shipping_fee,
        total = %quote.total,
        "Quote"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use karigar_core::Price;

    use super::*;

    fn parse(yaml: &str) -> CartFile {
        serde_yaml::from_str(yaml).expect("valid cart file")
    }

    #[test]
    fn test_cart_file_quote() {
        let file = parse(
            r#"
region: local
items:
  - product_id: "1"
"#,
        );
        let region = pick_region(None, file.region).expect("region");
        let cart = build_cart(&file, &Catalog::demo()).expect("cart");
        let quote = ShippingQuote::compute(&cart, region);

        assert_eq!(quote.subtotal, Price::rupees(1250));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_quantity_defaults_to_one() {
        let file = parse("items:\n  - product_id: \"2\"\n");
        assert_eq!(file.items.first().map(|i| i.quantity), Some(1));
        assert!(file.region.is_none());
    }

    #[test]
    fn test_flag_overrides_file_region() {
        let region = pick_region(Some("intl"), Some(RegionId::National)).expect("region");
        assert_eq!(region.id, RegionId::Intl);

        let region = pick_region(None, None).expect("region");
        assert_eq!(region.id, RegionId::Local);
    }

    #[test]
    fn test_unknown_region_flag_is_an_error() {
        assert!(matches!(
            pick_region(Some("mars"), None),
            Err(QuoteError::Region(_))
        ));
    }

    #[test]
    fn test_unknown_product_is_an_error() {
        let file = parse("items:\n  - product_id: missing\n");
        assert!(matches!(
            build_cart(&file, &Catalog::demo()),
            Err(QuoteError::UnknownProduct(_))
        ));
    }
}
