//! The cart aggregator.
//!
//! A cart holds at most one line per product. Lines keep the order in which
//! products were first added, and a line's quantity never drops below one;
//! taking a product out of the cart is always an explicit [`Cart::remove`].

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::{Price, ProductId};

/// One product plus its selected quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Price of the line (unit price times quantity). Saturates at the
    /// largest representable amount.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price * self.quantity
    }

    /// Shipping weight of the line in grams.
    #[must_use]
    pub fn weight_grams(&self) -> u64 {
        u64::from(self.product.effective_weight_grams()) * u64::from(self.quantity)
    }
}

/// Insertion-ordered collection of cart lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line for the product, or appends a new line
    /// with quantity 1.
    pub fn add_or_increment(&mut self, product: &Product) {
        if let Some(line) = self.line_mut(&product.id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine {
                product: product.clone(),
                quantity: 1,
            });
        }
    }

    /// Set the quantity of an existing line.
    ///
    /// Quantities below one are clamped to one. Unknown products are ignored.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        if let Some(line) = self.line_mut(product_id) {
            line.quantity = quantity.max(1);
        }
    }

    /// Remove a product's line, if present.
    pub fn remove(&mut self, product_id: &ProductId) {
        self.lines.retain(|line| &line.product.id != product_id);
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of `price * quantity` over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Total shipping weight, applying the default weight per line.
    #[must_use]
    pub fn total_weight_grams(&self) -> u64 {
        self.lines
            .iter()
            .map(CartLine::weight_grams)
            .fold(0, u64::saturating_add)
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::from(line.quantity))
            .fold(0, u64::saturating_add)
    }

    /// The lines, in first-added order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for a product, if present.
    #[must_use]
    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.product.id == product_id)
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn line_mut(&mut self, product_id: &ProductId) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| &line.product.id == product_id)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::types::SellerId;

    pub(crate) fn product(id: &str, price: i64, weight_grams: Option<u32>) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            description: String::new(),
            price: Price::rupees(price),
            category: "crafts".to_string(),
            seller_id: SellerId::new("s1"),
            seller_name: "Seller".to_string(),
            images: Vec::new(),
            tags: Vec::new(),
            rating: 0.0,
            reviews: 0,
            weight_grams,
            story: None,
        }
    }

    #[test]
    fn test_repeated_adds_accumulate_on_one_line() {
        let vase = product("1", 1250, None);
        let mut cart = Cart::new();
        for _ in 0..7 {
            cart.add_or_increment(&vase);
        }

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.line(&vase.id).map(|l| l.quantity), Some(7));
        assert_eq!(cart.item_count(), 7);
    }

    #[test]
    fn test_lines_keep_first_added_order() {
        let a = product("a", 10, None);
        let b = product("b", 20, None);
        let mut cart = Cart::new();
        cart.add_or_increment(&a);
        cart.add_or_increment(&b);
        cart.add_or_increment(&a);

        let order: Vec<&str> = cart.lines().iter().map(|l| l.product.id.as_str()).collect();
        assert_eq!(order, ["a", "b"]);
    }

    #[test]
    fn test_subtotal_is_independent_of_add_order() {
        let products = [
            product("a", 1250, None),
            product("b", 8500, None),
            product("c", 750, None),
        ];
        let adds = [0, 1, 2, 0, 2, 2];

        let mut forward = Cart::new();
        for &i in &adds {
            forward.add_or_increment(&products[i]);
        }

        let mut reversed = Cart::new();
        for &i in adds.iter().rev() {
            reversed.add_or_increment(&products[i]);
        }

        assert_eq!(forward.subtotal(), Price::rupees(2 * 1250 + 8500 + 3 * 750));
        assert_eq!(forward.subtotal(), reversed.subtotal());
    }

    #[test]
    fn test_set_quantity_clamps_to_one() {
        let vase = product("1", 1250, None);
        let mut cart = Cart::new();
        cart.add_or_increment(&vase);
        cart.set_quantity(&vase.id, 4);
        assert_eq!(cart.line(&vase.id).map(|l| l.quantity), Some(4));

        cart.set_quantity(&vase.id, 0);
        assert_eq!(cart.line(&vase.id).map(|l| l.quantity), Some(1));
    }

    #[test]
    fn test_set_quantity_on_missing_product_is_noop() {
        let mut cart = Cart::new();
        cart.set_quantity(&ProductId::new("ghost"), 3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_then_add_restarts_at_one() {
        let vase = product("1", 1250, None);
        let mut cart = Cart::new();
        cart.add_or_increment(&vase);
        cart.add_or_increment(&vase);
        cart.remove(&vase.id);
        assert!(cart.is_empty());

        cart.add_or_increment(&vase);
        assert_eq!(cart.line(&vase.id).map(|l| l.quantity), Some(1));
    }

    #[test]
    fn test_remove_missing_product_is_noop() {
        let vase = product("1", 1250, None);
        let mut cart = Cart::new();
        cart.add_or_increment(&vase);
        cart.remove(&ProductId::new("ghost"));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_default_weight_applies_per_line() {
        let light = product("light", 100, Some(200));
        let unknown = product("unknown", 100, None);
        let mut cart = Cart::new();
        cart.add_or_increment(&light);
        cart.add_or_increment(&unknown);
        cart.add_or_increment(&unknown);

        assert_eq!(cart.total_weight_grams(), 200 + 2 * 500);
    }

    #[test]
    fn test_huge_amounts_saturate_instead_of_overflowing() {
        let mut costly = product("max", 0, Some(u32::MAX));
        costly.price = Price::new(rust_decimal::Decimal::MAX);
        let heavy = product("heavy", 1, Some(u32::MAX));

        let mut cart = Cart::new();
        cart.add_or_increment(&costly);
        cart.add_or_increment(&costly);
        cart.add_or_increment(&heavy);
        cart.set_quantity(&costly.id, u32::MAX);
        cart.set_quantity(&heavy.id, u32::MAX);

        assert_eq!(cart.subtotal(), Price::MAX);
        assert_eq!(cart.total_weight_grams(), u64::MAX);
        assert_eq!(cart.item_count(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_empty_cart_subtotal_is_zero() {
        assert_eq!(Cart::new().subtotal(), Price::ZERO);
    }
}
