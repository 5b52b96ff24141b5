//! Checkout validation and the order builder.
//!
//! [`place_order`] is the only way to create an [`Order`]. It validates the
//! checkout details, snapshots the cart, prepends the order to the session's
//! history and clears the cart in a single call. On any error nothing is
//! touched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::{Cart, CartLine};
use crate::shipping::{DeliveryRegion, RegionId, ShippingQuote};
use crate::types::{OrderId, OrderStatus, PaymentMethod, Price};

/// Where an order is delivered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    #[serde(default)]
    pub recipient_name: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub pincode: String,
}

/// Address fields that must be filled in before checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressField {
    RecipientName,
    Street,
}

impl AddressField {
    /// Field name as used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RecipientName => "recipient_name",
            Self::Street => "street",
        }
    }
}

impl std::fmt::Display for AddressField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checkout rejected because required address fields are blank.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("missing required fields: {}", join_fields(.missing))]
pub struct ValidationError {
    pub missing: Vec<AddressField>,
}

fn join_fields(fields: &[AddressField]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ShippingAddress {
    /// Check that the recipient name and street are non-blank.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every blank required field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut missing = Vec::new();
        if self.recipient_name.trim().is_empty() {
            missing.push(AddressField::RecipientName);
        }
        if self.street.trim().is_empty() {
            missing.push(AddressField::Street);
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }

    /// The non-empty parts of street, city and pincode joined by `", "`.
    #[must_use]
    pub fn resolved(&self) -> String {
        [&self.street, &self.city, &self.pincode]
            .into_iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Everything the buyer enters on the checkout form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutDetails {
    pub address: ShippingAddress,
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

/// Errors from [`place_order`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("cart is empty")]
    EmptyCart,
}

/// Immutable snapshot of a placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<CartLine>,
    pub subtotal: Price,
    pub shipping_fee: Price,
    pub total: Price,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
    pub recipient: String,
    pub address: String,
    pub region: RegionId,
    pub payment_method: PaymentMethod,
}

impl Order {
    /// Total number of units in the order.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }
}

/// Turn the cart into an order.
///
/// On success the order is prepended to `orders`, the cart is cleared and a
/// copy of the stored order is returned. The fee is computed from the cart
/// before it is cleared.
///
/// # Errors
///
/// Returns [`CheckoutError::Validation`] when the recipient name or street is
/// blank, and [`CheckoutError::EmptyCart`] when there is nothing to order.
/// Neither the cart nor `orders` is modified on error.
pub fn place_order(
    cart: &mut Cart,
    orders: &mut Vec<Order>,
    region: &DeliveryRegion,
    details: &CheckoutDetails,
    placed_at: DateTime<Utc>,
) -> Result<Order, CheckoutError> {
    details.address.validate()?;
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let quote = ShippingQuote::compute(cart, region);
    let order = Order {
        id: OrderId::generate(),
        items: cart.lines().to_vec(),
        subtotal: quote.subtotal,
        shipping_fee: quote.shipping_fee,
        total: quote.total,
        status: OrderStatus::Packed,
        placed_at,
        recipient: details.address.recipient_name.trim().to_string(),
        address: details.address.resolved(),
        region: region.id,
        payment_method: details.payment_method,
    };

    orders.insert(0, order.clone());
    cart.clear();

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::tests::product;

    fn details(name: &str, street: &str) -> CheckoutDetails {
        CheckoutDetails {
            address: ShippingAddress {
                recipient_name: name.to_string(),
                street: street.to_string(),
                city: "Jaipur".to_string(),
                pincode: "302001".to_string(),
            },
            payment_method: PaymentMethod::Upi,
        }
    }

    fn local() -> &'static DeliveryRegion {
        DeliveryRegion::get(RegionId::Local)
    }

    fn vase_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_or_increment(&product("1", 1250, Some(1200)));
        cart
    }

    #[test]
    fn test_place_order_snapshots_and_clears() {
        let mut cart = vase_cart();
        let mut orders = Vec::new();
        let now = Utc::now();

        let order = place_order(&mut cart, &mut orders, local(), &details("Asha", "12 MG Road"), now)
            .expect("order placed");

        assert!(cart.is_empty());
        assert_eq!(orders.len(), 1);
        assert_eq!(orders.first(), Some(&order));
        assert_eq!(order.subtotal, Price::rupees(1250));
        assert_eq!(order.shipping_fee, Price::rupees(100));
        assert_eq!(order.total, Price::rupees(1350));
        assert_eq!(order.status, OrderStatus::Packed);
        assert_eq!(order.placed_at, now);
        assert_eq!(order.recipient, "Asha");
        assert_eq!(order.address, "12 MG Road, Jaipur, 302001");
        assert_eq!(order.payment_method, PaymentMethod::Upi);
        assert_eq!(order.item_count(), 1);
    }

    #[test]
    fn test_missing_fields_reported_and_nothing_mutated() {
        let mut cart = vase_cart();
        let mut orders = Vec::new();

        let err = place_order(&mut cart, &mut orders, local(), &details("  ", ""), Utc::now())
            .expect_err("validation fails");

        assert_eq!(
            err,
            CheckoutError::Validation(ValidationError {
                missing: vec![AddressField::RecipientName, AddressField::Street],
            })
        );
        assert_eq!(cart, vase_cart());
        assert!(orders.is_empty());
    }

    #[test]
    fn test_empty_cart_is_rejected() {
        let mut cart = Cart::new();
        let mut orders = Vec::new();
        let err = place_order(&mut cart, &mut orders, local(), &details("Asha", "MG Road"), Utc::now())
            .expect_err("empty cart");
        assert_eq!(err, CheckoutError::EmptyCart);
        assert!(orders.is_empty());
    }

    #[test]
    fn test_orders_are_most_recent_first_with_unique_ids() {
        let mut orders = Vec::new();
        let mut first_cart = vase_cart();
        let first = place_order(&mut first_cart, &mut orders, local(), &details("A", "X"), Utc::now())
            .expect("first");

        let mut second_cart = vase_cart();
        let second = place_order(&mut second_cart, &mut orders, local(), &details("B", "Y"), Utc::now())
            .expect("second");

        assert_ne!(first.id, second.id);
        let ids: Vec<OrderId> = orders.iter().map(|o| o.id).collect();
        assert_eq!(ids, [second.id, first.id]);
    }

    #[test]
    fn test_order_is_a_deep_copy_of_the_cart() {
        let mut cart = vase_cart();
        let mut orders = Vec::new();
        place_order(&mut cart, &mut orders, local(), &details("Asha", "MG Road"), Utc::now())
            .expect("order placed");

        // Reusing the cart afterwards must not leak into the stored order.
        let vase = product("1", 1250, Some(1200));
        cart.add_or_increment(&vase);
        cart.set_quantity(&vase.id, 9);

        let stored = orders.first().expect("stored order");
        assert_eq!(stored.items.len(), 1);
        assert_eq!(stored.items.first().map(|l| l.quantity), Some(1));
        assert_eq!(stored.total, Price::rupees(1350));
    }

    #[test]
    fn test_resolved_address_skips_blank_parts() {
        let address = ShippingAddress {
            recipient_name: "Asha".to_string(),
            street: "12 MG Road".to_string(),
            city: String::new(),
            pincode: "302001".to_string(),
        };
        assert_eq!(address.resolved(), "12 MG Road, 302001");
    }

    #[test]
    fn test_validation_error_message() {
        let err = ValidationError {
            missing: vec![AddressField::Street],
        };
        assert_eq!(err.to_string(), "missing required fields: street");
    }
}
