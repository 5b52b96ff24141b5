//! Per-shopper state.
//!
//! A [`ShopSession`] owns everything one shopper mutates: the cart, the
//! wishlist, placed orders and the chosen delivery region. Callers that share
//! one between requests must serialize access to it; a checkout is only
//! atomic against other mutations of the same value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::order::{CheckoutDetails, CheckoutError, Order, place_order};
use crate::shipping::{DeliveryRegion, RegionId, ShippingQuote};
use crate::wishlist::Wishlist;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopSession {
    pub cart: Cart,
    pub wishlist: Wishlist,
    /// Placed orders, most recent first.
    orders: Vec<Order>,
    region: RegionId,
}

impl ShopSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn region_id(&self) -> RegionId {
        self.region
    }

    #[must_use]
    pub fn region(&self) -> &'static DeliveryRegion {
        DeliveryRegion::get(self.region)
    }

    pub fn select_region(&mut self, region: RegionId) {
        self.region = region;
    }

    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Price the current cart for the selected region.
    #[must_use]
    pub fn quote(&self) -> ShippingQuote {
        ShippingQuote::compute(&self.cart, self.region())
    }

    /// Place an order for the current cart.
    ///
    /// # Errors
    ///
    /// See [`place_order`]. The session is unchanged on error.
    pub fn checkout(
        &mut self,
        details: &CheckoutDetails,
        placed_at: DateTime<Utc>,
    ) -> Result<Order, CheckoutError> {
        let region = DeliveryRegion::get(self.region);
        place_order(&mut self.cart, &mut self.orders, region, details, placed_at)
    }
}
