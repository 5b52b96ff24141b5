//! Delivery regions and the weight-based shipping fee.
//!
//! The fee is a pure function of the cart and the region:
//!
//! ```text
//! units = ceil(total_grams / 500)
//! fee   = round_half_up(base + units * 20 * multiplier)
//! ```
//!
//! An empty cart ships for free in every region.

use core::fmt;
use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::Cart;
use crate::types::Price;

/// Grams covered by one weight unit. Partial units round up.
pub const GRAMS_PER_UNIT: u64 = 500;

/// Fee charged per weight unit before the region multiplier.
pub const RATE_PER_UNIT: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Identifier of a delivery region tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RegionId {
    #[default]
    Local,
    National,
    Intl,
}

impl RegionId {
    /// The wire name of the region.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::National => "national",
            Self::Intl => "intl",
        }
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a region id is not one of the configured tiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown delivery region: {0}")]
pub struct UnknownRegion(pub String);

impl FromStr for RegionId {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Self::Local),
            "national" => Ok(Self::National),
            "intl" => Ok(Self::Intl),
            other => Err(UnknownRegion(other.to_string())),
        }
    }
}

/// A shipping-cost bracket: a flat base fee and a per-weight multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeliveryRegion {
    pub id: RegionId,
    pub name: &'static str,
    pub base: Decimal,
    pub multiplier: Decimal,
}

/// The configured region tiers. The first entry is the default.
pub const REGIONS: [DeliveryRegion; 3] = [
    DeliveryRegion {
        id: RegionId::Local,
        name: "Local (same city)",
        base: Decimal::from_parts(40, 0, 0, false, 0),
        multiplier: Decimal::ONE,
    },
    DeliveryRegion {
        id: RegionId::National,
        name: "National",
        base: Decimal::from_parts(70, 0, 0, false, 0),
        multiplier: Decimal::from_parts(18, 0, 0, false, 1),
    },
    DeliveryRegion {
        id: RegionId::Intl,
        name: "International",
        base: Decimal::from_parts(450, 0, 0, false, 0),
        multiplier: Decimal::from_parts(55, 0, 0, false, 1),
    },
];

impl DeliveryRegion {
    /// All configured regions, default first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &REGIONS
    }

    /// The region for a tier id.
    #[must_use]
    pub fn get(id: RegionId) -> &'static Self {
        match id {
            RegionId::Local => &REGIONS[0],
            RegionId::National => &REGIONS[1],
            RegionId::Intl => &REGIONS[2],
        }
    }

    /// Look up a region by its wire name.
    #[must_use]
    pub fn find(id: &str) -> Option<&'static Self> {
        id.parse().ok().map(Self::get)
    }

    /// Look up a region by its wire name, falling back to the first
    /// configured region (`local`) when the name is unknown.
    #[must_use]
    pub fn resolve(id: &str) -> &'static Self {
        Self::find(id).unwrap_or(&REGIONS[0])
    }

    /// Fee for shipping `total_grams` to this region.
    ///
    /// The base fee always applies; only [`shipping_fee`] makes an empty cart
    /// free. A cart of weightless products still pays the base.
    #[must_use]
    pub fn fee_for_weight(&self, total_grams: u64) -> Price {
        let units = Decimal::from(weight_units(total_grams));
        let raw = self.base + units * RATE_PER_UNIT * self.multiplier;
        Price::new(raw.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
    }
}

/// Number of 500 g units needed for a weight. Partial units round up.
#[must_use]
pub const fn weight_units(total_grams: u64) -> u64 {
    total_grams.div_ceil(GRAMS_PER_UNIT)
}

/// Shipping fee for a cart. An empty cart ships for free.
#[must_use]
pub fn shipping_fee(cart: &Cart, region: &DeliveryRegion) -> Price {
    if cart.is_empty() {
        return Price::ZERO;
    }
    region.fee_for_weight(cart.total_weight_grams())
}

/// Derived pricing summary for a cart shipped to a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShippingQuote {
    pub region: RegionId,
    pub subtotal: Price,
    pub weight_grams: u64,
    pub weight_units: u64,
    pub shipping_fee: Price,
    pub total: Price,
}

impl ShippingQuote {
    /// Compute the quote for a cart.
    #[must_use]
    pub fn compute(cart: &Cart, region: &DeliveryRegion) -> Self {
        let subtotal = cart.subtotal();
        let weight_grams = cart.total_weight_grams();
        let shipping_fee = shipping_fee(cart, region);

        Self {
            region: region.id,
            subtotal,
            weight_grams,
            weight_units: if cart.is_empty() { 0 } else { weight_units(weight_grams) },
            shipping_fee,
            total: subtotal + shipping_fee,
        }
    }
}
