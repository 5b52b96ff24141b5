//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

use core::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`
/// - `From<&str>`, `From<String>` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use karigar_core::define_id;
/// define_id!(ShopId);
/// define_id!(ReviewId);
///
/// let shop = ShopId::new("s1");
/// let review = ReviewId::new("s1");
///
/// // These are different types, so this won't compile:
/// // let _: ShopId = review;
/// assert_eq!(shop.as_str(), review.as_str());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

define_id!(ProductId);
define_id!(SellerId);

impl ProductId {
    /// Generate a fresh identifier for a newly published listing.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("p-{}", Uuid::new_v4().simple()))
    }
}

/// Order identifier.
///
/// Backed by a random v4 UUID so identifiers stay unique across sessions.
/// Displays as `ORD-` followed by the upper-case simple UUID form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Generate a new random order ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Uuid::encode_buffer();
        write!(f, "ORD-{}", self.0.simple().encode_upper(&mut buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_ids_compare_by_value() {
        assert_eq!(ProductId::new("1"), ProductId::from("1"));
        assert_ne!(ProductId::new("1"), ProductId::new("2"));
        assert_eq!(SellerId::from("s1".to_string()).to_string(), "s1");
    }

    #[test]
    fn test_generated_product_ids_are_prefixed_and_unique() {
        let a = ProductId::generate();
        let b = ProductId::generate();
        assert!(a.as_str().starts_with("p-"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_order_id_display() {
        let id = OrderId::from_uuid(Uuid::nil());
        assert_eq!(id.to_string(), "ORD-00000000000000000000000000000000");
    }

    #[test]
    fn test_order_id_serializes_as_uuid() {
        let id = OrderId::from_uuid(Uuid::nil());
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"00000000-0000-0000-0000-000000000000\"");
    }
}
