//! Contracts exchanged with the AI listing assistant.
//!
//! These are plain data types. The assistant that produces them lives in the
//! storefront; the core only defines their shape and how an accepted
//! [`ListingDraft`] becomes a catalog [`Product`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Product;
use crate::types::{Price, ProductId, SellerId};

/// Image used for listings published without any uploaded photos.
pub const DEFAULT_LISTING_IMAGE: &str =
    "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?auto=format&fit=crop&q=80&w=800";

/// Maximum length, in characters, of the story derived from a description.
pub const STORY_LENGTH: usize = 100;

/// Highest price a listing may ask, in Rupees (one crore).
pub const MAX_LISTING_PRICE_RUPEES: i64 = 10_000_000;

/// Heaviest shipping weight a listing may declare (100 kg).
pub const MAX_LISTING_WEIGHT_GRAMS: u32 = 100_000;

/// Tips shown when the assistant cannot produce sales insights.
pub const FALLBACK_TIPS: [&str; 3] = [
    "Keep creating unique pieces!",
    "Try offering seasonal discounts.",
    "Share your creation story on social media.",
];

/// A structured listing suggested from a seller's rough description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingDraft {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_tips: Option<String>,
}

/// Why a draft cannot be published.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    #[error("listing name is required")]
    EmptyName,

    #[error("listing price cannot be negative: {0}")]
    NegativePrice(Price),

    #[error("listing price {0} is above the {MAX_LISTING_PRICE_RUPEES} Rupee limit")]
    PriceTooHigh(Price),

    #[error("listing weight {0} g is above the {MAX_LISTING_WEIGHT_GRAMS} g limit")]
    TooHeavy(u32),
}

/// Who is publishing a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingSeller {
    pub id: SellerId,
    pub name: String,
}

impl ListingDraft {
    /// Check that the draft can become a product.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError`] for a blank name or a price outside
    /// `0..=MAX_LISTING_PRICE_RUPEES`.
    pub fn validate(&self) -> Result<(), ListingError> {
        if self.name.trim().is_empty() {
            return Err(ListingError::EmptyName);
        }
        if self.price.is_negative() {
            return Err(ListingError::NegativePrice(self.price));
        }
        if self.price > Price::rupees(MAX_LISTING_PRICE_RUPEES) {
            return Err(ListingError::PriceTooHigh(self.price));
        }
        Ok(())
    }

    /// Turn an accepted draft into a catalog product.
    ///
    /// The category is lower-cased, the default image is used when no images
    /// were uploaded, and the story is the start of the description. New
    /// listings have no rating or reviews.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError`] if the draft fails [`ListingDraft::validate`]
    /// or the weight is above [`MAX_LISTING_WEIGHT_GRAMS`].
    pub fn into_product(
        self,
        id: ProductId,
        seller: ListingSeller,
        images: Vec<String>,
        weight_grams: Option<u32>,
    ) -> Result<Product, ListingError> {
        self.validate()?;
        if let Some(grams) = weight_grams.filter(|&g| g > MAX_LISTING_WEIGHT_GRAMS) {
            return Err(ListingError::TooHeavy(grams));
        }

        let images = if images.is_empty() {
            vec![DEFAULT_LISTING_IMAGE.to_string()]
        } else {
            images
        };
        let story: String = self.description.chars().take(STORY_LENGTH).collect();

        Ok(Product {
            id,
            name: self.name.trim().to_string(),
            price: self.price,
            category: self.category.trim().to_lowercase(),
            seller_id: seller.id,
            seller_name: seller.name,
            images,
            tags: self.tags,
            rating: 0.0,
            reviews: 0,
            weight_grams,
            story: (!story.is_empty()).then_some(story),
            description: self.description,
        })
    }
}

/// What the assistant sees in a photo of a buyer's room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomAnalysis {
    pub style: String,
    #[serde(default)]
    pub suggested_tags: Vec<String>,
    #[serde(default)]
    pub suggested_categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation_reason: Option<String>,
}

/// Short business tips for a seller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesInsights {
    pub tips: Vec<String>,
}

impl SalesInsights {
    /// The generic tips used when the assistant is unavailable.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            tips: FALLBACK_TIPS.iter().map(ToString::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ListingDraft {
        ListingDraft {
            name: "Terracotta Lamp".to_string(),
            description: "x".repeat(150),
            price: Price::rupees(900),
            category: "Pottery".to_string(),
            tags: vec!["lamp".to_string()],
            image_tips: None,
        }
    }

    fn seller() -> ListingSeller {
        ListingSeller {
            id: SellerId::new("s9"),
            name: "Clay Works".to_string(),
        }
    }

    #[test]
    fn test_into_product_applies_listing_defaults() {
        let product = draft()
            .into_product(ProductId::new("p-1"), seller(), Vec::new(), None)
            .expect("valid draft");

        assert_eq!(product.category, "pottery");
        assert_eq!(product.images, [DEFAULT_LISTING_IMAGE]);
        assert!(product.rating.abs() < f32::EPSILON);
        assert_eq!(product.reviews, 0);
        assert_eq!(product.story.as_deref().map(str::len), Some(STORY_LENGTH));
        assert_eq!(product.description.len(), 150);
        assert_eq!(product.seller_id, SellerId::new("s9"));
    }

    #[test]
    fn test_into_product_keeps_uploaded_images_and_weight() {
        let images = vec!["data:image/png;base64,AAAA".to_string()];
        let product = draft()
            .into_product(ProductId::new("p-1"), seller(), images.clone(), Some(800))
            .expect("valid draft");
        assert_eq!(product.images, images);
        assert_eq!(product.effective_weight_grams(), 800);
    }

    #[test]
    fn test_story_counts_characters_not_bytes() {
        let mut draft = draft();
        draft.description = "मिट्टी".repeat(40);
        let product = draft
            .into_product(ProductId::new("p-1"), seller(), Vec::new(), None)
            .expect("valid draft");
        assert_eq!(product.story.map(|s| s.chars().count()), Some(STORY_LENGTH));
    }

    #[test]
    fn test_invalid_drafts_are_rejected() {
        let mut blank = draft();
        blank.name = "   ".to_string();
        assert_eq!(blank.validate(), Err(ListingError::EmptyName));

        let mut negative = draft();
        negative.price = Price::rupees(-5);
        assert_eq!(
            negative.into_product(ProductId::new("p-1"), seller(), Vec::new(), None),
            Err(ListingError::NegativePrice(Price::rupees(-5)))
        );
    }

    #[test]
    fn test_absurd_prices_and_weights_are_rejected() {
        let mut pricey = draft();
        pricey.price = Price::new(rust_decimal::Decimal::MAX);
        assert_eq!(
            pricey.validate(),
            Err(ListingError::PriceTooHigh(Price::new(rust_decimal::Decimal::MAX)))
        );

        let mut at_limit = draft();
        at_limit.price = Price::rupees(MAX_LISTING_PRICE_RUPEES);
        assert_eq!(at_limit.validate(), Ok(()));

        assert_eq!(
            draft().into_product(ProductId::new("p-1"), seller(), Vec::new(), Some(u32::MAX)),
            Err(ListingError::TooHeavy(u32::MAX))
        );
        assert!(
            draft()
                .into_product(
                    ProductId::new("p-1"),
                    seller(),
                    Vec::new(),
                    Some(MAX_LISTING_WEIGHT_GRAMS)
                )
                .is_ok()
        );
    }

    #[test]
    fn test_fallback_tips() {
        let insights = SalesInsights::fallback();
        assert_eq!(insights.tips, FALLBACK_TIPS);
    }

    #[test]
    fn test_room_analysis_tolerates_missing_lists() {
        let analysis: RoomAnalysis =
            serde_json::from_str(r#"{"style":"Boho"}"#).expect("deserialize");
        assert_eq!(analysis.style, "Boho");
        assert!(analysis.suggested_tags.is_empty());
    }
}
