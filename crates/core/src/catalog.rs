//! Product catalog.
//!
//! Products are created by the seller listing flow and are read-only to the
//! cart and order engine. The [`Catalog`] keeps them newest-first.

use serde::{Deserialize, Serialize};

use crate::enrichment::RoomAnalysis;
use crate::types::{Price, ProductId, SellerId};

/// Weight assumed for products that do not declare one.
pub const DEFAULT_WEIGHT_GRAMS: u32 = 500;

/// Category id that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// A marketplace category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Stable identifier used on products and in filters.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
}

/// Categories offered by the marketplace, `all` first.
pub const CATEGORIES: [Category; 6] = [
    Category { id: ALL_CATEGORIES, name: "All Products" },
    Category { id: "crafts", name: "Crafts" },
    Category { id: "jewelry", name: "Jewelry" },
    Category { id: "paintings", name: "Paintings" },
    Category { id: "pottery", name: "Pottery" },
    Category { id: "embroidery", name: "Embroidery" },
];

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: String,
    pub seller_id: SellerId,
    pub seller_name: String,
    /// Image references, primary image first.
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub rating: f32,
    pub reviews: u32,
    /// Shipping weight; [`DEFAULT_WEIGHT_GRAMS`] when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_grams: Option<u32>,
    /// The artisan's story behind the piece.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story: Option<String>,
}

impl Product {
    /// Shipping weight, substituting the default when none is declared.
    #[must_use]
    pub fn effective_weight_grams(&self) -> u32 {
        self.weight_grams.unwrap_or(DEFAULT_WEIGHT_GRAMS)
    }

    /// Case-insensitive match of `needle` (already lower-cased) against the
    /// name, any tag, or the category.
    fn matches_query(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
            || self.category.to_lowercase().contains(needle)
    }
}

/// In-memory catalog store.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from existing products, keeping their order.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All products, newest first.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of listed products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Publish a new listing. New listings appear first.
    ///
    /// A product with the same id replaces the previous listing.
    pub fn publish(&mut self, product: Product) {
        self.products.retain(|p| p.id != product.id);
        self.products.insert(0, product);
    }

    /// Filter products by a free-text query and a category.
    ///
    /// An empty query matches everything. A `None` category or
    /// [`ALL_CATEGORIES`] disables the category filter.
    #[must_use]
    pub fn search(&self, query: &str, category: Option<&str>) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        let category = category.filter(|c| *c != ALL_CATEGORIES);

        self.products
            .iter()
            .filter(|p| needle.is_empty() || p.matches_query(&needle))
            .filter(|p| category.is_none_or(|c| p.category == c))
            .collect()
    }

    /// Listings owned by a seller.
    #[must_use]
    pub fn by_seller(&self, seller_id: &SellerId) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| &p.seller_id == seller_id)
            .collect()
    }

    /// Products that suit a room: category among the suggested categories,
    /// or sharing at least one suggested tag. Comparisons ignore case.
    #[must_use]
    pub fn recommend_for_room(&self, analysis: &RoomAnalysis) -> Vec<&Product> {
        let categories: Vec<String> = analysis
            .suggested_categories
            .iter()
            .map(|c| c.to_lowercase())
            .collect();
        let tags: Vec<String> = analysis
            .suggested_tags
            .iter()
            .map(|t| t.to_lowercase())
            .collect();

        self.products
            .iter()
            .filter(|p| {
                categories.contains(&p.category.to_lowercase())
                    || p.tags.iter().any(|t| tags.contains(&t.to_lowercase()))
            })
            .collect()
    }

    /// The demo catalog the storefront starts with.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(vec![
            demo_product(
                "1",
                "Hand-painted Ceramic Vase",
                "A beautiful blue and white ceramic vase, hand-painted by traditional artisans in Rajasthan.",
                1250,
                "pottery",
                ("s1", "Amit Artisans"),
                "https://images.unsplash.com/photo-1578749556568-bc2c40e68b61?auto=format&fit=crop&q=80&w=800",
                &["blue", "ceramic", "handmade"],
                (4.8, 124),
                Some("This vase represents the blue pottery traditions passed down through generations in my family."),
            ),
            demo_product(
                "2",
                "Silk Embroidered Saree",
                "Luxurious silk saree with intricate Zardosi work, perfect for festive occasions.",
                8500,
                "embroidery",
                ("s2", "Latha Weaves"),
                "https://images.unsplash.com/photo-1610030469668-93510cb2801e?auto=format&fit=crop&q=80&w=800",
                &["silk", "saree", "traditional"],
                (4.9, 56),
                Some("Handcrafted over 15 days using premium Mulberry silk and real gold threads."),
            ),
            demo_product(
                "3",
                "Silver Filigree Earrings",
                "Delicate handcrafted silver earrings featuring traditional filigree patterns.",
                2200,
                "jewelry",
                ("s3", "Silver Craft"),
                "https://images.unsplash.com/photo-1535632066927-ab7c9ab60908?auto=format&fit=crop&q=80&w=800",
                &["silver", "jewelry", "earrings"],
                (4.7, 89),
                None,
            ),
            demo_product(
                "4",
                "Abstract Oil Painting",
                "A vibrant abstract oil painting on high-quality canvas, expressing the beauty of Indian monsoons.",
                4500,
                "paintings",
                ("s4", "Art by Rohan"),
                "https://images.unsplash.com/photo-1541963463532-d68292c34b19?auto=format&fit=crop&q=80&w=800",
                &["abstract", "canvas", "wall decor"],
                (4.5, 32),
                None,
            ),
            demo_product(
                "5",
                "Bamboo Picnic Basket",
                "Sturdy and eco-friendly picnic basket hand-woven from sustainably sourced bamboo.",
                750,
                "crafts",
                ("s5", "Green Hands"),
                "https://images.unsplash.com/photo-1593006526979-5f8814c229f9?auto=format&fit=crop&q=80&w=800",
                &["bamboo", "sustainable", "home"],
                (4.6, 145),
                None,
            ),
        ])
    }
}

#[allow(clippy::too_many_arguments)] // Flat seed data reads best as positional rows
fn demo_product(
    id: &str,
    name: &str,
    description: &str,
    price: i64,
    category: &str,
    (seller_id, seller_name): (&str, &str),
    image: &str,
    tags: &[&str],
    (rating, reviews): (f32, u32),
    story: Option<&str>,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        price: Price::rupees(price),
        category: category.to_string(),
        seller_id: SellerId::new(seller_id),
        seller_name: seller_name.to_string(),
        images: vec![image.to_string()],
        tags: tags.iter().map(ToString::to_string).collect(),
        rating,
        reviews,
        weight_grams: None,
        story: story.map(String::from),
    }
}
