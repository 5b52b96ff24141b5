//! End-to-end tests for the AI-assisted seller and buyer tools.
//!
//! The hosted model is replaced by a mocked `ListingAssistant`, so both the
//! happy paths and the fallbacks are deterministic.

use std::sync::Arc;

use karigar_core::{ListingDraft, Price, RoomAnalysis, SalesInsights};
use karigar_integration_tests::{TestServer, client};
use karigar_storefront::services::{AssistantError, ImagePayload, MockListingAssistant};
use reqwest::StatusCode;
use serde_json::{Value, json};

const PNG_DATA_URL: &str = "data:image/png;base64,aGVsbG8=";

async fn post(server: &TestServer, path: &str, body: Value) -> (StatusCode, Value) {
    let resp = client()
        .expect("client")
        .post(server.url(path))
        .json(&body)
        .send()
        .await
        .expect("request");
    let status = resp.status();
    (status, resp.json().await.unwrap_or(Value::Null))
}

// =============================================================================
// Listing enrichment and publishing
// =============================================================================

#[tokio::test]
async fn test_enrich_returns_draft() {
    let mut assistant = MockListingAssistant::new();
    assistant
        .expect_enrich_listing()
        .once()
        .withf(|description| description.contains("clay pot"))
        .returning(|_| {
            Ok(ListingDraft {
                name: "Terracotta Planter".to_string(),
                description: "Hand-thrown clay pot".to_string(),
                price: Price::rupees(450),
                category: "pottery".to_string(),
                tags: vec!["clay".to_string()],
                image_tips: None,
            })
        });
    let server = TestServer::with_assistant(Arc::new(assistant))
        .await
        .expect("server");

    let (status, body) = post(
        &server,
        "/api/seller/listings/enrich",
        json!({ "description": "small clay pot for herbs" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["manual_entry"], false);
    assert_eq!(body["draft"]["name"], "Terracotta Planter");
}

#[tokio::test]
async fn test_enrich_failure_falls_back_to_manual_entry() {
    let server = TestServer::start().await.expect("server");

    let (status, body) = post(
        &server,
        "/api/seller/listings/enrich",
        json!({ "description": "brass lamp" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["manual_entry"], true);
    assert!(body["draft"].is_null());
}

#[tokio::test]
async fn test_enrich_requires_description() {
    let mut assistant = MockListingAssistant::new();
    assistant.expect_enrich_listing().never();
    let server = TestServer::with_assistant(Arc::new(assistant))
        .await
        .expect("server");

    let (status, _) = post(
        &server,
        "/api/seller/listings/enrich",
        json!({ "description": "   " }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_published_listing_appears_first_and_in_inventory() {
    let server = TestServer::start().await.expect("server");

    let (status, product) = post(
        &server,
        "/api/seller/listings",
        json!({
            "seller_id": "s9",
            "seller_name": "Meera Crafts",
            "draft": {
                "name": "Macrame Wall Hanging",
                "description": "Knotted cotton wall art",
                "price": "1800",
                "category": "Crafts",
                "tags": ["boho"]
            }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(product["category"], "crafts");
    assert_eq!(product["reviews"], 0);
    assert_eq!(product["images"].as_array().map(Vec::len), Some(1));

    let http = client().expect("client");
    let products: Vec<Value> = http
        .get(server.url("/api/products"))
        .send()
        .await
        .expect("request")
        .json()
        .await
        .expect("json");
    assert_eq!(products[0]["id"], product["id"]);

    let inventory: Vec<Value> = http
        .get(server.url("/api/seller/s9/products"))
        .send()
        .await
        .expect("request")
        .json()
        .await
        .expect("json");
    assert_eq!(inventory.len(), 1);
}

#[tokio::test]
async fn test_publish_rejects_blank_name() {
    let server = TestServer::start().await.expect("server");

    let (status, body) = post(
        &server,
        "/api/seller/listings",
        json!({
            "seller_id": "s9",
            "seller_name": "Meera Crafts",
            "draft": {
                "name": " ",
                "description": "",
                "price": "100",
                "category": "crafts"
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_publish_rejects_absurd_price_and_weight() {
    let server = TestServer::start().await.expect("server");
    let listing = |price: &str, weight: u64| {
        json!({
            "seller_id": "s9",
            "seller_name": "Meera Crafts",
            "draft": {
                "name": "Brass Urli",
                "description": "",
                "price": price,
                "category": "metalwork"
            },
            "weight_grams": weight
        })
    };

    let (status, _) = post(
        &server,
        "/api/seller/listings",
        listing("79228162514264337593543950335", 500),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = post(&server, "/api/seller/listings", listing("2500", 4_000_000_000)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_weightless_listing_ships_for_the_base_fee() {
    let server = TestServer::start().await.expect("server");
    let http = client().expect("client");

    let product: Value = http
        .post(server.url("/api/seller/listings"))
        .json(&json!({
            "seller_id": "s9",
            "seller_name": "Meera Crafts",
            "draft": {
                "name": "Digital Rangoli Pattern",
                "description": "",
                "price": "200",
                "category": "crafts"
            },
            "weight_grams": 0
        }))
        .send()
        .await
        .expect("request")
        .json()
        .await
        .expect("json");

    let cart: Value = http
        .post(server.url("/api/cart/items"))
        .json(&json!({ "product_id": product["id"] }))
        .send()
        .await
        .expect("request")
        .json()
        .await
        .expect("json");

    let amount = |key: &str| cart["quote"][key].as_str().and_then(|s| s.parse::<i64>().ok());
    assert_eq!(amount("shipping_fee"), Some(40));
    assert_eq!(amount("total"), Some(240));
}

#[tokio::test]
async fn test_publish_rejects_broken_image() {
    let server = TestServer::start().await.expect("server");

    let (status, _) = post(
        &server,
        "/api/seller/listings",
        json!({
            "seller_id": "s9",
            "seller_name": "Meera Crafts",
            "draft": {
                "name": "Vase",
                "description": "",
                "price": "100",
                "category": "pottery"
            },
            "images": ["data:image/png;base64,%%%"]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Insights
// =============================================================================

#[tokio::test]
async fn test_insights_from_model() {
    let mut assistant = MockListingAssistant::new();
    assistant.expect_sales_insights().once().returning(|_| {
        Ok(SalesInsights {
            tips: vec!["Bundle earrings with necklaces".to_string()],
        })
    });
    let server = TestServer::with_assistant(Arc::new(assistant))
        .await
        .expect("server");

    let (_, body) = post(
        &server,
        "/api/seller/insights",
        json!({ "history": "10 earrings sold" }),
    )
    .await;

    assert_eq!(body["tips"], json!(["Bundle earrings with necklaces"]));
}

#[tokio::test]
async fn test_insights_fall_back_to_generic_tips() {
    let mut assistant = MockListingAssistant::new();
    assistant
        .expect_sales_insights()
        .once()
        .returning(|_| Ok(SalesInsights { tips: Vec::new() }));
    let server = TestServer::with_assistant(Arc::new(assistant))
        .await
        .expect("server");

    let (status, body) = post(&server, "/api/seller/insights", json!({ "history": "" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["tips"].as_array().map(Vec::len),
        Some(SalesInsights::fallback().tips.len())
    );
}

// =============================================================================
// Images
// =============================================================================

#[tokio::test]
async fn test_enhance_image_returns_data_url() {
    let mut assistant = MockListingAssistant::new();
    assistant
        .expect_enhance_image()
        .once()
        .withf(|image, category, _| image.mime_type == "image/png" && category.contains("jewelry"))
        .returning(|_, _, _| {
            Ok(Some(ImagePayload {
                mime_type: "image/png".to_string(),
                data: "d29ybGQ=".to_string(),
            }))
        });
    let server = TestServer::with_assistant(Arc::new(assistant))
        .await
        .expect("server");

    let (status, body) = post(
        &server,
        "/api/seller/images/enhance",
        json!({ "image": PNG_DATA_URL, "category": "jewelry", "product_name": "Jhumka" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["image"], "data:image/png;base64,d29ybGQ=");
}

#[tokio::test]
async fn test_generate_image_failure_yields_no_image() {
    let server = TestServer::start().await.expect("server");

    let (status, body) = post(
        &server,
        "/api/seller/images/generate",
        json!({ "prompt": "a blue pottery vase on a wooden table" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["image"].is_null());
}

// =============================================================================
// Decor and translation
// =============================================================================

#[tokio::test]
async fn test_room_analysis_recommends_matching_products() {
    let mut assistant = MockListingAssistant::new();
    assistant.expect_analyze_room().once().returning(|_| {
        Ok(RoomAnalysis {
            style: "Bohemian".to_string(),
            suggested_tags: Vec::new(),
            suggested_categories: vec!["Pottery".to_string()],
            recommendation_reason: Some("Earthy tones".to_string()),
        })
    });
    let server = TestServer::with_assistant(Arc::new(assistant))
        .await
        .expect("server");

    let (status, body) = post(&server, "/api/decor/analyze", json!({ "image": PNG_DATA_URL })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["analysis"]["style"], "Bohemian");
    let products = body["products"].as_array().expect("products");
    assert!(!products.is_empty());
    assert!(products.iter().all(|p| p["category"] == "pottery"));
}

#[tokio::test]
async fn test_room_analysis_failure_recommends_nothing() {
    let mut assistant = MockListingAssistant::new();
    assistant
        .expect_analyze_room()
        .once()
        .returning(|_| Err(AssistantError::Unavailable));
    let server = TestServer::with_assistant(Arc::new(assistant))
        .await
        .expect("server");

    let (status, body) = post(&server, "/api/decor/analyze", json!({ "image": PNG_DATA_URL })).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["analysis"].is_null());
    assert_eq!(body["products"], json!([]));
}

#[tokio::test]
async fn test_translation_falls_back_to_original_text() {
    let server = TestServer::start().await.expect("server");

    let (status, body) = post(
        &server,
        "/api/translate",
        json!({ "text": "Hand-painted vase", "language": "Hindi" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "Hand-painted vase");
    assert_eq!(body["language"], "Hindi");
}

#[tokio::test]
async fn test_translation_is_cached() {
    let mut assistant = MockListingAssistant::new();
    assistant
        .expect_translate()
        .once()
        .returning(|_, _| Ok("हाथ से रंगा फूलदान".to_string()));
    let server = TestServer::with_assistant(Arc::new(assistant))
        .await
        .expect("server");

    for _ in 0..2 {
        let (_, body) = post(
            &server,
            "/api/translate",
            json!({ "text": "Hand-painted vase", "language": "Hindi" }),
        )
        .await;
        assert_eq!(body["text"], "हाथ से रंगा फूलदान");
    }
}
