//! Seller tools: AI-assisted listings, publishing, inventory and insights.
//!
//! Assistant failures never fail the request. Enrichment falls back to
//! manual entry, insights to generic tips and image calls to no image.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use karigar_core::{
    ListingDraft, ListingSeller, Product, ProductId, SalesInsights, SellerId,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::error::{AppError, Result};
use crate::services::ImagePayload;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EnrichRequest {
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct EnrichResponse {
    /// The suggested listing, or `None` when the seller must fill it in.
    pub draft: Option<ListingDraft>,
    pub manual_entry: bool,
}

#[derive(Debug, Deserialize)]
pub struct PublishRequest {
    pub seller_id: SellerId,
    pub seller_name: String,
    pub draft: ListingDraft,
    /// Uploaded images as data URLs or links, primary first.
    #[serde(default)]
    pub images: Vec<String>,
    pub weight_grams: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct InsightsRequest {
    pub history: String,
}

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    pub image: String,
    pub category: String,
    pub product_name: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct ImageResponse {
    /// Data URL of the resulting image, if the model produced one.
    pub image: Option<String>,
}

/// Suggest a structured listing from a rough description.
#[instrument(skip(state, body))]
pub async fn enrich(
    State(state): State<AppState>,
    Json(body): Json<EnrichRequest>,
) -> Result<Json<EnrichResponse>> {
    let description = body.description.trim();
    if description.is_empty() {
        return Err(AppError::BadRequest("description is required".to_string()));
    }

    let draft = match state.assistant().enrich_listing(description).await {
        Ok(draft) => Some(draft),
        Err(e) => {
            warn!(error = %e, "Listing enrichment unavailable, falling back to manual entry");
            None
        }
    };

    Ok(Json(EnrichResponse {
        manual_entry: draft.is_none(),
        draft,
    }))
}

/// Publish a listing to the catalog.
#[instrument(skip(state, body), fields(seller_id = %body.seller_id))]
pub async fn publish(
    State(state): State<AppState>,
    Json(body): Json<PublishRequest>,
) -> Result<(StatusCode, Json<Product>)> {
    for image in body.images.iter().filter(|i| i.starts_with("data:")) {
        ImagePayload::parse(image)?;
    }

    let seller = ListingSeller {
        id: body.seller_id,
        name: body.seller_name,
    };
    let product = body.draft.into_product(
        ProductId::generate(),
        seller,
        body.images,
        body.weight_grams,
    )?;

    state.catalog().write().await.publish(product.clone());
    info!(product_id = %product.id, category = %product.category, "Listing published");

    Ok((StatusCode::CREATED, Json(product)))
}

/// A seller's own listings.
#[instrument(skip(state))]
pub async fn inventory(
    State(state): State<AppState>,
    Path(seller_id): Path<SellerId>,
) -> Json<Vec<Product>> {
    let catalog = state.catalog().read().await;
    Json(catalog.by_seller(&seller_id).into_iter().cloned().collect())
}

/// Business tips from recent sales, or generic tips when unavailable.
#[instrument(skip(state, body))]
pub async fn insights(
    State(state): State<AppState>,
    Json(body): Json<InsightsRequest>,
) -> Json<SalesInsights> {
    let insights = match state.assistant().sales_insights(&body.history).await {
        Ok(insights) if !insights.tips.is_empty() => insights,
        Ok(_) => SalesInsights::fallback(),
        Err(e) => {
            warn!(error = %e, "Sales insights unavailable, using generic tips");
            SalesInsights::fallback()
        }
    };

    Json(insights)
}

/// Put a product photo on a studio background.
#[instrument(skip(state, body), fields(category = %body.category))]
pub async fn enhance_image(
    State(state): State<AppState>,
    Json(body): Json<EnhanceRequest>,
) -> Result<Json<ImageResponse>> {
    let image = ImagePayload::parse(&body.image)?;

    let enhanced = state
        .assistant()
        .enhance_image(&image, &body.category, &body.product_name)
        .await
        .unwrap_or_else(|e| {
            warn!(error = %e, "Image enhancement failed");
            None
        });

    Ok(Json(ImageResponse {
        image: enhanced.map(|i| i.to_data_url()),
    }))
}

/// Generate a product photo from a prompt.
#[instrument(skip(state, body))]
pub async fn generate_image(
    State(state): State<AppState>,
    Json(body): Json<GenerateRequest>,
) -> Result<Json<ImageResponse>> {
    let prompt = body.prompt.trim();
    if prompt.is_empty() {
        return Err(AppError::BadRequest("prompt is required".to_string()));
    }

    let generated = state
        .assistant()
        .generate_image(prompt)
        .await
        .unwrap_or_else(|e| {
            warn!(error = %e, "Image generation failed");
            None
        });

    Ok(Json(ImageResponse {
        image: generated.map(|i| i.to_data_url()),
    }))
}
