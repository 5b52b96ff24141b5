//! Room decor analysis: photo in, style and matching products out.

use axum::{Json, extract::State};
use karigar_core::{Product, RoomAnalysis};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::error::Result;
use crate::services::ImagePayload;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Room photo as a data URL or bare base64.
    pub image: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: Option<RoomAnalysis>,
    /// Catalog products that suit the room. Empty without an analysis.
    pub products: Vec<Product>,
}

#[instrument(skip(state, body))]
pub async fn analyze(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>> {
    let image = ImagePayload::parse(&body.image)?;

    let analysis = match state.assistant().analyze_room(&image).await {
        Ok(analysis) => analysis,
        Err(e) => {
            warn!(error = %e, "Room analysis unavailable");
            return Ok(Json(AnalyzeResponse {
                analysis: None,
                products: Vec::new(),
            }));
        }
    };

    let products = state
        .catalog()
        .read()
        .await
        .recommend_for_room(&analysis)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(AnalyzeResponse {
        analysis: Some(analysis),
        products,
    }))
}
