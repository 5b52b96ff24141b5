//! Listing text translation.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub language: String,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub text: String,
    pub language: String,
}

/// Translate text. Always answers; failures return the original text.
#[instrument(skip(state, body), fields(language = %body.language))]
pub async fn translate(
    State(state): State<AppState>,
    Json(body): Json<TranslateRequest>,
) -> Json<TranslateResponse> {
    let text = state.translator().translate(&body.text, &body.language).await;

    Json(TranslateResponse {
        text,
        language: body.language,
    })
}
