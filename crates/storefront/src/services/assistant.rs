//! The AI listing assistant capability.
//!
//! Route handlers talk to the hosted model only through [`ListingAssistant`].
//! Every method can fail; handlers decide the fallback (manual entry, generic
//! tips, no recommendations, original text).

use async_trait::async_trait;
use karigar_core::{ListingDraft, RoomAnalysis, SalesInsights};
use mockall::automock;
use thiserror::Error;

use crate::gemini::GeminiError;
use crate::services::images::ImagePayload;

#[derive(Debug, Error)]
pub enum AssistantError {
    /// No model is configured.
    #[error("listing assistant is not configured")]
    Unavailable,

    #[error(transparent)]
    Gemini(#[from] GeminiError),
}

#[automock]
#[async_trait]
pub trait ListingAssistant: Send + Sync {
    /// Turn a seller's rough description into a structured listing.
    async fn enrich_listing(&self, description: &str) -> Result<ListingDraft, AssistantError>;

    /// Short business tips from a summary of recent sales.
    async fn sales_insights(&self, history: &str) -> Result<SalesInsights, AssistantError>;

    /// Style and matching tags for a photo of a room.
    async fn analyze_room(&self, image: &ImagePayload) -> Result<RoomAnalysis, AssistantError>;

    /// Put a product photo on a studio background.
    async fn enhance_image(
        &self,
        image: &ImagePayload,
        category: &str,
        product_name: &str,
    ) -> Result<Option<ImagePayload>, AssistantError>;

    /// Generate a product photo from a text prompt.
    async fn generate_image(&self, prompt: &str) -> Result<Option<ImagePayload>, AssistantError>;

    /// Translate text into `language`.
    async fn translate(&self, text: &str, language: &str) -> Result<String, AssistantError>;
}

/// Assistant used when no model is configured. Every call fails with
/// [`AssistantError::Unavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableAssistant;

#[async_trait]
impl ListingAssistant for UnavailableAssistant {
    async fn enrich_listing(&self, _description: &str) -> Result<ListingDraft, AssistantError> {
        Err(AssistantError::Unavailable)
    }

    async fn sales_insights(&self, _history: &str) -> Result<SalesInsights, AssistantError> {
        Err(AssistantError::Unavailable)
    }

    async fn analyze_room(&self, _image: &ImagePayload) -> Result<RoomAnalysis, AssistantError> {
        Err(AssistantError::Unavailable)
    }

    async fn enhance_image(
        &self,
        _image: &ImagePayload,
        _category: &str,
        _product_name: &str,
    ) -> Result<Option<ImagePayload>, AssistantError> {
        Err(AssistantError::Unavailable)
    }

    async fn generate_image(&self, _prompt: &str) -> Result<Option<ImagePayload>, AssistantError> {
        Err(AssistantError::Unavailable)
    }

    async fn translate(&self, _text: &str, _language: &str) -> Result<String, AssistantError> {
        Err(AssistantError::Unavailable)
    }
}
