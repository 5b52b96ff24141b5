//! [`ListingAssistant`] backed by Gemini.

use async_trait::async_trait;
use karigar_core::{ListingDraft, RoomAnalysis, SalesInsights};
use serde_json::{Value, json};
use tracing::instrument;

use crate::services::assistant::{AssistantError, ListingAssistant};
use crate::services::images::ImagePayload;

use super::client::GeminiClient;
use super::types::{ImageConfig, Part};

fn listing_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING" },
            "description": { "type": "STRING" },
            "price": { "type": "NUMBER" },
            "category": {
                "type": "STRING",
                "enum": ["crafts", "jewelry", "paintings", "pottery", "embroidery"]
            },
            "tags": { "type": "ARRAY", "items": { "type": "STRING" } },
            "image_tips": { "type": "STRING" }
        },
        "required": ["name", "description", "price", "tags", "category"]
    })
}

fn room_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "style": { "type": "STRING" },
            "recommendation_reason": { "type": "STRING" },
            "suggested_tags": { "type": "ARRAY", "items": { "type": "STRING" } },
            "suggested_categories": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["style", "suggested_tags", "suggested_categories"]
    })
}

fn insights_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "tips": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["tips"]
    })
}

#[async_trait]
impl ListingAssistant for GeminiClient {
    #[instrument(skip_all)]
    async fn enrich_listing(&self, description: &str) -> Result<ListingDraft, AssistantError> {
        let prompt = format!(
            "An artisan described a piece they made: \"{description}\". \
             Write a professional marketplace listing for it: a catchy product name, \
             a warm marketing description of about 100 words, a fair price in Indian \
             Rupees reflecting handmade value, the best matching category, relevant \
             search tags and one tip for photographing the piece."
        );

        let draft = self
            .generate_json(self.text_model(), vec![Part::text(prompt)], listing_schema())
            .await?;
        Ok(draft)
    }

    #[instrument(skip_all)]
    async fn sales_insights(&self, history: &str) -> Result<SalesInsights, AssistantError> {
        let prompt = format!(
            "Here are an artisan's recent sales: {history}. \
             Give three short, actionable business tips, one sentence each."
        );

        let insights = self
            .generate_json(self.text_model(), vec![Part::text(prompt)], insights_schema())
            .await?;
        Ok(insights)
    }

    #[instrument(skip_all, fields(mime_type = %image.mime_type))]
    async fn analyze_room(&self, image: &ImagePayload) -> Result<RoomAnalysis, AssistantError> {
        let parts = vec![
            Part::inline(image.clone().into()),
            Part::text(
                "Look at this room and suggest handmade decor, textiles or pottery that \
                 would suit it. Name the interior style (for example Modern or Boho), \
                 explain the recommendation in one sentence, give five marketplace search \
                 tags and the best matching categories from: crafts, jewelry, paintings, \
                 pottery, embroidery.",
            ),
        ];

        let analysis = self
            .generate_json(self.vision_model(), parts, room_schema())
            .await?;
        Ok(analysis)
    }

    #[instrument(skip_all, fields(category = %category))]
    async fn enhance_image(
        &self,
        image: &ImagePayload,
        category: &str,
        product_name: &str,
    ) -> Result<Option<ImagePayload>, AssistantError> {
        let parts = vec![
            Part::inline(image.clone().into()),
            Part::text(format!(
                "Act as a professional product photographer. Replace the background of \
                 this photo with a clean, high-end studio setting suited to a {category} \
                 product called \"{product_name}\". Leave the product itself untouched: \
                 same size, shape and colours. Use soft studio lighting and a minimal, \
                 complementary backdrop. Return only the edited image."
            )),
        ];

        let blob = GeminiClient::generate_image(self, self.image_model(), parts, None).await?;
        Ok(blob.map(ImagePayload::from))
    }

    #[instrument(skip_all)]
    async fn generate_image(&self, prompt: &str) -> Result<Option<ImagePayload>, AssistantError> {
        let parts = vec![Part::text(format!(
            "High-quality artisanal product photograph of: {prompt}. \
             Studio lighting, clean background."
        ))];
        let config = ImageConfig {
            aspect_ratio: "1:1".to_string(),
        };

        let blob =
            GeminiClient::generate_image(self, self.image_model(), parts, Some(config)).await?;
        Ok(blob.map(ImagePayload::from))
    }

    #[instrument(skip_all, fields(language = %language))]
    async fn translate(&self, text: &str, language: &str) -> Result<String, AssistantError> {
        let prompt = format!(
            "Translate the following text to {language}, keeping a respectful, \
             artisanal tone. Reply with the translation only: \"{text}\""
        );

        let translated = self.generate_text(self.text_model(), prompt).await?;
        Ok(translated.trim().to_string())
    }
}
