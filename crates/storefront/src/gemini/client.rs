//! Gemini API client for `generateContent` calls.

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use crate::config::GeminiConfig;

use super::error::{ApiErrorResponse, GeminiError};
use super::types::{
    Blob, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, ImageConfig,
    Part,
};

const API_VERSION: &str = "v1beta";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini API client.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct GeminiClient {
    inner: Arc<GeminiClientInner>,
}

struct GeminiClientInner {
    client: reqwest::Client,
    api_base: Url,
    text_model: String,
    vision_model: String,
    image_model: String,
}

impl GeminiClient {
    /// Create a new Gemini client.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::Config`] if the API key is not a valid header
    /// value, or [`GeminiError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &GeminiConfig) -> Result<Self, GeminiError> {
        let mut api_key = HeaderValue::from_str(config.api_key.expose_secret())
            .map_err(|_| GeminiError::Config("API key contains invalid characters".to_string()))?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(API_KEY_HEADER, api_key);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(GeminiClientInner {
                client,
                api_base: config.api_base.clone(),
                text_model: config.text_model.clone(),
                vision_model: config.vision_model.clone(),
                image_model: config.image_model.clone(),
            }),
        })
    }

    /// Model used for text and structured text tasks.
    #[must_use]
    pub fn text_model(&self) -> &str {
        &self.inner.text_model
    }

    /// Model used for image understanding.
    #[must_use]
    pub fn vision_model(&self) -> &str {
        &self.inner.vision_model
    }

    /// Model used for image output.
    #[must_use]
    pub fn image_model(&self) -> &str {
        &self.inner.image_model
    }

    /// Send a raw `generateContent` request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    #[instrument(skip(self, request), fields(model = %model))]
    pub async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let url = self.endpoint(model)?;
        let response = self.inner.client.post(url).json(request).send().await?;

        self.handle_response(response).await
    }

    /// Generate JSON following `schema` and deserialize it.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::EmptyResponse`] when the model produced no text
    /// and [`GeminiError::Parse`] when the text is not the expected JSON.
    pub async fn generate_json<T: DeserializeOwned>(
        &self,
        model: &str,
        parts: Vec<Part>,
        schema: serde_json::Value,
    ) -> Result<T, GeminiError> {
        let request = GenerateContentRequest {
            contents: vec![Content::user(parts)],
            generation_config: Some(GenerationConfig::json(schema)),
        };

        let text = self.generate(model, &request).await.and_then(first_text)?;
        serde_json::from_str(&text)
            .map_err(|e| GeminiError::Parse(format!("Failed to parse model JSON: {e}")))
    }

    /// Generate free text from a prompt.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::EmptyResponse`] when the model produced no text.
    pub async fn generate_text(&self, model: &str, prompt: String) -> Result<String, GeminiError> {
        let request = GenerateContentRequest {
            contents: vec![Content::user(vec![Part::text(prompt)])],
            generation_config: None,
        };

        self.generate(model, &request).await.and_then(first_text)
    }

    /// Generate an image. Returns `None` when the model answered without one.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn generate_image(
        &self,
        model: &str,
        parts: Vec<Part>,
        image_config: Option<ImageConfig>,
    ) -> Result<Option<Blob>, GeminiError> {
        let request = GenerateContentRequest {
            contents: vec![Content::user(parts)],
            generation_config: Some(GenerationConfig::image(image_config)),
        };

        let response = self.generate(model, &request).await?;
        Ok(response
            .first_content()
            .and_then(Content::inline_data)
            .cloned())
    }

    fn endpoint(&self, model: &str) -> Result<Url, GeminiError> {
        self.inner
            .api_base
            .join(&format!("{API_VERSION}/models/{model}:generateContent"))
            .map_err(|e| GeminiError::Config(format!("invalid model endpoint: {e}")))
    }

    /// Handle a response, parsing the body on success.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body)
                .map_err(|e| GeminiError::Parse(format!("Failed to parse response: {e}")))
        } else {
            Err(self.handle_error_status(status, response).await)
        }
    }

    /// Handle an error status code.
    async fn handle_error_status(
        &self,
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> GeminiError {
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            return GeminiError::RateLimited(retry_after);
        }

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return GeminiError::Unauthorized("API key rejected".to_string());
        }

        match response.text().await {
            Ok(body) => match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(api_error) => GeminiError::Api {
                    status: api_error.error.status,
                    message: api_error.error.message,
                },
                Err(_) => GeminiError::Api {
                    status: status.to_string(),
                    message: body,
                },
            },
            Err(e) => GeminiError::Http(e),
        }
    }
}

/// Text of the first candidate, or an error when there is none.
fn first_text(response: GenerateContentResponse) -> Result<String, GeminiError> {
    response
        .first_content()
        .map(Content::text)
        .filter(|text| !text.trim().is_empty())
        .ok_or(GeminiError::EmptyResponse)
}
