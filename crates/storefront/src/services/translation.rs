//! Cached translation of listing text.
//!
//! English needs no translation and is returned without a model call. Results
//! are cached for an hour per (language, text). When the assistant fails the
//! original text is returned, so callers always get something to display.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use tracing::{debug, instrument, warn};

use crate::services::assistant::ListingAssistant;

/// Language that is passed through untranslated.
pub const SOURCE_LANGUAGE: &str = "English";

const CACHE_CAPACITY: u64 = 10_000;
const CACHE_TTL: Duration = Duration::from_secs(60 * 60);

#[derive(Clone)]
pub struct Translator {
    assistant: Arc<dyn ListingAssistant>,
    cache: Cache<(String, String), String>,
}

impl Translator {
    #[must_use]
    pub fn new(assistant: Arc<dyn ListingAssistant>) -> Self {
        let cache = Cache::builder()
            .max_capacity(CACHE_CAPACITY)
            .time_to_live(CACHE_TTL)
            .build();

        Self { assistant, cache }
    }

    /// Translate `text` into `language`, falling back to the original text.
    #[instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub async fn translate(&self, text: &str, language: &str) -> String {
        let language = language.trim();
        if text.trim().is_empty()
            || language.is_empty()
            || language.eq_ignore_ascii_case(SOURCE_LANGUAGE)
        {
            return text.to_string();
        }

        let key = (language.to_lowercase(), text.to_string());
        if let Some(hit) = self.cache.get(&key).await {
            debug!("Cache hit for translation");
            return hit;
        }

        match self.assistant.translate(text, language).await {
            Ok(translated) if !translated.trim().is_empty() => {
                self.cache.insert(key, translated.clone()).await;
                translated
            }
            Ok(_) => text.to_string(),
            Err(e) => {
                warn!(error = %e, "Translation failed, returning original text");
                text.to_string()
            }
        }
    }
}
