//! Gemini (Generative Language API) integration.
//!
//! # Features
//!
//! - Structured JSON output constrained by a response schema
//! - Inline base64 image input for room analysis and photo enhancement
//! - Image output for enhancement and generation
//!
//! The client implements [`crate::services::ListingAssistant`]; nothing
//! outside this module builds requests by hand.

pub mod assistant;
pub mod client;
pub mod error;
pub mod types;

pub use client::GeminiClient;
pub use error::GeminiError;
