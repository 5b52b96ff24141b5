//! Image payloads exchanged with the browser as base64 or data URLs.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

use crate::gemini::types::Blob;

/// MIME type assumed when the browser sends bare base64.
pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageError {
    #[error("image payload is empty")]
    Empty,
    #[error("image is not valid base64")]
    InvalidBase64,
    #[error("unsupported media type: {0}")]
    NotAnImage(String),
}

/// A base64-encoded image and its MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub mime_type: String,
    pub data: String,
}

impl ImagePayload {
    /// Parse a `data:<mime>;base64,<data>` URL or bare base64.
    ///
    /// # Errors
    ///
    /// Returns an [`ImageError`] if the payload is empty, is not valid base64,
    /// or declares a non-image media type.
    pub fn parse(input: &str) -> Result<Self, ImageError> {
        let input = input.trim();
        let (mime_type, data) = match input.strip_prefix("data:") {
            Some(rest) => {
                let (header, data) = rest.split_once(',').ok_or(ImageError::InvalidBase64)?;
                let mime = header.strip_suffix(";base64").unwrap_or(header);
                let mime = if mime.is_empty() { DEFAULT_IMAGE_MIME } else { mime };
                (mime.to_string(), data)
            }
            None => (DEFAULT_IMAGE_MIME.to_string(), input),
        };

        if !mime_type.starts_with("image/") {
            return Err(ImageError::NotAnImage(mime_type));
        }
        if data.is_empty() {
            return Err(ImageError::Empty);
        }
        STANDARD
            .decode(data)
            .map_err(|_| ImageError::InvalidBase64)?;

        Ok(Self {
            mime_type,
            data: data.to_string(),
        })
    }

    /// Render as a data URL the browser can display directly.
    #[must_use]
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

impl From<ImagePayload> for Blob {
    fn from(image: ImagePayload) -> Self {
        Self {
            mime_type: image.mime_type,
            data: image.data,
        }
    }
}

impl From<Blob> for ImagePayload {
    fn from(blob: Blob) -> Self {
        Self {
            mime_type: blob.mime_type,
            data: blob.data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_data_url() {
        let image = ImagePayload::parse("data:image/png;base64,iVBORw0KGgo=").expect("image");
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, "iVBORw0KGgo=");
        assert_eq!(image.to_data_url(), "data:image/png;base64,iVBORw0KGgo=");
    }

    #[test]
    fn test_bare_base64_defaults_to_jpeg() {
        let image = ImagePayload::parse("/9j/4AAQ").expect("image");
        assert_eq!(image.mime_type, DEFAULT_IMAGE_MIME);
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(ImagePayload::parse(""), Err(ImageError::Empty));
        assert_eq!(ImagePayload::parse("not base64!"), Err(ImageError::InvalidBase64));
        assert_eq!(
            ImagePayload::parse("data:text/plain;base64,aGk="),
            Err(ImageError::NotAnImage("text/plain".to_string()))
        );
    }
}
