//! Photo payloads: image references, data URIs, and base64.

#[cfg(test)]
#[path = "photo_test.rs"]
mod photo_test;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

const BASE64_MARKER: &str = "base64,";

#[derive(Debug, thiserror::Error)]
pub enum PhotoError {
    #[error("photo data is empty")]
    Empty,
    #[error("invalid base64 photo data: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Where a card's image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    /// Inline `data:` URI, as produced by the capture canvas.
    DataUri(String),
    /// Publicly resolvable URL.
    Remote(String),
}

impl ImageRef {
    /// Classify an `<img src>` value.
    #[must_use]
    pub fn from_src(src: String) -> Self {
        if src.starts_with("data:") { Self::DataUri(src) } else { Self::Remote(src) }
    }

    /// Value for an `<img src>` attribute.
    #[must_use]
    pub fn src(&self) -> &str {
        match self {
            Self::DataUri(s) | Self::Remote(s) => s,
        }
    }
}

/// The base64 part of `photo_data`: everything after `base64,` when present,
/// otherwise the whole string.
#[must_use]
pub fn base64_payload(photo_data: &str) -> &str {
    match photo_data.split_once(BASE64_MARKER) {
        Some((_, payload)) => payload,
        None => photo_data,
    }
}

/// Decode a data URI or raw base64 string into bytes.
///
/// # Errors
///
/// Returns an error if the payload is empty or not valid base64.
pub fn decode_photo(photo_data: &str) -> Result<Vec<u8>, PhotoError> {
    let payload = base64_payload(photo_data).trim();
    if payload.is_empty() {
        return Err(PhotoError::Empty);
    }
    Ok(STANDARD.decode(payload)?)
}

/// Encode bytes as a `data:` URI.
#[must_use]
pub fn to_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};{BASE64_MARKER}{}", STANDARD.encode(bytes))
}
