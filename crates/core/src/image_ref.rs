//! Displayable image references.
//!
//! Generated images travel as PNG data URIs so a result is renderable
//! without any further fetch. The reference is otherwise opaque to the
//! rest of the system.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

const PNG_PREFIX: &str = "data:image/png;base64,";

#[derive(Debug, thiserror::Error)]
pub enum ImageRefError {
    #[error("Not a PNG data URI")]
    NotDataUri,

    #[error("Invalid base64 payload: {0}")]
    Payload(#[from] base64::DecodeError),
}

/// Wrap a base64 image payload (as returned by the generation service)
/// into a displayable PNG data URI.
pub fn png_data_uri(base64_payload: &str) -> String {
    format!("{PNG_PREFIX}{base64_payload}")
}

/// Recover raw image bytes from a reference produced by [`png_data_uri`].
pub fn decode_data_uri(image_ref: &str) -> Result<Vec<u8>, ImageRefError> {
    let payload = image_ref
        .strip_prefix(PNG_PREFIX)
        .ok_or(ImageRefError::NotDataUri)?;
    Ok(BASE64.decode(payload)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
