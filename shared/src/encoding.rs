//! `data:` URL helpers for moving image bytes around as text.

use crate::error::ExportError;
use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Splits a base64 `data:` URL into its media type and decoded payload.
pub fn decode_data_url(url: &str) -> Result<(String, Vec<u8>), ExportError> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| ExportError::DataUrl("missing data: scheme".into()))?;
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| ExportError::DataUrl("missing payload separator".into()))?;
    let mime = meta
        .strip_suffix(";base64")
        .ok_or_else(|| ExportError::DataUrl("payload is not base64 encoded".into()))?;

    Ok((mime.to_string(), STANDARD.decode(payload.trim())?))
}
