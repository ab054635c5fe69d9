//! Plain text extraction with encoding fallback.

use super::ExtractError;

/// Decodes a text upload as UTF-8, falling back to Latin-1 when the bytes
/// are not valid UTF-8. Latin-1 assigns every byte the code point of the same
/// value, so the fallback always decodes.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let decoded = match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    };

    let text = decoded.trim();
    if text.is_empty() {
        return Err(ExtractError::EmptyDocument("text"));
    }
    Ok(text.to_string())
}
