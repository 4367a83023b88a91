//! Conversion between the binary and text forms.

use crate::constants::{BINARY_LEN, GROUP_LENGTHS, TEXT_LEN};
use crate::{UuidError, UuidResult};

/// Decodes a 36-character text UUID into its 16-byte binary form.
///
/// Hyphens are stripped and the remaining 32 characters are hex-decoded. Either letter case
/// decodes; the hyphen positions themselves are not checked here, use [`crate::validate()`]
/// for a strict syntactic check.
///
/// # Errors
///
/// Returns [`UuidError::InvalidFormat`] if `text` is not exactly 36 characters long, or if
/// what remains after stripping hyphens is not 32 hex digits.
pub fn binary(text: &str) -> UuidResult<[u8; BINARY_LEN]> {
    if text.len() != TEXT_LEN {
        return Err(UuidError::InvalidFormat(format!(
            "text UUID must be {} characters, got {} in '{}'",
            TEXT_LEN,
            text.len(),
            text
        )));
    }

    let digits: String = text.chars().filter(|c| *c != '-').collect();
    let mut bytes = [0u8; BINARY_LEN];
    hex::decode_to_slice(&digits, &mut bytes).map_err(|e| {
        UuidError::InvalidFormat(format!("text UUID '{}' does not decode as hex: {}", text, e))
    })?;
    Ok(bytes)
}

/// Encodes a 16-byte binary UUID as 36-character hyphenated lowercase hex.
///
/// # Errors
///
/// Returns [`UuidError::InvalidFormat`] if `binary` is not exactly 16 bytes long.
pub fn text(binary: &[u8]) -> UuidResult<String> {
    let bytes: &[u8; BINARY_LEN] = binary.try_into().map_err(|_| {
        UuidError::InvalidFormat(format!(
            "binary UUID must be {} bytes, got {}",
            BINARY_LEN,
            binary.len()
        ))
    })?;
    Ok(encode(bytes))
}

/// Infallible encoding for callers that already hold exactly 16 bytes.
pub(crate) fn encode(bytes: &[u8; BINARY_LEN]) -> String {
    let digits = hex::encode(bytes);
    let mut out = String::with_capacity(TEXT_LEN);
    let mut start = 0;
    for (i, len) in GROUP_LENGTHS.iter().enumerate() {
        if i > 0 {
            out.push('-');
        }
        out.push_str(&digits[start..start + len]);
        start += len;
    }
    out
}
