//! Binary-safe portable text transcoding.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use fatoora_core::{CodecError, CodecResult};

/// Base-64 rendering of a TLV stream, classic alphabet with padding.
///
/// This is the compliance value itself: the string embedded verbatim
/// wherever the authority's tooling expects it. Immutable once produced and
/// passed by value to consumers.
///
/// Transcoding is byte-wise through the base-64 engine, never through a
/// text codec; the payload is a raw binary buffer and multi-byte Arabic
/// sequences in the seller name must survive untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortableText(String);

impl PortableText {
    /// Encode raw payload bytes. Total over all inputs.
    pub fn encode(payload: &[u8]) -> Self {
        Self(STANDARD.encode(payload))
    }

    /// Wrap an externally supplied string without validating it. Invalid
    /// text surfaces later as `InvalidPortableText` from
    /// [`decode_payload`](Self::decode_payload).
    pub fn from_string(text: String) -> Self {
        Self(text)
    }

    /// Transcode back to the raw payload bytes.
    pub fn decode_payload(&self) -> CodecResult<Vec<u8>> {
        STANDARD
            .decode(&self.0)
            .map_err(|err| CodecError::invalid_portable_text(err.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Byte view of the portable text itself (what the matrix consumes).
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Truncated copy for audit display, ellipsis past `max_chars`.
    pub fn preview(&self, max_chars: usize) -> String {
        match self.0.char_indices().nth(max_chars) {
            Some((idx, _)) => format!("{}…", &self.0[..idx]),
            None => self.0.clone(),
        }
    }
}

impl core::fmt::Display for PortableText {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_then_decode_returns_original_bytes() {
        let payload = [1u8, 11, b'S', b'a', b'n', b'a', b'd', 0xD9, 0x85];
        let text = PortableText::encode(&payload);
        assert_eq!(text.decode_payload().unwrap(), payload);
    }

    #[test]
    fn known_vector_uses_classic_alphabet() {
        let text = PortableText::encode(b"hello");
        assert_eq!(text.as_str(), "aGVsbG8=");
    }

    #[test]
    fn bad_alphabet_is_invalid_portable_text() {
        let text = PortableText::from_string("not base64!!".to_string());
        assert!(matches!(
            text.decode_payload(),
            Err(CodecError::InvalidPortableText { .. })
        ));
    }

    #[test]
    fn bad_padding_is_invalid_portable_text() {
        let text = PortableText::from_string("aGVsbG8".to_string());
        assert!(matches!(
            text.decode_payload(),
            Err(CodecError::InvalidPortableText { .. })
        ));
    }

    #[test]
    fn preview_truncates_long_text() {
        let text = PortableText::encode(&[0xABu8; 64]);
        let preview = text.preview(16);
        assert_eq!(preview.chars().count(), 17);
        assert!(preview.ends_with('…'));
        assert!(text.as_str().starts_with(preview.trim_end_matches('…')));
    }

    #[test]
    fn preview_keeps_short_text_whole() {
        let text = PortableText::encode(b"ok");
        assert_eq!(text.preview(16), text.as_str());
    }
}
