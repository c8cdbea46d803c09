//! Single TLV field encoding.

use fatoora_core::{CodecError, CodecResult};

/// Longest value one field can carry: the length prefix is a single byte.
pub const MAX_FIELD_LEN: usize = 255;

/// One tag-length-value record.
///
/// The length byte is not stored; it is derived from the value bytes at
/// write time and guaranteed by construction to fit in one byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlvField {
    tag: u8,
    value: Vec<u8>,
}

impl TlvField {
    /// Encode `value` as UTF-8 and wrap it under `tag`.
    ///
    /// A value longer than [`MAX_FIELD_LEN`] bytes has no representable
    /// length prefix and is rejected with `FieldTooLong`. (The reference
    /// behavior kept only the low eight bits of the count, emitting a
    /// stream whose declared length disagrees with the actual value.)
    ///
    /// No other validation is performed; the authority's contract
    /// constrains positional byte layout, not tag range or content.
    pub fn new(tag: u8, value: &str) -> CodecResult<Self> {
        let bytes = value.as_bytes();
        if bytes.len() > MAX_FIELD_LEN {
            return Err(CodecError::field_too_long(tag, bytes.len()));
        }
        Ok(Self {
            tag,
            value: bytes.to_vec(),
        })
    }

    pub fn tag(&self) -> u8 {
        self.tag
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Total encoded size: tag byte + length byte + value bytes.
    pub fn encoded_len(&self) -> usize {
        2 + self.value.len()
    }

    /// Append tag, length, value to `out`.
    pub fn write_into(&self, out: &mut Vec<u8>) {
        out.push(self.tag);
        out.push(self.value.len() as u8);
        out.extend_from_slice(&self.value);
    }
}
