//! Codec error model.

use thiserror::Error;

/// Result type used across the codec pipeline.
pub type CodecResult<T> = Result<T, CodecError>;

/// Recoverable encode/decode failure.
///
/// Keep this focused on deterministic payload failures. A single malformed
/// invoice must surface as an `Err` to the caller, never abort the receipt
/// pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A field's UTF-8 byte length exceeds the single TLV length byte (255).
    #[error("field {tag} too long: {len} bytes exceeds the 255-byte TLV limit")]
    FieldTooLong { tag: u8, len: usize },

    /// A TLV buffer ended mid-field or declared a length past its end.
    #[error("malformed TLV at offset {offset}: {reason}")]
    MalformedTlv { offset: usize, reason: String },

    /// Portable text could not be transcoded back to payload bytes.
    #[error("invalid portable text: {reason}")]
    InvalidPortableText { reason: String },

    /// A matrix size too small to hold the reserved structural regions.
    #[error("invalid matrix size {size}: too small for the reserved patterns")]
    InvalidMatrixSpec { size: usize },
}

impl CodecError {
    pub fn field_too_long(tag: u8, len: usize) -> Self {
        Self::FieldTooLong { tag, len }
    }

    pub fn malformed_tlv(offset: usize, reason: impl Into<String>) -> Self {
        Self::MalformedTlv {
            offset,
            reason: reason.into(),
        }
    }

    pub fn invalid_portable_text(reason: impl Into<String>) -> Self {
        Self::InvalidPortableText {
            reason: reason.into(),
        }
    }

    pub fn invalid_matrix_spec(size: usize) -> Self {
        Self::InvalidMatrixSpec { size }
    }
}
