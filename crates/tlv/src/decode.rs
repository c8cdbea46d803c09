//! Bounds-checked TLV stream decoding.

use serde::{Deserialize, Serialize};

use fatoora_core::{CodecError, CodecResult};

use crate::portable::PortableText;

/// One decoded tag/value pair, preserving stream order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedField {
    pub tag: u8,
    pub value: String,
}

/// Walk `bytes` as tag/length/value records until the cursor lands exactly
/// on the end of the buffer.
///
/// Every slice is preceded by a remaining-length check. A length byte that
/// points past the end, a buffer that stops mid-field, or value bytes that
/// are not valid UTF-8 all yield `MalformedTlv` carrying the offset of the
/// offending record.
///
/// Output order is insertion order (tag 1 before tag 2, and so on);
/// downstream verification-table rendering depends on it.
pub fn decode_stream(bytes: &[u8]) -> CodecResult<Vec<DecodedField>> {
    let mut fields = Vec::new();
    let mut cursor = 0usize;

    while cursor < bytes.len() {
        let record_start = cursor;
        if bytes.len() - cursor < 2 {
            return Err(CodecError::malformed_tlv(
                record_start,
                "buffer ends inside tag/length header",
            ));
        }
        let tag = bytes[cursor];
        let len = bytes[cursor + 1] as usize;
        cursor += 2;

        if bytes.len() - cursor < len {
            return Err(CodecError::malformed_tlv(
                record_start,
                format!(
                    "declared length {len} exceeds the {} remaining bytes",
                    bytes.len() - cursor
                ),
            ));
        }
        let raw = &bytes[cursor..cursor + len];
        cursor += len;

        let value = std::str::from_utf8(raw)
            .map_err(|_| CodecError::malformed_tlv(record_start, "field value is not valid UTF-8"))?
            .to_owned();

        fields.push(DecodedField { tag, value });
    }

    Ok(fields)
}

/// Decode from the portable text form.
pub fn decode_portable(text: &PortableText) -> CodecResult<Vec<DecodedField>> {
    decode_stream(&text.decode_payload()?)
}

/// First value carried under `tag`, if present.
pub fn value_of(fields: &[DecodedField], tag: u8) -> Option<&str> {
    fields
        .iter()
        .find(|field| field.tag == tag)
        .map(|field| field.value.as_str())
}
