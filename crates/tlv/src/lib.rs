//! `fatoora-tlv` — TLV payload codec for the tax-authority QR contract.
//!
//! Byte layout (must match the authority's tooling exactly): tag byte,
//! length byte, UTF-8 value bytes, repeated for tags 1..=5 in order:
//! seller name, tax registration number, ISO-8601 timestamp, invoice total
//! formatted to two decimals, tax amount formatted to two decimals.
//!
//! Implemented purely as deterministic codec logic (no IO, no HTTP, no
//! storage).

pub mod decode;
pub mod field;
pub mod portable;
pub mod stream;

pub use decode::{DecodedField, decode_portable, decode_stream, value_of};
pub use field::{MAX_FIELD_LEN, TlvField};
pub use portable::PortableText;
pub use stream::{
    TAG_INVOICE_TOTAL, TAG_SELLER_NAME, TAG_TAX_AMOUNT, TAG_TAX_REGISTRATION, TAG_TIMESTAMP,
    TlvStream,
};

use fatoora_core::{CodecResult, InvoiceFields};

/// Encode invoice fields straight to the portable compliance string.
///
/// Equivalent to building the TLV stream and transcoding it; this is the
/// value embedded verbatim wherever the authority expects it.
pub fn encode_invoice(fields: &InvoiceFields) -> CodecResult<PortableText> {
    Ok(PortableText::encode(TlvStream::build(fields)?.as_bytes()))
}
