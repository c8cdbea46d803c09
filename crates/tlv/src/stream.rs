//! Five-field TLV stream assembly.

use fatoora_core::{CodecResult, InvoiceFields};

use crate::field::TlvField;

/// Authority-assigned tags, in mandated stream order.
pub const TAG_SELLER_NAME: u8 = 1;
pub const TAG_TAX_REGISTRATION: u8 = 2;
pub const TAG_TIMESTAMP: u8 = 3;
pub const TAG_INVOICE_TOTAL: u8 = 4;
pub const TAG_TAX_AMOUNT: u8 = 5;

/// Contiguous TLV byte stream for one invoice.
///
/// Exactly five fields, tags 1..=5 in order: seller name, tax registration
/// number, timestamp, total, tax amount. Consumers parse positionally, so
/// the order is part of the contract, not a convenience.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlvStream {
    bytes: Vec<u8>,
}

impl TlvStream {
    /// Encode the five invoice fields in tag order.
    ///
    /// Both amounts are rendered with exactly two decimals before encoding
    /// (`"115.00"`, never `"115"` or `"115.0"`). Fields are concatenated
    /// with no separators, no stream-level length prefix and no terminator;
    /// boundaries are self-describing via each field's own length byte.
    pub fn build(fields: &InvoiceFields) -> CodecResult<Self> {
        let records = [
            TlvField::new(TAG_SELLER_NAME, &fields.seller_name)?,
            TlvField::new(TAG_TAX_REGISTRATION, &fields.tax_registration_number)?,
            TlvField::new(TAG_TIMESTAMP, &fields.timestamp)?,
            TlvField::new(TAG_INVOICE_TOTAL, &fields.invoice_total.to_string())?,
            TlvField::new(TAG_TAX_AMOUNT, &fields.tax_amount.to_string())?,
        ];

        let mut bytes = Vec::with_capacity(records.iter().map(TlvField::encoded_len).sum());
        for record in &records {
            record.write_into(&mut bytes);
        }
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fatoora_core::Amount;

    fn sample_fields() -> InvoiceFields {
        InvoiceFields {
            seller_name: "Sanad Store".to_string(),
            tax_registration_number: "300000000000003".to_string(),
            timestamp: "2026-02-06T14:30:00Z".to_string(),
            invoice_total: Amount::from_major(115),
            tax_amount: Amount::from_major(15),
        }
    }

    /// Walk the raw bytes by hand, independent of the decoder.
    fn split_records(bytes: &[u8]) -> Vec<(u8, Vec<u8>)> {
        let mut records = Vec::new();
        let mut cursor = 0;
        while cursor < bytes.len() {
            let tag = bytes[cursor];
            let len = bytes[cursor + 1] as usize;
            records.push((tag, bytes[cursor + 2..cursor + 2 + len].to_vec()));
            cursor += 2 + len;
        }
        records
    }

    #[test]
    fn emits_five_records_in_tag_order() {
        let stream = TlvStream::build(&sample_fields()).unwrap();
        let records = split_records(stream.as_bytes());

        let tags: Vec<u8> = records.iter().map(|(tag, _)| *tag).collect();
        assert_eq!(tags, vec![1, 2, 3, 4, 5]);

        let values: Vec<String> = records
            .iter()
            .map(|(_, value)| String::from_utf8(value.clone()).unwrap())
            .collect();
        assert_eq!(
            values,
            vec![
                "Sanad Store",
                "300000000000003",
                "2026-02-06T14:30:00Z",
                "115.00",
                "15.00",
            ]
        );
    }

    #[test]
    fn stream_has_no_framing_overhead() {
        let stream = TlvStream::build(&sample_fields()).unwrap();
        let expected: usize = ["Sanad Store", "300000000000003", "2026-02-06T14:30:00Z"]
            .iter()
            .map(|value| 2 + value.len())
            .sum::<usize>()
            + (2 + "115.00".len())
            + (2 + "15.00".len());
        assert_eq!(stream.len(), expected);
    }

    #[test]
    fn amounts_are_reformatted_even_when_already_round() {
        let mut fields = sample_fields();
        fields.invoice_total = Amount::from_minor(11550);
        fields.tax_amount = Amount::ZERO;
        let stream = TlvStream::build(&fields).unwrap();
        let records = split_records(stream.as_bytes());
        assert_eq!(records[3].1, b"115.50");
        assert_eq!(records[4].1, b"0.00");
    }

    #[test]
    fn oversized_seller_name_propagates_field_too_long() {
        let mut fields = sample_fields();
        fields.seller_name = "s".repeat(300);
        let err = TlvStream::build(&fields).unwrap_err();
        assert!(matches!(
            err,
            fatoora_core::CodecError::FieldTooLong { tag: 1, len: 300 }
        ));
    }
}
