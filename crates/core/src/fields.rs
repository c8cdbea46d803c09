//! Invoice field bundle consumed by the compliance pipeline.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::amount::Amount;

/// The five inputs the tax-authority payload is built from.
///
/// Supplied by the invoicing flow; this subsystem treats the contents as
/// opaque. In particular `tax_registration_number` is expected to be 15
/// digits but is NOT validated here: the authority's layout constrains
/// positional bytes, not content. Content validation belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceFields {
    pub seller_name: String,
    pub tax_registration_number: String,
    /// ISO-8601 timestamp, kept as opaque text end to end.
    pub timestamp: String,
    /// Invoice total, tax included.
    pub invoice_total: Amount,
    pub tax_amount: Amount,
}

impl InvoiceFields {
    /// Build from a concrete instant, formatting the timestamp as RFC 3339
    /// UTC with second precision (`2026-02-06T14:30:00Z`).
    pub fn new(
        seller_name: impl Into<String>,
        tax_registration_number: impl Into<String>,
        issued_at: DateTime<Utc>,
        invoice_total: Amount,
        tax_amount: Amount,
    ) -> Self {
        Self {
            seller_name: seller_name.into(),
            tax_registration_number: tax_registration_number.into(),
            timestamp: issued_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            invoice_total,
            tax_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn new_formats_timestamp_as_utc_seconds() {
        let issued_at = Utc.with_ymd_and_hms(2026, 2, 6, 14, 30, 0).unwrap();
        let fields = InvoiceFields::new(
            "Sanad Store",
            "300000000000003",
            issued_at,
            Amount::from_major(115),
            Amount::from_major(15),
        );
        assert_eq!(fields.timestamp, "2026-02-06T14:30:00Z");
    }

    #[test]
    fn serde_round_trip() {
        let fields = InvoiceFields {
            seller_name: "متجر سند".to_string(),
            tax_registration_number: "300000000000003".to_string(),
            timestamp: "2026-02-06T14:30:00Z".to_string(),
            invoice_total: Amount::from_minor(11500),
            tax_amount: Amount::from_minor(1500),
        };
        let json = serde_json::to_string(&fields).unwrap();
        let back: InvoiceFields = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fields);
    }
}
