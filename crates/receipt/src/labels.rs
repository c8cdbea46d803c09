//! Localized labels for the verification table.

use serde::{Deserialize, Serialize};

use fatoora_tlv::{
    TAG_INVOICE_TOTAL, TAG_SELLER_NAME, TAG_TAX_AMOUNT, TAG_TAX_REGISTRATION, TAG_TIMESTAMP,
};

/// Display language for receipt text. The payload itself is never
/// localized; only table labels and the disclaimer are.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ar,
    En,
}

impl Language {
    /// Display label for an authority tag.
    pub fn label_for(self, tag: u8) -> &'static str {
        match (self, tag) {
            (Language::En, TAG_SELLER_NAME) => "Seller name",
            (Language::En, TAG_TAX_REGISTRATION) => "VAT registration number",
            (Language::En, TAG_TIMESTAMP) => "Invoice date",
            (Language::En, TAG_INVOICE_TOTAL) => "Total (including VAT)",
            (Language::En, TAG_TAX_AMOUNT) => "VAT amount",
            (Language::En, _) => "Unknown field",
            (Language::Ar, TAG_SELLER_NAME) => "اسم البائع",
            (Language::Ar, TAG_TAX_REGISTRATION) => "رقم التسجيل الضريبي",
            (Language::Ar, TAG_TIMESTAMP) => "تاريخ الفاتورة",
            (Language::Ar, TAG_INVOICE_TOTAL) => "الإجمالي شامل الضريبة",
            (Language::Ar, TAG_TAX_AMOUNT) => "قيمة الضريبة",
            (Language::Ar, _) => "حقل غير معروف",
        }
    }

    /// Disclaimer printed under the code block.
    pub fn disclaimer(self) -> &'static str {
        match self {
            Language::En => {
                "This code is a visual fingerprint of the compliance payload \
                 and cannot be read by an optical scanner."
            }
            Language::Ar => {
                "هذا الرمز بصمة مرئية لحمولة الامتثال ولا يمكن قراءته بالماسح الضوئي."
            }
        }
    }
}
