//! Receipt block assembly.

use serde::{Deserialize, Serialize};
use tracing::debug;

use fatoora_core::{CodecResult, InvoiceFields};
use fatoora_matrix::{MatrixSpec, QrMatrix};
use fatoora_tlv::PortableText;

use crate::labels::Language;
use crate::svg::{SvgOptions, matrix_to_svg};

/// Characters of portable text shown in the audit preview line.
const PREVIEW_CHARS: usize = 32;

/// One row of the human-readable verification table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRow {
    pub tag: u8,
    pub label: String,
    pub value: String,
}

/// Localized tag/value table, rows in stream order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationTable {
    pub language: Language,
    pub rows: Vec<VerificationRow>,
}

/// Fully composed printable block for one invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptBlock {
    /// The compliance value itself; embedded verbatim wherever the
    /// authority's tooling expects it.
    pub portable_text: PortableText,
    /// Vector image of the synthesized matrix.
    pub svg: String,
    pub table: VerificationTable,
    pub disclaimer: String,
    /// Truncated portable text, for manual auditing only.
    pub payload_preview: String,
}

/// Render with the default matrix geometry and SVG scaling.
pub fn render(fields: &InvoiceFields, language: Language) -> CodecResult<ReceiptBlock> {
    render_with(fields, language, MatrixSpec::default(), SvgOptions::default())
}

/// Full pipeline: build the TLV stream, transcode it, synthesize the
/// matrix, and decode the same portable text for the verification table.
///
/// The table is deliberately driven by a decode pass rather than by the
/// input fields: it shows what the payload actually says.
pub fn render_with(
    fields: &InvoiceFields,
    language: Language,
    spec: MatrixSpec,
    svg_opts: SvgOptions,
) -> CodecResult<ReceiptBlock> {
    let portable = fatoora_tlv::encode_invoice(fields)?;
    debug!(payload_len = portable.len(), "compliance payload encoded");

    let matrix = QrMatrix::synthesize_with(spec, &portable);
    let svg = matrix_to_svg(&matrix, svg_opts);

    let decoded = fatoora_tlv::decode_portable(&portable)?;
    let rows = decoded
        .into_iter()
        .map(|field| VerificationRow {
            tag: field.tag,
            label: language.label_for(field.tag).to_owned(),
            value: field.value,
        })
        .collect();

    Ok(ReceiptBlock {
        payload_preview: portable.preview(PREVIEW_CHARS),
        portable_text: portable,
        svg,
        table: VerificationTable { language, rows },
        disclaimer: language.disclaimer().to_owned(),
    })
}
