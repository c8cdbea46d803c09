use anyhow::Result;
use chrono::Utc;

use fatoora_core::{Amount, InvoiceFields};
use fatoora_matrix::QrMatrix;
use fatoora_receipt::{Language, render};

fn main() -> Result<()> {
    fatoora_observability::init();

    let fields = InvoiceFields::new(
        "Sanad Store",
        "300000000000003",
        Utc::now(),
        Amount::from_major(115),
        Amount::from_major(15),
    );

    let block = render(&fields, Language::En)?;

    tracing::info!(payload = %block.portable_text, "compliance payload generated");

    println!("payload: {}", block.payload_preview);
    println!();
    println!("{}", QrMatrix::synthesize(&block.portable_text).to_ascii());
    for row in &block.table.rows {
        println!("{:<26} {}", row.label, row.value);
    }
    println!();
    println!("{}", block.disclaimer);

    Ok(())
}
