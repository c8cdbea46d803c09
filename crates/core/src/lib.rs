//! `fatoora-core` — shared primitives for the compliance QR subsystem.
//!
//! This crate contains **pure domain** types (no infrastructure concerns):
//! the codec error taxonomy, the fixed-two-decimal monetary amount, and the
//! invoice field bundle the rest of the pipeline consumes.

pub mod amount;
pub mod error;
pub mod fields;

pub use amount::Amount;
pub use error::{CodecError, CodecResult};
pub use fields::InvoiceFields;
