//! `fatoora-receipt` — printable receipt block assembly.
//!
//! Composes the synthesized matrix (as an SVG vector image), a localized
//! verification table driven by decoding the compliance payload, and
//! disclaimer text into one renderable block. No IO and no external calls;
//! pure composition over the codec and matrix crates.

pub mod assemble;
pub mod labels;
pub mod svg;

pub use assemble::{ReceiptBlock, VerificationRow, VerificationTable, render, render_with};
pub use labels::Language;
pub use svg::{SvgOptions, matrix_to_svg};
