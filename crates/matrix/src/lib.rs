//! `fatoora-matrix` — deterministic matrix synthesis for printed receipts.
//!
//! Renders a portable compliance payload as a fixed-size boolean grid with
//! the structural look of a scan-style code: three finder corners,
//! alternating timing lines, one alignment block, and a data region filled
//! from the payload bytes.
//!
//! The matrix is NOT a standards-compliant optical symbol. It carries no
//! error-correction codewords and no format/version information, and a real
//! scanner cannot decode it. It is a deterministic visual fingerprint of a
//! payload that is compliance-valid on its own, as portable text. Keep it
//! that way; a genuinely scannable symbol is a separate feature.

pub mod grid;
pub mod spec;

pub use grid::QrMatrix;
pub use spec::{DEFAULT_SIZE, MIN_SIZE, MatrixSpec};
