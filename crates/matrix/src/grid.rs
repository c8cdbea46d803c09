//! Grid synthesis from a portable payload.

use fatoora_tlv::PortableText;

use crate::spec::MatrixSpec;

/// An N x N boolean grid: `true` cells print dark.
///
/// Constructed once per render call and immutable afterwards; never cached
/// across invoices. A pure function of its input: the same portable text
/// always produces bit-for-bit identical cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMatrix {
    spec: MatrixSpec,
    cells: Vec<bool>,
}

impl QrMatrix {
    /// Synthesize with the default 25x25 geometry.
    pub fn synthesize(text: &PortableText) -> Self {
        Self::synthesize_with(MatrixSpec::default(), text)
    }

    /// Synthesize with an explicit geometry.
    ///
    /// Structural regions are laid down first, in precedence order: finder
    /// corners, then timing lines, then the alignment block. The data pass
    /// then walks every remaining cell in row-major order, taking bit
    /// `i % 8` of payload byte `(i / 8) % payload_len`; the payload byte
    /// view cycles when the data region outruns it, and reserved cells
    /// never consume a bit.
    pub fn synthesize_with(spec: MatrixSpec, text: &PortableText) -> Self {
        let n = spec.size();
        let mut cells = vec![false; n * n];

        for row in 0..n {
            for col in 0..n {
                if spec.in_finder(row, col) {
                    cells[row * n + col] = spec.finder_on(row, col);
                } else if spec.on_timing(row, col) {
                    cells[row * n + col] = spec.timing_on(row, col);
                } else if spec.in_alignment(row, col) {
                    cells[row * n + col] = spec.alignment_on(row, col);
                }
            }
        }

        let payload = text.as_bytes();
        if !payload.is_empty() {
            let mut bit = 0usize;
            for row in 0..n {
                for col in 0..n {
                    if spec.is_reserved(row, col) {
                        continue;
                    }
                    let byte = payload[(bit / 8) % payload.len()];
                    cells[row * n + col] = (byte >> (bit % 8)) & 1 == 1;
                    bit += 1;
                }
            }
        }

        Self { spec, cells }
    }

    pub fn spec(&self) -> MatrixSpec {
        self.spec
    }

    pub fn size(&self) -> usize {
        self.spec.size()
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.size() + col]
    }

    pub fn is_reserved(&self, row: usize, col: usize) -> bool {
        self.spec.is_reserved(row, col)
    }

    /// Row slices in top-to-bottom order.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.size())
    }

    /// Terminal rendering, two characters per cell.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.size() * (self.size() * 2 + 1));
        for row in self.rows() {
            for &cell in row {
                out.push_str(if cell { "██" } else { "  " });
            }
            out.push('\n');
        }
        out
    }
}
