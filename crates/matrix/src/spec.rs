//! Matrix geometry: size validation and reserved-region layout.

use serde::{Deserialize, Serialize};

use fatoora_core::{CodecError, CodecResult};

/// Default grid side length.
pub const DEFAULT_SIZE: usize = 25;

/// Smallest side that fits the finder corners, the timing lines between
/// them and the alignment block (matches the smallest real symbol size).
pub const MIN_SIZE: usize = 21;

const FINDER: usize = 7;
const ALIGNMENT_OFFSET: usize = 9;

/// Validated grid geometry for one synthesis run.
///
/// Regions are disjoint: three 7x7 finder corners at (0,0), (N-7,0) and
/// (0,N-7), the row/column-6 timing lines strictly between the finder
/// zones, one 5x5 alignment block centered at (N-9,N-9), and data cells
/// everywhere else.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct MatrixSpec {
    size: usize,
}

impl Default for MatrixSpec {
    fn default() -> Self {
        Self { size: DEFAULT_SIZE }
    }
}

impl TryFrom<usize> for MatrixSpec {
    type Error = CodecError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<MatrixSpec> for usize {
    fn from(spec: MatrixSpec) -> usize {
        spec.size
    }
}

impl MatrixSpec {
    pub fn new(size: usize) -> CodecResult<Self> {
        if size < MIN_SIZE {
            return Err(CodecError::invalid_matrix_spec(size));
        }
        Ok(Self { size })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell belongs to one of the three finder corners.
    pub fn in_finder(&self, row: usize, col: usize) -> bool {
        let n = self.size;
        let top = row < FINDER;
        let bottom = row >= n - FINDER;
        let left = col < FINDER;
        let right = col >= n - FINDER;
        (top && left) || (top && right) || (bottom && left)
    }

    /// Cell lies on the timing row/column, strictly between finder zones.
    pub fn on_timing(&self, row: usize, col: usize) -> bool {
        let n = self.size;
        let between = |i: usize| i >= FINDER && i < n - FINDER;
        (row == 6 && between(col)) || (col == 6 && between(row))
    }

    /// Cell belongs to the 5x5 alignment block centered at (N-9,N-9).
    pub fn in_alignment(&self, row: usize, col: usize) -> bool {
        let center = (self.size - ALIGNMENT_OFFSET) as isize;
        let dr = row as isize - center;
        let dc = col as isize - center;
        dr.abs() <= 2 && dc.abs() <= 2
    }

    /// Reserved cells never carry payload bits.
    pub fn is_reserved(&self, row: usize, col: usize) -> bool {
        self.in_finder(row, col) || self.on_timing(row, col) || self.in_alignment(row, col)
    }

    /// "On" state of a finder cell: outer ring and 3x3 core are dark, the
    /// ring between them is light.
    pub(crate) fn finder_on(&self, row: usize, col: usize) -> bool {
        let n = self.size;
        let r = if row < FINDER { row } else { row - (n - FINDER) };
        let c = if col < FINDER { col } else { col - (n - FINDER) };
        r == 0 || r == 6 || c == 0 || c == 6 || ((2..=4).contains(&r) && (2..=4).contains(&c))
    }

    /// "On" state of a timing cell: strict alternation by index parity.
    pub(crate) fn timing_on(&self, row: usize, col: usize) -> bool {
        if row == 6 { col % 2 == 0 } else { row % 2 == 0 }
    }

    /// "On" state of an alignment cell: outer ring and single center dark.
    pub(crate) fn alignment_on(&self, row: usize, col: usize) -> bool {
        let center = (self.size - ALIGNMENT_OFFSET) as isize;
        let dr = row as isize - center;
        let dc = col as isize - center;
        dr.abs() == 2 || dc.abs() == 2 || (dr == 0 && dc == 0)
    }
}
