//! SVG rendering of the synthesized matrix.

use serde::{Deserialize, Serialize};

use fatoora_matrix::QrMatrix;

/// Pixel scaling for the vector image.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SvgOptions {
    /// Side length of one matrix cell, in pixels.
    pub module_px: usize,
    /// Light border around the grid, in cell widths.
    pub quiet_modules: usize,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            module_px: 4,
            quiet_modules: 2,
        }
    }
}

/// Render the matrix as a standalone SVG document.
///
/// Dark cells become one `<rect>` each over a white background rect.
/// Output is a deterministic function of the matrix and options.
pub fn matrix_to_svg(matrix: &QrMatrix, opts: SvgOptions) -> String {
    let px = opts.module_px;
    let quiet = opts.quiet_modules;
    let total = (matrix.size() + 2 * quiet) * px;

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{total}\" height=\"{total}\" \
         viewBox=\"0 0 {total} {total}\" shape-rendering=\"crispEdges\">"
    ));
    svg.push_str(&format!(
        "<rect width=\"{total}\" height=\"{total}\" fill=\"#ffffff\"/>"
    ));

    for (row, cells) in matrix.rows().enumerate() {
        for (col, &dark) in cells.iter().enumerate() {
            if dark {
                let x = (col + quiet) * px;
                let y = (row + quiet) * px;
                svg.push_str(&format!(
                    "<rect x=\"{x}\" y=\"{y}\" width=\"{px}\" height=\"{px}\" fill=\"#000000\"/>"
                ));
            }
        }
    }

    svg.push_str("</svg>");
    svg
}
