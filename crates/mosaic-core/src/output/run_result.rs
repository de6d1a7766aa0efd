//! RunResult: per-pixel assignments plus final stock.

use super::summary::Summary;
use crate::color::Rgb;
use crate::matcher::{Assignment, StockLedger};
use crate::palette::Palette;

/// Label reported for cells that received no palette color.
pub const OUT_OF_STOCK: &str = "Out of Stock";

/// The complete outcome of one mosaic run.
///
/// Assignments are stored row-major over an N×N grid. The palette is owned
/// so that names and colors resolve without the caller keeping the input
/// around.
///
/// # Example
///
/// ```
/// use mosaic_core::{generate, Palette, RasterBuffer, Rgb};
///
/// let palette = Palette::new([("White", Rgb::new(255, 255, 255), 1)]).unwrap();
/// let raster = RasterBuffer::new(vec![Rgb::new(250, 250, 250); 4], 2, 2).unwrap();
/// let result = generate(&raster, &palette).unwrap();
///
/// assert_eq!(result.color_name_at(0, 0), Some("White"));
/// assert_eq!(result.color_name_at(1, 0), Some("Out of Stock"));
/// assert_eq!(result.unassigned_count(), 3);
/// assert_eq!(result.to_rgb().len(), 2 * 2 * 3);
/// ```
///
/// Results only come out of a run; a caller cannot pair assignments with a
/// ledger from some other palette:
///
/// ```compile_fail
/// use mosaic_core::{Palette, Rgb, RunResult, StockLedger};
///
/// let palette = Palette::new([("White", Rgb::new(255, 255, 255), 1)]).unwrap();
/// let ledger = StockLedger::from_palette(&palette);
/// let _ = RunResult::new(Vec::new(), ledger, 5, palette);
/// ```
#[derive(Debug, Clone)]
pub struct RunResult {
    assignments: Vec<Assignment>,
    ledger: StockLedger,
    size: usize,
    palette: Palette,
}

impl RunResult {
    /// Bundle matcher output into a result.
    ///
    /// Callers pass the ledger built from `palette` and one assignment per
    /// cell; both are debug-asserted.
    pub(crate) fn new(
        assignments: Vec<Assignment>,
        ledger: StockLedger,
        size: usize,
        palette: Palette,
    ) -> Self {
        debug_assert_eq!(
            assignments.len(),
            size * size,
            "assignments length ({}) must match size * size ({size}x{size})",
            assignments.len(),
        );
        debug_assert_eq!(ledger.as_slice().len(), palette.len());
        Self {
            assignments,
            ledger,
            size,
            palette,
        }
    }

    /// Side length N of the mosaic.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The palette the mosaic was built from.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Per-pixel assignments, row-major.
    #[inline]
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Stock left at the end of the run.
    #[inline]
    pub fn ledger(&self) -> &StockLedger {
        &self.ledger
    }

    /// Remaining stock per palette name, in declared order.
    pub fn remaining_stock(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.palette
            .names()
            .zip(self.ledger.as_slice().iter().copied())
    }

    /// Remaining stock for a single name.
    pub fn remaining_of(&self, name: &str) -> Option<u32> {
        self.palette
            .index_of(name)
            .map(|idx| self.ledger.remaining(idx))
    }

    /// Assignment of the cell at `(x, y)`, `None` outside the grid.
    pub fn assignment_at(&self, x: usize, y: usize) -> Option<Assignment> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(self.assignments[y * self.size + x])
    }

    /// Palette name at `(x, y)`, [`OUT_OF_STOCK`] for unassigned cells,
    /// `None` outside the grid.
    pub fn color_name_at(&self, x: usize, y: usize) -> Option<&str> {
        self.assignment_at(x, y).map(|a| self.label(a))
    }

    /// Mosaic color at `(x, y)`, black for unassigned cells.
    pub fn rgb_at(&self, x: usize, y: usize) -> Option<Rgb> {
        self.assignment_at(x, y).map(|a| self.rgb(a))
    }

    /// Names for every cell as rows of length N.
    pub fn name_map(&self) -> Vec<Vec<&str>> {
        if self.size == 0 {
            return Vec::new();
        }
        self.assignments
            .chunks(self.size)
            .map(|row| row.iter().map(|&a| self.label(a)).collect())
            .collect()
    }

    /// Number of cells that received no color.
    pub fn unassigned_count(&self) -> usize {
        self.assignments.iter().filter(|a| a.is_unassigned()).count()
    }

    /// Flat `[R, G, B, ...]` buffer of length `N * N * 3`.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.assignments.len() * 3);
        for &a in &self.assignments {
            rgb.extend_from_slice(&self.rgb(a).to_bytes());
        }
        rgb
    }

    /// Flat `[R, G, B, A, ...]` buffer with opaque alpha.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.assignments.len() * 4);
        for &a in &self.assignments {
            rgba.extend_from_slice(&self.rgb(a).to_bytes());
            rgba.push(255);
        }
        rgba
    }

    /// Usage report for this run.
    pub fn summary(&self) -> Summary {
        Summary::from_run(self)
    }

    fn label(&self, assignment: Assignment) -> &str {
        match assignment {
            Assignment::Color(idx) => self.palette.entry(idx).name(),
            Assignment::Unassigned => OUT_OF_STOCK,
        }
    }

    fn rgb(&self, assignment: Assignment) -> Rgb {
        match assignment {
            Assignment::Color(idx) => self.palette.entry(idx).rgb(),
            Assignment::Unassigned => Rgb::BLACK,
        }
    }
}
