//! MosaicGenerator builder -- the primary ergonomic entry point for the crate.
//!
//! [`MosaicGenerator`] wraps the ranking, matching and assembly pipeline
//! behind a small builder that pins the working resolution.

use crate::matcher::{assign, StockLedger};
use crate::output::RunResult;
use crate::palette::Palette;
use crate::rank::processing_order;
use crate::raster::RasterBuffer;

use super::error::MosaicError;

/// Working resolution used when none is configured.
pub const DEFAULT_RESOLUTION: usize = 48;

/// Generate a mosaic from a square raster.
///
/// Accepts any N×N buffer; use [`MosaicGenerator`] to pin N.
///
/// # Errors
///
/// [`MosaicError::InputSize`] if the raster is not square.
///
/// # Example
///
/// ```
/// use mosaic_core::{generate, Palette, RasterBuffer, Rgb};
///
/// let palette = Palette::new([
///     ("Red", Rgb::new(255, 0, 0), 1),
///     ("Blue", Rgb::new(0, 0, 255), 1),
/// ])
/// .unwrap();
/// let raster = RasterBuffer::new(
///     vec![
///         Rgb::new(255, 0, 0),
///         Rgb::new(0, 0, 255),
///         Rgb::new(250, 5, 5),
///         Rgb::new(0, 0, 0),
///     ],
///     2,
///     2,
/// )
/// .unwrap();
///
/// let result = generate(&raster, &palette).unwrap();
/// assert_eq!(result.color_name_at(0, 1), Some("Red")); // pixel 2 was served first
/// assert_eq!(result.color_name_at(0, 0), Some("Blue"));
/// assert_eq!(result.summary().total_used, 2);
/// ```
pub fn generate(raster: &RasterBuffer, palette: &Palette) -> Result<RunResult, MosaicError> {
    let size = raster.square_size()?;
    Ok(run(raster, palette, size))
}

/// Rank, match and assemble. The raster is already validated.
fn run(raster: &RasterBuffer, palette: &Palette, size: usize) -> RunResult {
    let pixels = raster.pixels();
    let order = processing_order(pixels);
    let (assignments, ledger) = assign(pixels, &order, palette, StockLedger::from_palette(palette));

    let result = RunResult::new(assignments, ledger, size, palette.clone());
    tracing::debug!(
        size,
        palette = palette.len(),
        unassigned = result.unassigned_count(),
        remaining = result.ledger().total_remaining(),
        "mosaic run complete"
    );
    result
}

/// Reusable mosaic generator bound to a palette and a working resolution.
///
/// # Design
///
/// - Constructor requires a validated [`Palette`] (no invalid states)
/// - Configuration methods consume and return `self`
/// - [`generate()`](Self::generate) takes `&self`; every call starts from
///   the palette's original stock, so the generator is reusable across
///   images and runs are independent
///
/// # Example
///
/// ```
/// use mosaic_core::{MosaicGenerator, Palette, RasterBuffer, Rgb};
///
/// let palette = Palette::new([("Grey", Rgb::new(128, 128, 128), 100)]).unwrap();
/// let generator = MosaicGenerator::new(palette).resolution(4);
///
/// let raster = RasterBuffer::new(vec![Rgb::new(120, 120, 120); 16], 4, 4).unwrap();
/// let result = generator.generate(&raster).unwrap();
///
/// assert_eq!(result.size(), 4);
/// assert_eq!(result.remaining_of("Grey"), Some(84));
/// ```
#[derive(Debug, Clone)]
pub struct MosaicGenerator {
    palette: Palette,
    resolution: usize,
}

impl MosaicGenerator {
    /// Create a generator at [`DEFAULT_RESOLUTION`].
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            resolution: DEFAULT_RESOLUTION,
        }
    }

    /// Set the working resolution N.
    #[inline]
    pub fn resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    /// The configured working resolution N.
    #[inline]
    pub fn working_resolution(&self) -> usize {
        self.resolution
    }

    /// The palette every run starts from.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Generate a mosaic from an N×N raster.
    ///
    /// # Errors
    ///
    /// [`MosaicError::InputSize`] unless the raster is exactly N×N.
    pub fn generate(&self, raster: &RasterBuffer) -> Result<RunResult, MosaicError> {
        raster.ensure_resolution(self.resolution)?;
        Ok(run(raster, &self.palette, self.resolution))
    }
}
