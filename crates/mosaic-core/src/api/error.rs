//! Unified error type for the mosaic-core public API.
//!
//! [`MosaicError`] wraps all error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use thiserror::Error;

use crate::palette::PaletteError;
use crate::raster::InputSizeError;

/// Unified error type for the mosaic-core public API.
///
/// Palette problems surface at load time, raster problems before the
/// matcher starts. Running out of stock is never an error.
///
/// # Example
///
/// ```
/// use mosaic_core::{MosaicError, Palette};
///
/// fn load() -> Result<Palette, MosaicError> {
///     let palette = Palette::from_hex(&[("Black", "#000000", 10)])?;
///     Ok(palette)
/// }
/// # load().unwrap();
/// ```
#[derive(Debug, Error)]
pub enum MosaicError {
    /// Palette validation error (empty, duplicate name, bad stock or color)
    #[error("palette error: {0}")]
    Config(#[from] PaletteError),
    /// Raster shape does not fit the run
    #[error("input size error: {0}")]
    InputSize(#[from] InputSizeError),
}
