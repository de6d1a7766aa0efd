use super::error::InputSizeError;
use crate::color::Rgb;

/// A validated, row-major raster of RGB pixels.
///
/// Pixel `(x, y)` lives at index `y * width + x`. Alpha, when supplied, is
/// dropped at construction.
///
/// # Example
///
/// ```
/// use mosaic_core::{RasterBuffer, Rgb};
///
/// let bytes = [255, 0, 0, 255, 0, 0, 255, 255];
/// let raster = RasterBuffer::from_bytes(&bytes, 2, 1, 4).unwrap();
///
/// assert_eq!(raster.pixel(1, 0), Rgb::new(0, 0, 255));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    pixels: Vec<Rgb>,
    width: usize,
    height: usize,
}

impl RasterBuffer {
    /// Wrap already-decoded pixels.
    ///
    /// # Errors
    ///
    /// - [`InputSizeError::DimensionsOverflow`] if `width * height` overflows
    /// - [`InputSizeError::BufferLength`] if `pixels.len() != width * height`
    pub fn new(pixels: Vec<Rgb>, width: usize, height: usize) -> Result<Self, InputSizeError> {
        let expected = expected_len(width, height, 1)?;
        if pixels.len() != expected {
            return Err(InputSizeError::BufferLength {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Build from interleaved 8-bit bytes with 3 or 4 channels.
    ///
    /// # Errors
    ///
    /// - [`InputSizeError::UnsupportedChannels`] for any channel count but 3 or 4
    /// - [`InputSizeError::DimensionsOverflow`] if `width * height * channels` overflows
    /// - [`InputSizeError::BufferLength`] if `bytes.len() != width * height * channels`
    pub fn from_bytes(
        bytes: &[u8],
        width: usize,
        height: usize,
        channels: usize,
    ) -> Result<Self, InputSizeError> {
        if channels != 3 && channels != 4 {
            return Err(InputSizeError::UnsupportedChannels(channels));
        }
        let expected = expected_len(width, height, channels)?;
        if bytes.len() != expected {
            return Err(InputSizeError::BufferLength {
                expected,
                actual: bytes.len(),
            });
        }

        let pixels = bytes
            .chunks_exact(channels)
            .map(|px| Rgb::new(px[0], px[1], px[2]))
            .collect();

        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// The pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the buffer.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.pixels[y * self.width + x]
    }

    /// Side length N if the buffer is square.
    ///
    /// # Errors
    ///
    /// [`InputSizeError::NotSquare`] otherwise.
    pub fn square_size(&self) -> Result<usize, InputSizeError> {
        if self.width != self.height {
            return Err(InputSizeError::NotSquare {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.width)
    }

    /// Check that the buffer is exactly `resolution x resolution`.
    ///
    /// # Errors
    ///
    /// [`InputSizeError::ResolutionMismatch`] otherwise.
    pub fn ensure_resolution(&self, resolution: usize) -> Result<(), InputSizeError> {
        if self.width != resolution || self.height != resolution {
            return Err(InputSizeError::ResolutionMismatch {
                expected: resolution,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Element count for the declared shape, or an error if it overflows.
fn expected_len(width: usize, height: usize, channels: usize) -> Result<usize, InputSizeError> {
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(channels))
        .ok_or(InputSizeError::DimensionsOverflow { width, height })
}
