use thiserror::Error;

/// Error type for raster buffers whose shape does not fit a mosaic run.
///
/// Always raised before the matcher starts; a run never begins on a
/// mis-sized buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputSizeError {
    /// Channel count other than 3 (RGB) or 4 (RGBA)
    #[error("unsupported channel count {0} (expected 3 or 4)")]
    UnsupportedChannels(usize),
    /// Byte length does not match `width * height * channels`
    #[error("buffer length {actual} does not match expected {expected}")]
    BufferLength {
        /// Bytes required by the declared dimensions
        expected: usize,
        /// Bytes actually supplied
        actual: usize,
    },
    /// `width * height * channels` does not fit in `usize`
    #[error("raster dimensions {width}x{height} are too large")]
    DimensionsOverflow {
        /// Declared width in pixels
        width: usize,
        /// Declared height in pixels
        height: usize,
    },
    /// Mosaics are square; the buffer is not
    #[error("raster must be square, got {width}x{height}")]
    NotSquare {
        /// Buffer width in pixels
        width: usize,
        /// Buffer height in pixels
        height: usize,
    },
    /// Buffer is square but not at the configured working resolution
    #[error("raster is {width}x{height}, expected {expected}x{expected}")]
    ResolutionMismatch {
        /// Configured working resolution N
        expected: usize,
        /// Buffer width in pixels
        width: usize,
        /// Buffer height in pixels
        height: usize,
    },
}
