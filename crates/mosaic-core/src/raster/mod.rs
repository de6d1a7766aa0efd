//! Raster input validation
//!
//! The core never decodes or resizes images. It accepts an already-sized,
//! row-major 8-bit buffer with 3 (RGB) or 4 (RGBA, alpha ignored) channels
//! and checks its shape before any matching happens.

mod buffer;
mod error;

pub use buffer::RasterBuffer;
pub use error::InputSizeError;
