//! mosaic-core: inventory-constrained mosaic generation
//!
//! This library turns a small square raster into a mosaic made only of
//! colors from a stocked palette. Every palette color has a finite count;
//! pixels compete for it and the visually important ones choose first.
//!
//! # Quick Start
//!
//! ```
//! use mosaic_core::{MosaicGenerator, Palette, RasterBuffer, Rgb};
//!
//! let palette = Palette::from_hex(&[
//!     ("Black", "#1B2A34", 3),
//!     ("White", "#F4F4F4", 1),
//! ])
//! .unwrap();
//!
//! let generator = MosaicGenerator::new(palette).resolution(2);
//! let raster = RasterBuffer::new(vec![Rgb::new(255, 255, 255); 4], 2, 2).unwrap();
//! let result = generator.generate(&raster).unwrap();
//!
//! // The first white pixel takes the only white piece; the rest get black.
//! assert_eq!(result.color_name_at(0, 0), Some("White"));
//! assert_eq!(result.color_name_at(1, 0), Some("Black"));
//! assert_eq!(result.summary().total_used, 4);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! RasterBuffer (N×N, row-major)
//!     |
//!     v
//! rank::processing_order      luma = 0.299r + 0.587g + 0.114b,
//!     |                       descending, stable on ties
//!     v
//! matcher::assign             per pixel: nearest in-stock entry
//!     |                       (Euclidean RGB, first declared wins ties),
//!     |                       take one unit from the StockLedger
//!     v
//! RunResult                   RGB buffer, name lookup, Summary
//! ```
//!
//! # Greedy inventory
//!
//! Assignment is greedy, not optimal: a bright pixel will take the last unit
//! of its best color even if a later pixel needed it more. Because the
//! brightest pixels go first, exhaustion always hits the darkest pixels,
//! which are left [`Unassigned`](matcher::Assignment::Unassigned) and render
//! black.
//!
//! # Runs and sharing
//!
//! A [`Palette`] is immutable. Each run builds its own
//! [`StockLedger`](matcher::StockLedger) from the palette's original stocks
//! and returns it inside the [`RunResult`], so repeated runs on the same
//! input are identical and one palette can serve many runs at once.

pub mod api;
pub mod color;
pub mod matcher;
pub mod output;
pub mod palette;
pub mod rank;
pub mod raster;

#[cfg(test)]
mod domain_tests;

pub use api::{generate, MosaicError, MosaicGenerator, DEFAULT_RESOLUTION};
pub use color::{ParseColorError, Rgb};
pub use matcher::{Assignment, StockLedger};
pub use output::{RunResult, Summary, SummaryRow, OUT_OF_STOCK};
pub use palette::{Palette, PaletteEntry, PaletteError};
pub use raster::{InputSizeError, RasterBuffer};
