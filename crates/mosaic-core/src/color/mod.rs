//! Color types
//!
//! Mosaic matching works directly on 8-bit RGB triples. There is no gamma
//! decoding and no perceptual space: the match metric is plain Euclidean
//! distance between byte values, and importance is the Rec. 601 luma of the
//! same bytes.
//!
//! # Example
//!
//! ```
//! use mosaic_core::Rgb;
//!
//! let red = Rgb::new(255, 0, 0);
//! let near_red: Rgb = "#FA0505".parse().unwrap();
//!
//! assert!(red.distance(near_red) < 8.0);
//! ```

mod rgb;

pub use rgb::{ParseColorError, Rgb};
