//! Public API for the mosaic-core crate.
//!
//! This module provides the high-level API: the [`generate`] entry point,
//! the reusable [`MosaicGenerator`] builder and the [`MosaicError`] unified
//! error type.

mod builder;
mod error;

pub use builder::{generate, MosaicGenerator, DEFAULT_RESOLUTION};
pub use error::MosaicError;
