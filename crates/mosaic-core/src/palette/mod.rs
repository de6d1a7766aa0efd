//! Palette types
//!
//! This module provides the stocked [`Palette`] and its validation errors.

mod error;
mod palette;

pub use error::PaletteError;
pub use palette::{Palette, PaletteEntry};
