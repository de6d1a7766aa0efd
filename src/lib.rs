//! Stockmosaic - mosaics from a limited inventory of colored pieces
//!
//! Application layer around `mosaic-core`: palette configuration, image
//! decoding, PNG and summary rendering, and the session service used by the
//! CLI. This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
