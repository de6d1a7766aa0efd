//! Error types for palette operations

use thiserror::Error;

use crate::color::ParseColorError;

/// Error type for palette validation.
///
/// Returned when a palette definition is malformed. These are load-time
/// configuration errors: a palette that fails validation never reaches a
/// mosaic run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// No colors provided in palette
    #[error("palette cannot be empty")]
    EmptyPalette,
    /// Two entries share a name
    #[error("duplicate color name: {name}")]
    DuplicateName {
        /// The repeated name
        name: String,
    },
    /// An entry declares a stock below zero
    #[error("negative stock for {name}: {stock}")]
    NegativeStock {
        /// Entry name
        name: String,
        /// The offending stock value
        stock: i64,
    },
    /// An entry declares more stock than a run can track
    #[error("stock for {name} too large: {stock}")]
    StockOverflow {
        /// Entry name
        name: String,
        /// The offending stock value
        stock: i64,
    },
    /// Invalid hex color string for an entry
    #[error("invalid color for {name}: {source}")]
    ParseColor {
        /// Entry name
        name: String,
        /// Underlying parse failure
        #[source]
        source: ParseColorError,
    },
}
