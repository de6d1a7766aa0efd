//! Stocked palette with declared-order iteration and name lookup.
//!
//! A [`Palette`] is the fixed inventory a mosaic is built from: every entry
//! has a unique name, an RGB value, and an original stock count. The palette
//! itself never changes after construction; runs consume stock from their own
//! [`StockLedger`](crate::matcher::StockLedger) copy.

use std::collections::HashMap;

use super::error::PaletteError;
use crate::color::Rgb;

/// A single named palette color with its original stock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    name: String,
    rgb: Rgb,
    stock: u32,
}

impl PaletteEntry {
    /// The unique name of this color.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The RGB value placed into the mosaic for this color.
    #[inline]
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// The stock available at the start of every run.
    #[inline]
    pub fn stock(&self) -> u32 {
        self.stock
    }
}

/// An ordered, immutable set of named colors with starting stock.
///
/// # Declared order
///
/// Entries keep the order in which they were declared. The matcher scans
/// entries in this order and the first entry encountered wins an exact
/// distance tie, so the order is part of the palette's identity: two
/// palettes with the same entries in a different order can produce
/// different mosaics.
///
/// # Sharing
///
/// `Palette` holds no mutable state and is `Send + Sync`; wrap it in an
/// `Arc` to share one palette across repeated or concurrent runs.
///
/// # Example
///
/// ```
/// use mosaic_core::{Palette, Rgb};
///
/// let palette = Palette::new([
///     ("Red", Rgb::new(255, 0, 0), 10),
///     ("Blue", Rgb::new(0, 0, 255), 5),
/// ])
/// .unwrap();
///
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.original_stock("Blue"), Some(5));
/// assert_eq!(palette.names().collect::<Vec<_>>(), ["Red", "Blue"]);
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
    by_name: HashMap<String, usize>,
}

impl Palette {
    /// Create a palette from `(name, rgb, stock)` triples in declared order.
    ///
    /// Stock is taken as `i64` so that definitions read from configuration
    /// can be validated here rather than silently wrapped.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] if no entries are given
    /// - [`PaletteError::DuplicateName`] if a name appears twice
    /// - [`PaletteError::NegativeStock`] if a stock is below zero
    /// - [`PaletteError::StockOverflow`] if a stock exceeds `u32::MAX`
    pub fn new<I, S>(entries: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = (S, Rgb, i64)>,
        S: Into<String>,
    {
        let mut validated = Vec::new();
        let mut by_name = HashMap::new();

        for (name, rgb, stock) in entries {
            let name = name.into();
            if stock < 0 {
                return Err(PaletteError::NegativeStock { name, stock });
            }
            let stock = u32::try_from(stock)
                .map_err(|_| PaletteError::StockOverflow {
                    name: name.clone(),
                    stock,
                })?;
            if by_name.contains_key(&name) {
                return Err(PaletteError::DuplicateName { name });
            }
            by_name.insert(name.clone(), validated.len());
            validated.push(PaletteEntry { name, rgb, stock });
        }

        if validated.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        Ok(Self {
            entries: validated,
            by_name,
        })
    }

    /// Create a palette from `(name, hex color, stock)` triples.
    ///
    /// Hex colors accept the formats understood by [`Rgb`]'s `FromStr`.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] naming the entry whose color is
    /// invalid, or any error [`Palette::new`] can return.
    ///
    /// # Example
    ///
    /// ```
    /// use mosaic_core::{Palette, Rgb};
    ///
    /// let palette = Palette::from_hex(&[("Tan", "#DEC69C", 283), ("White", "#F4F4F4", 149)])
    ///     .unwrap();
    /// assert_eq!(palette.rgb_of("Tan"), Some(Rgb::new(222, 198, 156)));
    /// ```
    pub fn from_hex(entries: &[(&str, &str, i64)]) -> Result<Self, PaletteError> {
        let parsed = entries
            .iter()
            .map(|&(name, hex, stock)| {
                hex.parse::<Rgb>()
                    .map(|rgb| (name, rgb, stock))
                    .map_err(|source| PaletteError::ParseColor {
                        name: name.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Palette::new(parsed)
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the palette is empty.
    ///
    /// Always `false`: empty palettes are rejected at construction time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in declared order.
    #[inline]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// The entry at position `idx` in declared order.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn entry(&self, idx: usize) -> &PaletteEntry {
        &self.entries[idx]
    }

    /// Entry names in declared order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Declared position of the entry called `name`.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// RGB value of the entry called `name`.
    pub fn rgb_of(&self, name: &str) -> Option<Rgb> {
        self.index_of(name).map(|i| self.entries[i].rgb)
    }

    /// Original (start-of-run) stock of the entry called `name`.
    pub fn original_stock(&self, name: &str) -> Option<u32> {
        self.index_of(name).map(|i| self.entries[i].stock)
    }

    /// Sum of all original stocks.
    pub fn total_stock(&self) -> u64 {
        self.entries.iter().map(|e| e.stock as u64).sum()
    }
}
