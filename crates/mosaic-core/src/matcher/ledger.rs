use crate::palette::Palette;

/// Remaining stock for one run, indexed by declared palette position.
///
/// Stock only ever goes down: [`take`](Self::take) is the sole mutator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockLedger {
    remaining: Vec<u32>,
}

impl StockLedger {
    /// Fresh ledger holding the palette's original stocks.
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            remaining: palette.entries().iter().map(|e| e.stock()).collect(),
        }
    }

    /// Remaining stock of the entry at declared position `idx`.
    #[inline]
    pub fn remaining(&self, idx: usize) -> u32 {
        self.remaining[idx]
    }

    /// Remaining stock for every entry, in declared order.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.remaining
    }

    /// Whether the entry at `idx` can still be used.
    #[inline]
    pub fn in_stock(&self, idx: usize) -> bool {
        self.remaining[idx] > 0
    }

    /// Whether every entry is used up.
    pub fn is_exhausted(&self) -> bool {
        self.remaining.iter().all(|&s| s == 0)
    }

    /// Sum of remaining stock over all entries.
    pub fn total_remaining(&self) -> u64 {
        self.remaining.iter().map(|&s| s as u64).sum()
    }

    /// Consume one unit of entry `idx`. Returns `false` if none was left.
    #[inline]
    pub fn take(&mut self, idx: usize) -> bool {
        match self.remaining[idx] {
            0 => false,
            n => {
                self.remaining[idx] = n - 1;
                true
            }
        }
    }
}
