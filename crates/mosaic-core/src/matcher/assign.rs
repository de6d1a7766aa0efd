use super::ledger::StockLedger;
use crate::color::Rgb;
use crate::palette::Palette;

/// Outcome for one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Assignment {
    /// Pixel took one unit of the palette entry at this declared position.
    Color(usize),
    /// No palette entry had stock left when the pixel was visited.
    Unassigned,
}

impl Assignment {
    /// Declared palette position, if assigned.
    #[inline]
    pub fn entry(self) -> Option<usize> {
        match self {
            Assignment::Color(idx) => Some(idx),
            Assignment::Unassigned => None,
        }
    }

    #[inline]
    pub fn is_unassigned(self) -> bool {
        matches!(self, Assignment::Unassigned)
    }
}

/// Nearest in-stock palette entry to `color`.
///
/// Returns `(index, distance)` or `None` when every entry is out of stock.
/// The first entry in declared order wins an exact tie.
#[inline]
pub fn nearest_available(
    palette: &Palette,
    ledger: &StockLedger,
    color: Rgb,
) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;

    for (i, entry) in palette.entries().iter().enumerate() {
        if !ledger.in_stock(i) {
            continue;
        }
        let dist = color.distance(entry.rgb());
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((i, dist)),
        }
    }

    best
}

/// Greedily assign every pixel in `order`, consuming stock from `ledger`.
///
/// `pixels` is the row-major raster, `order` a permutation of its indices.
/// Returns one [`Assignment`] per pixel (indexed like `pixels`, not like
/// `order`) together with the ledger's final state.
pub fn assign(
    pixels: &[Rgb],
    order: &[usize],
    palette: &Palette,
    ledger: StockLedger,
) -> (Vec<Assignment>, StockLedger) {
    assign_with(pixels, order, palette, ledger, |_, _, _| {})
}

/// [`assign`] with a callback after each visited pixel.
///
/// The callback receives the pixel index, its assignment and the ledger as
/// it stands after that assignment.
pub fn assign_with<F>(
    pixels: &[Rgb],
    order: &[usize],
    palette: &Palette,
    mut ledger: StockLedger,
    mut on_step: F,
) -> (Vec<Assignment>, StockLedger)
where
    F: FnMut(usize, Assignment, &StockLedger),
{
    debug_assert_eq!(
        pixels.len(),
        order.len(),
        "processing order must cover every pixel"
    );

    let mut assignments = vec![Assignment::Unassigned; pixels.len()];
    let mut exhausted = false;

    for (step, &idx) in order.iter().enumerate() {
        // Stock never comes back, so after the first miss every scan misses.
        let found = if exhausted {
            None
        } else {
            nearest_available(palette, &ledger, pixels[idx])
        };

        let assignment = match found {
            Some((entry, _)) => {
                ledger.take(entry);
                Assignment::Color(entry)
            }
            None => {
                if !exhausted {
                    tracing::debug!(
                        step,
                        pixel = idx,
                        unserved = order.len() - step,
                        "palette exhausted"
                    );
                    exhausted = true;
                }
                Assignment::Unassigned
            }
        };

        assignments[idx] = assignment;
        on_step(idx, assignment, &ledger);
    }

    (assignments, ledger)
}
