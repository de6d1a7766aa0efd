//! Usage summary assembled from a finished run.

use super::run_result::RunResult;

/// Usage of one palette color in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub name: String,
    /// `original - remaining`
    pub used: u32,
    pub remaining: u32,
    pub original: u32,
}

/// Usage report for a run.
///
/// Rows appear in declared palette order and only for colors that were
/// consumed; untouched colors are left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub rows: Vec<SummaryRow>,
    /// Sum of `used` over all palette colors.
    pub total_used: u64,
    /// Cells left without a color.
    pub unassigned: usize,
    /// Cells in the mosaic (N * N).
    pub pixel_count: usize,
}

impl Summary {
    /// Build the summary for `run`.
    pub fn from_run(run: &RunResult) -> Self {
        let mut rows = Vec::new();
        let mut total_used = 0u64;

        for (entry, &remaining) in run
            .palette()
            .entries()
            .iter()
            .zip(run.ledger().as_slice())
        {
            let original = entry.stock();
            let used = original - remaining;
            total_used += used as u64;

            if used > 0 {
                rows.push(SummaryRow {
                    name: entry.name().to_string(),
                    used,
                    remaining,
                    original,
                });
            }
        }

        Self {
            rows,
            total_used,
            unassigned: run.unassigned_count(),
            pixel_count: run.assignments().len(),
        }
    }

    /// Row for `name`, if that color was used.
    pub fn row(&self, name: &str) -> Option<&SummaryRow> {
        self.rows.iter().find(|r| r.name == name)
    }
}
