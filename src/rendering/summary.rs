use crate::error::RenderError;
use mosaic_core::{Palette, Summary};
use serde::Serialize;
use std::fmt::Write;

/// Bill of materials for one mosaic, ready for display or JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryReport {
    pub total_used: u64,
    /// Cells in the mosaic (N * N)
    pub pixels_needed: usize,
    pub unassigned: usize,
    pub rows: Vec<SummaryReportRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryReportRow {
    pub name: String,
    pub used: u32,
    pub remaining: u32,
    pub original: u32,
}

impl From<&Summary> for SummaryReport {
    fn from(summary: &Summary) -> Self {
        Self {
            total_used: summary.total_used,
            pixels_needed: summary.pixel_count,
            unassigned: summary.unassigned,
            rows: summary
                .rows
                .iter()
                .map(|r| SummaryReportRow {
                    name: r.name.clone(),
                    used: r.used,
                    remaining: r.remaining,
                    original: r.original,
                })
                .collect(),
        }
    }
}

impl SummaryReport {
    /// Plain-text table with COLOR / USED / REMAINING / ORIGINAL columns
    pub fn render_text(&self) -> String {
        let name_width = self
            .rows
            .iter()
            .map(|r| r.name.chars().count())
            .chain(std::iter::once("COLOR".len()))
            .max()
            .unwrap_or(5);

        let mut out = String::new();
        let _ = writeln!(out, "Total pieces used: {}", self.total_used);
        let _ = writeln!(
            out,
            "({} pieces needed for the mosaic)",
            self.pixels_needed
        );
        if self.unassigned > 0 {
            let _ = writeln!(out, "Out of stock: {} cells left black", self.unassigned);
        }
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{:<name_width$}  {:>6}  {:>9}  {:>8}",
            "COLOR", "USED", "REMAINING", "ORIGINAL"
        );
        for row in &self.rows {
            let _ = writeln!(
                out,
                "{:<name_width$}  {:>6}  {:>9}  {:>8}",
                row.name, row.used, row.remaining, row.original
            );
        }
        out
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Palette listing with COLOR / RGB / STOCK columns and a stock total
pub fn render_palette_text(palette: &Palette, cells_needed: usize) -> String {
    let name_width = palette
        .names()
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(0)
        .max("COLOR".len());

    let mut out = String::new();
    let _ = writeln!(out, "{:<name_width$}  {:<7}  {:>6}", "COLOR", "RGB", "STOCK");
    for entry in palette.entries() {
        let _ = writeln!(
            out,
            "{:<name_width$}  {:<7}  {:>6}",
            entry.name(),
            entry.rgb().to_string(),
            entry.stock()
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} colors, {} pieces (mosaic needs {cells_needed})",
        palette.len(),
        palette.total_stock()
    );
    out
}
