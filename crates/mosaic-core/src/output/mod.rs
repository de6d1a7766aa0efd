//! Output types for a mosaic run.
//!
//! [`RunResult`] stores one [`Assignment`](crate::matcher::Assignment) per
//! pixel, the final stock ledger and an owned copy of the palette, and
//! assembles on demand:
//!
//! - **RGB / RGBA buffers** ([`RunResult::to_rgb`], [`RunResult::to_rgba`]):
//!   palette colors, unassigned cells rendered black
//! - **Name lookup** ([`RunResult::color_name_at`], [`RunResult::name_map`])
//! - **Usage summary** ([`RunResult::summary`]): used / remaining / original
//!   per palette color

mod run_result;
mod summary;

pub use run_result::{RunResult, OUT_OF_STOCK};
pub use summary::{Summary, SummaryRow};
