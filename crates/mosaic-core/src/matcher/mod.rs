//! Inventory-constrained greedy matching.
//!
//! The matcher walks pixels in processing order and gives each one the
//! nearest palette color that still has stock, consuming one unit per
//! assignment. Stock lives in a [`StockLedger`] that belongs to a single run:
//! it is created from the palette's original stocks, moved into the matcher,
//! and handed back with the assignments.
//!
//! # Tie-breaking
//!
//! Candidates are scanned in the palette's declared order and a candidate
//! replaces the current best only when its distance is strictly smaller, so
//! the first entry encountered wins an exact tie. Distances are unsquared
//! Euclidean RGB distances in f64.
//!
//! # Exhaustion
//!
//! Once no entry has stock left, every remaining pixel becomes
//! [`Assignment::Unassigned`]. This is an expected outcome, not an error.
//!
//! # Complexity
//!
//! Each pixel scans the whole palette: O(N² · P) for an N×N raster and P
//! entries. Any spatial index added later must keep first-declared-wins on
//! exact ties.

mod assign;
mod ledger;

pub use assign::{assign, assign_with, nearest_available, Assignment};
pub use ledger::StockLedger;
