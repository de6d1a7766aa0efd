//! Importance ranking.
//!
//! Pixels are processed brightest first: every pixel gets a luma score and
//! the processing order is the list of pixel indices sorted by descending
//! score. The sort is stable, so pixels with equal luma keep their row-major
//! order and the earlier pixel is served first.

use crate::color::Rgb;

/// Luma score of every pixel, indexed like the input.
pub fn importance_scores(pixels: &[Rgb]) -> Vec<f64> {
    pixels.iter().map(|p| p.luma()).collect()
}

/// Processing order for `pixels`: indices by descending luma, ties by index.
///
/// # Example
///
/// ```
/// use mosaic_core::{rank::processing_order, Rgb};
///
/// let pixels = [
///     Rgb::new(255, 0, 0),
///     Rgb::new(0, 0, 255),
///     Rgb::new(250, 5, 5),
///     Rgb::new(0, 0, 0),
/// ];
/// assert_eq!(processing_order(&pixels), vec![2, 0, 1, 3]);
/// ```
pub fn processing_order(pixels: &[Rgb]) -> Vec<usize> {
    let scores = importance_scores(pixels);
    let mut order: Vec<usize> = (0..pixels.len()).collect();
    // sort_by is stable; scores are finite so total_cmp matches numeric order
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    order
}
