//! Dice coefficient over adaptive character n-grams for a pair of strings.

use tracing::trace;

use super::intersect::intersection_size;
use super::normalize::normalize;
use super::rolling::{NgramCounts, RollingNgrams};
use super::sizer::{pair_width, window_count};

/// `2I / (len_a + len_b)` where the lengths are n-gram (window) counts.
#[inline]
pub fn dice_coefficient(intersection: usize, len_a: usize, len_b: usize) -> f64 {
    let denom = len_a + len_b;
    if denom == 0 {
        return 0.0;
    }
    (2 * intersection) as f64 / denom as f64
}

/// Similarity of two strings in `[0, 1]`.
///
/// Both inputs are normalized first. Equal normalized strings score exactly
/// 1 (including two empty strings); an empty side, or a side shorter than
/// the chosen n-gram width, scores 0. The width comes from the average of the
/// two normalized lengths.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let ca: Vec<char> = a.chars().collect();
    let cb: Vec<char> = b.chars().collect();
    let width = pair_width(ca.len(), cb.len());
    let len_a = window_count(ca.len(), width);
    let len_b = window_count(cb.len(), width);
    if len_a == 0 || len_b == 0 {
        return 0.0;
    }

    let reference = NgramCounts::build(&ca, width);
    let shared = intersection_size(&reference, RollingNgrams::new(&cb, width));
    trace!(width, len_a, len_b, shared, "pairwise dice");
    dice_coefficient(shared, len_a, len_b)
}
