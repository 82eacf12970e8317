//! Adaptive n-gram width selection.

/// Inputs up to this (average) length use bigrams.
pub const SHORT_MAX_LEN: f64 = 15.0;
/// Inputs up to this (average) length use trigrams; longer ones use 4-grams.
pub const MEDIUM_MAX_LEN: f64 = 30.0;

/// Map a length measure to an n-gram width in `{2, 3, 4}`.
///
/// `len` is either a single string's length or the average of two lengths.
pub fn ngram_width(len: f64) -> usize {
    if len <= SHORT_MAX_LEN {
        2
    } else if len <= MEDIUM_MAX_LEN {
        3
    } else {
        4
    }
}

/// Width used when comparing two strings of the given lengths.
pub fn pair_width(len_a: usize, len_b: usize) -> usize {
    ngram_width((len_a + len_b) as f64 / 2.0)
}

/// Number of windows of `width` in a sequence of `len` items, 0 if too short.
#[inline]
pub fn window_count(len: usize, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    (len + 1).saturating_sub(width)
}
