//! One-query-many-candidates scoring with a shared query multiset.
//!
//! Unlike [`similarity`](super::similarity), the n-gram width is chosen from
//! the query length alone and there is no exact-match shortcut, so a batch
//! score can differ from the pairwise score for the same two strings.

use rayon::prelude::*;
use tracing::debug;

use super::coefficient::dice_coefficient;
use super::intersect::intersection_size;
use super::normalize::normalize;
use super::rolling::{NgramCounts, RollingNgrams};
use super::sizer::{ngram_width, window_count};
use super::DiceMatch;

/// Query multiset built once and scored against any number of candidates.
#[derive(Debug, Clone)]
pub struct BatchMatcher {
    width: usize,
    query: NgramCounts,
}

impl BatchMatcher {
    pub fn new(query: &str) -> Self {
        let chars: Vec<char> = normalize(query).chars().collect();
        let width = ngram_width(chars.len() as f64);
        let query = NgramCounts::build(&chars, width);
        debug!(
            query_len = chars.len(),
            width,
            ngrams = query.total(),
            distinct = query.distinct(),
            "built query n-grams"
        );
        Self { width, query }
    }

    /// N-gram width shared by the query and every candidate.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn query_ngrams(&self) -> &NgramCounts {
        &self.query
    }

    /// Score one candidate against the query.
    ///
    /// 0 when either the query or the candidate is shorter than the width.
    pub fn score(&self, candidate: &str) -> f64 {
        if self.query.is_empty() {
            return 0.0;
        }
        let chars: Vec<char> = normalize(candidate).chars().collect();
        let len = window_count(chars.len(), self.width);
        if len == 0 {
            return 0.0;
        }
        let shared = intersection_size(&self.query, RollingNgrams::new(&chars, self.width));
        dice_coefficient(shared, self.query.total(), len)
    }

    /// Score every candidate, preserving input order.
    pub fn score_all<S: AsRef<str>>(&self, candidates: &[S]) -> Vec<DiceMatch> {
        candidates
            .iter()
            .map(|c| DiceMatch::new(c.as_ref(), self.score(c.as_ref())))
            .collect()
    }

    /// Parallel [`score_all`](Self::score_all); each worker reads the shared
    /// query multiset and keeps its own match tally. Order is preserved.
    pub fn score_all_par<S: AsRef<str> + Sync>(&self, candidates: &[S]) -> Vec<DiceMatch> {
        candidates
            .par_iter()
            .map(|c| DiceMatch::new(c.as_ref(), self.score(c.as_ref())))
            .collect()
    }
}

/// Score `query` against each candidate, one result per candidate in input
/// order.
pub fn similarity_batch<S: AsRef<str>>(query: &str, candidates: &[S]) -> Vec<DiceMatch> {
    BatchMatcher::new(query).score_all(candidates)
}
