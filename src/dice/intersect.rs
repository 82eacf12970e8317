//! Bounded multiset intersection between a built multiset and a hash stream.

use std::collections::HashMap;

use super::rolling::NgramCounts;

/// Per-call tally of how many occurrences of each hash were already matched.
///
/// Invariant: `matched[h] <= reference.get(h)` for every `h`.
#[derive(Debug, Default)]
struct MatchTracker {
    matched: HashMap<u32, u32>,
}

impl MatchTracker {
    /// Claim one occurrence of `hash` if the reference still has one free.
    #[inline]
    fn claim(&mut self, reference: &NgramCounts, hash: u32) -> bool {
        let available = reference.get(hash);
        if available == 0 {
            return false;
        }
        let used = self.matched.entry(hash).or_insert(0);
        if *used < available {
            *used += 1;
            true
        } else {
            false
        }
    }
}

/// Count n-gram occurrences in `stream` that pair 1:1 with occurrences in
/// `reference`.
///
/// A hash repeated in the stream contributes at most as many matches as the
/// reference holds, so the result equals `sum(min(count_a[h], count_b[h]))`.
pub fn intersection_size<I>(reference: &NgramCounts, stream: I) -> usize
where
    I: IntoIterator<Item = u32>,
{
    if reference.is_empty() {
        return 0;
    }
    let mut tracker = MatchTracker::default();
    stream
        .into_iter()
        .filter(|&h| tracker.claim(reference, h))
        .count()
}
