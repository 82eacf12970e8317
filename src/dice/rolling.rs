//! Rolling polynomial hashing of character n-grams and the per-string
//! n-gram multiset built from it.
//!
//! Each window of `width` characters hashes to
//! `c0*B^(w-1) + c1*B^(w-2) + ... + c(w-1)` with `B = 131`, computed in
//! wrapping `u32` arithmetic. Sliding one position costs O(1):
//! `h' = (h - outgoing*B^(w-1)) * B + incoming`. Distinct n-grams may collide
//! under this hash; collisions are counted as matches and not corrected.

use std::collections::HashMap;
use std::iter::FusedIterator;

use super::sizer::window_count;

/// Polynomial base of the rolling hash.
pub const HASH_BASE: u32 = 131;

/// Hash one window directly with Horner's method.
///
/// The rolling iterator must agree with this for every window.
#[inline]
pub fn horner_hash(window: &[char]) -> u32 {
    window
        .iter()
        .fold(0u32, |h, &c| h.wrapping_mul(HASH_BASE).wrapping_add(c as u32))
}

/// Stream of n-gram hashes over a character slice, in window order.
///
/// Yields nothing when the slice is shorter than `width`.
#[derive(Debug, Clone)]
pub struct RollingNgrams<'a> {
    chars: &'a [char],
    width: usize,
    pos: usize,
    hash: u32,
    /// `B^(width-1)`, the weight of the outgoing character.
    lead_weight: u32,
}

impl<'a> RollingNgrams<'a> {
    pub fn new(chars: &'a [char], width: usize) -> Self {
        let lead_weight = HASH_BASE.wrapping_pow(width.saturating_sub(1) as u32);
        Self {
            chars,
            width,
            pos: 0,
            hash: 0,
            lead_weight,
        }
    }

    fn remaining(&self) -> usize {
        window_count(self.chars.len(), self.width).saturating_sub(self.pos)
    }
}

impl Iterator for RollingNgrams<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.remaining() == 0 {
            return None;
        }
        if self.pos == 0 {
            self.hash = horner_hash(&self.chars[..self.width]);
        } else {
            let outgoing = self.chars[self.pos - 1] as u32;
            let incoming = self.chars[self.pos + self.width - 1] as u32;
            self.hash = self
                .hash
                .wrapping_sub(outgoing.wrapping_mul(self.lead_weight))
                .wrapping_mul(HASH_BASE)
                .wrapping_add(incoming);
        }
        self.pos += 1;
        Some(self.hash)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for RollingNgrams<'_> {}
impl FusedIterator for RollingNgrams<'_> {}

/// Multiset of n-gram hashes for one string: hash -> occurrence count.
///
/// Read-only once built; safe to share between threads scoring against it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NgramCounts {
    width: usize,
    total: usize,
    counts: HashMap<u32, u32>,
}

impl NgramCounts {
    /// Build the multiset for `chars` with windows of `width`.
    ///
    /// Empty when `chars` is shorter than `width`.
    pub fn build(chars: &[char], width: usize) -> Self {
        Self::from_hashes(width, RollingNgrams::new(chars, width))
    }

    /// Build from an already-computed hash stream.
    pub fn from_hashes<I>(width: usize, hashes: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        let hashes = hashes.into_iter();
        let mut counts = HashMap::with_capacity(hashes.size_hint().0);
        let mut total = 0usize;
        for h in hashes {
            *counts.entry(h).or_insert(0) += 1;
            total += 1;
        }
        Self {
            width,
            total,
            counts,
        }
    }

    /// Window width the multiset was built with.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of n-gram occurrences (windows).
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct hashes.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Occurrences of `hash`, 0 if absent.
    #[inline]
    pub fn get(&self, hash: u32) -> u32 {
        self.counts.get(&hash).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.counts.iter().map(|(&h, &c)| (h, c))
    }
}
