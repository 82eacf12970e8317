//! Dice-coefficient string similarity over adaptive character n-grams.
//!
//! Strings are lowercased and trimmed, split into overlapping n-grams whose
//! width (2, 3 or 4) grows with input length, hashed with a rolling
//! polynomial hash, and compared as multisets:
//! `score = 2 * |A ∩ B| / (|A| + |B|)`.
//!
//! The pairwise [`similarity`] sizes n-grams from the average of both
//! lengths. Batch scoring ([`similarity_batch`], [`top_matches`]) builds the
//! query multiset once and sizes n-grams from the query alone.

pub mod batch;
pub mod coefficient;
mod config;
pub mod intersect;
pub mod normalize;
pub mod rolling;
pub mod sizer;
pub mod top_k;

pub use batch::{similarity_batch, BatchMatcher};
pub use coefficient::{dice_coefficient, similarity};
pub use config::MatchConfig;
pub use rolling::{horner_hash, NgramCounts, RollingNgrams, HASH_BASE};
pub use top_k::{select_top, top_matches, top_matches_with_config};

use serde::{Deserialize, Serialize};

/// A candidate paired with its similarity score in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiceMatch {
    pub item: String,
    pub score: f64,
}

impl DiceMatch {
    pub fn new(item: impl Into<String>, score: f64) -> Self {
        Self {
            item: item.into(),
            score,
        }
    }
}
