//! The rolling engine must agree exactly with the slicing oracle, hash
//! collisions included, since both use the same base-131 hash.

use std::collections::HashMap;

use ngram_dice::dice::{intersect::intersection_size, NgramCounts, RollingNgrams};
use ngram_dice::{similarity, similarity_batch};
use proptest::prelude::*;

use crate::common::oracle;
use crate::common::test_data::MIXED_INPUTS;

fn rolling_counts(s: &str, n: usize) -> HashMap<u32, u32> {
    let chars: Vec<char> = s.chars().collect();
    NgramCounts::build(&chars, n).iter().collect()
}

#[test]
fn multisets_match_oracle_on_fixed_inputs() {
    for s in MIXED_INPUTS {
        for n in 2..=4 {
            assert_eq!(rolling_counts(s, n), oracle::counts(s, n), "{s:?} n={n}");
        }
    }
}

#[test]
fn intersections_match_oracle_on_fixed_inputs() {
    for a in MIXED_INPUTS {
        let ca: Vec<char> = a.chars().collect();
        for b in MIXED_INPUTS {
            let cb: Vec<char> = b.chars().collect();
            for n in 2..=4 {
                let reference = NgramCounts::build(&ca, n);
                let fast = intersection_size(&reference, RollingNgrams::new(&cb, n));
                assert_eq!(fast, oracle::intersection(a, b, n), "{a:?} / {b:?} n={n}");
            }
        }
    }
}

#[test]
fn pairwise_scores_match_oracle_on_fixed_inputs() {
    for a in MIXED_INPUTS {
        for b in MIXED_INPUTS {
            assert_eq!(similarity(a, b), oracle::similarity(a, b), "{a:?} / {b:?}");
        }
    }
}

#[test]
fn batch_scores_match_oracle_on_fixed_inputs() {
    for q in MIXED_INPUTS {
        let fast: Vec<f64> = similarity_batch(q, MIXED_INPUTS)
            .into_iter()
            .map(|m| m.score)
            .collect();
        assert_eq!(fast, oracle::similarity_batch(q, MIXED_INPUTS), "query {q:?}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn rolling_hashes_match_direct_rehash(s in "\\PC{0,64}", n in 1usize..=6) {
        let chars: Vec<char> = s.chars().collect();
        let rolled: Vec<u32> = RollingNgrams::new(&chars, n).collect();
        prop_assert_eq!(rolled, oracle::window_hashes(&s, n));
    }

    #[test]
    fn pairwise_matches_oracle(a in "[a-cA-C ]{0,40}", b in "[a-cA-C ]{0,40}") {
        prop_assert_eq!(similarity(&a, &b), oracle::similarity(&a, &b));
    }

    #[test]
    fn batch_matches_oracle(
        q in "[a-d ]{0,35}",
        candidates in prop::collection::vec("[a-d ]{0,35}", 0..8),
    ) {
        let refs: Vec<&str> = candidates.iter().map(String::as_str).collect();
        let fast: Vec<f64> = similarity_batch(&q, &refs).into_iter().map(|m| m.score).collect();
        prop_assert_eq!(fast, oracle::similarity_batch(&q, &refs));
    }
}
