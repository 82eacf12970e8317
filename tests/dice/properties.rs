use ngram_dice::dice::sizer::{ngram_width, pair_width};
use ngram_dice::dice::{intersect::intersection_size, NgramCounts, RollingNgrams};
use ngram_dice::similarity;
use proptest::prelude::*;

#[test]
fn night_nacht_example() {
    assert_eq!(similarity("night", "nacht"), 0.25);
}

#[test]
fn case_and_surrounding_whitespace_are_ignored() {
    assert_eq!(similarity("Hello", "  hello  "), 1.0);
    assert_eq!(similarity("\tWORLD\n", "world"), 1.0);
}

#[test]
fn empty_handling() {
    assert_eq!(similarity("", ""), 1.0);
    assert_eq!(similarity("", "abc"), 0.0);
    assert_eq!(similarity("abc", ""), 0.0);
}

#[test]
fn repeated_ngram_intersection_is_capped() {
    let a: Vec<char> = "aaaa".chars().collect();
    let counts = NgramCounts::build(&a, 2);
    assert_eq!(counts.total(), 3);
    assert_eq!(intersection_size(&counts, RollingNgrams::new(&a, 2)), 3);
}

#[test]
fn width_threshold_boundaries() {
    assert_eq!(ngram_width(15.0), 2);
    assert_eq!(ngram_width(16.0), 3);
    assert_eq!(ngram_width(30.0), 3);
    assert_eq!(ngram_width(31.0), 4);
    assert_eq!(pair_width(15, 15), 2);
    assert_eq!(pair_width(16, 16), 3);
    assert_eq!(pair_width(30, 30), 3);
    assert_eq!(pair_width(31, 31), 4);
}

#[test]
fn internal_whitespace_matters() {
    assert!(similarity("new york", "newyork") < 1.0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn reflexive(s in "\\PC{1,60}") {
        prop_assert_eq!(similarity(&s, &s), 1.0);
    }

    #[test]
    fn symmetric(a in "\\PC{0,60}", b in "\\PC{0,60}") {
        prop_assert_eq!(similarity(&a, &b), similarity(&b, &a));
    }

    #[test]
    fn bounded(a in "\\PC{0,60}", b in "\\PC{0,60}") {
        let s = similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&s));
    }

    #[test]
    fn symmetric_on_small_alphabet(a in "[ab ]{0,50}", b in "[ab ]{0,50}") {
        // small alphabet forces heavy n-gram repetition
        prop_assert_eq!(similarity(&a, &b), similarity(&b, &a));
    }
}
