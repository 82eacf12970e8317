#![no_main]
use libfuzzer_sys::fuzz_target;
use ngram_dice::BatchMatcher;

fuzz_target!(|data: (&str, Vec<&str>)| {
    let (query, candidates) = data;
    let matcher = BatchMatcher::new(query);
    let serial = matcher.score_all(&candidates);
    assert_eq!(serial, matcher.score_all_par(&candidates));
    for (m, c) in serial.iter().zip(&candidates) {
        assert_eq!(m.item, *c);
        assert!((0.0..=1.0).contains(&m.score));
    }
});
