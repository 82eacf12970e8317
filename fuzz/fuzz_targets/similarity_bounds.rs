#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, &str)| {
    let (a, b) = data;
    let s = ngram_dice::similarity(a, b);
    assert!((0.0..=1.0).contains(&s));
    assert_eq!(s, ngram_dice::similarity(b, a));
    assert_eq!(ngram_dice::similarity(a, a), 1.0);
});
