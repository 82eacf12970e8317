use ngram_dice::{similarity_batch, top_matches};

use crate::common::test_data::GAME_TITLES;
use crate::common::{read_sample_lines, sample_file_exists};

#[test]
fn top_matches_on_sample_titles() {
    if !sample_file_exists(GAME_TITLES) {
        eprintln!("Skipping sample titles test; {GAME_TITLES} not found");
        return;
    }
    let titles = read_sample_lines(GAME_TITLES).unwrap();
    assert!(!titles.is_empty());

    let batch = similarity_batch("counter strike", &titles);
    assert_eq!(batch.len(), titles.len());

    let top = top_matches("Counter Strike 2", &titles, 3, 0.3).unwrap();
    assert!(!top.is_empty());
    assert_eq!(top[0].item, "Counter-Strike 2");
    assert!(top.len() <= 3);

    let top = top_matches("the witcher wild hunt", &titles, 1, 0.0).unwrap();
    assert_eq!(top[0].item, "The Witcher 3: Wild Hunt");
}
