//! Cutoff filtering and descending-score truncation of batch results.

use tracing::debug;

use super::batch::BatchMatcher;
use super::config::{validate_cutoff, MatchConfig};
use super::DiceMatch;
use crate::error::Result;

/// Keep results with `score >= cutoff`, sort descending, truncate to `top_n`
/// (0 keeps all). Order among equal scores is unspecified.
pub fn select_top(mut results: Vec<DiceMatch>, top_n: usize, cutoff: f64) -> Result<Vec<DiceMatch>> {
    validate_cutoff(cutoff)?;
    results.retain(|m| m.score >= cutoff);
    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    if top_n != 0 && results.len() > top_n {
        results.truncate(top_n);
    }
    Ok(results)
}

/// Best matches for `query` among `candidates`.
pub fn top_matches<S: AsRef<str> + Sync>(
    query: &str,
    candidates: &[S],
    top_n: usize,
    cutoff: f64,
) -> Result<Vec<DiceMatch>> {
    let cfg = MatchConfig {
        top_n,
        cutoff,
        ..MatchConfig::default()
    };
    top_matches_with_config(query, candidates, &cfg)
}

/// [`top_matches`] driven by a [`MatchConfig`], scoring in parallel for
/// large candidate lists.
pub fn top_matches_with_config<S: AsRef<str> + Sync>(
    query: &str,
    candidates: &[S],
    cfg: &MatchConfig,
) -> Result<Vec<DiceMatch>> {
    cfg.validate()?;
    let span = crate::span_trace!("top_matches", candidates = candidates.len());
    let _guard = span.enter();

    let matcher = BatchMatcher::new(query);
    let results = if cfg.use_parallel(candidates.len()) {
        debug!(threshold = cfg.parallel_threshold, "scoring candidates in parallel");
        matcher.score_all_par(candidates)
    } else {
        matcher.score_all(candidates)
    };
    let selected = select_top(results, cfg.top_n, cfg.cutoff)?;
    debug!(kept = selected.len(), "selected top matches");
    Ok(selected)
}
