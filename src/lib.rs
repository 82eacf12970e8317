//! # ngram-dice
//!
//! String similarity using the Dice coefficient over character n-grams, with
//! the n-gram width adapted to input length, plus batch scoring and top-K
//! selection against candidate lists.
//!
//! ```
//! use ngram_dice::{similarity, top_matches};
//!
//! assert_eq!(similarity("night", "nacht"), 0.25);
//!
//! let best = top_matches("apple", &["banana", "apple pie", "apple"], 1, 0.0).unwrap();
//! assert_eq!(best[0].item, "apple");
//! ```

pub mod dice;
pub mod error;
pub mod logging;

#[cfg(feature = "python-ext")]
pub mod python_bindings;

pub use dice::{
    select_top, similarity, similarity_batch, top_matches, top_matches_with_config,
    BatchMatcher, DiceMatch, MatchConfig,
};
pub use error::{DiceError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Python module entry point.
#[cfg(feature = "python-ext")]
#[pyo3::prelude::pymodule]
fn ngram_dice(m: &pyo3::Bound<'_, pyo3::types::PyModule>) -> pyo3::PyResult<()> {
    python_bindings::register_python_bindings(m.py(), m)
}
