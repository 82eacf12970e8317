//! Python bindings for ngram-dice.
//!
//! Exposes the pairwise, batch and top-match operations in a `dice`
//! submodule, mirroring the Rust API.

use pyo3::prelude::*;

use crate::dice::MatchConfig;
use crate::error::DiceError;

/// Register all Python bindings with the module.
pub fn register_python_bindings(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    let dice_mod = pyo3::types::PyModule::new(py, "dice")?;

    dice_mod.add_class::<MatchConfig>()?;
    dice_mod.add_function(wrap_pyfunction!(similarity_py, &dice_mod)?)?;
    dice_mod.add_function(wrap_pyfunction!(similarity_batch_py, &dice_mod)?)?;
    dice_mod.add_function(wrap_pyfunction!(top_matches_py, &dice_mod)?)?;
    m.add_submodule(&dice_mod)?;

    m.add_function(wrap_pyfunction!(crate::logging::init_logging, m)?)?;
    m.add("__version__", crate::VERSION)?;

    Ok(())
}

/// Dice similarity of two strings in [0, 1].
#[pyfunction]
#[pyo3(name = "similarity")]
fn similarity_py(a: &str, b: &str) -> f64 {
    crate::dice::similarity(a, b)
}

/// Score a query against each candidate, preserving candidate order.
#[pyfunction]
#[pyo3(name = "similarity_batch")]
fn similarity_batch_py(query: &str, candidates: Vec<String>) -> Vec<(String, f64)> {
    crate::dice::similarity_batch(query, &candidates)
        .into_iter()
        .map(|m| (m.item, m.score))
        .collect()
}

/// Best matches above `cutoff`, at most `top_n` (0 = all), highest first.
///
/// `config` only contributes its parallel threshold; `top_n` and `cutoff`
/// always come from the arguments.
#[pyfunction]
#[pyo3(name = "top_matches")]
#[pyo3(signature = (query, candidates, top_n=0, cutoff=0.0, config=None))]
fn top_matches_py(
    query: &str,
    candidates: Vec<String>,
    top_n: i64,
    cutoff: f64,
    config: Option<PyRef<'_, MatchConfig>>,
) -> PyResult<Vec<(String, f64)>> {
    let cfg = MatchConfig {
        top_n: DiceError::check_top_n(top_n)?,
        cutoff,
        ..config.map(|c| (*c).clone()).unwrap_or_default()
    };
    let matches = crate::dice::top_matches_with_config(query, &candidates, &cfg)?;
    Ok(matches.into_iter().map(|m| (m.item, m.score)).collect())
}
