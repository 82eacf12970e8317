//! Options for top-match selection and batch dispatch.

use serde::{Deserialize, Serialize};

#[cfg(feature = "python-ext")]
use pyo3::prelude::*;

use crate::error::{DiceError, Result};

/// Options for [`top_matches_with_config`](super::top_matches_with_config).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "python-ext", pyclass)]
#[serde(default)]
pub struct MatchConfig {
    /// Maximum number of results; 0 returns every result passing the cutoff
    pub top_n: usize,
    /// Minimum score to keep (inclusive), in [0, 1]
    pub cutoff: f64,
    /// Candidate count at which batch scoring goes parallel; 0 disables
    pub parallel_threshold: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            top_n: 0,
            cutoff: 0.0,
            parallel_threshold: 1024,
        }
    }
}

impl MatchConfig {
    /// Reject a cutoff outside `[0, 1]` (NaN included).
    pub fn validate(&self) -> Result<()> {
        validate_cutoff(self.cutoff)
    }

    /// Whether a batch of `candidates` should be scored in parallel.
    pub fn use_parallel(&self, candidates: usize) -> bool {
        self.parallel_threshold != 0 && candidates >= self.parallel_threshold
    }
}

pub(crate) fn validate_cutoff(cutoff: f64) -> Result<()> {
    if (0.0..=1.0).contains(&cutoff) {
        Ok(())
    } else {
        Err(crate::log_error!(DiceError::InvalidCutoff(cutoff)))
    }
}

#[cfg(feature = "python-ext")]
#[pymethods]
impl MatchConfig {
    #[new]
    pub fn new() -> Self {
        Self::default()
    }

    #[getter]
    pub fn get_top_n(&self) -> usize {
        self.top_n
    }
    #[setter]
    pub fn set_top_n(&mut self, v: usize) {
        self.top_n = v;
    }

    #[getter]
    pub fn get_cutoff(&self) -> f64 {
        self.cutoff
    }
    #[setter]
    pub fn set_cutoff(&mut self, v: f64) -> PyResult<()> {
        validate_cutoff(v)?;
        self.cutoff = v;
        Ok(())
    }

    #[getter]
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }
    #[setter]
    pub fn set_parallel_threshold(&mut self, v: usize) {
        self.parallel_threshold = v;
    }
}
