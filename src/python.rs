// SPDX-License-Identifier: MIT
// PyO3 bindings. Python strings are decoded to code points before scoring.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::config::{DistanceOptions, NormalizedOptions};
use crate::distance::{bktree, metrics};
use crate::error::Error;
use crate::process;
use crate::utils::Normalization;

impl From<Error> for PyErr {
    fn from(err: Error) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

fn policy(trim: bool) -> Normalization {
    if trim { Normalization::Trim } else { Normalization::Verbatim }
}

fn dist_opts(trim: bool, score_cutoff: Option<usize>) -> DistanceOptions {
    DistanceOptions { normalization: policy(trim), score_cutoff }
}

fn norm_opts(trim: bool, score_cutoff: Option<f64>) -> PyResult<NormalizedOptions> {
    let mut builder = NormalizedOptions::builder().normalization(policy(trim));
    if let Some(c) = score_cutoff {
        builder = builder.score_cutoff(c);
    }
    Ok(builder.build()?)
}

// ===========================================================================
// DAMERAU-LEVENSHTEIN
// ===========================================================================

#[pyfunction]
#[pyo3(signature = (s1, s2, *, trim=false, score_cutoff=None))]
pub fn distance(s1: &str, s2: &str, trim: bool, score_cutoff: Option<usize>) -> usize {
    metrics::distance_with(s1, s2, &dist_opts(trim, score_cutoff))
}

#[pyfunction]
#[pyo3(signature = (s1, s2, *, trim=false, score_cutoff=None))]
pub fn similarity(s1: &str, s2: &str, trim: bool, score_cutoff: Option<usize>) -> usize {
    metrics::similarity(s1, s2, &dist_opts(trim, score_cutoff))
}

#[pyfunction]
#[pyo3(signature = (s1, s2, *, trim=false, score_cutoff=None))]
pub fn normalized_distance(s1: &str, s2: &str, trim: bool, score_cutoff: Option<f64>) -> PyResult<f64> {
    Ok(metrics::normalized_distance(s1, s2, &norm_opts(trim, score_cutoff)?))
}

#[pyfunction]
#[pyo3(signature = (s1, s2, *, trim=false, score_cutoff=None))]
pub fn normalized_similarity(s1: &str, s2: &str, trim: bool, score_cutoff: Option<f64>) -> PyResult<f64> {
    Ok(metrics::normalized_similarity(s1, s2, &norm_opts(trim, score_cutoff)?))
}

#[pyfunction]
pub fn default_process(s: &str) -> String {
    crate::utils::default_process(s)
}

// ===========================================================================
// BATCH
// ===========================================================================

#[pyfunction]
#[pyo3(signature = (query, choices, *, limit=Some(5), trim=false, score_cutoff=None))]
pub fn extract(
    py: Python<'_>,
    query: &str,
    choices: Vec<String>,
    limit: Option<usize>,
    trim: bool,
    score_cutoff: Option<usize>,
) -> Vec<(String, usize, usize)> {
    let opts = dist_opts(trim, score_cutoff);
    py.allow_threads(|| {
        process::extract(query, &choices, limit, &opts)
            .into_iter()
            .map(|m| (m.choice.to_string(), m.distance, m.index))
            .collect()
    })
}

#[pyfunction]
#[pyo3(signature = (queries, choices, *, trim=false, score_cutoff=None))]
pub fn cdist(
    py: Python<'_>,
    queries: Vec<String>,
    choices: Vec<String>,
    trim: bool,
    score_cutoff: Option<usize>,
) -> Vec<Vec<usize>> {
    let opts = dist_opts(trim, score_cutoff);
    py.allow_threads(|| process::cdist(&queries, &choices, &opts))
}

// ---------------------------------------------------------------------------
// BK-Tree
// ---------------------------------------------------------------------------

#[pyclass(name = "BKTree", module = "truedl._truedl")]
#[derive(Default)]
pub struct PyBkTree {
    inner: bktree::BkTree,
}

#[pymethods]
impl PyBkTree {
    #[new]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, item: String) -> bool {
        self.inner.insert(item)
    }

    pub fn find(&self, query: &str, max_dist: usize) -> Vec<(String, usize)> {
        self.inner
            .find(query, max_dist)
            .into_iter()
            .map(|(s, d)| (s.to_string(), d))
            .collect()
    }

    pub fn dedupe(&mut self, items: Vec<String>, threshold: usize) -> Vec<String> {
        self.inner.dedupe(items, threshold)
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }
}

#[pymodule]
fn _truedl(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    // --- distance metrics ---
    m.add_function(wrap_pyfunction!(distance, m)?)?;
    m.add_function(wrap_pyfunction!(similarity, m)?)?;
    m.add_function(wrap_pyfunction!(normalized_distance, m)?)?;
    m.add_function(wrap_pyfunction!(normalized_similarity, m)?)?;

    // --- utils ---
    m.add_function(wrap_pyfunction!(default_process, m)?)?;

    // --- batch ---
    m.add_function(wrap_pyfunction!(extract, m)?)?;
    m.add_function(wrap_pyfunction!(cdist, m)?)?;
    m.add_class::<PyBkTree>()?;

    // register submodule name in sys.modules so stubs can import it
    let sys_modules = py.import("sys")?.getattr("modules")?;
    sys_modules.set_item("truedl._truedl", m)?;

    Ok(())
}
