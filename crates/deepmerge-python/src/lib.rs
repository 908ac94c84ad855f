//! # deepmerge-python
//!
//! Python bindings for the JSON deep merger, built with PyO3.
//!
//! Exposes the following functions to Python as the `deepmerge` module:
//!
//! - `merge(original, update)` -- deep merge two JSON object strings
//! - `merge_all(layers)` -- deep merge a list of JSON object strings

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use serde_json::Value;

/// Deep merge two JSON documents.
///
/// Args:
///     original: A JSON object string.
///     update: A JSON object string layered on top of `original`.
///
/// Returns:
///     The merged document as a compact JSON string.
///
/// Raises:
///     ValueError: If an input is not a valid JSON object, or the two
///         documents hold differently-typed values under the same key.
#[pyfunction]
fn merge(original: &str, update: &str) -> PyResult<String> {
    deepmerge_core::merge_json(original, update).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Deep merge a sequence of JSON documents, left to right.
///
/// Args:
///     layers: A list of JSON object strings.
///
/// Returns:
///     The merged document as a compact JSON string (`"{}"` for an empty list).
///
/// Raises:
///     ValueError: If a layer is not a valid JSON object, or two layers
///         conflict.
#[pyfunction]
fn merge_all(layers: Vec<String>) -> PyResult<String> {
    let values = layers
        .iter()
        .map(|layer| serde_json::from_str::<Value>(layer))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    let merged =
        deepmerge_core::merge_all(&values).map_err(|e| PyValueError::new_err(e.to_string()))?;
    serde_json::to_string(&merged).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// The `deepmerge` Python module, implemented in Rust via PyO3.
#[pymodule]
fn deepmerge(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(merge, m)?)?;
    m.add_function(wrap_pyfunction!(merge_all, m)?)?;
    Ok(())
}
