use bindmap_core_rs::MapError;
use pyo3::exceptions::PyKeyError;
use pyo3::prelude::*;
use pyo3::IntoPyObjectExt;

/// Translate a map failure into the matching Python exception.
/// `KeyError` carries the offending key, like the one raised by `dict`.
pub fn to_py_err<'py, K: IntoPyObject<'py>>(py: Python<'py>, err: MapError, key: K) -> PyErr {
    match err {
        MapError::KeyNotFound => match key.into_py_any(py) {
            Ok(key) => PyKeyError::new_err(key),
            Err(err) => err,
        },
    }
}
