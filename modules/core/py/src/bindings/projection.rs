use bindmap_core_rs::{Projected, ProjectionKind};
use pyo3::prelude::*;
use pyo3::IntoPyObjectExt;

/// Convert the selected part of a container entry into a Python object.
///
/// Values are converted by reference: for values that are Python objects already, the caller
/// receives the very object stored in the container.
pub fn project<'py, K, V>(
    py: Python<'py>,
    kind: ProjectionKind,
    key: &K,
    value: &V,
) -> PyResult<PyObject>
where
    for<'a> &'a K: IntoPyObject<'py>,
    for<'a> &'a V: IntoPyObject<'py>,
{
    match kind.select(key, value) {
        Projected::Key(key) => key.into_py_any(py),
        Projected::Value(value) => value.into_py_any(py),
        Projected::Item(key, value) => (key, value).into_py_any(py),
    }
}
