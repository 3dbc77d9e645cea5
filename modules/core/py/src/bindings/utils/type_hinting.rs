use pyo3::prelude::*;
use pyo3::types::PyType;

/// `types.GenericAlias(cls, args)`: lets bound maps be subscripted in annotations, e.g.
/// `StrObjectMap[list[int]]`.
pub fn generic_alias(cls: &Bound<PyType>, args: &Bound<PyAny>) -> PyResult<PyObject> {
    let py = cls.py();
    let alias = py
        .import("types")?
        .getattr("GenericAlias")?
        .call1((cls, args))?;
    Ok(alias.unbind())
}
