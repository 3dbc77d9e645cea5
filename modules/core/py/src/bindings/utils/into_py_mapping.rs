use derive_more::From;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyList, PyMapping, PyTuple};

/// Initial content of a bound map: any Python mapping or a list/tuple of `(key, value)` pairs.
#[derive(Debug, From)]
pub struct IntoPyMapping<K, V>(Vec<(K, V)>);

impl<'py, K: FromPyObject<'py>, V: FromPyObject<'py>> FromPyObject<'py> for IntoPyMapping<K, V> {
    fn extract_bound(obj: &Bound<'py, PyAny>) -> PyResult<Self> {
        let pairs = if let Ok(mapping) = obj.downcast::<PyMapping>() {
            mapping
                .items()?
                .iter()
                .map(|item| item.extract::<(K, V)>())
                .collect::<PyResult<Vec<_>>>()?
        } else if obj.is_instance_of::<PyList>() || obj.is_instance_of::<PyTuple>() {
            obj.try_iter()?
                .map(|item| item?.extract::<(K, V)>())
                .collect::<PyResult<Vec<_>>>()?
        } else {
            return Err(PyValueError::new_err(format!(
                "Expected a mapping or a list of (key, value) pairs, got: {}",
                obj
            )));
        };
        Ok(pairs.into())
    }
}

impl<K, V> IntoIterator for IntoPyMapping<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
