use std::collections::BTreeMap;

use ahash::RandomState;
use indexmap::IndexMap;
use pyo3::prelude::*;

use crate::bind_map;

pub type StrIntMap = IndexMap<String, i64, RandomState>;
pub type StrObjectMap = IndexMap<String, PyObject, RandomState>;
pub type IntStrMap = BTreeMap<i64, String>;

bind_map!(PyStrIntMap, StrIntMap, "StrIntMap", Replace);
// Python handles can't be cloned without the GIL, so entries are rebuilt instead of overwritten.
bind_map!(PyStrObjectMap, StrObjectMap, "StrObjectMap", Reinsert);
bind_map!(PyIntStrMap, IntStrMap, "IntStrMap", Reinsert);
bind_map!(PyFrozenStrIntMap, StrIntMap, "FrozenStrIntMap", ReadOnly);

pub fn add_classes(module: &Bound<PyModule>, path: &str) -> PyResult<()> {
    PyStrIntMap::register(module, path)?;
    PyStrObjectMap::register(module, path)?;
    PyIntStrMap::register(module, path)?;
    PyFrozenStrIntMap::register(module, path)?;
    Ok(())
}
