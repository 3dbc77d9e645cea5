use std::cell::RefCell;

use ahash::AHashSet;
use pyo3::prelude::*;

thread_local! {
    static RENDERING: RefCell<AHashSet<usize>> = RefCell::new(AHashSet::new());
}

/// Render `obj` with `repr` unless this thread is already rendering it, in which case `None` is
/// returned. Self-containing maps print as `Name(...)`, the way `dict` prints `{...}`.
pub fn recursive_repr<F>(obj: &Bound<PyAny>, repr: F) -> PyResult<Option<String>>
where
    F: FnOnce() -> PyResult<String>,
{
    let id = obj.as_ptr() as usize;
    if !RENDERING.with_borrow_mut(|rendering| rendering.insert(id)) {
        return Ok(None);
    }

    let result = repr();
    RENDERING.with_borrow_mut(|rendering| rendering.remove(&id));
    result.map(Some)
}
