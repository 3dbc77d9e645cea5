use pyo3::prelude::*;

pub use bindmap_core_rs::{
    ops, policy, AssignKind, Container, MapError, ProjectionKind, Traversal,
};
#[doc(hidden)]
pub use paste;

mod bind_map;
pub mod error;
pub mod maps;
pub mod projection;
pub mod utils;

pub fn register<'b>(
    path: &str,
    parent: &Bound<'b, PyModule>,
    sysmod: &Bound<PyAny>,
) -> PyResult<Bound<'b, PyModule>> {
    let name = "maps";
    let path = format!("{}.{}", path, name);
    let module = PyModule::new(parent.py(), name)?;

    maps::add_classes(&module, &path)?;

    parent.add_submodule(&module)?;
    sysmod.set_item(path, &module)?;

    Ok(module)
}
