use pyo3::prelude::*;

pub const __VERSION__: &str = env!("CARGO_PKG_VERSION");

#[pymodule]
pub fn _bindmap(py: Python, module: &Bound<'_, PyModule>) -> PyResult<()> {
    let sysmod = py.import("sys")?.getattr("modules")?;
    let name = module.name()?.extract::<String>()?;

    bindmap_core_py::register(&name, module, &sysmod)?;

    // Constants
    module.add("__version__", __VERSION__)?;

    // Add the module to sys.modules cache
    sysmod.set_item(module.name()?, module)?;

    Ok(())
}
