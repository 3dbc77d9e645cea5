mod into_py_mapping;
mod recursive_repr;
mod type_hinting;

pub use into_py_mapping::IntoPyMapping;
pub use recursive_repr::recursive_repr;
pub use type_hinting::generic_alias;
