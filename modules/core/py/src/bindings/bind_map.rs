/// Expose a concrete map type to Python as a `dict`-like class.
///
/// `bind_map!(PyName, MapType, "PythonName", Policy)` defines `PyName` together with its
/// `PyNameKeyView`, `PyNameValueView`, `PyNameItemView` and `PyNameIterator` companions. `MapType`
/// must implement [`Container`](crate::Container), `Default` and `Extend<(Key, Value)>`;
/// `Policy` is one of `Replace`, `Reinsert` or `ReadOnly`. With `ReadOnly` the class has no
/// `__setitem__` at all.
///
/// Views and iterators keep a strong reference to the map object, so the map outlives every
/// view or iterator derived from it.
///
/// The invoking crate must depend on `pyo3`.
#[macro_export]
macro_rules! bind_map {
    ($Py:ident, $Map:ty, $Name:literal, ReadOnly) => {
        $crate::bind_map!(@define $Py, $Map, $Name, $crate::policy::ReadOnly, ());
    };
    ($Py:ident, $Map:ty, $Name:literal, $Policy:ident) => {
        $crate::bind_map!(
            @define $Py, $Map, $Name, $crate::policy::$Policy,
            (
                fn __setitem__(
                    slf: &::pyo3::Bound<'_, Self>,
                    key: <$Map as $crate::Container>::Key,
                    value: <$Map as $crate::Container>::Value,
                ) {
                    // Dropped once the borrow is released: finalizers may access the map again
                    let _displaced = $crate::ops::set::<$Map, $crate::policy::$Policy>(
                        &mut slf.borrow_mut().rs,
                        key,
                        value,
                    );
                }
            )
        );
    };
    (@define $Py:ident, $Map:ty, $Name:literal, $Policy:ty, ($($setitem:item)?)) => {
        $crate::paste::paste! {
            #[::pyo3::pyclass(name = $Name)]
            pub struct $Py {
                pub rs: $Map,
            }

            #[::pyo3::pyclass(name = "KeyView")]
            pub struct [<$Py KeyView>] {
                map: ::pyo3::Py<$Py>,
            }

            #[::pyo3::pyclass(name = "ValueView")]
            pub struct [<$Py ValueView>] {
                map: ::pyo3::Py<$Py>,
            }

            #[::pyo3::pyclass(name = "ItemView")]
            pub struct [<$Py ItemView>] {
                map: ::pyo3::Py<$Py>,
            }

            #[::pyo3::pyclass(name = "Iterator")]
            pub struct [<$Py Iterator>] {
                map: ::pyo3::Py<$Py>,
                kind: $crate::ProjectionKind,
                traversal: $crate::Traversal<<$Map as $crate::Container>::Cursor>,
            }

            impl From<$Map> for $Py {
                fn from(rs: $Map) -> Self {
                    Self { rs }
                }
            }

            impl $Py {
                pub const ASSIGNMENT: $crate::AssignKind =
                    <$Policy as $crate::policy::Policy>::KIND;

                fn iterator(
                    slf: &::pyo3::Bound<'_, Self>,
                    kind: $crate::ProjectionKind,
                ) -> [<$Py Iterator>] {
                    [<$Py Iterator>]::new(slf.clone().unbind(), kind)
                }

                /// Add the class to `module`; views and the iterator become its attributes.
                pub fn register(
                    module: &::pyo3::Bound<'_, ::pyo3::types::PyModule>,
                    path: &str,
                ) -> ::pyo3::PyResult<()> {
                    use ::pyo3::prelude::*;
                    use ::pyo3::PyTypeInfo;

                    let py = module.py();
                    module.add_class::<Self>()?;

                    let cls = Self::type_object(py);
                    cls.setattr("__module__", path)?;
                    if Self::ASSIGNMENT == $crate::AssignKind::Unsupported {
                        // pyo3 derives a `__setitem__` slot wrapper from `__delitem__`
                        cls.delattr("__setitem__")?;
                    }
                    for (attr, typobj) in [
                        ("KeyView", [<$Py KeyView>]::type_object(py)),
                        ("ValueView", [<$Py ValueView>]::type_object(py)),
                        ("ItemView", [<$Py ItemView>]::type_object(py)),
                        ("Iterator", [<$Py Iterator>]::type_object(py)),
                    ] {
                        typobj.setattr("__module__", path)?;
                        typobj.setattr("__qualname__", format!("{}.{}", $Name, attr))?;
                        cls.setattr(attr, typobj)?;
                    }
                    Ok(())
                }
            }

            #[::pyo3::pymethods]
            impl $Py {
                #[new]
                #[pyo3(signature = (items=None))]
                fn __new__(
                    items: Option<
                        $crate::utils::IntoPyMapping<
                            <$Map as $crate::Container>::Key,
                            <$Map as $crate::Container>::Value,
                        >,
                    >,
                ) -> Self {
                    let mut rs = <$Map>::default();
                    if let Some(items) = items {
                        rs.extend(items);
                    }
                    Self { rs }
                }

                fn __len__(&self) -> usize {
                    $crate::Container::len(&self.rs)
                }

                fn __bool__(&self) -> bool {
                    !$crate::Container::is_empty(&self.rs)
                }

                fn __contains__(&self, key: &::pyo3::Bound<'_, ::pyo3::PyAny>) -> bool {
                    use ::pyo3::prelude::*;

                    // Keys that don't convert to the key type are never members
                    key.extract::<<$Map as $crate::Container>::Key>()
                        .is_ok_and(|key| $crate::ops::contains(&self.rs, &key))
                }

                fn __iter__(slf: &::pyo3::Bound<'_, Self>) -> [<$Py Iterator>] {
                    Self::iterator(slf, $crate::ProjectionKind::Key)
                }

                fn __getitem__(
                    &self,
                    py: ::pyo3::Python<'_>,
                    key: <$Map as $crate::Container>::Key,
                ) -> ::pyo3::PyResult<::pyo3::PyObject> {
                    use ::pyo3::IntoPyObjectExt;

                    let value = $crate::ops::get(&self.rs, &key)
                        .map_err(|err| $crate::error::to_py_err(py, err, key))?;
                    value.into_py_any(py)
                }

                fn __delitem__(
                    slf: &::pyo3::Bound<'_, Self>,
                    key: <$Map as $crate::Container>::Key,
                ) -> ::pyo3::PyResult<()> {
                    let _removed = $crate::ops::remove(&mut slf.borrow_mut().rs, &key)
                        .map_err(|err| $crate::error::to_py_err(slf.py(), err, key))?;
                    Ok(())
                }

                $($setitem)?

                fn keys(slf: &::pyo3::Bound<'_, Self>) -> [<$Py KeyView>] {
                    [<$Py KeyView>] { map: slf.clone().unbind() }
                }

                fn values(slf: &::pyo3::Bound<'_, Self>) -> [<$Py ValueView>] {
                    [<$Py ValueView>] { map: slf.clone().unbind() }
                }

                fn items(slf: &::pyo3::Bound<'_, Self>) -> [<$Py ItemView>] {
                    [<$Py ItemView>] { map: slf.clone().unbind() }
                }

                #[classmethod]
                fn __class_getitem__(
                    cls: &::pyo3::Bound<'_, ::pyo3::types::PyType>,
                    args: &::pyo3::Bound<'_, ::pyo3::PyAny>,
                ) -> ::pyo3::PyResult<::pyo3::PyObject> {
                    $crate::utils::generic_alias(cls, args)
                }

                fn __repr__(slf: &::pyo3::Bound<'_, Self>) -> ::pyo3::PyResult<String> {
                    use ::pyo3::prelude::*;

                    let content = $crate::utils::recursive_repr(slf.as_any(), || {
                        let dict = ::pyo3::types::PyDict::new(slf.py());
                        let this = slf.borrow();
                        let mut traversal = $crate::Traversal::new();
                        while let Some((key, value)) = traversal.advance(&this.rs) {
                            dict.set_item(key, value)?;
                        }
                        drop(this);
                        Ok(dict.repr()?.to_string())
                    })?;
                    Ok(format!("{}({})", $Name, content.as_deref().unwrap_or("...")))
                }
            }

            #[::pyo3::pymethods]
            impl [<$Py KeyView>] {
                fn __len__(&self, py: ::pyo3::Python<'_>) -> usize {
                    self.map.borrow(py).__len__()
                }

                fn __contains__(
                    &self,
                    py: ::pyo3::Python<'_>,
                    key: &::pyo3::Bound<'_, ::pyo3::PyAny>,
                ) -> bool {
                    self.map.borrow(py).__contains__(key)
                }

                fn __iter__(&self, py: ::pyo3::Python<'_>) -> [<$Py Iterator>] {
                    [<$Py Iterator>]::new(self.map.clone_ref(py), $crate::ProjectionKind::Key)
                }

                fn __repr__(&self, py: ::pyo3::Python<'_>) -> String {
                    format!("{}.KeyView(len={})", $Name, self.__len__(py))
                }
            }

            #[::pyo3::pymethods]
            impl [<$Py ValueView>] {
                fn __len__(&self, py: ::pyo3::Python<'_>) -> usize {
                    self.map.borrow(py).__len__()
                }

                fn __iter__(&self, py: ::pyo3::Python<'_>) -> [<$Py Iterator>] {
                    [<$Py Iterator>]::new(self.map.clone_ref(py), $crate::ProjectionKind::Value)
                }

                fn __repr__(&self, py: ::pyo3::Python<'_>) -> String {
                    format!("{}.ValueView(len={})", $Name, self.__len__(py))
                }
            }

            #[::pyo3::pymethods]
            impl [<$Py ItemView>] {
                fn __len__(&self, py: ::pyo3::Python<'_>) -> usize {
                    self.map.borrow(py).__len__()
                }

                fn __iter__(&self, py: ::pyo3::Python<'_>) -> [<$Py Iterator>] {
                    [<$Py Iterator>]::new(self.map.clone_ref(py), $crate::ProjectionKind::Item)
                }

                fn __repr__(&self, py: ::pyo3::Python<'_>) -> String {
                    format!("{}.ItemView(len={})", $Name, self.__len__(py))
                }
            }

            impl [<$Py Iterator>] {
                fn new(map: ::pyo3::Py<$Py>, kind: $crate::ProjectionKind) -> Self {
                    Self {
                        map,
                        kind,
                        traversal: $crate::Traversal::new(),
                    }
                }
            }

            #[::pyo3::pymethods]
            impl [<$Py Iterator>] {
                fn __iter__(slf: ::pyo3::PyRef<'_, Self>) -> ::pyo3::PyRef<'_, Self> {
                    slf
                }

                fn __next__(
                    &mut self,
                    py: ::pyo3::Python<'_>,
                ) -> ::pyo3::PyResult<Option<::pyo3::PyObject>> {
                    let map = self.map.borrow(py);
                    match self.traversal.advance(&map.rs) {
                        Some((key, value)) => {
                            $crate::projection::project::<
                                <$Map as $crate::Container>::Key,
                                <$Map as $crate::Container>::Value,
                            >(py, self.kind, key, value)
                            .map(Some)
                        }
                        None => Ok(None),
                    }
                }

                fn __repr__(&self) -> String {
                    format!("{}.Iterator(kind={})", $Name, self.kind)
                }
            }
        }
    };
}
