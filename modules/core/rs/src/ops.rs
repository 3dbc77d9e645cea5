//! Dict-like operations over a borrowed container, shared by every adapter front-end.

use std::any::Any;

use crate::container::Container;
use crate::error::{MapError, Result};
use crate::policy::Assign;

pub fn contains<C: Container + ?Sized>(container: &C, key: &C::Key) -> bool {
    container.find(key).is_some()
}

/// Total membership test: only keys of the container's own key type can ever be present.
pub fn contains_any<C: Container + ?Sized>(container: &C, key: &dyn Any) -> bool
where
    C::Key: 'static,
{
    key.downcast_ref::<C::Key>()
        .is_some_and(|key| contains(container, key))
}

pub fn get<'c, C: Container + ?Sized>(container: &'c C, key: &C::Key) -> Result<&'c C::Value> {
    container
        .find(key)
        .and_then(|cursor| container.entry(&cursor))
        .map(|(_, value)| value)
        .ok_or(MapError::KeyNotFound)
}

pub fn get_mut<'c, C: Container + ?Sized>(
    container: &'c mut C,
    key: &C::Key,
) -> Result<&'c mut C::Value> {
    let cursor = container.find(key).ok_or(MapError::KeyNotFound)?;
    container
        .entry_mut(&cursor)
        .map(|(_, value)| value)
        .ok_or(MapError::KeyNotFound)
}

/// Erase the entry for `key` and hand back its value.
pub fn remove<C: Container + ?Sized>(container: &mut C, key: &C::Key) -> Result<C::Value> {
    let cursor = container.find(key).ok_or(MapError::KeyNotFound)?;
    container
        .erase(cursor)
        .map(|(_, value)| value)
        .ok_or(MapError::KeyNotFound)
}

/// Assign through the policy `P`; returns the displaced value.
pub fn set<C: Container, P: Assign<C>>(
    container: &mut C,
    key: C::Key,
    value: C::Value,
) -> Option<C::Value> {
    P::assign(container, key, value)
}
