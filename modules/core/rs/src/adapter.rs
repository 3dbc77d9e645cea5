use std::any::Any;
use std::cell::{Ref, RefMut};
use std::marker::PhantomData;

use crate::container::Container;
use crate::error::{MapError, Result};
use crate::iter::{Iter, Keys, Traversal};
use crate::ops;
use crate::policy::{Assign, AssignKind, Policy, Replace};
use crate::shared::Shared;
use crate::view::{ItemView, KeyView, ValueView};

/// Dict-like surface over a shared container.
///
/// The adapter stores nothing besides the handle of the container it exposes; cloning it yields
/// another handle to the same container. Item assignment is available only when the mutation
/// policy `P` implements [`Assign`] for the container.
pub struct MapAdapter<C, P = Replace> {
    owner: Shared<C>,
    policy: PhantomData<P>,
}

impl<C: Container, P: Policy> MapAdapter<C, P> {
    pub const ASSIGNMENT: AssignKind = P::KIND;

    pub fn new(container: C) -> Self {
        Self::from_shared(Shared::new(container))
    }

    pub fn from_shared(owner: Shared<C>) -> Self {
        Self {
            owner,
            policy: PhantomData,
        }
    }

    pub fn owner(&self) -> &Shared<C> {
        &self.owner
    }

    pub fn into_owner(self) -> Shared<C> {
        self.owner
    }

    pub fn len(&self) -> usize {
        self.owner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.owner.borrow().is_empty()
    }

    pub fn is_nonempty(&self) -> bool {
        !self.is_empty()
    }

    /// Membership test over values of any type. Never fails: a key of a foreign type is absent.
    pub fn contains(&self, key: &dyn Any) -> bool
    where
        C::Key: 'static,
    {
        ops::contains_any(&*self.owner.borrow(), key)
    }

    pub fn contains_key(&self, key: &C::Key) -> bool {
        ops::contains(&*self.owner.borrow(), key)
    }

    /// Borrow the value stored under `key`. The guard aliases the slot inside the container.
    pub fn get(&self, key: &C::Key) -> Result<Ref<'_, C::Value>> {
        Ref::filter_map(self.owner.borrow(), |container| ops::get(container, key).ok())
            .map_err(|_| MapError::KeyNotFound)
    }

    /// Mutably borrow the value stored under `key`; writes land directly in the container.
    pub fn get_mut(&self, key: &C::Key) -> Result<RefMut<'_, C::Value>> {
        RefMut::filter_map(self.owner.borrow_mut(), |container| {
            ops::get_mut(container, key).ok()
        })
        .map_err(|_| MapError::KeyNotFound)
    }

    /// Erase the entry under `key` and return its value.
    pub fn remove(&self, key: &C::Key) -> Result<C::Value> {
        ops::remove(&mut *self.owner.borrow_mut(), key)
    }

    /// Iterate over keys. Each call starts an independent pass.
    pub fn iter(&self) -> Iter<C, Keys>
    where
        C::Key: Clone,
    {
        Iter::new(self.owner.clone())
    }

    pub fn keys(&self) -> KeyView<C> {
        KeyView::new(self.owner.clone())
    }

    pub fn values(&self) -> ValueView<C> {
        ValueView::new(self.owner.clone())
    }

    pub fn items(&self) -> ItemView<C> {
        ItemView::new(self.owner.clone())
    }
}

impl<C: Container, P: Assign<C>> MapAdapter<C, P> {
    /// Insert or replace the entry for `key` according to the mutation policy.
    ///
    /// The displaced value, if any, is returned after the container borrow is released.
    pub fn set(&self, key: C::Key, value: C::Value) -> Option<C::Value> {
        ops::set::<C, P>(&mut *self.owner.borrow_mut(), key, value)
    }
}

impl<C: Container + Default, P: Policy> Default for MapAdapter<C, P> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C, P> Clone for MapAdapter<C, P> {
    fn clone(&self) -> Self {
        Self {
            owner: self.owner.clone(),
            policy: PhantomData,
        }
    }
}

impl<C: Container, P: Policy> From<Shared<C>> for MapAdapter<C, P> {
    fn from(owner: Shared<C>) -> Self {
        Self::from_shared(owner)
    }
}

impl<C, P> std::fmt::Debug for MapAdapter<C, P>
where
    C: Container,
    C::Key: std::fmt::Debug,
    C::Value: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let container = self.owner.borrow();
        let mut traversal = Traversal::new();
        let mut map = f.debug_map();
        while let Some((key, value)) = traversal.advance(&*container) {
            map.entry(key, value);
        }
        map.finish()
    }
}
