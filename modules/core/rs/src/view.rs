use std::any::Any;
use std::marker::PhantomData;

use crate::container::Container;
use crate::iter::{Items, Iter, Keys, Projection, ProjectionKind, Values};
use crate::ops;
use crate::shared::Shared;

/// Live projection of a container's entries. Every view holds a strong handle to the container
/// and re-reads it on each call, so mutations are visible immediately.
pub struct View<C, J> {
    owner: Shared<C>,
    projection: PhantomData<J>,
}

pub type KeyView<C> = View<C, Keys>;
pub type ValueView<C> = View<C, Values>;
pub type ItemView<C> = View<C, Items>;

impl<C: Container, J> View<C, J> {
    pub fn new(owner: Shared<C>) -> Self {
        Self {
            owner,
            projection: PhantomData,
        }
    }

    pub fn owner(&self) -> &Shared<C> {
        &self.owner
    }

    pub fn len(&self) -> usize {
        self.owner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.owner.borrow().is_empty()
    }
}

impl<C: Container, J: Projection<C::Key, C::Value>> View<C, J> {
    pub fn kind(&self) -> ProjectionKind {
        J::KIND
    }

    pub fn iter(&self) -> Iter<C, J> {
        Iter::new(self.owner.clone())
    }
}

impl<C: Container> View<C, Keys> {
    /// Membership test that never fails: keys of a foreign type are simply absent.
    pub fn contains(&self, key: &dyn Any) -> bool
    where
        C::Key: 'static,
    {
        ops::contains_any(&*self.owner.borrow(), key)
    }

    pub fn contains_key(&self, key: &C::Key) -> bool {
        ops::contains(&*self.owner.borrow(), key)
    }
}

impl<C: Container, J: Projection<C::Key, C::Value>> IntoIterator for &View<C, J> {
    type Item = J::Output;
    type IntoIter = Iter<C, J>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<C: Container, J> std::fmt::Debug for View<C, J> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("View")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
