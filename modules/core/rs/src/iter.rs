use std::iter::FusedIterator;
use std::marker::PhantomData;

use derive_more::Display;

use crate::container::Container;
use crate::shared::Shared;

/// Which part of every entry an iterator yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ProjectionKind {
    Key,
    Value,
    Item,
}

/// Borrowed result of projecting a single entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projected<'a, K, V> {
    Key(&'a K),
    Value(&'a V),
    Item(&'a K, &'a V),
}

impl ProjectionKind {
    pub fn select<'a, K, V>(self, key: &'a K, value: &'a V) -> Projected<'a, K, V> {
        match self {
            ProjectionKind::Key => Projected::Key(key),
            ProjectionKind::Value => Projected::Value(value),
            ProjectionKind::Item => Projected::Item(key, value),
        }
    }
}

/// Statically selected projection producing owned outputs.
pub trait Projection<K, V> {
    const KIND: ProjectionKind;
    type Output;

    fn project(key: &K, value: &V) -> Self::Output;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Keys;

#[derive(Debug, Clone, Copy, Default)]
pub struct Values;

#[derive(Debug, Clone, Copy, Default)]
pub struct Items;

impl<K: Clone, V> Projection<K, V> for Keys {
    const KIND: ProjectionKind = ProjectionKind::Key;
    type Output = K;

    fn project(key: &K, _: &V) -> K {
        key.clone()
    }
}

impl<K, V: Clone> Projection<K, V> for Values {
    const KIND: ProjectionKind = ProjectionKind::Value;
    type Output = V;

    fn project(_: &K, value: &V) -> V {
        value.clone()
    }
}

impl<K: Clone, V: Clone> Projection<K, V> for Items {
    const KIND: ProjectionKind = ProjectionKind::Item;
    type Output = (K, V);

    fn project(key: &K, value: &V) -> (K, V) {
        (key.clone(), value.clone())
    }
}

/// Position of a single-pass walk over a container: `Created -> Yielding* -> Exhausted`.
///
/// The traversal doesn't hold the container; every step receives it explicitly. This keeps the
/// state machine usable from any host that knows how to reach the container (shared handles,
/// interpreter-managed objects, ...).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Traversal<Cursor> {
    #[default]
    Created,
    Yielding(Cursor),
    Exhausted,
}

impl<Cursor: Clone> Traversal<Cursor> {
    pub fn new() -> Self {
        Self::Created
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, Traversal::Exhausted)
    }

    /// Step to the next entry. Once `None` is returned the traversal stays exhausted.
    pub fn advance<'c, C>(&mut self, container: &'c C) -> Option<(&'c C::Key, &'c C::Value)>
    where
        C: Container<Cursor = Cursor> + ?Sized,
    {
        let next = match self {
            Traversal::Created => container.begin(),
            Traversal::Yielding(cursor) => container.advance(cursor),
            Traversal::Exhausted => return None,
        };

        let Some(cursor) = next else {
            *self = Traversal::Exhausted;
            return None;
        };

        match container.entry(&cursor) {
            Some(entry) => {
                *self = Traversal::Yielding(cursor);
                Some(entry)
            }
            None => {
                log::debug!("Traversal cursor doesn't address an entry anymore, stopping");
                *self = Traversal::Exhausted;
                None
            }
        }
    }

    /// The entry yielded by the last successful step, if any.
    pub fn current<'c, C>(&self, container: &'c C) -> Option<(&'c C::Key, &'c C::Value)>
    where
        C: Container<Cursor = Cursor> + ?Sized,
    {
        match self {
            Traversal::Yielding(cursor) => container.entry(cursor),
            _ => None,
        }
    }
}

/// Lazy single-pass iterator over a shared container. Pins the container until dropped.
pub struct Iter<C: Container, J> {
    owner: Shared<C>,
    traversal: Traversal<C::Cursor>,
    projection: PhantomData<J>,
}

impl<C: Container, J: Projection<C::Key, C::Value>> Iter<C, J> {
    pub fn new(owner: Shared<C>) -> Self {
        Self {
            owner,
            traversal: Traversal::new(),
            projection: PhantomData,
        }
    }

    pub fn kind(&self) -> ProjectionKind {
        J::KIND
    }

    pub fn owner(&self) -> &Shared<C> {
        &self.owner
    }

    /// Projection of the entry yielded last.
    pub fn current(&self) -> Option<J::Output> {
        let container = self.owner.borrow();
        self.traversal
            .current(&*container)
            .map(|(key, value)| J::project(key, value))
    }
}

impl<C: Container, J: Projection<C::Key, C::Value>> Iterator for Iter<C, J> {
    type Item = J::Output;

    fn next(&mut self) -> Option<Self::Item> {
        let container = self.owner.borrow();
        self.traversal
            .advance(&*container)
            .map(|(key, value)| J::project(key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Entries inserted mid-walk may still show up, so only an exhausted walk has a bound
        match self.traversal {
            Traversal::Exhausted => (0, Some(0)),
            _ => (0, None),
        }
    }
}

impl<C: Container, J: Projection<C::Key, C::Value>> FusedIterator for Iter<C, J> {}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use std::collections::BTreeMap;

    #[test]
    fn test_traversal_state_machine() {
        let map = BTreeMap::from([(1, 'a'), (2, 'b')]);
        let mut traversal = Traversal::new();
        assert_eq!(traversal, Traversal::Created);
        assert_eq!(traversal.current(&map), None);

        assert_eq!(traversal.advance(&map), Some((&1, &'a')));
        assert_eq!(traversal, Traversal::Yielding(1));
        assert_eq!(traversal.current(&map), Some((&1, &'a')));

        assert_eq!(traversal.advance(&map), Some((&2, &'b')));
        assert_eq!(traversal.advance(&map), None);
        assert!(traversal.is_exhausted());

        // No way back from the exhausted state
        assert_eq!(traversal.advance(&map), None);
        assert_eq!(traversal.current(&map), None);
    }

    #[test]
    fn test_traversal_of_empty_container() {
        let map = IndexMap::<u8, u8>::new();
        let mut traversal = Traversal::new();
        assert_eq!(traversal.advance(&map), None);
        assert!(traversal.is_exhausted());
    }

    #[test]
    fn test_traversal_stops_on_stale_cursor() {
        let mut map = IndexMap::from([(1, 'a'), (2, 'b'), (3, 'c')]);
        let mut traversal = Traversal::new();
        traversal.advance(&map);
        traversal.advance(&map);
        traversal.advance(&map);

        map.clear();
        assert_eq!(traversal.current(&map), None);
        assert_eq!(traversal.advance(&map), None);
        assert!(traversal.is_exhausted());
    }

    #[test]
    fn test_projection_select() {
        let (key, value) = ("k", 1);
        assert_eq!(ProjectionKind::Key.select(&key, &value), Projected::Key(&"k"));
        assert_eq!(ProjectionKind::Value.select(&key, &value), Projected::Value(&1));
        assert_eq!(
            ProjectionKind::Item.select(&key, &value),
            Projected::Item(&"k", &1)
        );
    }

    #[test]
    fn test_iter_is_single_pass() {
        let owner = Shared::new(BTreeMap::from([(1, "a"), (2, "b")]));
        let mut iter = Iter::<_, Items>::new(owner.clone());
        assert_eq!(iter.kind(), ProjectionKind::Item);
        assert_eq!(iter.current(), None);
        assert_eq!(iter.next(), Some((1, "a")));
        assert_eq!(iter.current(), Some((1, "a")));
        assert_eq!(iter.next(), Some((2, "b")));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.size_hint(), (0, Some(0)));

        // A new iterator starts over
        assert_eq!(Iter::<_, Keys>::new(owner).collect::<Vec<_>>(), [1, 2]);
    }

    #[test]
    fn test_iter_sees_entries_inserted_mid_walk() {
        let owner = Shared::new(BTreeMap::from([(1, "a"), (2, "b")]));
        let mut iter = Iter::<_, Keys>::new(owner.clone());
        assert_eq!(iter.size_hint(), (0, None));
        assert_eq!(iter.next(), Some(1));

        owner.borrow_mut().insert(3, "c");
        owner.borrow_mut().insert(4, "d");
        assert_eq!(iter.size_hint(), (0, None));
        assert_eq!(iter.collect::<Vec<_>>(), [2, 3, 4]);
    }

    #[test]
    fn test_iter_pins_owner() {
        let owner = Shared::new(BTreeMap::from([(1, 10)]));
        let iter = Iter::<_, Values>::new(owner.clone());
        assert_eq!(owner.pins(), 2);
        drop(owner);

        assert_eq!(iter.owner().pins(), 1);
        assert_eq!(iter.collect::<Vec<_>>(), [10]);
    }
}
