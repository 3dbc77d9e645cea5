use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;

use super::{Container, EmplaceOnAbsence, Occupied, ReplaceInPlace};

// Cursors are positional indices. Erasure shifts the tail to keep the insertion order intact,
// which invalidates every cursor past the erased entry.
impl<K: Hash + Eq, V, S: BuildHasher> Container for IndexMap<K, V, S> {
    type Key = K;
    type Value = V;
    type Cursor = usize;

    fn len(&self) -> usize {
        IndexMap::len(self)
    }

    fn is_empty(&self) -> bool {
        IndexMap::is_empty(self)
    }

    fn find(&self, key: &K) -> Option<usize> {
        self.get_index_of(key)
    }

    fn begin(&self) -> Option<usize> {
        (!IndexMap::is_empty(self)).then_some(0)
    }

    fn advance(&self, cursor: &usize) -> Option<usize> {
        let next = cursor + 1;
        (next < IndexMap::len(self)).then_some(next)
    }

    fn entry(&self, cursor: &usize) -> Option<(&K, &V)> {
        self.get_index(*cursor)
    }

    fn entry_mut(&mut self, cursor: &usize) -> Option<(&K, &mut V)> {
        self.get_index_mut(*cursor)
    }

    fn erase(&mut self, cursor: usize) -> Option<(K, V)> {
        self.shift_remove_index(cursor)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> ReplaceInPlace for IndexMap<K, V, S> {
    fn replace(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> EmplaceOnAbsence for IndexMap<K, V, S> {
    fn emplace(&mut self, key: K, value: V) -> Result<usize, Occupied<Self>> {
        match self.get_index_of(&key) {
            Some(cursor) => Err(Occupied { cursor, key, value }),
            None => Ok(self.insert_full(key, value).0),
        }
    }
}
