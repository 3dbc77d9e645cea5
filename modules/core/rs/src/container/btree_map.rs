use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Included, Unbounded};

use super::{Container, EmplaceOnAbsence, Occupied, ReplaceInPlace};

// Cursors are owned copies of keys, so they survive unrelated insertions and removals.
impl<K: Ord + Clone, V> Container for BTreeMap<K, V> {
    type Key = K;
    type Value = V;
    type Cursor = K;

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn is_empty(&self) -> bool {
        BTreeMap::is_empty(self)
    }

    fn find(&self, key: &K) -> Option<K> {
        self.get_key_value(key).map(|(k, _)| k.clone())
    }

    fn begin(&self) -> Option<K> {
        self.first_key_value().map(|(k, _)| k.clone())
    }

    fn advance(&self, cursor: &K) -> Option<K> {
        self.range((Excluded(cursor), Unbounded))
            .next()
            .map(|(k, _)| k.clone())
    }

    fn entry(&self, cursor: &K) -> Option<(&K, &V)> {
        self.get_key_value(cursor)
    }

    fn entry_mut(&mut self, cursor: &K) -> Option<(&K, &mut V)> {
        self.range_mut((Included(cursor), Included(cursor))).next()
    }

    fn erase(&mut self, cursor: K) -> Option<(K, V)> {
        self.remove_entry(&cursor)
    }
}

impl<K: Ord + Clone, V> ReplaceInPlace for BTreeMap<K, V> {
    fn replace(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }
}

impl<K: Ord + Clone, V> EmplaceOnAbsence for BTreeMap<K, V> {
    fn emplace(&mut self, key: K, value: V) -> Result<K, Occupied<Self>> {
        if self.contains_key(&key) {
            return Err(Occupied {
                cursor: key.clone(),
                key,
                value,
            });
        }
        self.insert(key.clone(), value);
        Ok(key)
    }
}
