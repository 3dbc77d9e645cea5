use std::collections::BTreeMap;
use std::fmt::Debug;

use ahash::RandomState;
use eyre::{ensure, Result};
use indexmap::IndexMap;
use itertools::Itertools;

use bindmap_core_rs::{
    Assign, Container, EmplaceOnAbsence, MapAdapter, MapError, Policy, ReadOnly, Reinsert,
    Replace, ReplaceInPlace,
};

type Ordered = IndexMap<String, i64, RandomState>;
type Sorted = BTreeMap<String, i64>;

fn key(k: &str) -> String {
    k.to_string()
}

fn check_missing_key<C, P>(map: &MapAdapter<C, P>, missing: &C::Key) -> Result<()>
where
    C: Container,
    C::Key: 'static,
    C::Value: Debug,
    P: Policy,
{
    let before = map.len();
    ensure!(!map.contains(missing));
    ensure!(!map.contains_key(missing));
    assert_eq!(map.get(missing).unwrap_err(), MapError::KeyNotFound);
    assert_eq!(map.remove(missing).unwrap_err(), MapError::KeyNotFound);
    assert_eq!(map.len(), before);
    Ok(())
}

fn check_set_and_remove<C, P>(map: &MapAdapter<C, P>) -> Result<()>
where
    C: Container<Key = String, Value = i64>,
    P: Assign<C>,
{
    let before = map.len();

    // Fresh key grows the map by one
    map.set(key("fresh"), 10);
    assert_eq!(*map.get(&key("fresh"))?, 10);
    assert_eq!(map.len(), before + 1);

    // Existing key keeps the size
    map.set(key("fresh"), 20);
    assert_eq!(*map.get(&key("fresh"))?, 20);
    assert_eq!(map.len(), before + 1);

    // Removal shrinks the map by one
    assert_eq!(map.remove(&key("fresh"))?, 20);
    ensure!(!map.contains(&key("fresh")));
    assert_eq!(map.len(), before);

    check_missing_key(map, &key("fresh"))
}

fn check_views_agree<C, P>(map: &MapAdapter<C, P>) -> Result<()>
where
    C: Container<Key = String, Value = i64>,
    P: Policy,
{
    let keys = map.keys().iter().collect_vec();
    let values = map.values().iter().collect_vec();
    let items = map.items().iter().collect_vec();

    assert_eq!(keys.len(), map.len());
    assert_eq!(values.len(), map.len());
    assert_eq!(items.len(), map.len());
    assert_eq!(map.keys().len(), map.len());
    assert_eq!(map.values().len(), map.len());
    assert_eq!(map.items().len(), map.len());

    // Zipping keys and values reproduces items
    assert_eq!(keys.iter().cloned().zip_eq(values).collect_vec(), items);

    // Iterating the map itself yields keys
    assert_eq!(map.iter().collect_vec(), keys);

    // No mutation in between -> identical sequences
    assert_eq!(map.items().iter().collect_vec(), items);

    for key in &keys {
        ensure!(map.keys().contains(key));
    }
    ensure!(!map.keys().contains(&42_u32));
    Ok(())
}

fn check_walkthrough<C, P>(expected_order: &[&str]) -> Result<()>
where
    C: Container<Key = String, Value = i64> + Default,
    P: Assign<C>,
{
    let map = MapAdapter::<C, P>::default();
    assert_eq!(map.len(), 0);
    ensure!(!map.is_nonempty());

    map.set(key("b"), 2);
    assert_eq!(map.len(), 1);
    assert_eq!(*map.get(&key("b"))?, 2);
    ensure!(map.contains(&key("b")));

    map.set(key("a"), 1);
    assert_eq!(map.len(), 2);
    ensure!(map.is_nonempty());
    assert_eq!(map.keys().iter().collect_vec(), expected_order);

    check_views_agree(&map)?;
    check_set_and_remove(&map)?;

    map.remove(&key("b"))?;
    assert_eq!(map.len(), 1);
    ensure!(!map.contains(&key("b")));
    assert_eq!(map.get(&key("b")).unwrap_err(), MapError::KeyNotFound);
    Ok(())
}

#[test]
fn test_insertion_ordered_container() -> Result<()> {
    check_walkthrough::<Ordered, Replace>(&["b", "a"])?;
    check_walkthrough::<Ordered, Reinsert>(&["b", "a"])
}

#[test]
fn test_key_ordered_container() -> Result<()> {
    check_walkthrough::<Sorted, Replace>(&["a", "b"])?;
    check_walkthrough::<Sorted, Reinsert>(&["a", "b"])
}

#[test]
fn test_read_only_map() -> Result<()> {
    let map = MapAdapter::<Sorted, ReadOnly>::new(Sorted::from([(key("x"), 1), (key("y"), 2)]));
    check_views_agree(&map)?;
    check_missing_key(&map, &key("z"))?;

    // Removal stays available without assignment
    assert_eq!(map.remove(&key("x"))?, 1);
    assert_eq!(map.keys().iter().collect_vec(), ["y"]);
    Ok(())
}

#[test]
fn test_views_and_iterators_pin_the_container() -> Result<()> {
    let map = MapAdapter::<Ordered, Replace>::default();
    map.set(key("a"), 1);
    map.set(key("b"), 2);

    let items = map.items();
    let mut values = map.values().iter();
    assert_eq!(values.next(), Some(1));

    // Only the view and the iterator are left to keep the container alive
    drop(map);
    assert_eq!(items.owner().pins(), 2);

    assert_eq!(items.len(), 2);
    assert_eq!(items.iter().collect_vec(), [(key("a"), 1), (key("b"), 2)]);
    assert_eq!(values.next(), Some(2));
    assert_eq!(values.next(), None);

    drop(items);
    assert_eq!(values.owner().pins(), 1);
    Ok(())
}

#[test]
fn test_views_are_independent_and_live() -> Result<()> {
    let map = MapAdapter::<Sorted, Replace>::default();
    let first = map.keys();
    let second = map.keys();
    assert!(first.owner().ptr_eq(second.owner()));

    map.set(key("k"), 1);
    assert_eq!(first.len(), 1);
    assert_eq!(second.iter().collect_vec(), ["k"]);

    map.set(key("k"), 5);
    assert_eq!(map.values().iter().collect_vec(), [5]);
    Ok(())
}

#[test]
fn test_reinsert_with_custom_container_capabilities() -> Result<()> {
    // A container that can only construct entries: no in-place replacement.
    #[derive(Default)]
    struct AppendOnly(Vec<(String, i64)>);

    impl Container for AppendOnly {
        type Key = String;
        type Value = i64;
        type Cursor = usize;

        fn len(&self) -> usize {
            self.0.len()
        }

        fn find(&self, key: &String) -> Option<usize> {
            self.0.iter().position(|(k, _)| k == key)
        }

        fn begin(&self) -> Option<usize> {
            (!self.0.is_empty()).then_some(0)
        }

        fn advance(&self, cursor: &usize) -> Option<usize> {
            (cursor + 1 < self.0.len()).then_some(cursor + 1)
        }

        fn entry(&self, cursor: &usize) -> Option<(&String, &i64)> {
            self.0.get(*cursor).map(|(k, v)| (k, v))
        }

        fn entry_mut(&mut self, cursor: &usize) -> Option<(&String, &mut i64)> {
            self.0.get_mut(*cursor).map(|(k, v)| (&*k, v))
        }

        fn erase(&mut self, cursor: usize) -> Option<(String, i64)> {
            (cursor < self.0.len()).then(|| self.0.remove(cursor))
        }
    }

    impl EmplaceOnAbsence for AppendOnly {
        fn emplace(
            &mut self,
            key: String,
            value: i64,
        ) -> std::result::Result<usize, bindmap_core_rs::Occupied<Self>> {
            match self.find(&key) {
                Some(cursor) => Err(bindmap_core_rs::Occupied { cursor, key, value }),
                None => {
                    self.0.push((key, value));
                    Ok(self.0.len() - 1)
                }
            }
        }
    }

    check_walkthrough::<AppendOnly, Reinsert>(&["b", "a"])?;

    let map = MapAdapter::<AppendOnly, Reinsert>::default();
    map.set(key("x"), 1);
    map.set(key("y"), 2);
    map.set(key("x"), 3);
    assert_eq!(map.items().iter().collect_vec(), [(key("y"), 2), (key("x"), 3)]);
    Ok(())
}

#[test]
fn test_replace_in_place_is_exercised_directly() {
    let mut map = Ordered::default();
    assert_eq!(ReplaceInPlace::replace(&mut map, key("a"), 1), None);
    assert_eq!(ReplaceInPlace::replace(&mut map, key("a"), 2), Some(1));
    assert_eq!(Container::len(&map), 1);
}
