use derive_getters::Dissolve;

mod btree_map;
mod index_map;

/// Key-unique associative container that can be exposed through a dict-like adapter.
///
/// Entries are addressed by cursors. A cursor stays meaningful only while the container is not
/// structurally modified; `None` plays the role of the past-the-end sentinel everywhere.
/// Traversal order (insertion, key order, ...) is a property of the container itself.
pub trait Container {
    type Key;
    type Value;
    type Cursor: Clone;

    /// Number of stored entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Locate the entry for a given key.
    fn find(&self, key: &Self::Key) -> Option<Self::Cursor>;

    /// Cursor of the first entry in traversal order.
    fn begin(&self) -> Option<Self::Cursor>;

    /// Cursor of the entry following the given one in traversal order.
    fn advance(&self, cursor: &Self::Cursor) -> Option<Self::Cursor>;

    fn entry(&self, cursor: &Self::Cursor) -> Option<(&Self::Key, &Self::Value)>;

    fn entry_mut(&mut self, cursor: &Self::Cursor) -> Option<(&Self::Key, &mut Self::Value)>;

    /// Remove the entry under the cursor and hand it back.
    fn erase(&mut self, cursor: Self::Cursor) -> Option<(Self::Key, Self::Value)>;
}

/// Containers that can overwrite the value stored under a key without touching its slot.
pub trait ReplaceInPlace: Container {
    /// Overwrite the slot for `key`, creating it if absent. Returns the previous value.
    fn replace(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;
}

/// Containers that can construct a fresh entry when the key is absent.
pub trait EmplaceOnAbsence: Container {
    /// Insert a new entry only if `key` is absent. On an existing key nothing is modified and the
    /// rejected pair is returned along with the cursor of the entry that blocked the insertion.
    fn emplace(
        &mut self,
        key: Self::Key,
        value: Self::Value,
    ) -> Result<Self::Cursor, Occupied<Self>>;
}

/// Rejected insertion: the key is already taken by the entry under `cursor`.
#[derive(Dissolve)]
pub struct Occupied<C: Container + ?Sized> {
    pub cursor: C::Cursor,
    pub key: C::Key,
    pub value: C::Value,
}

impl<C: Container + ?Sized> std::fmt::Debug for Occupied<C>
where
    C::Cursor: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Occupied")
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}
