use derive_more::Display;

use crate::container::{Container, EmplaceOnAbsence, ReplaceInPlace};

/// How item assignment is carried out for a bound map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum AssignKind {
    /// Overwrite the existing slot (or create it).
    Replace,
    /// Insert a fresh entry; erase the existing one and insert again if the key is taken.
    Reinsert,
    /// Item assignment is not part of the surface.
    Unsupported,
}

/// Mutation policy selected once, when the adapter type is instantiated.
pub trait Policy {
    const KIND: AssignKind;
}

/// Policies that actually implement item assignment for the container `C`.
pub trait Assign<C: Container>: Policy {
    /// Store `value` under `key` and hand back the value it displaced, if any. Callers drop the
    /// displaced value once they no longer hold the container.
    fn assign(container: &mut C, key: C::Key, value: C::Value) -> Option<C::Value>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Replace;

#[derive(Debug, Clone, Copy, Default)]
pub struct Reinsert;

/// No `Assign` implementation: adapters with this policy have no `set`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadOnly;

impl Policy for Replace {
    const KIND: AssignKind = AssignKind::Replace;
}

impl Policy for Reinsert {
    const KIND: AssignKind = AssignKind::Reinsert;
}

impl Policy for ReadOnly {
    const KIND: AssignKind = AssignKind::Unsupported;
}

impl<C: ReplaceInPlace> Assign<C> for Replace {
    fn assign(container: &mut C, key: C::Key, value: C::Value) -> Option<C::Value> {
        container.replace(key, value)
    }
}

impl<C: EmplaceOnAbsence> Assign<C> for Reinsert {
    fn assign(container: &mut C, key: C::Key, value: C::Value) -> Option<C::Value> {
        let Err(occupied) = container.emplace(key, value) else {
            return None;
        };
        let (cursor, key, value) = occupied.dissolve();

        log::trace!("Key is already present, erasing the existing entry before re-inserting");
        let displaced = container.erase(cursor).map(|(_, value)| value);

        // A single retry is enough for any container that keeps its keys unique.
        let retried = container.emplace(key, value);
        if retried.is_err() {
            log::error!("Re-insertion failed right after erasing the conflicting entry");
        }
        debug_assert!(retried.is_ok(), "container rejected a key it has just erased");
        displaced
    }
}
