//! Typed identifiers and rows
//!
//! An [`Id`] addresses one logical remote-fetched entity. At runtime it is
//! nothing but its comparable key `K`; the `E` and `T` parameters exist only
//! so that identifiers for different (error, item) pairs cannot be mixed up.
//! A [`Row`] pairs an identifier with its remote state, so bulk reads and
//! writes never separate a value from its key.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::remote::Remote;

/// Typed key addressing one logical remote-fetched entity.
///
/// Two identifiers are equal iff their underlying keys are equal. The key
/// must be stable and collision-free: distinct logical entities must produce
/// distinct keys. The container never interprets the key's contents.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(serialize = "K: Serialize", deserialize = "K: Deserialize<'de>"))]
pub struct Id<K, E, T> {
    key: K,
    #[serde(skip)]
    _marker: PhantomData<fn() -> (E, T)>,
}

impl<K, E, T> Id<K, E, T> {
    /// Wrap a comparable key as a typed identifier.
    pub fn new(key: K) -> Self {
        Id {
            key,
            _marker: PhantomData,
        }
    }

    /// The underlying key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Unwrap back to the underlying key.
    pub fn into_key(self) -> K {
        self.key
    }

    /// Re-tag this identifier for a different (error, item) pair.
    ///
    /// The key is unchanged. Used to keep addressing entries after
    /// [`RemoteMap::map`](crate::RemoteMap::map) or
    /// [`RemoteMap::map_err`](crate::RemoteMap::map_err) change the
    /// container's type parameters.
    pub fn cast<E2, T2>(self) -> Id<K, E2, T2> {
        Id::new(self.key)
    }
}

// Trait impls are manual so bounds land on `K` only, not the phantom pair.

impl<K: Clone, E, T> Clone for Id<K, E, T> {
    fn clone(&self) -> Self {
        Id::new(self.key.clone())
    }
}

impl<K: Copy, E, T> Copy for Id<K, E, T> {}

impl<K: PartialEq, E, T> PartialEq for Id<K, E, T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Eq, E, T> Eq for Id<K, E, T> {}

impl<K: PartialOrd, E, T> PartialOrd for Id<K, E, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.key.partial_cmp(&other.key)
    }
}

impl<K: Ord, E, T> Ord for Id<K, E, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<K: Hash, E, T> Hash for Id<K, E, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl<K: fmt::Debug, E, T> fmt::Debug for Id<K, E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Id").field(&self.key).finish()
    }
}

impl<K, E, T> From<K> for Id<K, E, T> {
    fn from(key: K) -> Self {
        Id::new(key)
    }
}

/// An (identifier, remote state) pair.
///
/// The read/write view used by bulk operations: a row always carries its key
/// alongside its value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "K: Serialize, E: Serialize, T: Serialize",
    deserialize = "K: Deserialize<'de>, E: Deserialize<'de>, T: Deserialize<'de>"
))]
pub struct Row<K, E, T> {
    /// The entity this row describes.
    pub id: Id<K, E, T>,
    /// The entity's remote state.
    pub state: Remote<E, T>,
}

impl<K, E, T> Row<K, E, T> {
    /// Pair an identifier with a remote state.
    pub fn new(id: Id<K, E, T>, state: Remote<E, T>) -> Self {
        Row { id, state }
    }
}
