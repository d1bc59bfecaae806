//! Keyed remote-state container
//!
//! Pure state transformations only: no I/O, no side effects. Every mutator
//! consumes the map and returns the new value, so the old value survives
//! exactly when the caller cloned it first.
//!
//! The stored representation is three-way (`Loading | Loaded | Failed`);
//! `NotAsked` is represented by key absence and is never stored. That is the
//! central invariant of the module: for every key k, `get` answers `NotAsked`
//! iff k has no entry, and inserting `NotAsked` removes any entry for k. The
//! internal representation never crosses the public boundary — `get`
//! reconstructs the full four-state [`Remote`] view.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::id::{Id, Row};
use crate::remote::Remote;

/// Stored state of a present entry. `NotAsked` is unrepresentable here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
enum Entry<E, T> {
    Loading,
    Loaded(T),
    Failed(E),
}

impl<E, T> Entry<E, T> {
    fn into_remote(self) -> Remote<E, T> {
        match self {
            Entry::Loading => Remote::Loading,
            Entry::Loaded(item) => Remote::Success(item),
            Entry::Failed(error) => Remote::Failure(error),
        }
    }

    fn as_remote(&self) -> Remote<&E, &T> {
        match self {
            Entry::Loading => Remote::Loading,
            Entry::Loaded(item) => Remote::Success(item),
            Entry::Failed(error) => Remote::Failure(error),
        }
    }
}

/// Immutable keyed container tracking the loading lifecycle of
/// remotely-fetched items.
///
/// Maps identifiers to [`Remote`] states; an identifier with no entry reads
/// as [`Remote::NotAsked`]. The container only stores states handed to it —
/// it never performs a fetch, and all operations are total: unknown and
/// duplicate identifiers are well-defined inputs, never errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "K: Serialize, E: Serialize, T: Serialize",
    deserialize = "K: Deserialize<'de> + Ord, E: Deserialize<'de>, T: Deserialize<'de>"
))]
pub struct RemoteMap<K, E, T> {
    entries: BTreeMap<K, Entry<E, T>>,
}

impl<K, E, T> RemoteMap<K, E, T> {
    /// Create an empty container: every identifier reads as `NotAsked`.
    pub fn new() -> Self {
        RemoteMap {
            entries: BTreeMap::new(),
        }
    }

    /// Number of stored entries. `NotAsked` identifiers are never counted.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if no identifier has been marked loading, loaded, or failed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    /// Borrowed (key, state) view of every stored entry, in ascending key
    /// order. States are never `NotAsked` by construction.
    pub fn iter(&self) -> impl Iterator<Item = (&K, Remote<&E, &T>)> {
        self.entries.iter().map(|(key, entry)| (key, entry.as_remote()))
    }
}

impl<K: Ord, E, T> RemoteMap<K, E, T> {
    /// Insert a row. The universal write primitive:
    ///
    /// - `NotAsked` removes the identifier's entry (no-op if absent),
    /// - `Loading`, `Success`, and `Failure` overwrite any prior state.
    ///
    /// Every other writer on this type is derived from `insert`, so the
    /// absence-as-`NotAsked` invariant holds for all of them.
    pub fn insert(mut self, row: Row<K, E, T>) -> Self {
        let key = row.id.into_key();
        match row.state {
            Remote::NotAsked => {
                self.entries.remove(&key);
            }
            Remote::Loading => {
                self.entries.insert(key, Entry::Loading);
            }
            Remote::Success(item) => {
                self.entries.insert(key, Entry::Loaded(item));
            }
            Remote::Failure(error) => {
                self.entries.insert(key, Entry::Failed(error));
            }
        }
        self
    }

    /// Mark one identifier as successfully loaded, overwriting any prior
    /// state.
    pub fn succeed(self, id: Id<K, E, T>, item: T) -> Self {
        self.insert(Row::new(id, Remote::Success(item)))
    }

    /// Mark each (identifier, item) pair as successfully loaded, in
    /// left-to-right order. When an identifier repeats, the last pair wins.
    pub fn succeed_many<I>(self, rows: I) -> Self
    where
        I: IntoIterator<Item = (Id<K, E, T>, T)>,
    {
        rows.into_iter()
            .fold(self, |map, (id, item)| map.succeed(id, item))
    }

    /// Mark one identifier as loading, overwriting any prior state.
    pub fn loading(self, id: Id<K, E, T>) -> Self {
        self.insert(Row::new(id, Remote::Loading))
    }

    /// Mark each identifier as loading, in left-to-right order. Duplicates
    /// are harmless: the resulting state is `Loading` either way.
    pub fn loading_many<I>(self, ids: I) -> Self
    where
        I: IntoIterator<Item = Id<K, E, T>>,
    {
        ids.into_iter().fold(self, |map, id| map.loading(id))
    }

    /// Mark one identifier as failed, overwriting any prior state.
    pub fn fail(self, id: Id<K, E, T>, error: E) -> Self {
        self.insert(Row::new(id, Remote::Failure(error)))
    }

    /// Mark each (identifier, error) pair as failed, in left-to-right order.
    /// When an identifier repeats, the last pair wins.
    pub fn fail_many<I>(self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (Id<K, E, T>, E)>,
    {
        pairs
            .into_iter()
            .fold(self, |map, (id, error)| map.fail(id, error))
    }

    /// Remove an identifier's entry, after which it reads as `NotAsked`.
    /// Idempotent; removing an absent identifier is a no-op.
    pub fn remove(mut self, id: &Id<K, E, T>) -> Self {
        self.entries.remove(id.key());
        self
    }

    /// `true` iff the identifier has a stored entry, i.e. its state is
    /// anything other than `NotAsked`.
    pub fn contains(&self, id: &Id<K, E, T>) -> bool {
        self.entries.contains_key(id.key())
    }

    /// Apply an arbitrary state transition at one identifier.
    ///
    /// `f` always receives a real state — `NotAsked` when the identifier is
    /// absent — so absence and `NotAsked` are indistinguishable to it. The
    /// result goes through [`insert`](Self::insert): returning `NotAsked`
    /// removes the entry.
    pub fn update<F>(mut self, id: Id<K, E, T>, f: F) -> Self
    where
        F: FnOnce(Remote<E, T>) -> Remote<E, T>,
    {
        let current = match self.entries.remove(id.key()) {
            Some(entry) => entry.into_remote(),
            None => Remote::NotAsked,
        };
        self.insert(Row::new(id, f(current)))
    }

    /// Transform the loaded value at one identifier, if and only if that
    /// identifier currently holds one.
    ///
    /// Unlike [`update`](Self::update) this cannot change the variant kind,
    /// delete an entry, or create one: it is a silent no-op when the
    /// identifier is absent, `Loading`, or `Failed`.
    pub fn map_item<F>(mut self, id: &Id<K, E, T>, f: F) -> Self
    where
        F: FnOnce(T) -> T,
    {
        if let Some((key, entry)) = self.entries.remove_entry(id.key()) {
            let entry = match entry {
                Entry::Loaded(item) => Entry::Loaded(f(item)),
                other => other,
            };
            self.entries.insert(key, entry);
        }
        self
    }

    /// Transform every loaded value; `Loading` and `Failed` entries pass
    /// through unchanged, and the key set is preserved.
    pub fn map<U, F>(self, mut f: F) -> RemoteMap<K, E, U>
    where
        F: FnMut(T) -> U,
    {
        RemoteMap {
            entries: self
                .entries
                .into_iter()
                .map(|(key, entry)| {
                    let entry = match entry {
                        Entry::Loading => Entry::Loading,
                        Entry::Loaded(item) => Entry::Loaded(f(item)),
                        Entry::Failed(error) => Entry::Failed(error),
                    };
                    (key, entry)
                })
                .collect(),
        }
    }

    /// Transform every stored error; `Loading` and `Loaded` entries pass
    /// through unchanged, and the key set is preserved.
    pub fn map_err<F2, F>(self, mut f: F) -> RemoteMap<K, F2, T>
    where
        F: FnMut(E) -> F2,
    {
        RemoteMap {
            entries: self
                .entries
                .into_iter()
                .map(|(key, entry)| {
                    let entry = match entry {
                        Entry::Loading => Entry::Loading,
                        Entry::Loaded(item) => Entry::Loaded(item),
                        Entry::Failed(error) => Entry::Failed(f(error)),
                    };
                    (key, entry)
                })
                .collect(),
        }
    }
}

impl<K: Ord, E: Clone, T: Clone> RemoteMap<K, E, T> {
    /// The identifier's remote state: `NotAsked` when absent, otherwise the
    /// stored state reconstructed as a [`Remote`]. Total — never fails.
    pub fn get(&self, id: &Id<K, E, T>) -> Remote<E, T> {
        match self.entries.get(id.key()) {
            Some(Entry::Loading) => Remote::Loading,
            Some(Entry::Loaded(item)) => Remote::Success(item.clone()),
            Some(Entry::Failed(error)) => Remote::Failure(error.clone()),
            None => Remote::NotAsked,
        }
    }

    /// The identifier's row: the identifier paired with [`get`](Self::get).
    pub fn get_with_id(&self, id: Id<K, E, T>) -> Row<K, E, T> {
        let state = self.get(&id);
        Row::new(id, state)
    }

    /// One row per input identifier, in input order.
    ///
    /// A direct element-wise map, not a deduplicating join: output length
    /// equals input length, and duplicate identifiers yield duplicate rows.
    pub fn get_many<I>(&self, ids: I) -> Vec<Row<K, E, T>>
    where
        I: IntoIterator<Item = Id<K, E, T>>,
    {
        ids.into_iter().map(|id| self.get_with_id(id)).collect()
    }
}

impl<K, E, T> Default for RemoteMap<K, E, T> {
    fn default() -> Self {
        RemoteMap::new()
    }
}

/// Collect rows through [`RemoteMap::insert`]: left-to-right, last write per
/// identifier wins, and `NotAsked` rows act as removals.
impl<K: Ord, E, T> FromIterator<Row<K, E, T>> for RemoteMap<K, E, T> {
    fn from_iter<I: IntoIterator<Item = Row<K, E, T>>>(rows: I) -> Self {
        rows.into_iter().fold(RemoteMap::new(), RemoteMap::insert)
    }
}
