//! Remote-state lifecycle enum
//!
//! `Remote` models the full lifecycle of a single remotely-fetched value:
//! nothing requested yet, request in flight, loaded, or failed. It is the
//! shape consumed and produced by [`RemoteMap`](crate::RemoteMap) — the map
//! itself never stores `NotAsked` (absence stands in for it), but callers
//! always see the full four-variant view.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a single remote fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Remote<E, T> {
    /// Nothing is known yet; no request has been made.
    NotAsked,
    /// A request is in flight.
    Loading,
    /// The value loaded successfully.
    Success(T),
    /// The request finished with an error.
    Failure(E),
}

impl<E, T> Remote<E, T> {
    /// Returns `true` if no request has been made.
    pub fn is_not_asked(&self) -> bool {
        matches!(self, Remote::NotAsked)
    }

    /// Returns `true` if a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Remote::Loading)
    }

    /// Returns `true` if the value loaded successfully.
    pub fn is_success(&self) -> bool {
        matches!(self, Remote::Success(_))
    }

    /// Returns `true` if the request failed.
    pub fn is_failure(&self) -> bool {
        matches!(self, Remote::Failure(_))
    }

    /// Transform the loaded value, leaving every other variant unchanged.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Remote<E, U> {
        match self {
            Remote::NotAsked => Remote::NotAsked,
            Remote::Loading => Remote::Loading,
            Remote::Success(item) => Remote::Success(f(item)),
            Remote::Failure(error) => Remote::Failure(error),
        }
    }

    /// Transform the error, leaving every other variant unchanged.
    pub fn map_err<F2, F: FnOnce(E) -> F2>(self, f: F) -> Remote<F2, T> {
        match self {
            Remote::NotAsked => Remote::NotAsked,
            Remote::Loading => Remote::Loading,
            Remote::Success(item) => Remote::Success(item),
            Remote::Failure(error) => Remote::Failure(f(error)),
        }
    }

    /// The loaded value, if there is one.
    pub fn success(&self) -> Option<&T> {
        match self {
            Remote::Success(item) => Some(item),
            _ => None,
        }
    }

    /// The error, if the request failed.
    pub fn failure(&self) -> Option<&E> {
        match self {
            Remote::Failure(error) => Some(error),
            _ => None,
        }
    }

    /// Consume the state, keeping only a loaded value.
    pub fn into_success(self) -> Option<T> {
        match self {
            Remote::Success(item) => Some(item),
            _ => None,
        }
    }

    /// Borrowed view of the state, `Option::as_ref` style.
    pub fn as_ref(&self) -> Remote<&E, &T> {
        match self {
            Remote::NotAsked => Remote::NotAsked,
            Remote::Loading => Remote::Loading,
            Remote::Success(item) => Remote::Success(item),
            Remote::Failure(error) => Remote::Failure(error),
        }
    }
}

impl<E, T> Default for Remote<E, T> {
    fn default() -> Self {
        Remote::NotAsked
    }
}

/// A finished fetch maps directly: `Ok` is `Success`, `Err` is `Failure`.
impl<E, T> From<Result<T, E>> for Remote<E, T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(item) => Remote::Success(item),
            Err(error) => Remote::Failure(error),
        }
    }
}
