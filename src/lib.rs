//! # remotemap
//!
//! An immutable, keyed container that tracks the loading lifecycle of
//! remotely-fetched items. Each item is addressed by a strongly-typed
//! identifier and is always in exactly one of four states: not asked,
//! loading, loaded, or failed. The container stores states handed to it by a
//! fetch layer — it never performs a fetch itself, and every operation is a
//! pure, total function from one container value to the next.
//!
//! `NotAsked` is never stored: an identifier with no entry reads as
//! `NotAsked`, and inserting `NotAsked` removes the entry. Callers only ever
//! see the full four-state [`Remote`] view.
//!
//! ## Usage
//!
//! ```
//! use remotemap::{Id, Remote, RemoteMap};
//!
//! type UserId = Id<String, String, u64>;
//!
//! let alice = UserId::new("alice".to_string());
//! let users = RemoteMap::new()
//!     .loading(alice.clone())
//!     .succeed(alice.clone(), 42);
//!
//! assert_eq!(users.get(&alice), Remote::Success(42));
//! assert_eq!(users.clone().remove(&alice).get(&alice), Remote::NotAsked);
//! ```
//!
//! ## Modules
//!
//! - `remote` - The four-variant remote-state enum and its combinators
//! - `id` - Typed identifiers over comparable keys, and (id, state) rows
//! - `map` - The keyed state container itself

pub mod id;
pub mod map;
pub mod remote;

#[cfg(test)]
mod property_tests;

pub use id::{Id, Row};
pub use map::RemoteMap;
pub use remote::Remote;
