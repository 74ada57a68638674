// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Gleam Store.
//!
//! This crate persists the durable slice of application state (cart,
//! favorites, and user session) as a single JSON snapshot, and restores
//! it at startup.
//!
//! ## Failure semantics
//!
//! Persistence is strictly best-effort. `load` answers "nothing persisted"
//! for absent, unreadable, or shape-invalid data, and `save` swallows
//! every write failure after logging it. No persistence failure is ever
//! surfaced to the caller; the worst case is starting from empty defaults
//! or losing the latest unsynced mutation.
//!
//! ## Backends
//!
//! - [`FileSnapshotStore`] — a single JSON file, the production backend
//! - [`MemorySnapshotStore`] — a string slot behind a mutex, used by tests
//!   and embedders that bring their own durability
//!
//! Both round-trip snapshots through the same serialized form, so tests
//! against the memory backend exercise the real wire shape.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod backend;
mod error;
mod snapshot;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use backend::{
    DEFAULT_SNAPSHOT_FILE, FileSnapshotStore, MemorySnapshotStore, SnapshotStore,
};
pub use error::PersistenceError;
pub use snapshot::Snapshot;
