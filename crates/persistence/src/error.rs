// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during persistence operations.
///
/// These never cross the [`crate::SnapshotStore`] boundary; the adapter
/// logs them and degrades to "nothing persisted".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// No snapshot has been persisted yet.
    NothingPersisted,
    /// Reading the underlying storage failed.
    ReadFailed(String),
    /// Writing the underlying storage failed.
    WriteFailed(String),
    /// Serialization/deserialization error.
    SerializationError(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NothingPersisted => write!(f, "No snapshot persisted"),
            Self::ReadFailed(msg) => write!(f, "Snapshot read failed: {msg}"),
            Self::WriteFailed(msg) => write!(f, "Snapshot write failed: {msg}"),
            Self::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}
