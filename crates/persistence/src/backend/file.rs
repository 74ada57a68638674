// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::backend::SnapshotStore;
use crate::error::PersistenceError;
use crate::snapshot::Snapshot;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default snapshot file name.
///
/// The name doubles as the record key, carried over from the storefront's
/// original local-storage key.
pub const DEFAULT_SNAPSHOT_FILE: &str = "gleam_store_v1.json";

/// File-backed snapshot store: one JSON document in one file.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    /// Creates a store persisting to the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store persisting to [`DEFAULT_SNAPSHOT_FILE`] inside a
    /// directory.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(DEFAULT_SNAPSHOT_FILE),
        }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_inner(&self) -> Result<Snapshot, PersistenceError> {
        let raw: Vec<u8> = match std::fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(PersistenceError::NothingPersisted);
            }
            Err(err) => return Err(PersistenceError::ReadFailed(err.to_string())),
        };
        serde_json::from_slice(&raw)
            .map_err(|err| PersistenceError::SerializationError(err.to_string()))
    }

    fn save_inner(&self, snapshot: &Snapshot) -> Result<(), PersistenceError> {
        let raw: Vec<u8> = serde_json::to_vec(snapshot)
            .map_err(|err| PersistenceError::SerializationError(err.to_string()))?;
        std::fs::write(&self.path, raw)
            .map_err(|err| PersistenceError::WriteFailed(err.to_string()))
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> Option<Snapshot> {
        match self.load_inner() {
            Ok(snapshot) => Some(snapshot),
            Err(PersistenceError::NothingPersisted) => {
                debug!("No snapshot file at {}", self.path.display());
                None
            }
            Err(err) => {
                warn!("Discarding unusable snapshot at {}: {err}", self.path.display());
                None
            }
        }
    }

    fn save(&self, snapshot: &Snapshot) {
        if let Err(err) = self.save_inner(snapshot) {
            warn!("Dropping snapshot write to {}: {err}", self.path.display());
        }
    }
}
