// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::backend::SnapshotStore;
use crate::snapshot::Snapshot;
use std::sync::Mutex;
use tracing::warn;

/// In-memory snapshot store.
///
/// Holds the serialized JSON text rather than the snapshot value, so loads
/// and saves exercise the same wire shape as the file backend. Used by
/// tests and by embedders that provide their own durability.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    slot: Mutex<Option<String>>,
}

impl MemorySnapshotStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a raw payload.
    ///
    /// The payload does not have to be valid; tests use this to simulate
    /// corrupt persisted data.
    #[must_use]
    pub fn with_payload(raw: &str) -> Self {
        Self {
            slot: Mutex::new(Some(raw.to_string())),
        }
    }

    /// Returns the currently stored raw payload, if any.
    #[must_use]
    pub fn payload(&self) -> Option<String> {
        self.slot.lock().map_or(None, |guard| guard.clone())
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> Option<Snapshot> {
        let Ok(guard) = self.slot.lock() else {
            warn!("Snapshot slot lock poisoned; treating as nothing persisted");
            return None;
        };
        let raw: &String = guard.as_ref()?;
        match serde_json::from_str(raw) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                warn!("Discarding unusable in-memory snapshot: {err}");
                None
            }
        }
    }

    fn save(&self, snapshot: &Snapshot) {
        let raw: String = match serde_json::to_string(snapshot) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("Dropping snapshot write: {err}");
                return;
            }
        };
        match self.slot.lock() {
            Ok(mut guard) => *guard = Some(raw),
            Err(_) => warn!("Snapshot slot lock poisoned; dropping write"),
        }
    }
}
