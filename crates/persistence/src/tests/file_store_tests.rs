// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::create_test_snapshot;
use crate::{FileSnapshotStore, Snapshot, SnapshotStore};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counter for generating unique temp file names.
///
/// This keeps tests isolated from each other without time-based collisions.
static FILE_COUNTER: AtomicU64 = AtomicU64::new(0);

fn temp_snapshot_path() -> PathBuf {
    let n: u64 = FILE_COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!(
        "gleam_store_test_{}_{n}.json",
        std::process::id()
    ))
}

#[test]
fn test_file_round_trip() {
    let path: PathBuf = temp_snapshot_path();
    let store: FileSnapshotStore = FileSnapshotStore::new(&path);
    let snapshot: Snapshot = create_test_snapshot();

    store.save(&snapshot);
    let loaded: Option<Snapshot> = store.load();

    std::fs::remove_file(&path).ok();
    assert_eq!(loaded, Some(snapshot));
}

#[test]
fn test_missing_file_loads_as_none() {
    let store: FileSnapshotStore = FileSnapshotStore::new(temp_snapshot_path());

    assert_eq!(store.load(), None);
}

#[test]
fn test_corrupt_file_loads_as_none() {
    let path: PathBuf = temp_snapshot_path();
    std::fs::write(&path, b"{{{ definitely not json").unwrap();
    let store: FileSnapshotStore = FileSnapshotStore::new(&path);

    let loaded: Option<Snapshot> = store.load();

    std::fs::remove_file(&path).ok();
    assert_eq!(loaded, None);
}

#[test]
fn test_save_replaces_the_previous_snapshot() {
    let path: PathBuf = temp_snapshot_path();
    let store: FileSnapshotStore = FileSnapshotStore::new(&path);

    let mut snapshot: Snapshot = create_test_snapshot();
    store.save(&snapshot);
    snapshot.user = None;
    store.save(&snapshot);

    let loaded: Option<Snapshot> = store.load();

    std::fs::remove_file(&path).ok();
    assert_eq!(loaded, Some(snapshot));
}

#[test]
fn test_save_into_a_missing_directory_is_swallowed() {
    let path: PathBuf = temp_snapshot_path().join("nested").join("snapshot.json");
    let store: FileSnapshotStore = FileSnapshotStore::new(path);

    // Parent directory does not exist; the write fails and is dropped
    store.save(&create_test_snapshot());

    assert_eq!(store.load(), None);
}
