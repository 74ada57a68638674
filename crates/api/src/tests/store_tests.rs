// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Store;
use crate::tests::helpers::{
    TEST_EMAIL, TEST_PASSWORD, TestHarness, create_test_catalog, create_test_store, pid,
};
use gleam_store::Action;
use gleam_store_persistence::{MemorySnapshotStore, SnapshotStore};
use gleam_store_remote::{InMemoryRemote, RemoteStore};
use std::sync::Arc;

#[test]
fn test_open_hydrates_from_the_persisted_snapshot() {
    let snapshots: Arc<MemorySnapshotStore> = Arc::new(MemorySnapshotStore::with_payload(
        r#"{"cart": {"r1": 2}, "favorites": {"r2": true}, "user": null}"#,
    ));
    let remote: Arc<InMemoryRemote> = Arc::new(InMemoryRemote::new());

    let store: Store = Store::open(
        create_test_catalog(),
        Arc::clone(&snapshots) as Arc<dyn SnapshotStore>,
        remote as Arc<dyn RemoteStore>,
    );

    assert_eq!(store.state().cart.get(&pid("r1")), Some(&2));
    assert!(store.state().favorites.contains(&pid("r2")));
    assert_eq!(store.state().user, None);
}

#[test]
fn test_open_with_corrupt_snapshot_starts_empty() {
    let snapshots: Arc<MemorySnapshotStore> =
        Arc::new(MemorySnapshotStore::with_payload("not even json"));
    let remote: Arc<InMemoryRemote> = Arc::new(InMemoryRemote::new());

    let store: Store = Store::open(
        create_test_catalog(),
        snapshots as Arc<dyn SnapshotStore>,
        remote as Arc<dyn RemoteStore>,
    );

    assert!(store.state().cart.is_empty());
    assert!(store.state().favorites.is_empty());
}

#[test]
fn test_durable_changes_are_persisted_after_dispatch() {
    let mut harness: TestHarness = create_test_store();
    assert_eq!(harness.snapshots.payload(), None);

    harness.store.dispatch(Action::CartAdd {
        id: pid("r1"),
        qty: 2,
    });

    let payload: String = harness.snapshots.payload().unwrap();
    assert!(payload.contains("\"r1\":2"));
}

#[test]
fn test_ui_only_changes_do_not_write() {
    let mut harness: TestHarness = create_test_store();

    harness.store.dispatch(Action::CartOpen { open: true });
    harness.store.dispatch(Action::ToastShow {
        message: String::from("hello"),
    });
    harness.store.dispatch(Action::ProductOpen {
        id: Some(pid("r1")),
    });

    assert_eq!(harness.snapshots.payload(), None);
}

#[test]
fn test_cart_survives_a_restart_round_trip() {
    let mut harness: TestHarness = create_test_store();
    harness.store.dispatch(Action::CartAdd {
        id: pid("r1"),
        qty: 3,
    });
    harness.store.dispatch(Action::FavToggle { id: pid("g1") });

    // A second store over the same snapshot slot sees the durable slice
    let reopened: Store = Store::open(
        create_test_catalog(),
        Arc::clone(&harness.snapshots) as Arc<dyn SnapshotStore>,
        Arc::clone(&harness.remote) as Arc<dyn RemoteStore>,
    );

    assert_eq!(reopened.state().cart.get(&pid("r1")), Some(&3));
    assert!(reopened.state().favorites.contains(&pid("g1")));
}

#[test]
fn test_bootstrap_session_adopts_an_existing_remote_session() {
    let harness: TestHarness = create_test_store();
    harness
        .remote
        .sign_in(TEST_EMAIL, TEST_PASSWORD)
        .unwrap();

    let mut store: Store = Store::open(
        create_test_catalog(),
        Arc::clone(&harness.snapshots) as Arc<dyn SnapshotStore>,
        Arc::clone(&harness.remote) as Arc<dyn RemoteStore>,
    );
    store.bootstrap_session();

    assert_eq!(
        store.state().user.as_ref().map(|u| u.email.as_str()),
        Some(TEST_EMAIL)
    );
}

#[test]
fn test_bootstrap_session_with_unreachable_backend_stays_guest() {
    let mut harness: TestHarness = create_test_store();
    harness.remote.set_unavailable(true);

    harness.store.bootstrap_session();

    assert_eq!(harness.store.state().user, None);
    assert_eq!(crate::tests::helpers::last_toast(&harness.store), None);
}
