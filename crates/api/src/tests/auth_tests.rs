// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    TEST_EMAIL, TEST_PASSWORD, TestHarness, create_test_store, last_toast, pid,
};
use gleam_store::FavoritesState;

#[test]
fn test_sign_in_sets_the_session_and_toasts() {
    let mut harness: TestHarness = create_test_store();

    harness.store.sign_in(TEST_EMAIL, TEST_PASSWORD);

    let user = harness.store.state().user.as_ref().unwrap();
    assert_eq!(user.email, TEST_EMAIL);
    assert_eq!(user.name.as_deref(), Some("Anna"));
    assert_eq!(last_toast(&harness.store).as_deref(), Some("Signed in."));
}

#[test]
fn test_sign_in_trims_its_inputs() {
    let mut harness: TestHarness = create_test_store();

    harness
        .store
        .sign_in("  anna@example.com  ", "  hunter42  ");

    assert!(harness.store.state().user.is_some());
}

#[test]
fn test_sign_in_reconciles_local_and_remote_favorites() {
    // Two local favorites before sign-in, one different favorite remote
    let mut harness: TestHarness = create_test_store();
    harness.store.toggle_favorite(&pid("r1"));
    harness.store.toggle_favorite(&pid("r2"));
    let user_id: String = harness.remote.user_id_for(TEST_EMAIL).unwrap();
    harness.remote.seed_favorite(&user_id, &pid("g1"));

    harness.store.sign_in(TEST_EMAIL, TEST_PASSWORD);

    let expected: FavoritesState = [pid("r1"), pid("r2"), pid("g1")].into_iter().collect();
    assert_eq!(harness.store.state().favorites, expected);
}

#[test]
fn test_locally_invalid_credentials_never_reach_the_backend() {
    let mut harness: TestHarness = create_test_store();

    harness.store.sign_in("not-an-email", TEST_PASSWORD);
    assert_eq!(harness.store.state().user, None);
    assert_eq!(
        last_toast(&harness.store).as_deref(),
        Some("Please check your details and try again.")
    );

    harness.store.sign_in(TEST_EMAIL, "short");
    assert_eq!(harness.store.state().user, None);
}

#[test]
fn test_rejected_credentials_surface_the_backend_message() {
    let mut harness: TestHarness = create_test_store();

    harness.store.sign_in(TEST_EMAIL, "wrong-password");

    assert_eq!(harness.store.state().user, None);
    let toast: String = last_toast(&harness.store).unwrap();
    assert!(toast.contains("Invalid login credentials"));
}

#[test]
fn test_sign_out_clears_session_and_favorites() {
    let mut harness: TestHarness = create_test_store();
    harness.store.sign_in(TEST_EMAIL, TEST_PASSWORD);
    harness.store.toggle_favorite(&pid("r1"));

    harness.store.sign_out();

    assert_eq!(harness.store.state().user, None);
    assert!(harness.store.state().favorites.is_empty());
    assert_eq!(last_toast(&harness.store).as_deref(), Some("Signed out."));
}

#[test]
fn test_sign_up_with_immediate_session_is_welcomed() {
    let mut harness: TestHarness = create_test_store();

    harness
        .store
        .sign_up("new@example.com", "secret1", "New User");

    let user = harness.store.state().user.as_ref().unwrap();
    assert_eq!(user.email, "new@example.com");
    assert_eq!(
        last_toast(&harness.store).as_deref(),
        Some("Welcome to Lumière. Your account is ready.")
    );
}

#[test]
fn test_sign_up_requiring_confirmation_stays_signed_out() {
    let mut harness: TestHarness = create_test_store();
    harness.remote.set_confirmation_required(true);

    harness
        .store
        .sign_up("new@example.com", "secret1", "New User");

    assert_eq!(harness.store.state().user, None);
    assert_eq!(
        last_toast(&harness.store).as_deref(),
        Some("Check your email to confirm your account.")
    );
}

#[test]
fn test_sign_up_validates_the_name_locally() {
    let mut harness: TestHarness = create_test_store();

    harness.store.sign_up("new@example.com", "secret1", "N");

    assert_eq!(harness.store.state().user, None);
    assert_eq!(
        last_toast(&harness.store).as_deref(),
        Some("Please check your details and try again.")
    );
}
