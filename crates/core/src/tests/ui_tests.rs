// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_state, pid};
use crate::{Action, State, Toast, apply};

#[test]
fn test_cart_open_toggles_only_ui() {
    let state: State = create_test_state();

    let opened: State = apply(&state, Action::CartOpen { open: true });
    assert!(opened.ui.cart_open);
    assert_eq!(opened.cart, state.cart);

    let closed: State = apply(&opened, Action::CartOpen { open: false });
    assert!(!closed.ui.cart_open);
}

#[test]
fn test_product_open_and_close() {
    let state: State = create_test_state();

    let state: State = apply(
        &state,
        Action::ProductOpen {
            id: Some(pid("r1")),
        },
    );
    assert_eq!(state.ui.active_product_id, Some(pid("r1")));

    let state: State = apply(&state, Action::ProductOpen { id: None });
    assert_eq!(state.ui.active_product_id, None);
}

#[test]
fn test_toast_show_and_clear() {
    let state: State = create_test_state();

    let state: State = apply(
        &state,
        Action::ToastShow {
            message: String::from("Saved to favorites."),
        },
    );
    let toast: &Toast = state.ui.toast.as_ref().unwrap();
    assert_eq!(toast.message, "Saved to favorites.");

    let state: State = apply(&state, Action::ToastClear);
    assert_eq!(state.ui.toast, None);
}

#[test]
fn test_identical_messages_get_fresh_toast_ids() {
    let mut state: State = create_test_state();

    state = apply(
        &state,
        Action::ToastShow {
            message: String::from("Saved."),
        },
    );
    let first_id: u64 = state.ui.toast.as_ref().unwrap().id;

    state = apply(
        &state,
        Action::ToastShow {
            message: String::from("Saved."),
        },
    );
    let second_id: u64 = state.ui.toast.as_ref().unwrap().id;

    assert_ne!(first_id, second_id);
}

#[test]
fn test_new_toast_replaces_the_old_one() {
    let mut state: State = create_test_state();

    state = apply(
        &state,
        Action::ToastShow {
            message: String::from("First notice"),
        },
    );
    state = apply(
        &state,
        Action::ToastShow {
            message: String::from("Second notice"),
        },
    );

    assert_eq!(state.ui.toast.as_ref().unwrap().message, "Second notice");
}
