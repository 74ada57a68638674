// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_catalog, pid};
use crate::{CartState, FavoritesState, State};
use gleam_store_domain::UserSession;

#[test]
fn test_restored_parts_carry_over() {
    let cart: CartState = [(pid("r1"), 2), (pid("r2"), 1)].into_iter().collect();
    let favorites: FavoritesState = [pid("r3")].into_iter().collect();
    let user: UserSession = UserSession::new("u-1", "anna@example.com", None);

    let state: State = State::with_parts(
        create_test_catalog(),
        cart.clone(),
        favorites.clone(),
        Some(user.clone()),
    );

    assert_eq!(state.cart, cart);
    assert_eq!(state.favorites, favorites);
    assert_eq!(state.user, Some(user));
    assert!(!state.ui.cart_open);
    assert_eq!(state.ui.toast, None);
}

#[test]
fn test_zero_quantities_are_dropped_and_high_ones_clamped() {
    let cart: CartState = [(pid("r1"), 0), (pid("r2"), 500), (pid("r3"), 3)]
        .into_iter()
        .collect();

    let state: State = State::with_parts(
        create_test_catalog(),
        cart,
        FavoritesState::new(),
        None,
    );

    assert!(!state.cart.contains_key(&pid("r1")));
    assert_eq!(state.cart.get(&pid("r2")), Some(&99));
    assert_eq!(state.cart.get(&pid("r3")), Some(&3));
}

#[test]
fn test_user_without_id_is_treated_as_guest() {
    let user: UserSession = UserSession::new("", "anna@example.com", None);

    let state: State = State::with_parts(
        create_test_catalog(),
        CartState::new(),
        FavoritesState::new(),
        Some(user),
    );

    assert_eq!(state.user, None);
}
