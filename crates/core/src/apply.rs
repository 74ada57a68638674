// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::action::Action;
use crate::state::{CartState, FavoritesState, State, Toast, UiState, clamp_quantity};

/// Builds a new state replacing only the UI slice.
fn with_ui(state: &State, ui: UiState) -> State {
    State {
        ui,
        ..state.clone()
    }
}

/// Applies an action to the current state, producing a new state.
///
/// This is a total function: every action variant succeeds, and the input
/// state is never mutated. The catalog is shared, so the returned value is
/// a cheap copy.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `action` - The action to apply
#[must_use]
pub fn apply(state: &State, action: Action) -> State {
    match action {
        Action::CartOpen { open } => with_ui(
            state,
            UiState {
                cart_open: open,
                ..state.ui.clone()
            },
        ),
        Action::ProductOpen { id } => with_ui(
            state,
            UiState {
                active_product_id: id,
                ..state.ui.clone()
            },
        ),
        Action::ToastShow { message } => {
            let id: u64 = state.ui.toast_seq;
            with_ui(
                state,
                UiState {
                    toast: Some(Toast { id, message }),
                    toast_seq: id.wrapping_add(1),
                    ..state.ui.clone()
                },
            )
        }
        Action::ToastClear => with_ui(
            state,
            UiState {
                toast: None,
                ..state.ui.clone()
            },
        ),
        Action::CartAdd { id, qty } => {
            let current: u32 = state.cart.get(&id).copied().unwrap_or(0);
            let add: u32 = clamp_quantity(qty);
            let mut cart: CartState = state.cart.clone();
            // Saturates at the cap rather than truncating the addition
            cart.insert(id, clamp_quantity(current + add));
            State {
                cart,
                ..state.clone()
            }
        }
        Action::CartSetQty { id, qty } => {
            let mut cart: CartState = state.cart.clone();
            cart.insert(id, clamp_quantity(qty));
            State {
                cart,
                ..state.clone()
            }
        }
        Action::CartRemove { id } => {
            let mut cart: CartState = state.cart.clone();
            cart.remove(&id);
            State {
                cart,
                ..state.clone()
            }
        }
        Action::CartClear => State {
            cart: CartState::new(),
            ..state.clone()
        },
        Action::FavToggle { id } => {
            let mut favorites: FavoritesState = state.favorites.clone();
            if !favorites.remove(&id) {
                favorites.insert(id);
            }
            State {
                favorites,
                ..state.clone()
            }
        }
        Action::FavReplace { favorites } => State {
            favorites,
            ..state.clone()
        },
        Action::AuthSet { user } => State {
            user,
            ..state.clone()
        },
        Action::AuthSignOut => State {
            user: None,
            ..state.clone()
        },
    }
}
