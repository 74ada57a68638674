// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::FavoritesState;
use gleam_store_domain::{ProductId, UserSession};

/// An action represents user or system intent as data only.
///
/// Actions are the only way to request state changes, and applying one is
/// total: no variant can fail. Out-of-range inputs are clamped or ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Open or close the cart drawer.
    CartOpen {
        /// Whether the drawer should be open.
        open: bool,
    },
    /// Open a product detail view, or close it with `None`.
    ProductOpen {
        /// The product to show, if any.
        id: Option<ProductId>,
    },
    /// Show a transient notice, replacing any current one.
    ToastShow {
        /// The notice text.
        message: String,
    },
    /// Clear the current notice.
    ToastClear,
    /// Add a quantity to a cart entry, saturating at the quantity cap.
    CartAdd {
        /// The product to add.
        id: ProductId,
        /// Requested quantity; clamped before and after the addition.
        qty: u32,
    },
    /// Set a cart entry to an absolute quantity, clamped.
    CartSetQty {
        /// The product to set.
        id: ProductId,
        /// Requested quantity; clamped.
        qty: u32,
    },
    /// Remove a cart entry. No-op when the product is not in the cart.
    CartRemove {
        /// The product to remove.
        id: ProductId,
    },
    /// Empty the cart.
    CartClear,
    /// Flip a product's favorite membership.
    FavToggle {
        /// The product to toggle.
        id: ProductId,
    },
    /// Replace the favorites set wholesale (used after remote
    /// reconciliation).
    FavReplace {
        /// The new favorites set.
        favorites: FavoritesState,
    },
    /// Set or clear the authenticated session.
    AuthSet {
        /// The session, or `None` for guest.
        user: Option<UserSession>,
    },
    /// Clear the authenticated session.
    AuthSignOut,
}
