// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gleam_store_catalog::Catalog;
use gleam_store_domain::{Product, ProductId, UserSession};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Smallest quantity a cart entry may hold.
pub const MIN_QUANTITY: u32 = 1;

/// Largest quantity a cart entry may hold.
pub const MAX_QUANTITY: u32 = 99;

/// Clamps a requested quantity into `[MIN_QUANTITY, MAX_QUANTITY]`.
#[must_use]
pub const fn clamp_quantity(qty: u32) -> u32 {
    if qty < MIN_QUANTITY {
        MIN_QUANTITY
    } else if qty > MAX_QUANTITY {
        MAX_QUANTITY
    } else {
        qty
    }
}

/// The shopping cart: product id to quantity.
///
/// Every stored quantity is in `[MIN_QUANTITY, MAX_QUANTITY]`. Removal
/// deletes the key entirely; a zero quantity is never stored.
pub type CartState = BTreeMap<ProductId, u32>;

/// The favorites set.
pub type FavoritesState = BTreeSet<ProductId>;

/// A transient user-visible notice.
///
/// The id is unique per notice for the process lifetime, so a rendering
/// layer can key a replace animation off an id change even when two
/// consecutive notices carry identical text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Unique notice id.
    pub id: u64,
    /// Human-readable message.
    pub message: String,
}

/// Ephemeral UI state. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UiState {
    /// Whether the cart drawer is open.
    pub cart_open: bool,
    /// The product whose detail view is open, if any.
    pub active_product_id: Option<ProductId>,
    /// The currently visible notice, if any.
    pub toast: Option<Toast>,
    /// Monotonic counter feeding [`Toast::id`].
    pub toast_seq: u64,
}

/// The complete application state.
///
/// Constructed once at startup by merging a persisted snapshot with a
/// freshly loaded catalog, then mutated only through the reducer. The
/// catalog is shared behind an `Arc` so that reducer transitions stay
/// cheap copies.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    /// The immutable product catalog.
    pub catalog: Arc<Catalog>,
    /// The shopping cart.
    pub cart: CartState,
    /// The favorites set.
    pub favorites: FavoritesState,
    /// The authenticated user, if any.
    pub user: Option<UserSession>,
    /// Ephemeral UI state.
    pub ui: UiState,
}

impl State {
    /// Creates a fresh state with an empty cart, no favorites, and no user.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            cart: CartState::new(),
            favorites: FavoritesState::new(),
            user: None,
            ui: UiState::default(),
        }
    }

    /// Creates a state from restored parts, sanitizing as it goes.
    ///
    /// Restored cart quantities of zero are dropped (a cart never stores
    /// zero), out-of-range quantities are clamped, and a restored user
    /// without an id is treated as absent.
    ///
    /// # Arguments
    ///
    /// * `catalog` - The freshly loaded catalog
    /// * `cart` - Restored cart entries
    /// * `favorites` - Restored favorite ids
    /// * `user` - Restored session, if any
    #[must_use]
    pub fn with_parts(
        catalog: Arc<Catalog>,
        cart: CartState,
        favorites: FavoritesState,
        user: Option<UserSession>,
    ) -> Self {
        let cart: CartState = cart
            .into_iter()
            .filter(|(_, qty)| *qty > 0)
            .map(|(id, qty)| (id, clamp_quantity(qty)))
            .collect();
        let user: Option<UserSession> = user.filter(|u| !u.id.is_empty());

        Self {
            catalog,
            cart,
            favorites,
            user,
            ui: UiState::default(),
        }
    }

    /// Looks up a catalog product by id.
    #[must_use]
    pub fn find_product(&self, id: &ProductId) -> Option<&Product> {
        self.catalog.find(id)
    }

    /// Total number of items in the cart, summed over quantities.
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.cart.values().sum()
    }

    /// Number of favorited products.
    #[must_use]
    pub fn fav_count(&self) -> usize {
        self.favorites.len()
    }

    /// Cart subtotal in cents.
    ///
    /// A cart entry referencing a product missing from the catalog
    /// contributes nothing.
    #[must_use]
    pub fn cart_subtotal_cents(&self) -> u64 {
        self.cart
            .iter()
            .filter_map(|(id, qty)| {
                self.find_product(id)
                    .map(|p| u64::from(p.price_cents) * u64::from(*qty))
            })
            .sum()
    }
}
