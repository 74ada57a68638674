// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gleam_store::{CartState, FavoritesState, State};
use gleam_store_domain::{ProductId, UserSession};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The durable subset of application state.
///
/// Serializes to the single persisted record:
///
/// ```json
/// {
///   "cart": { "<productId>": 3 },
///   "favorites": { "<productId>": true },
///   "user": { "id": "…", "email": "…", "name": "…" }
/// }
/// ```
///
/// `cart` and `favorites` are required; deserialization of a record missing
/// either is a shape failure and counts as nothing persisted. `user` is
/// optional. Favorites persist as an id-to-marker map, so key enumeration
/// order never matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Cart entries, product id to quantity.
    pub cart: BTreeMap<ProductId, u32>,
    /// Favorited product ids, each mapped to a `true` marker.
    pub favorites: BTreeMap<ProductId, bool>,
    /// The persisted session, if any.
    #[serde(default)]
    pub user: Option<UserSession>,
}

impl Snapshot {
    /// Captures the durable slice of a state.
    #[must_use]
    pub fn of_state(state: &State) -> Self {
        Self {
            cart: state.cart.clone(),
            favorites: state.favorites.iter().cloned().map(|id| (id, true)).collect(),
            user: state.user.clone(),
        }
    }

    /// Decomposes the snapshot into restored state parts.
    ///
    /// Favorites entries whose marker is `false` are treated as absent.
    /// Cart sanitization (quantity clamping) is the state constructor's
    /// concern, not the snapshot's.
    #[must_use]
    pub fn into_parts(self) -> (CartState, FavoritesState, Option<UserSession>) {
        let favorites: FavoritesState = self
            .favorites
            .into_iter()
            .filter_map(|(id, marked)| marked.then_some(id))
            .collect();
        (self.cart, favorites, self.user)
    }
}
