// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Optimistic favorite toggling.

use crate::store::Store;
use gleam_store::Action;
use gleam_store_domain::ProductId;
use tracing::warn;

impl Store {
    /// Toggles a product's favorite membership, optimistically.
    ///
    /// The local flip applies immediately. Guests stop there. For a
    /// signed-in user the matching remote mutation follows, and a remote
    /// failure triggers the compensating flip back plus a failure notice:
    /// apply, attempt remote, on failure invert.
    pub fn toggle_favorite(&mut self, id: &ProductId) {
        let currently_fav: bool = self.state().favorites.contains(id);
        self.dispatch(Action::FavToggle { id: id.clone() });

        let Some(user) = self.state().user.clone() else {
            return;
        };

        let result = if currently_fav {
            self.remote().delete_favorite(&user.id, id)
        } else {
            self.remote().upsert_favorite(&user.id, id)
        };

        match result {
            Ok(()) => {
                if currently_fav {
                    self.toast("Removed from favorites.");
                } else {
                    self.toast("Saved to favorites.");
                }
            }
            Err(err) => {
                warn!("Favorite toggle for {id} failed remotely: {err}");
                self.dispatch(Action::FavToggle { id: id.clone() });
                self.toast("Could not update favorites. Try again.");
            }
        }
    }
}
