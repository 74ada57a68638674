// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gleam_store::{Action, FavoritesState, State, apply};
use gleam_store_catalog::Catalog;
use gleam_store_domain::UserSession;
use gleam_store_persistence::{Snapshot, SnapshotStore};
use gleam_store_remote::{RemoteStore, reconcile_favorites};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The storefront's single state owner.
///
/// Constructed once at startup; every mutation goes through [`dispatch`],
/// which applies the reducer and persists a snapshot whenever the durable
/// slice (cart, favorites, user) changed. UI-only transitions never write.
///
/// The persistence and remote adapters are injected as capabilities, so
/// tests substitute fakes implementing the same contracts.
///
/// [`dispatch`]: Store::dispatch
pub struct Store {
    state: State,
    snapshots: Arc<dyn SnapshotStore>,
    remote: Arc<dyn RemoteStore>,
}

impl Store {
    /// Opens the store: hydrates state from the persisted snapshot and
    /// merges it with the freshly loaded catalog.
    ///
    /// # Arguments
    ///
    /// * `catalog` - The product catalog, loaded once for the process
    /// * `snapshots` - The durable snapshot store
    /// * `remote` - The remote backend
    #[must_use]
    pub fn open(
        catalog: Catalog,
        snapshots: Arc<dyn SnapshotStore>,
        remote: Arc<dyn RemoteStore>,
    ) -> Self {
        let catalog: Arc<Catalog> = Arc::new(catalog);
        let state: State = snapshots.load().map_or_else(
            || State::new(Arc::clone(&catalog)),
            |snapshot| {
                let (cart, favorites, user) = snapshot.into_parts();
                State::with_parts(Arc::clone(&catalog), cart, favorites, user)
            },
        );
        info!(
            "Store opened with {} products, {} cart entries, {} favorites",
            state.catalog.len(),
            state.cart.len(),
            state.favorites.len()
        );
        Self {
            state,
            snapshots,
            remote,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &State {
        &self.state
    }

    /// Returns the injected remote backend.
    #[must_use]
    pub fn remote(&self) -> Arc<dyn RemoteStore> {
        Arc::clone(&self.remote)
    }

    /// Applies an action and persists the durable slice if it changed.
    pub fn dispatch(&mut self, action: Action) {
        let next: State = apply(&self.state, action);
        let durable_changed: bool = next.cart != self.state.cart
            || next.favorites != self.state.favorites
            || next.user != self.state.user;
        self.state = next;
        if durable_changed {
            self.snapshots.save(&Snapshot::of_state(&self.state));
        }
    }

    /// Shows a transient notice.
    pub(crate) fn toast(&mut self, message: impl Into<String>) {
        self.dispatch(Action::ToastShow {
            message: message.into(),
        });
    }

    /// Pulls the current remote session at startup and, when one exists,
    /// applies it as a session change.
    ///
    /// A backend that cannot be reached leaves the store in its local
    /// guest state; startup never fails on remote errors.
    pub fn bootstrap_session(&mut self) {
        match self.remote.current_user() {
            Ok(Some(user)) => self.handle_session_change(Some(user)),
            Ok(None) => {}
            Err(err) => debug!("Session bootstrap skipped: {err}"),
        }
    }

    /// Applies a remote session change.
    ///
    /// This is the callback target for the remote store's session
    /// subscription. A new session is stored and local favorites are
    /// reconciled against the remote (push local, then replace wholesale
    /// with the authoritative remote list); reconciliation failures are
    /// logged and swallowed. A `None` session clears both the user and
    /// the favorites; guests have no favorites.
    pub fn handle_session_change(&mut self, user: Option<UserSession>) {
        match user {
            Some(user) => {
                let user_id: String = user.id.clone();
                self.dispatch(Action::AuthSet { user: Some(user) });
                let local: FavoritesState = self.state.favorites.clone();
                match reconcile_favorites(self.remote.as_ref(), &user_id, &local) {
                    Ok(favorites) => self.dispatch(Action::FavReplace { favorites }),
                    Err(err) => warn!("Favorites reconciliation failed for {user_id}: {err}"),
                }
            }
            None => {
                self.dispatch(Action::AuthSet { user: None });
                self.dispatch(Action::FavReplace {
                    favorites: FavoritesState::new(),
                });
            }
        }
    }
}
