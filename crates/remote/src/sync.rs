// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::contract::RemoteStore;
use crate::error::RemoteError;
use gleam_store_domain::ProductId;
use std::collections::BTreeSet;
use tracing::debug;

/// Reconciles local favorites with the remote store at sign-in.
///
/// Merge-push-then-pull-replace: every locally favorited id is pushed via
/// idempotent upsert, then the remote list is pulled and returned as the
/// authoritative set. Callers replace their local favorites wholesale with
/// the result.
///
/// # Arguments
///
/// * `remote` - The remote store
/// * `user_id` - The signed-in user
/// * `local` - The local favorites accumulated before sign-in
///
/// # Errors
///
/// Returns the first `RemoteError` hit while pushing or pulling. On error
/// the local set was possibly partially pushed (the upserts are idempotent,
/// so retrying is safe), and local state should be left untouched.
pub fn reconcile_favorites(
    remote: &dyn RemoteStore,
    user_id: &str,
    local: &BTreeSet<ProductId>,
) -> Result<BTreeSet<ProductId>, RemoteError> {
    for product_id in local {
        remote.upsert_favorite(user_id, product_id)?;
    }

    let authoritative: BTreeSet<ProductId> = remote.favorites_for_user(user_id)?;
    debug!(
        "Reconciled favorites for {user_id}: pushed {}, remote now has {}",
        local.len(),
        authoritative.len()
    );
    Ok(authoritative)
}
