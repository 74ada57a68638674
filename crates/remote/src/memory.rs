// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::contract::{
    AddressRow, NewAddress, NewOrder, NewOrderItem, OrderItemRow, OrderRow, ProfileRow,
    RemoteStore, SessionListener, SignUpOutcome,
};
use crate::error::RemoteError;
use gleam_store_domain::{ProductId, UserSession};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use time::OffsetDateTime;
use tracing::debug;

fn generate_id(prefix: &str) -> String {
    let timestamp: i64 = OffsetDateTime::now_utc().unix_timestamp();
    format!("{prefix}_{timestamp}_{}", rand::random::<u64>())
}

#[derive(Debug, Clone)]
struct Account {
    user_id: String,
    password: String,
    full_name: Option<String>,
}

#[derive(Default)]
struct Inner {
    accounts: BTreeMap<String, Account>,
    session: Option<UserSession>,
    favorites: BTreeSet<(String, ProductId)>,
    profiles: BTreeMap<String, ProfileRow>,
    addresses: Vec<AddressRow>,
    orders: Vec<OrderRow>,
    order_items: Vec<OrderItemRow>,
    newsletter: BTreeSet<String>,
}

/// In-memory reference implementation of [`RemoteStore`].
///
/// Backs tests and local demos. Accounts are plain email/password pairs,
/// rows live in per-table maps, and two failure switches simulate backend
/// outages: `set_unavailable` fails every call, `set_favorites_failure`
/// fails only the favorites table (used to exercise the optimistic-toggle
/// rollback path).
#[derive(Default)]
pub struct InMemoryRemote {
    inner: Mutex<Inner>,
    listeners: Mutex<Vec<SessionListener>>,
    unavailable: AtomicBool,
    favorites_failure: AtomicBool,
    confirmation_required: AtomicBool,
}

impl InMemoryRemote {
    /// Creates an empty backend with no accounts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend with one registered account, signed out.
    #[must_use]
    pub fn with_account(email: &str, password: &str, full_name: Option<&str>) -> Self {
        let remote: Self = Self::new();
        if let Ok(mut inner) = remote.inner.lock() {
            inner.accounts.insert(
                email.to_string(),
                Account {
                    user_id: generate_id("user"),
                    password: password.to_string(),
                    full_name: full_name.map(ToString::to_string),
                },
            );
        }
        remote
    }

    /// Makes every subsequent call fail with `RemoteError::Unavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::Relaxed);
    }

    /// Makes subsequent favorites calls fail with
    /// `RemoteError::Unavailable`.
    pub fn set_favorites_failure(&self, failing: bool) {
        self.favorites_failure.store(failing, Ordering::Relaxed);
    }

    /// Makes sign-up require email confirmation: the account is created
    /// but no session starts until the visitor signs in.
    pub fn set_confirmation_required(&self, required: bool) {
        self.confirmation_required.store(required, Ordering::Relaxed);
    }

    /// Seeds a favorite row directly, bypassing the contract. Test setup
    /// helper.
    pub fn seed_favorite(&self, user_id: &str, product_id: &ProductId) {
        if let Ok(mut inner) = self.inner.lock() {
            inner
                .favorites
                .insert((user_id.to_string(), product_id.clone()));
        }
    }

    /// Returns the user id registered for an email, if any. Test helper.
    #[must_use]
    pub fn user_id_for(&self, email: &str) -> Option<String> {
        self.inner
            .lock()
            .ok()
            .and_then(|inner| inner.accounts.get(email).map(|a| a.user_id.clone()))
    }

    /// Returns whether an email is subscribed to the newsletter. Test
    /// helper.
    #[must_use]
    pub fn is_subscribed(&self, email: &str) -> bool {
        self.inner
            .lock()
            .is_ok_and(|inner| inner.newsletter.contains(email))
    }

    /// Returns the stored line items of an order. Test helper.
    #[must_use]
    pub fn items_for_order(&self, order_id: &str) -> Vec<OrderItemRow> {
        self.inner.lock().map_or_else(
            |_| Vec::new(),
            |inner| {
                inner
                    .order_items
                    .iter()
                    .filter(|row| row.item.order_id == order_id)
                    .cloned()
                    .collect()
            },
        )
    }

    fn check_available(&self) -> Result<(), RemoteError> {
        if self.unavailable.load(Ordering::Relaxed) {
            return Err(RemoteError::Unavailable {
                message: String::from("backend offline"),
            });
        }
        Ok(())
    }

    fn check_favorites_available(&self) -> Result<(), RemoteError> {
        self.check_available()?;
        if self.favorites_failure.load(Ordering::Relaxed) {
            return Err(RemoteError::Unavailable {
                message: String::from("favorites table offline"),
            });
        }
        Ok(())
    }

    fn lock_inner(&self) -> Result<std::sync::MutexGuard<'_, Inner>, RemoteError> {
        self.inner.lock().map_err(|_| RemoteError::Unavailable {
            message: String::from("state lock poisoned"),
        })
    }

    fn notify_listeners(&self, session: Option<&UserSession>) {
        if let Ok(listeners) = self.listeners.lock() {
            for listener in listeners.iter() {
                listener(session);
            }
        }
    }
}

impl RemoteStore for InMemoryRemote {
    fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: Option<&str>,
    ) -> Result<SignUpOutcome, RemoteError> {
        self.check_available()?;
        let confirmation: bool = self.confirmation_required.load(Ordering::Relaxed);
        let session: Option<UserSession> = {
            let mut inner = self.lock_inner()?;
            if inner.accounts.contains_key(email) {
                return Err(RemoteError::AuthenticationFailed {
                    message: String::from("An account with this email already exists"),
                });
            }
            let account: Account = Account {
                user_id: generate_id("user"),
                password: password.to_string(),
                full_name: full_name.map(ToString::to_string),
            };
            let session: UserSession =
                UserSession::new(&account.user_id, email, account.full_name.as_deref());
            inner.accounts.insert(email.to_string(), account);
            if confirmation {
                None
            } else {
                inner.session = Some(session.clone());
                Some(session)
            }
        };
        debug!("Registered account for {email}");
        if let Some(session) = &session {
            self.notify_listeners(Some(session));
        }
        Ok(SignUpOutcome { session })
    }

    fn sign_in(&self, email: &str, password: &str) -> Result<UserSession, RemoteError> {
        self.check_available()?;
        let session: UserSession = {
            let mut inner = self.lock_inner()?;
            let account: Account = inner
                .accounts
                .get(email)
                .filter(|a| a.password == password)
                .cloned()
                .ok_or_else(|| RemoteError::AuthenticationFailed {
                    message: String::from("Invalid login credentials"),
                })?;
            let session: UserSession =
                UserSession::new(&account.user_id, email, account.full_name.as_deref());
            inner.session = Some(session.clone());
            session
        };
        self.notify_listeners(Some(&session));
        Ok(session)
    }

    fn sign_out(&self) -> Result<(), RemoteError> {
        self.check_available()?;
        {
            let mut inner = self.lock_inner()?;
            inner.session = None;
        }
        self.notify_listeners(None);
        Ok(())
    }

    fn current_user(&self) -> Result<Option<UserSession>, RemoteError> {
        self.check_available()?;
        Ok(self.lock_inner()?.session.clone())
    }

    fn on_session_change(&self, listener: SessionListener) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push(listener);
        }
    }

    fn favorites_for_user(&self, user_id: &str) -> Result<BTreeSet<ProductId>, RemoteError> {
        self.check_favorites_available()?;
        let inner = self.lock_inner()?;
        Ok(inner
            .favorites
            .iter()
            .filter(|(owner, _)| owner == user_id)
            .map(|(_, product_id)| product_id.clone())
            .collect())
    }

    fn upsert_favorite(&self, user_id: &str, product_id: &ProductId) -> Result<(), RemoteError> {
        self.check_favorites_available()?;
        let mut inner = self.lock_inner()?;
        inner
            .favorites
            .insert((user_id.to_string(), product_id.clone()));
        Ok(())
    }

    fn delete_favorite(&self, user_id: &str, product_id: &ProductId) -> Result<(), RemoteError> {
        self.check_favorites_available()?;
        let mut inner = self.lock_inner()?;
        inner
            .favorites
            .remove(&(user_id.to_string(), product_id.clone()));
        Ok(())
    }

    fn profile(&self, user_id: &str) -> Result<Option<ProfileRow>, RemoteError> {
        self.check_available()?;
        Ok(self.lock_inner()?.profiles.get(user_id).cloned())
    }

    fn insert_profile(
        &self,
        user_id: &str,
        full_name: Option<&str>,
    ) -> Result<ProfileRow, RemoteError> {
        self.check_available()?;
        let row: ProfileRow = ProfileRow {
            id: user_id.to_string(),
            full_name: full_name.map(ToString::to_string),
            created_at: OffsetDateTime::now_utc(),
        };
        self.lock_inner()?
            .profiles
            .insert(user_id.to_string(), row.clone());
        Ok(row)
    }

    fn update_profile_name(
        &self,
        user_id: &str,
        full_name: Option<&str>,
    ) -> Result<(), RemoteError> {
        self.check_available()?;
        let mut inner = self.lock_inner()?;
        let row: &mut ProfileRow =
            inner
                .profiles
                .get_mut(user_id)
                .ok_or_else(|| RemoteError::NotFound {
                    resource: String::from("Profile"),
                })?;
        row.full_name = full_name.map(ToString::to_string);
        Ok(())
    }

    fn addresses_for_user(&self, user_id: &str) -> Result<Vec<AddressRow>, RemoteError> {
        self.check_available()?;
        let inner = self.lock_inner()?;
        let mut rows: Vec<AddressRow> = inner
            .addresses
            .iter()
            .filter(|row| row.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    fn insert_address(
        &self,
        user_id: &str,
        address: NewAddress,
    ) -> Result<AddressRow, RemoteError> {
        self.check_available()?;
        let row: AddressRow = AddressRow {
            id: generate_id("addr"),
            user_id: user_id.to_string(),
            address,
            created_at: OffsetDateTime::now_utc(),
        };
        self.lock_inner()?.addresses.push(row.clone());
        Ok(row)
    }

    fn update_address(&self, address_id: &str, address: NewAddress) -> Result<(), RemoteError> {
        self.check_available()?;
        let mut inner = self.lock_inner()?;
        let row: &mut AddressRow = inner
            .addresses
            .iter_mut()
            .find(|row| row.id == address_id)
            .ok_or_else(|| RemoteError::NotFound {
                resource: String::from("Address"),
            })?;
        row.address = address;
        Ok(())
    }

    fn delete_address(&self, address_id: &str) -> Result<(), RemoteError> {
        self.check_available()?;
        let mut inner = self.lock_inner()?;
        inner.addresses.retain(|row| row.id != address_id);
        Ok(())
    }

    fn insert_order(&self, order: NewOrder) -> Result<String, RemoteError> {
        self.check_available()?;
        let row: OrderRow = OrderRow {
            id: generate_id("order"),
            user_id: order.user_id,
            total_cents: order.total_cents,
            status: order.status,
            created_at: OffsetDateTime::now_utc(),
        };
        let order_id: String = row.id.clone();
        self.lock_inner()?.orders.push(row);
        debug!("Inserted order {order_id}");
        Ok(order_id)
    }

    fn insert_order_items(&self, items: Vec<NewOrderItem>) -> Result<(), RemoteError> {
        self.check_available()?;
        let mut inner = self.lock_inner()?;
        for item in items {
            inner.order_items.push(OrderItemRow {
                id: generate_id("item"),
                item,
            });
        }
        Ok(())
    }

    fn orders_for_user(&self, user_id: &str) -> Result<Vec<OrderRow>, RemoteError> {
        self.check_available()?;
        let inner = self.lock_inner()?;
        let mut rows: Vec<OrderRow> = inner
            .orders
            .iter()
            .filter(|row| row.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    fn upsert_newsletter_subscription(&self, email: &str) -> Result<(), RemoteError> {
        self.check_available()?;
        self.lock_inner()?.newsletter.insert(email.to_string());
        Ok(())
    }
}
