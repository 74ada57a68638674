// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::RemoteError;
use gleam_store_domain::{ProductId, UserSession};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use time::OffsetDateTime;

/// Status value assigned to freshly placed orders.
pub const ORDER_STATUS_PLACED: &str = "PLACED";

/// Callback invoked whenever the remote session changes.
///
/// Fired on sign-in, sign-out, and token refresh. The callback receives
/// the new session, or `None` when the session ended.
pub type SessionListener = Box<dyn Fn(Option<&UserSession>) + Send + Sync>;

/// The result of a sign-up call.
///
/// Backends that require email confirmation return no session; the
/// account exists but the visitor stays signed out until confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpOutcome {
    /// The session, when the backend signs the user in immediately.
    pub session: Option<UserSession>,
}

/// A profile row, keyed by the user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRow {
    /// The user id this profile belongs to.
    pub id: String,
    /// The user's full name, if set.
    pub full_name: Option<String>,
    /// Row creation time.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Fields for creating or updating an address row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAddress {
    /// Display label, e.g. "Home".
    pub label: String,
    /// Recipient full name, if different from the profile.
    pub full_name: Option<String>,
    /// First address line.
    pub line1: String,
    /// Second address line, if any.
    pub line2: Option<String>,
    /// City.
    pub city: String,
    /// Postal code.
    pub postal_code: String,
    /// Region or state, if any.
    pub region: Option<String>,
    /// Country.
    pub country: String,
    /// Whether this is the default shipping address.
    pub is_default_shipping: bool,
    /// Whether this is the default billing address.
    pub is_default_billing: bool,
}

/// A stored address row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRow {
    /// Row id.
    pub id: String,
    /// Owning user id.
    pub user_id: String,
    /// The address fields.
    #[serde(flatten)]
    pub address: NewAddress,
    /// Row creation time.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// The shipping address captured on an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    /// Recipient first name.
    pub first: String,
    /// Recipient last name.
    pub last: String,
    /// Street address.
    pub addr: String,
    /// City.
    pub city: String,
    /// Postal code.
    pub postal: String,
    /// Country.
    pub country: String,
}

/// Shipping method selected at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShippingMethod {
    /// Standard delivery.
    #[default]
    Standard,
    /// Express delivery.
    Express,
}

/// Payment method selected at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Card payment.
    #[default]
    Card,
    /// Klarna invoice.
    Klarna,
}

/// Fields for inserting an order row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    /// Owning user id.
    pub user_id: String,
    /// Contact email captured at checkout.
    pub email: String,
    /// Shipping address captured at checkout.
    pub shipping_address: ShippingAddress,
    /// Selected shipping method.
    pub shipping_method: ShippingMethod,
    /// Selected payment method.
    pub payment_method: PaymentMethod,
    /// Cart subtotal in cents.
    pub subtotal_cents: u64,
    /// Shipping cost in cents.
    pub shipping_cents: u64,
    /// Tax in cents.
    pub tax_cents: u64,
    /// Grand total in cents.
    pub total_cents: u64,
    /// Order status, [`ORDER_STATUS_PLACED`] for new orders.
    pub status: String,
}

/// A stored order row, as listed on the account page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRow {
    /// Row id.
    pub id: String,
    /// Owning user id.
    pub user_id: String,
    /// Grand total in cents.
    pub total_cents: u64,
    /// Order status.
    pub status: String,
    /// Row creation time.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Fields for inserting an order line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrderItem {
    /// The order this line belongs to.
    pub order_id: String,
    /// The purchased product id.
    pub product_id: ProductId,
    /// Product name captured at purchase time.
    pub product_name: String,
    /// Unit price in cents captured at purchase time.
    pub unit_price_cents: u32,
    /// Quantity purchased.
    pub qty: u32,
}

/// A stored order line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemRow {
    /// Row id.
    pub id: String,
    /// The line item fields.
    #[serde(flatten)]
    pub item: NewOrderItem,
}

/// The remote backend consumed by the storefront core.
///
/// This is an abstract RPC-like contract, not a specific protocol. Every
/// call is synchronous from the core's point of view; embedders schedule
/// calls off the UI thread and deliver completions as follow-up dispatches.
/// Calls that complete after their originating view is gone still apply,
/// since cart and favorites are global state.
pub trait RemoteStore: Send + Sync {
    // --- auth ---

    /// Creates an account.
    ///
    /// # Errors
    ///
    /// Returns a `RemoteError` when the backend rejects the registration.
    fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: Option<&str>,
    ) -> Result<SignUpOutcome, RemoteError>;

    /// Signs in with email and password.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::AuthenticationFailed` on bad credentials.
    fn sign_in(&self, email: &str, password: &str) -> Result<UserSession, RemoteError>;

    /// Ends the current session.
    ///
    /// # Errors
    ///
    /// Returns a `RemoteError` when the backend cannot end the session.
    fn sign_out(&self) -> Result<(), RemoteError>;

    /// Returns the current session, if one exists.
    ///
    /// # Errors
    ///
    /// Returns a `RemoteError` when the backend cannot be reached.
    fn current_user(&self) -> Result<Option<UserSession>, RemoteError>;

    /// Registers a callback fired on every session change.
    fn on_session_change(&self, listener: SessionListener);

    // --- favorites ---

    /// Lists the favorited product ids for a user.
    ///
    /// # Errors
    ///
    /// Returns a `RemoteError` when the rows cannot be read.
    fn favorites_for_user(&self, user_id: &str) -> Result<BTreeSet<ProductId>, RemoteError>;

    /// Upserts one favorite. Idempotent on `(user_id, product_id)`.
    ///
    /// # Errors
    ///
    /// Returns a `RemoteError` when the row cannot be written.
    fn upsert_favorite(&self, user_id: &str, product_id: &ProductId) -> Result<(), RemoteError>;

    /// Deletes one favorite. Succeeds even when the row is absent.
    ///
    /// # Errors
    ///
    /// Returns a `RemoteError` when the row cannot be deleted.
    fn delete_favorite(&self, user_id: &str, product_id: &ProductId) -> Result<(), RemoteError>;

    // --- profiles ---

    /// Reads a user's profile row, if one exists.
    ///
    /// # Errors
    ///
    /// Returns a `RemoteError` when the row cannot be read.
    fn profile(&self, user_id: &str) -> Result<Option<ProfileRow>, RemoteError>;

    /// Creates a profile row for a user.
    ///
    /// # Errors
    ///
    /// Returns a `RemoteError` when the row cannot be written.
    fn insert_profile(
        &self,
        user_id: &str,
        full_name: Option<&str>,
    ) -> Result<ProfileRow, RemoteError>;

    /// Updates the full name on a profile row.
    ///
    /// # Errors
    ///
    /// Returns a `RemoteError` when the row cannot be written.
    fn update_profile_name(
        &self,
        user_id: &str,
        full_name: Option<&str>,
    ) -> Result<(), RemoteError>;

    // --- addresses ---

    /// Lists a user's addresses, newest first.
    ///
    /// # Errors
    ///
    /// Returns a `RemoteError` when the rows cannot be read.
    fn addresses_for_user(&self, user_id: &str) -> Result<Vec<AddressRow>, RemoteError>;

    /// Inserts an address row.
    ///
    /// # Errors
    ///
    /// Returns a `RemoteError` when the row cannot be written.
    fn insert_address(&self, user_id: &str, address: NewAddress)
    -> Result<AddressRow, RemoteError>;

    /// Updates an address row by id.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::NotFound` when the row does not exist.
    fn update_address(&self, address_id: &str, address: NewAddress) -> Result<(), RemoteError>;

    /// Deletes an address row by id.
    ///
    /// # Errors
    ///
    /// Returns a `RemoteError` when the row cannot be deleted.
    fn delete_address(&self, address_id: &str) -> Result<(), RemoteError>;

    // --- orders ---

    /// Inserts an order row, returning the generated order id.
    ///
    /// # Errors
    ///
    /// Returns a `RemoteError` when the row cannot be written.
    fn insert_order(&self, order: NewOrder) -> Result<String, RemoteError>;

    /// Inserts the line items of an order.
    ///
    /// # Errors
    ///
    /// Returns a `RemoteError` when the rows cannot be written.
    fn insert_order_items(&self, items: Vec<NewOrderItem>) -> Result<(), RemoteError>;

    /// Lists a user's orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns a `RemoteError` when the rows cannot be read.
    fn orders_for_user(&self, user_id: &str) -> Result<Vec<OrderRow>, RemoteError>;

    // --- newsletter ---

    /// Subscribes an email address to the newsletter. Idempotent on the
    /// email address.
    ///
    /// # Errors
    ///
    /// Returns a `RemoteError` when the row cannot be written.
    fn upsert_newsletter_subscription(&self, email: &str) -> Result<(), RemoteError>;
}
