// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Remote store contract for the Gleam Store.
//!
//! The storefront core consumes, but does not implement, a remote backend
//! that owns authentication and per-user rows (profiles, addresses,
//! favorites, orders, order items, newsletter subscriptions). This crate
//! defines that contract as the [`RemoteStore`] trait, the favorites
//! reconciliation algorithm that runs at sign-in, and an in-memory
//! reference implementation used by tests.
//!
//! Row-level ownership is enforced by the remote store itself; callers
//! pass the authenticated user id and trust the backend to scope rows.
//! Connection configuration is a deployment concern of the embedder.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod contract;
mod error;
mod memory;
mod sync;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use contract::{
    AddressRow, NewAddress, NewOrder, NewOrderItem, ORDER_STATUS_PLACED, OrderItemRow, OrderRow,
    PaymentMethod, ProfileRow, RemoteStore, SessionListener, ShippingAddress, ShippingMethod,
    SignUpOutcome,
};
pub use error::RemoteError;
pub use memory::InMemoryRemote;
pub use sync::reconcile_favorites;
