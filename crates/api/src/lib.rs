// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Store facade for the Gleam Store.
//!
//! [`Store`] is the explicitly constructed instance the rendering layer
//! holds: it owns the application state, funnels every mutation through
//! the reducer, persists the durable slice after each relevant change,
//! and implements the remote-backed flows: auth, optimistic favorites,
//! checkout, profile and address management, newsletter signup.
//!
//! All state transitions happen through discrete, non-overlapping
//! `dispatch` calls; the store itself is single-threaded and embedders
//! schedule remote work off the UI thread, delivering completions as
//! follow-up calls. Per-flow in-flight guards against double submission
//! are the caller's responsibility.

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

mod account;
mod auth;
mod checkout;
mod error;
mod favorites;
mod store;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use checkout::{
    CheckoutForm, CheckoutStep, EXPRESS_SHIPPING_CENTS, OrderTotals, STANDARD_SHIPPING_CENTS,
    TAX_RATE_PERCENT, can_continue,
};
pub use error::ApiError;
pub use store::Store;
