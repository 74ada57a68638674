// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the store facade.

use gleam_store_domain::DomainError;
use gleam_store_remote::RemoteError;
use thiserror::Error;

/// Errors produced by the store facade's fallible flows.
///
/// These never escape as panics; public flows translate them into
/// transient notices. The `Display` text doubles as the notice message
/// for remote failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },

    /// The flow requires an authenticated user.
    #[error("Not signed in")]
    NotSignedIn,

    /// The flow requires a non-empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// A remote store call failed.
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

impl ApiError {
    /// Translates a domain validation error into an invalid-input error
    /// for a named form field.
    ///
    /// The translation is explicit so domain errors are not leaked
    /// directly across the API boundary.
    #[must_use]
    pub fn from_domain(field: &str, err: &DomainError) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            message: err.to_string(),
        }
    }
}
