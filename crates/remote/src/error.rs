// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for remote store calls.

use thiserror::Error;

/// Errors surfaced by a remote store implementation.
///
/// The `Display` text is the human-readable message shown in transient
/// notices, so implementations should keep it presentable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// The credentials were rejected or the session is invalid.
    #[error("Authentication failed: {message}")]
    AuthenticationFailed {
        /// The backend's reason.
        message: String,
    },

    /// The authenticated user may not touch the requested rows.
    #[error("Permission denied: {message}")]
    PermissionDenied {
        /// The backend's reason.
        message: String,
    },

    /// A requested row does not exist.
    #[error("{resource} not found")]
    NotFound {
        /// The type of row that was missing.
        resource: String,
    },

    /// The backend could not be reached or failed internally.
    #[error("Remote store unavailable: {message}")]
    Unavailable {
        /// The transport or backend failure description.
        message: String,
    },
}
