// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// An authenticated user session.
///
/// Absence of a session means the visitor is browsing as a guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    /// The remote store's user identifier.
    pub id: String,
    /// The user's email address.
    pub email: String,
    /// The user's full name, when provided at sign-up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl UserSession {
    /// Creates a new session.
    ///
    /// # Arguments
    ///
    /// * `id` - The remote user identifier
    /// * `email` - The user's email address
    /// * `name` - The user's full name, if known
    #[must_use]
    pub fn new(id: &str, email: &str, name: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            email: email.to_string(),
            name: name.map(ToString::to_string),
        }
    }
}
