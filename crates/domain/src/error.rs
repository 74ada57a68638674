// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Email address is malformed.
    InvalidEmail(String),
    /// Password is shorter than the minimum length.
    PasswordTooShort {
        /// The minimum accepted length.
        min_length: usize,
    },
    /// Full name is empty or too short.
    InvalidName(String),
    /// Unknown category value.
    UnknownCategory(String),
    /// Unknown brand value.
    UnknownBrand(String),
    /// Unknown collection value.
    UnknownCollection(String),
    /// Unknown gem shape value.
    UnknownGemShape(String),
    /// Unknown material group value.
    UnknownMaterialGroup(String),
    /// Unknown badge value.
    UnknownBadge(String),
    /// Unknown sort mode value.
    UnknownSortMode(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEmail(email) => write!(f, "Invalid email address: '{email}'"),
            Self::PasswordTooShort { min_length } => {
                write!(f, "Password must be at least {min_length} characters")
            }
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::UnknownCategory(s) => write!(f, "Unknown category: '{s}'"),
            Self::UnknownBrand(s) => write!(f, "Unknown brand: '{s}'"),
            Self::UnknownCollection(s) => write!(f, "Unknown collection: '{s}'"),
            Self::UnknownGemShape(s) => write!(f, "Unknown gem shape: '{s}'"),
            Self::UnknownMaterialGroup(s) => write!(f, "Unknown material group: '{s}'"),
            Self::UnknownBadge(s) => write!(f, "Unknown badge: '{s}'"),
            Self::UnknownSortMode(s) => write!(f, "Unknown sort mode: '{s}'"),
        }
    }
}

impl std::error::Error for DomainError {}
