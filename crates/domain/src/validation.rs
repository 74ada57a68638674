// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Minimum password length accepted at sign-in and sign-up.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Minimum full-name length accepted at sign-up.
pub const MIN_NAME_LENGTH: usize = 2;

/// Validates an email address shape.
///
/// The rule matches the storefront's form check: no whitespace, exactly one
/// `@` with a non-empty local part, and a domain containing an interior dot.
/// It is a shape check only; deliverability is the remote store's concern.
///
/// # Arguments
///
/// * `email` - The address to validate (validated as-is, trim first)
///
/// # Errors
///
/// Returns `DomainError::InvalidEmail` if the address is malformed.
pub fn validate_email(email: &str) -> Result<(), DomainError> {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidEmail(email.to_string()));
    }

    let mut parts = email.split('@');
    let local: &str = parts.next().unwrap_or("");
    let domain: &str = parts.next().unwrap_or("");
    if parts.next().is_some() || local.is_empty() || domain.is_empty() {
        return Err(DomainError::InvalidEmail(email.to_string()));
    }

    // Rule: domain must contain an interior dot
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(DomainError::InvalidEmail(email.to_string()));
    }

    Ok(())
}

/// Validates a password against the demo policy.
///
/// # Arguments
///
/// * `password` - The password to validate (validated as-is, trim first)
///
/// # Errors
///
/// Returns `DomainError::PasswordTooShort` if the password is shorter than
/// [`MIN_PASSWORD_LENGTH`] characters.
pub fn validate_password(password: &str) -> Result<(), DomainError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(DomainError::PasswordTooShort {
            min_length: MIN_PASSWORD_LENGTH,
        });
    }
    Ok(())
}

/// Validates a sign-up full name.
///
/// # Arguments
///
/// * `name` - The name to validate (validated as-is, trim first)
///
/// # Errors
///
/// Returns `DomainError::InvalidName` if the name is shorter than
/// [`MIN_NAME_LENGTH`] characters.
pub fn validate_sign_up_name(name: &str) -> Result<(), DomainError> {
    if name.chars().count() < MIN_NAME_LENGTH {
        return Err(DomainError::InvalidName(String::from(
            "Name must be at least 2 characters",
        )));
    }
    Ok(())
}
