// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ApiError;
use gleam_store_domain::DomainError;
use gleam_store_remote::RemoteError;

#[test]
fn test_domain_errors_translate_to_invalid_input() {
    let err: ApiError = ApiError::from_domain(
        "email",
        &DomainError::InvalidEmail(String::from("nope")),
    );

    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("email"),
            message: String::from("Invalid email address: 'nope'"),
        }
    );
    assert_eq!(
        err.to_string(),
        "Invalid input for field 'email': Invalid email address: 'nope'"
    );
}

#[test]
fn test_remote_errors_pass_their_message_through() {
    let err: ApiError = ApiError::from(RemoteError::Unavailable {
        message: String::from("backend offline"),
    });

    // Transparent wrapping: the notice text is the backend's own message
    assert_eq!(err.to_string(), "Remote store unavailable: backend offline");
}
