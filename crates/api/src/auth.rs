// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Sign-in, sign-up, and sign-out flows.
//!
//! Inputs are trimmed before validation, and validation failures surface
//! as a generic form notice without touching the remote backend. Remote
//! failures surface the backend's own message.

use crate::store::Store;
use gleam_store_domain::{validate_email, validate_password, validate_sign_up_name};
use gleam_store_remote::SignUpOutcome;
use tracing::info;

impl Store {
    /// Signs in with email and password.
    ///
    /// On success the session is stored, local favorites are reconciled
    /// with the remote, and a confirmation notice is shown.
    pub fn sign_in(&mut self, email: &str, password: &str) {
        let email: &str = email.trim();
        let password: &str = password.trim();
        if validate_email(email)
            .and_then(|()| validate_password(password))
            .is_err()
        {
            self.toast("Please check your details and try again.");
            return;
        }

        match self.remote().sign_in(email, password) {
            Ok(session) => {
                info!("Signed in as {}", session.id);
                self.handle_session_change(Some(session));
                self.toast("Signed in.");
            }
            Err(err) => self.toast(err.to_string()),
        }
    }

    /// Creates an account.
    ///
    /// Backends that sign the new account in immediately get the same
    /// treatment as a sign-in; backends that require email confirmation
    /// leave the visitor signed out and show a check-your-email notice.
    pub fn sign_up(&mut self, email: &str, password: &str, full_name: &str) {
        let email: &str = email.trim();
        let password: &str = password.trim();
        let full_name: &str = full_name.trim();
        if validate_email(email)
            .and_then(|()| validate_password(password))
            .and_then(|()| validate_sign_up_name(full_name))
            .is_err()
        {
            self.toast("Please check your details and try again.");
            return;
        }

        match self.remote().sign_up(email, password, Some(full_name)) {
            Ok(SignUpOutcome {
                session: Some(session),
            }) => {
                self.handle_session_change(Some(session));
                self.toast("Welcome to Lumière. Your account is ready.");
            }
            Ok(SignUpOutcome { session: None }) => {
                self.toast("Check your email to confirm your account.");
            }
            Err(err) => self.toast(err.to_string()),
        }
    }

    /// Ends the current session.
    ///
    /// On success the local session and favorites are cleared; guests
    /// have no favorites.
    pub fn sign_out(&mut self) {
        match self.remote().sign_out() {
            Ok(()) => {
                self.handle_session_change(None);
                self.toast("Signed out.");
            }
            Err(err) => self.toast(err.to_string()),
        }
    }
}
