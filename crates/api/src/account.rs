// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Profile, address book, and newsletter flows.

use crate::error::ApiError;
use crate::store::Store;
use gleam_store::Action;
use gleam_store_domain::{UserSession, validate_email};
use gleam_store_remote::{AddressRow, NewAddress, OrderRow, ProfileRow};

impl Store {
    fn require_user(&self) -> Result<UserSession, ApiError> {
        self.state().user.clone().ok_or(ApiError::NotSignedIn)
    }

    /// Loads the signed-in user's profile row, creating it on first visit.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotSignedIn` for guests, or the remote failure.
    pub fn ensure_profile(&mut self) -> Result<ProfileRow, ApiError> {
        let user: UserSession = self.require_user()?;
        if let Some(profile) = self.remote().profile(&user.id)? {
            return Ok(profile);
        }
        Ok(self.remote().insert_profile(&user.id, user.name.as_deref())?)
    }

    /// Saves the profile full name and mirrors it into the session.
    ///
    /// An empty name clears the stored name but keeps the session's
    /// previous display name.
    pub fn save_profile_name(&mut self, full_name: &str) {
        let Ok(user) = self.require_user() else {
            return;
        };
        let trimmed: &str = full_name.trim();
        let stored: Option<&str> = (!trimmed.is_empty()).then_some(trimmed);

        match self.remote().update_profile_name(&user.id, stored) {
            Ok(()) => {
                let name: Option<String> =
                    stored.map_or_else(|| user.name.clone(), |n| Some(n.to_string()));
                self.dispatch(Action::AuthSet {
                    user: Some(UserSession { name, ..user }),
                });
                self.toast("Profile saved ✅");
            }
            Err(err) => self.toast(err.to_string()),
        }
    }

    /// Lists the signed-in user's addresses, newest first.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotSignedIn` for guests, or the remote failure.
    pub fn addresses(&mut self) -> Result<Vec<AddressRow>, ApiError> {
        let user: UserSession = self.require_user()?;
        Ok(self.remote().addresses_for_user(&user.id)?)
    }

    /// Saves an address: updates the row named by `editing`, or inserts a
    /// new one.
    ///
    /// Address line, city, postal code, and country are required; an
    /// incomplete draft surfaces a notice and changes nothing.
    pub fn save_address(&mut self, editing: Option<&str>, draft: NewAddress) {
        let Ok(user) = self.require_user() else {
            return;
        };
        if draft.line1.trim().is_empty()
            || draft.city.trim().is_empty()
            || draft.postal_code.trim().is_empty()
            || draft.country.trim().is_empty()
        {
            self.toast("Please fill address line, city, postal code, country.");
            return;
        }

        let result = match editing {
            Some(address_id) => self
                .remote()
                .update_address(address_id, draft)
                .map(|()| "Address updated ✅"),
            None => self
                .remote()
                .insert_address(&user.id, draft)
                .map(|_| "Address saved ✅"),
        };
        match result {
            Ok(message) => self.toast(message),
            Err(err) => self.toast(err.to_string()),
        }
    }

    /// Deletes an address row.
    pub fn delete_address(&mut self, address_id: &str) {
        match self.remote().delete_address(address_id) {
            Ok(()) => self.toast("Address deleted."),
            Err(err) => self.toast(err.to_string()),
        }
    }

    /// Lists the signed-in user's orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotSignedIn` for guests, or the remote failure.
    pub fn orders(&mut self) -> Result<Vec<OrderRow>, ApiError> {
        let user: UserSession = self.require_user()?;
        Ok(self.remote().orders_for_user(&user.id)?)
    }

    /// Subscribes an email address to the newsletter.
    ///
    /// The address is trimmed and shape-checked locally first; the remote
    /// upsert is idempotent, so resubmitting the same address succeeds.
    pub fn subscribe_newsletter(&mut self, email: &str) {
        let email: &str = email.trim();
        if validate_email(email).is_err() {
            self.toast("Please enter a valid email.");
            return;
        }
        match self.remote().upsert_newsletter_subscription(email) {
            Ok(()) => self.toast("Subscribed. Welcome to Lumière."),
            Err(err) => self.toast(err.to_string()),
        }
    }
}
