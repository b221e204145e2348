//! User and auth-form payload types.
//!
//! DESIGN
//! ======
//! `User` is the only type that crosses the persistence boundary; it is
//! stored as JSON in `localStorage`, so optional fields are skipped when
//! absent and defaulted when missing on read.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated feed user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Email address used to sign in.
    pub email: String,
    /// Display handle, if one was chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Avatar image path, if available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// Name shown next to the user's posts.
    ///
    /// Falls back to the local part of the email when no username is set.
    pub fn display_name(&self) -> &str {
        match self.username.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => self.email.split('@').next().unwrap_or(&self.email),
        }
    }
}

/// Submitted sign-in form. Never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Submitted sign-up form. Never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupProfile {
    pub email: String,
    pub password: String,
    pub username: String,
}
