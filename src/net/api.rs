//! Mock auth backend.
//!
//! Answers login and sign-up requests from the static account table instead
//! of a server. Latency is not simulated here; `AuthSession` awaits its
//! injected delay before calling in.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a typed `AuthError`. The session facade renders it into the
//! state's `error` string and never lets it escape to components.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::accounts::{is_test_account, verify_credentials};
use super::types::{Credentials, SignupProfile, User};

/// Avatar assigned to freshly signed-up users.
pub const DEFAULT_SIGNUP_AVATAR: &str = "/assets/users/jane-doe.png";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid email or password. Please try again.")]
    InvalidCredentials,
    #[error("An account with {email} already exists. Please sign in instead.")]
    DuplicateEmail { email: String },
}

/// Check sign-in credentials against the test-account table.
///
/// # Errors
///
/// Returns `AuthError::InvalidCredentials` when no account matches.
pub fn login(credentials: &Credentials) -> Result<User, AuthError> {
    verify_credentials(&credentials.email, &credentials.password).ok_or(AuthError::InvalidCredentials)
}

/// Register a new user unless the email is already taken.
///
/// # Errors
///
/// Returns `AuthError::DuplicateEmail` when the email belongs to a test account.
pub fn signup(profile: &SignupProfile) -> Result<User, AuthError> {
    if is_test_account(&profile.email) {
        return Err(AuthError::DuplicateEmail { email: profile.email.clone() });
    }
    Ok(User {
        id: uuid::Uuid::new_v4().to_string(),
        email: profile.email.clone(),
        username: Some(profile.username.clone()),
        avatar: Some(DEFAULT_SIGNUP_AVATAR.to_owned()),
    })
}
