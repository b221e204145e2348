//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the feed page, the sign-in/sign-up forms and the header to decide
//! what to render. Mutated only by `AuthSession`, which routes every change
//! through [`reduce`].
//!
//! DESIGN
//! ======
//! `reduce` is a total, side-effect-free transition function over
//! [`AuthAction`]. Persistence is the facade's job, not the reducer's.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state: current user, in-flight flag and last error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    /// True exactly when `user` is `Some`.
    pub is_authenticated: bool,
    pub user: Option<User>,
    /// True while a login or sign-up attempt is in flight.
    pub loading: bool,
    /// Message from the last failed attempt.
    pub error: Option<String>,
}

/// Coarse lifecycle position derived from an [`AuthState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    Idle,
    Pending,
    Authenticated,
    Failed,
}

/// Events accepted by [`reduce`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthAction {
    /// A login or sign-up attempt began.
    Start,
    /// The attempt resolved to this user.
    Success(User),
    /// The attempt failed with this message.
    Failure(String),
    Logout,
    ClearError,
}

impl AuthAction {
    fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Success(_) => "success",
            Self::Failure(_) => "failure",
            Self::Logout => "logout",
            Self::ClearError => "clear_error",
        }
    }
}

impl AuthState {
    /// State for a session restored from storage.
    #[must_use]
    pub fn authenticated(user: User) -> Self {
        Self { is_authenticated: true, user: Some(user), loading: false, error: None }
    }

    #[must_use]
    pub fn phase(&self) -> AuthPhase {
        if self.loading {
            AuthPhase::Pending
        } else if self.is_authenticated {
            AuthPhase::Authenticated
        } else if self.error.is_some() {
            AuthPhase::Failed
        } else {
            AuthPhase::Idle
        }
    }
}

/// Apply `action` to `state`, returning the next state.
#[must_use]
pub fn reduce(state: &AuthState, action: AuthAction) -> AuthState {
    let from = state.phase();
    let label = action.name();
    let next = match action {
        AuthAction::Start => AuthState { loading: true, error: None, ..state.clone() },
        AuthAction::Success(user) => AuthState::authenticated(user),
        AuthAction::Failure(message) => {
            AuthState { is_authenticated: false, user: None, loading: false, error: Some(message) }
        }
        AuthAction::Logout => AuthState::default(),
        AuthAction::ClearError => AuthState { error: None, ..state.clone() },
    };
    log::debug!("auth {label}: {from:?} -> {:?}", next.phase());
    next
}
