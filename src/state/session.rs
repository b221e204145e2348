//! The auth session facade.
//!
//! ARCHITECTURE
//! ============
//! `AuthSession` is built once in `App` and handed down through Leptos
//! context. It owns the reactive `AuthState` signal, the persistence adapter
//! and the latency source; components read the signal and call `login`,
//! `signup`, `logout` and `clear_error`, nothing else.
//!
//! TRADE-OFFS
//! ==========
//! A `login`/`signup` issued while another attempt is pending is dropped
//! rather than queued or raced, so a double-submit cannot flip the outcome.
//! In-flight attempts cannot be cancelled: a `logout` issued while one is
//! pending resets the state, and the attempt still signs in and persists when
//! it resolves.
//!
//! A failed attempt clears the stored session as well as the in-memory user,
//! so a reload never restores an identity the page has already dropped.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;

use super::auth::{AuthAction, AuthPhase, AuthState, reduce};
use crate::config::AuthConfig;
use crate::net::api::{self, AuthError};
use crate::net::types::{Credentials, SignupProfile, User};
use crate::util::delay::{Delay, TimerDelay};
use crate::util::session_persistence::SessionPersistence;
use crate::util::storage::{BrowserStorage, KeyValueStore};

pub struct AuthSession<S = BrowserStorage, D = TimerDelay> {
    state: ArcRwSignal<AuthState>,
    persistence: Arc<SessionPersistence<S>>,
    delay: Arc<D>,
    config: Arc<AuthConfig>,
}

impl<S, D> Clone for AuthSession<S, D> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            persistence: Arc::clone(&self.persistence),
            delay: Arc::clone(&self.delay),
            config: Arc::clone(&self.config),
        }
    }
}

impl AuthSession {
    /// Session backed by `localStorage` and real timers.
    #[must_use]
    pub fn in_browser(config: AuthConfig) -> Self {
        Self::new(BrowserStorage, TimerDelay, config)
    }
}

impl<S: KeyValueStore, D: Delay> AuthSession<S, D> {
    /// Build a session, restoring any user persisted in `store`.
    pub fn new(store: S, delay: D, config: AuthConfig) -> Self {
        let persistence = SessionPersistence::new(store, config.storage_keys.clone());
        let initial = persistence.load().map_or_else(AuthState::default, AuthState::authenticated);
        Self {
            state: ArcRwSignal::new(initial),
            persistence: Arc::new(persistence),
            delay: Arc::new(delay),
            config: Arc::new(config),
        }
    }

    /// Reactive read handle; tracking it re-renders on every transition.
    pub fn state(&self) -> ArcReadSignal<AuthState> {
        self.state.read_only()
    }

    /// Current state without subscribing.
    pub fn snapshot(&self) -> AuthState {
        self.state.get_untracked()
    }

    pub fn phase(&self) -> AuthPhase {
        self.state.with_untracked(AuthState::phase)
    }

    /// Sign in with `credentials` after the configured login latency.
    ///
    /// The outcome lands in the state signal; this never fails.
    pub async fn login(&self, credentials: Credentials) {
        if !self.begin_attempt("login") {
            return;
        }
        self.delay.sleep(self.config.login_latency).await;
        self.finish_attempt(api::login(&credentials));
    }

    /// Register `profile` after the configured sign-up latency.
    pub async fn signup(&self, profile: SignupProfile) {
        if !self.begin_attempt("signup") {
            return;
        }
        self.delay.sleep(self.config.signup_latency).await;
        self.finish_attempt(api::signup(&profile));
    }

    pub fn logout(&self) {
        self.persistence.clear();
        self.dispatch(AuthAction::Logout);
    }

    pub fn clear_error(&self) {
        self.dispatch(AuthAction::ClearError);
    }

    fn dispatch(&self, action: AuthAction) {
        self.state.update(|state| {
            let next = reduce(state, action);
            *state = next;
        });
    }

    fn begin_attempt(&self, kind: &str) -> bool {
        if self.state.with_untracked(|s| s.loading) {
            log::debug!("ignoring {kind}: another attempt is pending");
            return false;
        }
        self.dispatch(AuthAction::Start);
        true
    }

    fn finish_attempt(&self, result: Result<User, AuthError>) {
        match result {
            Ok(user) => {
                if let Err(e) = self.persistence.save(&user) {
                    log::warn!("session for {} not persisted: {e}", user.id);
                }
                self.dispatch(AuthAction::Success(user));
            }
            Err(e) => {
                log::info!("auth attempt rejected: {e}");
                self.persistence.clear();
                self.dispatch(AuthAction::Failure(e.to_string()));
            }
        }
    }
}

/// Fetch the `AuthSession` provided by `App`.
///
/// # Panics
///
/// Panics if called outside the `App` component tree.
pub fn use_auth_session() -> AuthSession {
    expect_context::<AuthSession>()
}
