//! Persisted projection of the auth session.
//!
//! A stored session is two string keys: a flag holding the literal `"true"`
//! and the JSON-serialized user. Anything else found under those keys is
//! treated as corruption, cleared, and reported as "no session".

#[cfg(test)]
#[path = "session_persistence_test.rs"]
mod session_persistence_test;

use crate::config::StorageKeys;
use crate::net::types::User;

use super::storage::{KeyValueStore, StorageError};

const AUTH_FLAG_SET: &str = "true";

#[derive(Debug)]
pub struct SessionPersistence<S> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> SessionPersistence<S> {
    pub fn new(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    /// Store `user` as the signed-in session.
    ///
    /// The user is written before the flag, so a flag never points at a
    /// missing payload. A failed write clears whatever was written.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or either write fails.
    pub fn save(&self, user: &User) -> Result<(), StorageError> {
        let raw = serde_json::to_string(user)?;
        let written = self
            .store
            .set_item(&self.keys.user, &raw)
            .and_then(|()| self.store.set_item(&self.keys.auth_flag, AUTH_FLAG_SET));
        if written.is_err() {
            self.clear();
        }
        written
    }

    /// Restore the stored user, clearing both keys if they are unusable.
    pub fn load(&self) -> Option<User> {
        let flag = self.store.get_item(&self.keys.auth_flag);
        let raw = self.store.get_item(&self.keys.user);
        if flag.is_none() && raw.is_none() {
            return None;
        }

        match (flag.as_deref(), raw) {
            (Some(AUTH_FLAG_SET), Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    log::debug!("restored session for {}", user.id);
                    return Some(user);
                }
                Err(e) => log::warn!("discarding unreadable stored user: {e}"),
            },
            (flag, raw) => log::warn!("discarding incomplete stored session (flag {flag:?}, user present: {})", raw.is_some()),
        }
        self.clear();
        None
    }

    pub fn clear(&self) {
        self.store.remove_item(&self.keys.auth_flag);
        self.store.remove_item(&self.keys.user);
    }
}
