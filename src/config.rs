//! Client configuration for the mock auth flow.
//!
//! The browser has no process environment, so overrides are read at build
//! time through `option_env!`:
//! - `FOORUM_LOGIN_LATENCY_MS`: default 1000
//! - `FOORUM_SIGNUP_LATENCY_MS`: default 1200
//!
//! Unparseable values fall back to the defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_LOGIN_LATENCY_MS: u64 = 1000;
pub const DEFAULT_SIGNUP_LATENCY_MS: u64 = 1200;
pub const DEFAULT_AUTH_FLAG_KEY: &str = "foo-rum-auth";
pub const DEFAULT_USER_KEY: &str = "foo-rum-user";

/// `localStorage` keys holding the persisted session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    /// Holds the literal `"true"` while a session is stored.
    pub auth_flag: String,
    /// Holds the JSON-serialized `User`.
    pub user: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self { auth_flag: DEFAULT_AUTH_FLAG_KEY.to_owned(), user: DEFAULT_USER_KEY.to_owned() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub login_latency: Duration,
    pub signup_latency: Duration,
    pub storage_keys: StorageKeys,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_latency: Duration::from_millis(DEFAULT_LOGIN_LATENCY_MS),
            signup_latency: Duration::from_millis(DEFAULT_SIGNUP_LATENCY_MS),
            storage_keys: StorageKeys::default(),
        }
    }
}

impl AuthConfig {
    /// Build config from the compile-time environment.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_overrides(option_env!("FOORUM_LOGIN_LATENCY_MS"), option_env!("FOORUM_SIGNUP_LATENCY_MS"))
    }

    fn from_overrides(login_ms: Option<&str>, signup_ms: Option<&str>) -> Self {
        Self {
            login_latency: Duration::from_millis(parse_ms(login_ms, DEFAULT_LOGIN_LATENCY_MS)),
            signup_latency: Duration::from_millis(parse_ms(signup_ms, DEFAULT_SIGNUP_LATENCY_MS)),
            storage_keys: StorageKeys::default(),
        }
    }
}

fn parse_ms(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok()).unwrap_or(default)
}
