//! Account data and the mock auth backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no server. `accounts` holds the static test-account table and
//! the credential lookups, `api` turns those lookups into login/sign-up
//! results, and `types` defines the user and form payloads.

pub mod accounts;
pub mod api;
pub mod types;
