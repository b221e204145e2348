//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` holds the pure session reducer, `session` the facade that owns it,
//! and `posts` the in-memory feed list. Components depend on these small
//! models through Leptos context.

pub mod auth;
pub mod posts;
pub mod session;
