//! Route-level page components.

pub mod feed;
pub mod login;
pub mod signup;
