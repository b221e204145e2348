//! Reusable UI components.

pub mod alert;
pub mod login_form;
pub mod modal;
pub mod post_card;
pub mod post_composer;
pub mod signup_form;
