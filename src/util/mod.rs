//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers,
//! DOM tweaks) from page and component logic so the session core can be
//! tested natively.

pub mod browser;
pub mod delay;
pub mod modal_animation;
pub mod session_persistence;
pub mod storage;
