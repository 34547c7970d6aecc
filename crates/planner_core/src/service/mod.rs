//! Screen sessions.
//!
//! # Responsibility
//! - Combine value stores with selection, draft and dialog state per screen.
//! - Keep UI/FFI layers free of transition rules.

pub mod calendar_session;
pub mod notes_session;
