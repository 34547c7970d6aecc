//! Notes search entry points.
//!
//! # Responsibility
//! - Filter the in-memory note list for the search box.
//! - Keep list-row shaping (preview, display date) inside core.

pub mod notes;
