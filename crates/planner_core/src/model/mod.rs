//! Domain model for the notes and calendar screens.
//!
//! # Responsibility
//! - Define the records both screens operate on.
//! - Keep identity rules (note UUIDs, event sequence ids, date keys) in one
//!   place.
//!
//! # Invariants
//! - Note ids are random v4 UUIDs; event ids come from a monotonic sequence.
//! - Deletion is a hard removal; there are no tombstones.

pub mod event;
pub mod note;
