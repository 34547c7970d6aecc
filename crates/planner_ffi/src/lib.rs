//! Flutter-facing bindings for the planner core.

pub mod api;
