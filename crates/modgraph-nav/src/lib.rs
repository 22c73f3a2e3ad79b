//! Query tools over an indexed mod graph.
//!
//! Provides cycle-safe reachability counters and ancestor collection
//! ([`traverse`]), root-to-entity dependency chains ([`chain`]), graph-wide and
//! per-entity statistics ([`stats`]), grouped substring search ([`search`]),
//! and entity detail views ([`fetch`]).

pub mod chain;
pub mod fetch;
pub mod search;
pub mod stats;
pub mod traverse;
