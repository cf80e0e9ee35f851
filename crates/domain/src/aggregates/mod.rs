//! Aggregates - collections with their own invariants.

mod roster;

pub use roster::Roster;
