//! Bestiary Domain - entities, capability contracts, and the actions they produce.
//!
//! This crate is pure: no logging and no I/O. Operations return [`Action`]
//! values; rendering them is the engine's job.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod value_objects;

pub use aggregates::Roster;

pub use entities::{
    Archer, Character, Dragon, Entity, EntityKind, Flying, Ghost, Goblin, Persona, Shooting,
};

pub use error::DomainError;

pub use events::{Action, NameAssignment};

pub use ids::EntityId;

pub use value_objects::{CapabilityKind, EntityName};
