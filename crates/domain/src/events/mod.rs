//! Domain Events
//!
//! Values communicating what happened, returned from entity operations
//! rather than emitted as side effects.
//!
//! - `action`: what an entity did during a dispatch pass
//! - `entity_events`: outcomes of entity mutations

pub mod action;
pub mod entity_events;

pub use action::*;
pub use entity_events::*;
