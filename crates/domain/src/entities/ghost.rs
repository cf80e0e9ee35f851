//! The ghost: the one stock variant that flies.

use super::{Entity, EntityKind, Flying, Persona};
use crate::value_objects::EntityName;

/// A spirit that can fly.
///
/// # Example
///
/// ```
/// use bestiary_domain::entities::{Entity, Flying, Ghost};
///
/// let ghost = Ghost::new();
/// let flying = ghost.as_flying().expect("ghosts fly");
/// assert_eq!(flying.fly().to_string(), "Ghost flies through the air.");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Ghost {
    persona: Persona,
}

impl Ghost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: EntityName) -> Self {
        Self {
            persona: Persona::named(name),
        }
    }
}

impl Entity for Ghost {
    fn kind(&self) -> EntityKind {
        EntityKind::Ghost
    }

    persona_identity!();

    fn as_flying(&self) -> Option<&dyn Flying> {
        Some(self)
    }
}

impl Flying for Ghost {}
