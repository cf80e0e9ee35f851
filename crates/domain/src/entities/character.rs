//! The adventurer.

use super::{Entity, EntityKind, Persona};
use crate::value_objects::EntityName;

/// A plain adventurer: walks and attacks, nothing else.
///
/// Named "Hero" unless given another name.
///
/// # Example
///
/// ```
/// use bestiary_domain::entities::{Character, Entity};
/// use bestiary_domain::CapabilityKind;
///
/// let hero = Character::new();
/// assert_eq!(hero.label(), "Hero");
/// assert!(!hero.supports(CapabilityKind::Fly));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Character {
    persona: Persona,
}

impl Character {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: EntityName) -> Self {
        Self {
            persona: Persona::named(name),
        }
    }
}

impl Entity for Character {
    fn kind(&self) -> EntityKind {
        EntityKind::Character
    }

    persona_identity!();
}
