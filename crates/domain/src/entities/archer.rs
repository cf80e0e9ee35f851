use super::{Entity, EntityKind, Persona, Shooting};
use crate::value_objects::EntityName;

/// Ranged fighter. Shoots but cannot fly.
#[derive(Debug, Clone, Default)]
pub struct Archer {
    persona: Persona,
}

impl Archer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: EntityName) -> Self {
        Self {
            persona: Persona::named(name),
        }
    }
}

impl Entity for Archer {
    fn kind(&self) -> EntityKind {
        EntityKind::Archer
    }

    persona_identity!();

    fn as_shooting(&self) -> Option<&dyn Shooting> {
        Some(self)
    }
}

impl Shooting for Archer {}
