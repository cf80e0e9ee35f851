use super::{Entity, EntityKind, Flying, Persona, Shooting};
use crate::value_objects::EntityName;

/// Holds both capabilities.
#[derive(Debug, Clone, Default)]
pub struct Dragon {
    persona: Persona,
}

impl Dragon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: EntityName) -> Self {
        Self {
            persona: Persona::named(name),
        }
    }
}

impl Entity for Dragon {
    fn kind(&self) -> EntityKind {
        EntityKind::Dragon
    }

    persona_identity!();

    fn as_flying(&self) -> Option<&dyn Flying> {
        Some(self)
    }

    fn as_shooting(&self) -> Option<&dyn Shooting> {
        Some(self)
    }
}

impl Flying for Dragon {}

impl Shooting for Dragon {}
