use super::{Entity, EntityKind, Persona};
use crate::value_objects::EntityName;

/// Ground-bound monster. Base contract only.
#[derive(Debug, Clone, Default)]
pub struct Goblin {
    persona: Persona,
}

impl Goblin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: EntityName) -> Self {
        Self {
            persona: Persona::named(name),
        }
    }
}

impl Entity for Goblin {
    fn kind(&self) -> EntityKind {
        EntityKind::Goblin
    }

    persona_identity!();
}
