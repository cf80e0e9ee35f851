//! Entity variant vocabulary and factory.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Archer, Character, Dragon, Entity, Ghost, Goblin};
use crate::error::DomainError;
use crate::value_objects::EntityName;

/// The concrete entity variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// A plain adventurer. Base contract only.
    Character,
    /// Base contract only.
    Goblin,
    /// Flies.
    Ghost,
    /// Shoots.
    Archer,
    /// Flies and shoots.
    Dragon,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Character,
        EntityKind::Goblin,
        EntityKind::Ghost,
        EntityKind::Archer,
        EntityKind::Dragon,
    ];

    /// Name given to an entity of this kind when none was assigned.
    pub fn default_name(&self) -> &'static str {
        match self {
            EntityKind::Character => "Hero",
            EntityKind::Goblin => "Goblin",
            EntityKind::Ghost => "Ghost",
            EntityKind::Archer => "Archer",
            EntityKind::Dragon => "Dragon",
        }
    }

    /// [`Self::default_name`] as a validated name.
    pub fn default_entity_name(&self) -> EntityName {
        EntityName::from_static(self.default_name())
    }

    /// Constructs an unnamed entity of this kind.
    pub fn spawn(&self) -> Box<dyn Entity> {
        match self {
            EntityKind::Character => Box::new(Character::new()),
            EntityKind::Goblin => Box::new(Goblin::new()),
            EntityKind::Ghost => Box::new(Ghost::new()),
            EntityKind::Archer => Box::new(Archer::new()),
            EntityKind::Dragon => Box::new(Dragon::new()),
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Character => "character",
            EntityKind::Goblin => "goblin",
            EntityKind::Ghost => "ghost",
            EntityKind::Archer => "archer",
            EntityKind::Dragon => "dragon",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| DomainError::parse(format!("Unknown entity kind: {}", wanted)))
    }
}
