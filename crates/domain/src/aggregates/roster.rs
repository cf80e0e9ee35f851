//! Roster aggregate - the ordered registry of entities for one pass
//!
//! # Invariants
//!
//! - Insertion order is processing order
//! - Entities are never removed; the roster only grows while being built
//! - After [`Roster::assign_default_names`], every entity carries a name

use crate::entities::{Entity, EntityKind};
use crate::events::NameAssignment;
use crate::EntityId;

/// Ordered, heterogeneous collection of entities.
///
/// # Example
///
/// ```
/// use bestiary_domain::aggregates::Roster;
/// use bestiary_domain::entities::EntityKind;
///
/// let mut roster = Roster::from_kinds(&[EntityKind::Character, EntityKind::Ghost]);
/// roster.assign_default_names();
///
/// let labels: Vec<&str> = roster.iter().map(|e| e.label()).collect();
/// assert_eq!(labels, ["Hero", "Ghost"]);
/// ```
#[derive(Debug, Default)]
pub struct Roster {
    entities: Vec<Box<dyn Entity>>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns one unnamed entity per kind, in the given order.
    pub fn from_kinds(kinds: &[EntityKind]) -> Self {
        Self {
            entities: kinds.iter().map(EntityKind::spawn).collect(),
        }
    }

    /// Appends an entity at the end of the processing order.
    pub fn push(&mut self, entity: Box<dyn Entity>) {
        self.entities.push(entity);
    }

    /// Builder form of [`Self::push`].
    pub fn with(mut self, entity: impl Entity + 'static) -> Self {
        self.push(Box::new(entity));
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entities in processing order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Entity> + '_ {
        self.entities.iter().map(|entity| &**entity)
    }

    pub fn get(&self, index: usize) -> Option<&dyn Entity> {
        self.entities.get(index).map(|entity| &**entity)
    }

    pub fn get_by_id(&self, id: EntityId) -> Option<&dyn Entity> {
        self.iter().find(|entity| entity.id() == id)
    }

    /// First entity, in processing order, whose label is `name`.
    pub fn find_by_name(&self, name: &str) -> Option<&dyn Entity> {
        self.iter().find(|entity| entity.label() == name)
    }

    /// How many entities carry the label `name`.
    pub fn count_by_name(&self, name: &str) -> usize {
        self.iter().filter(|entity| entity.label() == name).count()
    }

    /// Names every unnamed entity after its kind.
    ///
    /// Returns only the assignments that changed an entity, in roster order.
    pub fn assign_default_names(&mut self) -> Vec<NameAssignment> {
        self.entities
            .iter_mut()
            .filter(|entity| entity.name().is_none())
            .map(|entity| {
                let name = entity.kind().default_entity_name();
                entity.assign_name(name)
            })
            .collect()
    }
}
