//! Identity shared by all entity variants.

use crate::events::NameAssignment;
use crate::value_objects::EntityName;
use crate::EntityId;

/// Identity and (set-once) name of an entity.
///
/// # Invariants
///
/// - `id` never changes after construction
/// - once `name` is `Some`, it is never replaced
///
/// Entities hand out only `&Persona`; naming goes through
/// [`crate::Entity::assign_name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    id: EntityId,
    name: Option<EntityName>,
}

impl Persona {
    /// An unnamed persona with a fresh id.
    pub fn new() -> Self {
        Self {
            id: EntityId::new(),
            name: None,
        }
    }

    /// A persona named at construction.
    pub fn named(name: EntityName) -> Self {
        Self {
            id: EntityId::new(),
            name: Some(name),
        }
    }

    #[inline]
    pub fn id(&self) -> EntityId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> Option<&EntityName> {
        self.name.as_ref()
    }

    /// Sets the name if none is set yet.
    pub fn assign(&mut self, name: EntityName) -> NameAssignment {
        match &self.name {
            Some(existing) => NameAssignment::AlreadyNamed(existing.clone()),
            None => {
                self.name = Some(name.clone());
                NameAssignment::Assigned(name)
            }
        }
    }
}

impl Default for Persona {
    fn default() -> Self {
        Self::new()
    }
}
