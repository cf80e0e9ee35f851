//! Entity mutation outcomes

use crate::value_objects::EntityName;

/// Outcome of assigning a name to an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameAssignment {
    /// The entity had no name; it now has this one.
    Assigned(EntityName),
    /// The entity was already named; the existing name was kept.
    AlreadyNamed(EntityName),
}

impl NameAssignment {
    /// Whether this assignment changed the entity.
    pub fn changed(&self) -> bool {
        matches!(self, NameAssignment::Assigned(_))
    }

    /// The name the entity carries after the assignment.
    pub fn name(&self) -> &EntityName {
        match self {
            NameAssignment::Assigned(name) | NameAssignment::AlreadyNamed(name) => name,
        }
    }
}
