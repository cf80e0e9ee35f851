//! Value objects - immutable, validated vocabulary types.

mod capability;
mod names;

pub use capability::CapabilityKind;
pub use names::EntityName;
