//! Capability vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// An optional ability an entity variant may support.
///
/// Each kind corresponds to exactly one capability trait in
/// [`crate::entities`]. Kinds are independent: supporting one says nothing
/// about any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapabilityKind {
    /// Flight under the entity's own power ([`crate::entities::Flying`]).
    Fly,
    /// Ranged attack ([`crate::entities::Shooting`]).
    Shoot,
}

impl CapabilityKind {
    /// Every known capability, in canonical order.
    pub const ALL: [CapabilityKind; 2] = [CapabilityKind::Fly, CapabilityKind::Shoot];

    /// The verb used in action lines ("fly", "shoot").
    pub fn verb(&self) -> &'static str {
        match self {
            CapabilityKind::Fly => "fly",
            CapabilityKind::Shoot => "shoot",
        }
    }
}

impl fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

impl FromStr for CapabilityKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fly" => Ok(Self::Fly),
            "shoot" => Ok(Self::Shoot),
            other => Err(DomainError::parse(format!("Unknown capability: {}", other))),
        }
    }
}
