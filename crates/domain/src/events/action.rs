//! Action events
//!
//! Every base and capability operation returns one of these instead of
//! printing. The engine renders them onto its output port.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::CapabilityKind;

/// Something an entity did (or could not do) during a dispatch pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
    /// Base movement.
    Moved { actor: String },
    /// Base attack. `attacker` and `target` may be the same entity.
    Attacked { attacker: String, target: String },
    /// The [`CapabilityKind::Fly`] capability was used.
    Flew { actor: String },
    /// The [`CapabilityKind::Shoot`] capability was used.
    Shot { actor: String },
    /// Informational notice: the entity lacks a capability.
    Incapable {
        actor: String,
        capability: CapabilityKind,
    },
}

impl Action {
    /// Label of the entity that produced this action.
    pub fn actor(&self) -> &str {
        match self {
            Action::Moved { actor }
            | Action::Flew { actor }
            | Action::Shot { actor }
            | Action::Incapable { actor, .. } => actor,
            Action::Attacked { attacker, .. } => attacker,
        }
    }

    /// Whether this is a "cannot" notice rather than a performed action.
    pub fn is_notice(&self) -> bool {
        matches!(self, Action::Incapable { .. })
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Moved { actor } => write!(f, "{} moves.", actor),
            Action::Attacked { attacker, target } => {
                write!(f, "{} attacks {}!", attacker, target)
            }
            Action::Flew { actor } => write!(f, "{} flies through the air.", actor),
            Action::Shot { actor } => write!(f, "{} shoots.", actor),
            Action::Incapable { actor, capability } => {
                write!(f, "{} cannot {}.", actor, capability)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_lines() {
        let moved = Action::Moved {
            actor: "Hero".into(),
        };
        assert_eq!(moved.to_string(), "Hero moves.");

        let attack = Action::Attacked {
            attacker: "Ghost".into(),
            target: "Hero".into(),
        };
        assert_eq!(attack.to_string(), "Ghost attacks Hero!");

        let notice = Action::Incapable {
            actor: "Goblin".into(),
            capability: CapabilityKind::Fly,
        };
        assert_eq!(notice.to_string(), "Goblin cannot fly.");
    }

    #[test]
    fn actor_of_attack_is_the_attacker() {
        let attack = Action::Attacked {
            attacker: "Goblin".into(),
            target: "Hero".into(),
        };
        assert_eq!(attack.actor(), "Goblin");
        assert!(!attack.is_notice());
    }

    #[test]
    fn serializes_with_type_tag() {
        let notice = Action::Incapable {
            actor: "Hero".into(),
            capability: CapabilityKind::Fly,
        };
        let json = serde_json::to_value(&notice).expect("serializable");
        assert_eq!(json["type"], "incapable");
        assert_eq!(json["actor"], "Hero");
        assert_eq!(json["capability"], "fly");
    }
}
