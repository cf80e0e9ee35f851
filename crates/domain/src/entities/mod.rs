//! Entity capability model.
//!
//! [`Entity`] is the base contract: only operations every variant can
//! meaningfully perform. Optional behavior lives in separate capability
//! traits ([`Flying`], [`Shooting`]) that a variant implements or not.
//!
//! # Capability queries
//!
//! The base trait exposes one accessor per capability, `as_flying()`,
//! `as_shooting()`, defaulting to `None`. A variant that implements the
//! capability overrides the accessor to return itself. Callers never cast:
//! a `Some` is the only way to reach the capability operation.
//!
//! # Adding a capability
//!
//! 1. Add a `CapabilityKind` variant
//! 2. Add the capability trait here, with `Entity` as supertrait
//! 3. Add a defaulted `as_<capability>()` accessor to `Entity`
//!
//! Existing variants compile unchanged and report the new capability as
//! unsupported.

/// Identity half of [`Entity`] for a variant storing its [`Persona`] in a
/// `persona` field.
macro_rules! persona_identity {
    () => {
        fn persona(&self) -> &$crate::entities::Persona {
            &self.persona
        }

        fn assign_name(
            &mut self,
            name: $crate::value_objects::EntityName,
        ) -> $crate::events::NameAssignment {
            self.persona.assign(name)
        }
    };
}

mod archer;
mod character;
mod dragon;
mod ghost;
mod goblin;
mod kind;
mod persona;

pub use archer::Archer;
pub use character::Character;
pub use dragon::Dragon;
pub use ghost::Ghost;
pub use goblin::Goblin;
pub use kind::EntityKind;
pub use persona::Persona;

use std::fmt;

use crate::events::{Action, NameAssignment};
use crate::value_objects::{CapabilityKind, EntityName};
use crate::EntityId;

/// Base contract shared by every entity variant.
///
/// Identity is read-only through this trait. The only write is
/// [`Entity::assign_name`], which never replaces an existing name:
///
/// ```compile_fail
/// use bestiary_domain::{Entity, EntityName, Goblin, Persona};
///
/// let mut goblin = Goblin::named(EntityName::new("Snag").expect("valid name"));
/// *goblin.persona_mut() = Persona::named(EntityName::new("Other").expect("valid name"));
/// ```
pub trait Entity: fmt::Debug + Send + Sync {
    /// The concrete variant of this entity.
    fn kind(&self) -> EntityKind;

    /// Identity and name storage.
    fn persona(&self) -> &Persona;

    /// Sets the name unless one is already set.
    fn assign_name(&mut self, name: EntityName) -> NameAssignment;

    fn id(&self) -> EntityId {
        self.persona().id()
    }

    /// The assigned name, if any.
    fn name(&self) -> Option<&EntityName> {
        self.persona().name()
    }

    /// Name used in action lines: the assigned name, or the variant's
    /// default name while unnamed.
    fn label(&self) -> &str {
        match self.persona().name() {
            Some(name) => name.as_str(),
            None => self.kind().default_name(),
        }
    }

    fn move_about(&self) -> Action {
        Action::Moved {
            actor: self.label().to_string(),
        }
    }

    /// Attacks `target`, which may be `self`.
    fn attack(&self, target: &dyn Entity) -> Action {
        Action::Attacked {
            attacker: self.label().to_string(),
            target: target.label().to_string(),
        }
    }

    fn as_flying(&self) -> Option<&dyn Flying> {
        None
    }

    fn as_shooting(&self) -> Option<&dyn Shooting> {
        None
    }

    /// Total, side-effect-free capability query.
    fn supports(&self, capability: CapabilityKind) -> bool {
        match capability {
            CapabilityKind::Fly => self.as_flying().is_some(),
            CapabilityKind::Shoot => self.as_shooting().is_some(),
        }
    }

    /// The entity's capability set, in canonical order.
    fn capabilities(&self) -> Vec<CapabilityKind> {
        CapabilityKind::ALL
            .into_iter()
            .filter(|capability| self.supports(*capability))
            .collect()
    }
}

/// Flight under the entity's own power.
pub trait Flying: Entity {
    fn fly(&self) -> Action {
        Action::Flew {
            actor: self.label().to_string(),
        }
    }
}

/// Ranged attack with no target selection.
pub trait Shooting: Entity {
    fn shoot(&self) -> Action {
        Action::Shot {
            actor: self.label().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn every_variant() -> Vec<Box<dyn Entity>> {
        EntityKind::ALL.iter().map(|kind| kind.spawn()).collect()
    }

    #[test]
    fn base_contract_holds_for_every_variant() {
        let target = Goblin::new();
        for entity in every_variant() {
            let moved = entity.move_about();
            assert_eq!(moved.actor(), entity.label());

            let attack = entity.attack(&target);
            assert_eq!(
                attack,
                Action::Attacked {
                    attacker: entity.label().to_string(),
                    target: "Goblin".to_string(),
                }
            );
        }
    }

    #[test]
    fn self_attack_is_permitted() {
        let ghost = Ghost::named(EntityName::new("Casper").expect("valid name"));
        assert_eq!(ghost.attack(&ghost).to_string(), "Casper attacks Casper!");
    }

    #[test]
    fn positive_query_means_operation_is_invocable() {
        for entity in every_variant() {
            if entity.supports(CapabilityKind::Fly) {
                let flying = entity.as_flying().expect("query said fly");
                assert!(matches!(flying.fly(), Action::Flew { .. }));
            }
            if entity.supports(CapabilityKind::Shoot) {
                let shooting = entity.as_shooting().expect("query said shoot");
                assert!(matches!(shooting.shoot(), Action::Shot { .. }));
            }
        }
    }

    #[test]
    fn capability_sets_match_variants() {
        assert!(Character::new().capabilities().is_empty());
        assert!(Goblin::new().capabilities().is_empty());
        assert_eq!(Ghost::new().capabilities(), vec![CapabilityKind::Fly]);
        assert_eq!(Archer::new().capabilities(), vec![CapabilityKind::Shoot]);
        assert_eq!(
            Dragon::new().capabilities(),
            vec![CapabilityKind::Fly, CapabilityKind::Shoot]
        );
    }

    #[test]
    fn label_falls_back_to_default_name() {
        let mut hero = Character::new();
        assert!(hero.name().is_none());
        assert_eq!(hero.label(), "Hero");

        let outcome = hero.assign_name(EntityName::new("Aria").expect("valid name"));
        assert!(outcome.changed());
        assert_eq!(hero.label(), "Aria");
    }

    #[test]
    fn name_is_set_once() {
        let mut goblin = Goblin::named(EntityName::new("Snag").expect("valid name"));
        let outcome = goblin.assign_name(EntityName::new("Other").expect("valid name"));
        assert_eq!(
            outcome,
            NameAssignment::AlreadyNamed(EntityName::new("Snag").expect("valid name"))
        );
        assert_eq!(goblin.label(), "Snag");
    }

    #[test]
    fn renaming_through_the_trait_keeps_name_and_id() {
        let mut entity: Box<dyn Entity> = EntityKind::Goblin.spawn();
        let id = entity.id();

        assert!(entity
            .assign_name(EntityName::new("Snag").expect("valid name"))
            .changed());
        let outcome = entity.assign_name(EntityName::new("Other").expect("valid name"));

        assert!(!outcome.changed());
        assert_eq!(entity.label(), "Snag");
        assert_eq!(entity.id(), id);
    }

    #[test]
    fn capability_ops_do_not_touch_each_other() {
        let dragon = Dragon::new();
        let flying = dragon.as_flying().expect("dragons fly");
        let shooting = dragon.as_shooting().expect("dragons shoot");
        let first = shooting.shoot();
        flying.fly();
        assert_eq!(shooting.shoot(), first);
    }
}
