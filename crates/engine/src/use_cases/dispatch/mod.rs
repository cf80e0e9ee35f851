//! Dispatch use cases.
//!
//! One deterministic pass over a roster: every entity moves, every registered
//! capability is used where supported and reported (or skipped) where not,
//! then the attack plan plays out.

mod attack_plan;
mod capability;

pub use attack_plan::{AttackPair, AttackPlan, AttackPlanError};
pub use capability::{
    handler_for, CapabilityHandler, CapabilityRegistry, FlyHandler, ShootHandler,
};

use std::sync::Arc;

use bestiary_domain::{Action, CapabilityKind, Entity, Roster};

use crate::infrastructure::console::LineFormat;
use crate::infrastructure::ports::OutputPort;

/// What happens when an entity lacks a registered capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Emit an informational "cannot" line.
    #[default]
    Notice,
    /// Emit nothing.
    Silent,
}

/// Result of processing one entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutcome {
    /// Capabilities performed, in registry order.
    pub used: Vec<CapabilityKind>,
    /// Registered capabilities the entity lacks, in registry order.
    pub missing: Vec<CapabilityKind>,
    /// Lines written for this entity.
    pub lines: usize,
}

/// Totals for one [`Dispatcher::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassSummary {
    pub entities: usize,
    pub names_assigned: usize,
    pub capabilities_used: usize,
    pub capabilities_missing: usize,
    pub attacks: usize,
    pub attacks_skipped: usize,
    pub lines: usize,
}

/// Processes entities uniformly against a capability registry.
///
/// Never fails: missing capabilities take the fallback path and attacks
/// naming absent entities are skipped.
pub struct Dispatcher {
    registry: CapabilityRegistry,
    attack_plan: AttackPlan,
    fallback: FallbackPolicy,
    format: LineFormat,
    output: Arc<dyn OutputPort>,
}

impl Dispatcher {
    pub fn new(registry: CapabilityRegistry, output: Arc<dyn OutputPort>) -> Self {
        Self {
            registry,
            attack_plan: AttackPlan::default(),
            fallback: FallbackPolicy::default(),
            format: LineFormat::default(),
            output,
        }
    }

    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn with_format(mut self, format: LineFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_attack_plan(mut self, attack_plan: AttackPlan) -> Self {
        self.attack_plan = attack_plan;
        self
    }

    pub fn registry(&self) -> &CapabilityRegistry {
        &self.registry
    }

    /// Moves `entity`, then tries every registered capability on it.
    pub fn process(&self, entity: &dyn Entity) -> ProcessOutcome {
        let mut outcome = ProcessOutcome::default();

        self.emit(&entity.move_about());
        outcome.lines += 1;

        for handler in self.registry.iter() {
            match handler.invoke(entity) {
                Some(action) => {
                    self.emit(&action);
                    outcome.lines += 1;
                    outcome.used.push(handler.kind());
                }
                None => {
                    outcome.missing.push(handler.kind());
                    if self.fallback == FallbackPolicy::Notice {
                        self.emit(&Action::Incapable {
                            actor: entity.label().to_string(),
                            capability: handler.kind(),
                        });
                        outcome.lines += 1;
                    }
                }
            }
        }

        tracing::debug!(
            entity = entity.label(),
            kind = %entity.kind(),
            used = ?outcome.used,
            missing = ?outcome.missing,
            "Processed entity"
        );
        outcome
    }

    /// One full pass: name unnamed entities, process each in order, then
    /// run the attack plan.
    pub fn run(&self, roster: &mut Roster) -> PassSummary {
        let mut summary = PassSummary::default();

        for assignment in roster.assign_default_names() {
            tracing::debug!(name = %assignment.name(), "Assigned default name");
            summary.names_assigned += 1;
        }

        // Read-only from here on.
        let roster: &Roster = roster;

        for entity in roster.iter() {
            let outcome = self.process(entity);
            summary.entities += 1;
            summary.capabilities_used += outcome.used.len();
            summary.capabilities_missing += outcome.missing.len();
            summary.lines += outcome.lines;
        }

        for pair in self.attack_plan.pairs() {
            let attacker = resolve(roster, &pair.attacker);
            let target = resolve(roster, &pair.target);
            match (attacker, target) {
                (Some(attacker), Some(target)) => {
                    self.emit(&attacker.attack(target));
                    summary.attacks += 1;
                    summary.lines += 1;
                }
                _ => {
                    tracing::warn!(
                        attacker = %pair.attacker,
                        target = %pair.target,
                        "Skipping attack, entity not in roster"
                    );
                    summary.attacks_skipped += 1;
                }
            }
        }

        tracing::info!(
            entities = summary.entities,
            capabilities_used = summary.capabilities_used,
            attacks = summary.attacks,
            lines = summary.lines,
            "Dispatch pass complete"
        );
        summary
    }

    fn emit(&self, action: &Action) {
        self.output.write_line(&self.format.render(action));
    }
}

/// First entity labelled `name`; duplicates are logged and otherwise ignored.
fn resolve<'a>(roster: &'a Roster, name: &str) -> Option<&'a dyn Entity> {
    let matches = roster.count_by_name(name);
    if matches > 1 {
        tracing::debug!(name, matches, "Ambiguous label, using first in roster order");
    }
    roster.find_by_name(name)
}
