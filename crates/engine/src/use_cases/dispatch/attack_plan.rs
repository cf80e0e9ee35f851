//! The demonstration attack pass that closes every run.

use std::str::FromStr;

/// One attack, addressed by entity label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackPair {
    pub attacker: String,
    pub target: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AttackPlanError {
    #[error("Malformed attack pair '{0}', expected 'Attacker>Target'")]
    MalformedPair(String),
}

/// Ordered attacks performed after every entity has been processed.
///
/// The default plan is Hero attacks Goblin, Goblin attacks Hero,
/// Ghost attacks Hero. When several entities share a label, the first one in
/// roster order takes part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackPlan {
    pairs: Vec<AttackPair>,
}

impl Default for AttackPlan {
    fn default() -> Self {
        Self::empty()
            .then("Hero", "Goblin")
            .then("Goblin", "Hero")
            .then("Ghost", "Hero")
    }
}

impl AttackPlan {
    /// A plan with no attacks.
    pub fn empty() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Appends an attack.
    pub fn then(mut self, attacker: impl Into<String>, target: impl Into<String>) -> Self {
        self.pairs.push(AttackPair {
            attacker: attacker.into(),
            target: target.into(),
        });
        self
    }

    pub fn pairs(&self) -> &[AttackPair] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Parses `"Hero>Goblin, Ghost>Hero"`; an empty string is an empty plan.
impl FromStr for AttackPlan {
    type Err = AttackPlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut plan = Self::empty();
        for raw in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (attacker, target) = raw
                .split_once('>')
                .map(|(a, t)| (a.trim(), t.trim()))
                .filter(|(a, t)| !a.is_empty() && !t.is_empty())
                .ok_or_else(|| AttackPlanError::MalformedPair(raw.to_string()))?;
            plan = plan.then(attacker, target);
        }
        Ok(plan)
    }
}
