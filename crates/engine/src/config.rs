//! Engine configuration, read from environment variables.
//!
//! | variable | default |
//! |---|---|
//! | `BESTIARY_ROSTER` | `character,goblin,ghost` |
//! | `BESTIARY_CAPABILITIES` | `fly` |
//! | `BESTIARY_FALLBACK` | `notice` (or `silent`) |
//! | `BESTIARY_FORMAT` | `text` (or `json`) |
//! | `BESTIARY_ATTACKS` | `Hero>Goblin,Goblin>Hero,Ghost>Hero` |

use std::str::FromStr;

use bestiary_domain::{CapabilityKind, EntityKind};

use crate::infrastructure::console::LineFormat;
use crate::use_cases::{AttackPlan, FallbackPolicy};

pub const ROSTER_VAR: &str = "BESTIARY_ROSTER";
pub const CAPABILITIES_VAR: &str = "BESTIARY_CAPABILITIES";
pub const FALLBACK_VAR: &str = "BESTIARY_FALLBACK";
pub const FORMAT_VAR: &str = "BESTIARY_FORMAT";
pub const ATTACKS_VAR: &str = "BESTIARY_ATTACKS";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(var: &'static str, reason: impl ToString) -> Self {
        Self::Invalid {
            var,
            reason: reason.to_string(),
        }
    }
}

/// Everything needed to compose an [`crate::App`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub roster: Vec<EntityKind>,
    pub capabilities: Vec<CapabilityKind>,
    pub fallback: FallbackPolicy,
    pub format: LineFormat,
    pub attack_plan: AttackPlan,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            roster: vec![EntityKind::Character, EntityKind::Goblin, EntityKind::Ghost],
            capabilities: vec![CapabilityKind::Fly],
            fallback: FallbackPolicy::Notice,
            format: LineFormat::Text,
            attack_plan: AttackPlan::default(),
        }
    }
}

impl EngineConfig {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`; unset variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ROSTER_VAR) {
            config.roster = parse_list(ROSTER_VAR, &raw)?;
        }
        if let Some(raw) = lookup(CAPABILITIES_VAR) {
            config.capabilities = parse_list(CAPABILITIES_VAR, &raw)?;
        }
        if let Some(raw) = lookup(FALLBACK_VAR) {
            config.fallback = match raw.trim().to_ascii_lowercase().as_str() {
                "notice" => FallbackPolicy::Notice,
                "silent" => FallbackPolicy::Silent,
                other => {
                    return Err(ConfigError::invalid(
                        FALLBACK_VAR,
                        format!("expected 'notice' or 'silent', got '{other}'"),
                    ))
                }
            };
        }
        if let Some(raw) = lookup(FORMAT_VAR) {
            config.format = match raw.trim().to_ascii_lowercase().as_str() {
                "text" => LineFormat::Text,
                "json" => LineFormat::Json,
                other => {
                    return Err(ConfigError::invalid(
                        FORMAT_VAR,
                        format!("expected 'text' or 'json', got '{other}'"),
                    ))
                }
            };
        }
        if let Some(raw) = lookup(ATTACKS_VAR) {
            config.attack_plan = raw
                .parse::<AttackPlan>()
                .map_err(|e| ConfigError::invalid(ATTACKS_VAR, e))?;
        }

        Ok(config)
    }
}

/// Comma-separated list; blank entries are ignored.
fn parse_list<T>(var: &'static str, raw: &str) -> Result<Vec<T>, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| item.parse().map_err(|e| ConfigError::invalid(var, e)))
        .collect()
}
