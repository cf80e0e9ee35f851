//! Validated name newtype for entities
//!
//! Names are valid by construction:
//! - Non-empty
//! - Within length limits
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for entity names
const MAX_NAME_LENGTH: usize = 64;

/// A validated entity name (non-empty, <=64 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityName(String);

impl EntityName {
    /// Create a new validated entity name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 64 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Entity name cannot be empty"));
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Entity name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Wraps a compile-time constant that is known to satisfy the invariants.
    pub(crate) fn from_static(name: &'static str) -> Self {
        Self(name.to_string())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for EntityName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<EntityName> for String {
    fn from(name: EntityName) -> String {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_whitespace() {
        let name = EntityName::new("  Hero  ").expect("valid name");
        assert_eq!(name.as_str(), "Hero");
    }

    #[test]
    fn rejects_empty_and_blank() {
        assert!(matches!(
            EntityName::new(""),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            EntityName::new("   "),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn rejects_overlong_names() {
        let long = "g".repeat(MAX_NAME_LENGTH + 1);
        assert!(EntityName::new(long).is_err());
        let max = "g".repeat(MAX_NAME_LENGTH);
        assert!(EntityName::new(max).is_ok());
    }

    #[test]
    fn deserialize_validates() {
        let ok: Result<EntityName, _> = serde_json::from_str("\"Ghost\"");
        assert_eq!(ok.expect("valid json name").as_str(), "Ghost");

        let bad: Result<EntityName, _> = serde_json::from_str("\"  \"");
        assert!(bad.is_err());
    }
}
