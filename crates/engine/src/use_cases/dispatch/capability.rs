//! Capability handlers and their registry.
//!
//! One handler per capability kind. The dispatcher walks the registry in
//! order for every entity; a new capability means one more handler, with no
//! change to existing handlers or entity variants.

use std::sync::Arc;

use bestiary_domain::{Action, CapabilityKind, Entity};

/// Invokes one capability on entities that support it.
pub trait CapabilityHandler: Send + Sync {
    fn kind(&self) -> CapabilityKind;

    /// Performs the capability if `entity` supports it.
    ///
    /// Returns `None` exactly when `entity.supports(self.kind())` is false,
    /// and in that case the capability operation is not reached.
    fn invoke(&self, entity: &dyn Entity) -> Option<Action>;
}

pub struct FlyHandler;

impl CapabilityHandler for FlyHandler {
    fn kind(&self) -> CapabilityKind {
        CapabilityKind::Fly
    }

    fn invoke(&self, entity: &dyn Entity) -> Option<Action> {
        entity.as_flying().map(|flying| flying.fly())
    }
}

pub struct ShootHandler;

impl CapabilityHandler for ShootHandler {
    fn kind(&self) -> CapabilityKind {
        CapabilityKind::Shoot
    }

    fn invoke(&self, entity: &dyn Entity) -> Option<Action> {
        entity.as_shooting().map(|shooting| shooting.shoot())
    }
}

/// Built-in handler for a capability kind.
pub fn handler_for(kind: CapabilityKind) -> Arc<dyn CapabilityHandler> {
    match kind {
        CapabilityKind::Fly => Arc::new(FlyHandler),
        CapabilityKind::Shoot => Arc::new(ShootHandler),
    }
}

/// Ordered set of capability handlers known to a dispatcher.
///
/// At most one handler per kind; registration order is dispatch order.
pub struct CapabilityRegistry {
    handlers: Vec<Arc<dyn CapabilityHandler>>,
}

impl Default for CapabilityRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl CapabilityRegistry {
    /// Registry knowing only `fly`.
    pub fn with_defaults() -> Self {
        Self::from_kinds(&[CapabilityKind::Fly])
    }

    /// Create an empty registry without built-in handlers.
    pub fn empty() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Built-in handlers for `kinds`, in order, skipping repeats.
    pub fn from_kinds(kinds: &[CapabilityKind]) -> Self {
        let mut registry = Self::empty();
        for kind in kinds {
            registry.register(handler_for(*kind));
        }
        registry
    }

    /// Register a handler.
    ///
    /// Returns `false` (and keeps the existing handler) if one for the same
    /// kind is already registered.
    pub fn register(&mut self, handler: Arc<dyn CapabilityHandler>) -> bool {
        if self.contains(handler.kind()) {
            return false;
        }
        self.handlers.push(handler);
        true
    }

    pub fn contains(&self, kind: CapabilityKind) -> bool {
        self.handlers.iter().any(|h| h.kind() == kind)
    }

    /// Registered kinds, in dispatch order.
    pub fn kinds(&self) -> Vec<CapabilityKind> {
        self.handlers.iter().map(|h| h.kind()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn CapabilityHandler>> + '_ {
        self.handlers.iter()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bestiary_domain::{Archer, Character, Dragon, Ghost, Goblin};

    #[test]
    fn default_registry_knows_only_fly() {
        let registry = CapabilityRegistry::default();
        assert_eq!(registry.kinds(), vec![CapabilityKind::Fly]);
    }

    #[test]
    fn empty_registry_has_no_handlers() {
        let registry = CapabilityRegistry::empty();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn duplicate_kinds_are_rejected() {
        let mut registry = CapabilityRegistry::from_kinds(&[
            CapabilityKind::Shoot,
            CapabilityKind::Fly,
            CapabilityKind::Shoot,
        ]);
        assert_eq!(
            registry.kinds(),
            vec![CapabilityKind::Shoot, CapabilityKind::Fly]
        );
        assert!(!registry.register(Arc::new(FlyHandler)));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn handlers_agree_with_capability_query() {
        let entities: Vec<Box<dyn Entity>> = vec![
            Box::new(Character::new()),
            Box::new(Goblin::new()),
            Box::new(Ghost::new()),
            Box::new(Archer::new()),
            Box::new(Dragon::new()),
        ];
        let registry = CapabilityRegistry::from_kinds(&CapabilityKind::ALL);

        for entity in &entities {
            for handler in registry.iter() {
                let supported = entity.supports(handler.kind());
                assert_eq!(
                    handler.invoke(&**entity).is_some(),
                    supported,
                    "{} / {}",
                    entity.label(),
                    handler.kind()
                );
            }
        }
    }

    #[test]
    fn fly_handler_produces_flight() {
        let ghost = Ghost::new();
        assert_eq!(
            FlyHandler.invoke(&ghost),
            Some(Action::Flew {
                actor: "Ghost".into()
            })
        );
        assert_eq!(FlyHandler.invoke(&Goblin::new()), None);
    }
}
