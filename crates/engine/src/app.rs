//! Application state and composition.

use std::sync::Arc;

use bestiary_domain::Roster;

use crate::config::EngineConfig;
use crate::infrastructure::console::StdoutOutput;
use crate::infrastructure::ports::OutputPort;
use crate::use_cases::{CapabilityRegistry, Dispatcher, PassSummary};

/// Main application state.
///
/// Owns the roster for the lifetime of the process and the dispatcher that
/// walks it.
pub struct App {
    roster: Roster,
    dispatcher: Dispatcher,
}

impl App {
    /// Wire up an app that writes to stdout.
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_output(config, Arc::new(StdoutOutput::new()))
    }

    /// Wire up an app against any output port.
    pub fn with_output(config: &EngineConfig, output: Arc<dyn OutputPort>) -> Self {
        let roster = Roster::from_kinds(&config.roster);
        let registry = CapabilityRegistry::from_kinds(&config.capabilities);

        tracing::debug!(
            roster = ?config.roster,
            capabilities = ?registry.kinds(),
            fallback = ?config.fallback,
            "Composed application"
        );

        let dispatcher = Dispatcher::new(registry, output)
            .with_fallback(config.fallback)
            .with_format(config.format)
            .with_attack_plan(config.attack_plan.clone());

        Self { roster, dispatcher }
    }

    /// One dispatch pass over the roster.
    pub fn run(&mut self) -> PassSummary {
        self.dispatcher.run(&mut self.roster)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}
