//! Use cases - orchestration over domain entities.

pub mod dispatch;

pub use dispatch::{
    AttackPlan, CapabilityRegistry, Dispatcher, FallbackPolicy, PassSummary, ProcessOutcome,
};
