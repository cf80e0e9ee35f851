//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod console;
pub mod ports;
