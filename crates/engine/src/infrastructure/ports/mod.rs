//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions at the engine's edge. Ports exist for:
//! - Action output (could swap stdout -> file, socket, test capture)

mod output;

pub use output::OutputPort;

#[cfg(test)]
pub use output::MockOutputPort;
