//! Bestiary Engine library.
//!
//! ## Structure
//!
//! - `use_cases/` - The dispatcher and its capability handlers
//! - `infrastructure/` - Output port and adapters
//! - `config` - Environment configuration
//! - `app` - Application composition

pub mod app;
pub mod config;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
pub use config::{ConfigError, EngineConfig};
