//! Configuration
//!
//! Layered loading (defaults, TOML file, environment) through figment.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader, validate_app_config};
pub use types::*;
