//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{LoggingConfig, ResolutionConfig};

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Conversion and construction tunables
    pub resolution: ResolutionConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}
