//! Resolution configuration types

use conjure_application::ResolutionOptions;
use serde::{Deserialize, Serialize};

/// Conversion and construction tunables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    /// Maximum nesting of conversions; unbounded when unset
    pub max_depth: Option<usize>,
}

impl ResolutionConfig {
    /// Options for an injector built from this configuration
    pub fn options(&self) -> ResolutionOptions {
        ResolutionOptions {
            max_depth: self.max_depth,
        }
    }
}
