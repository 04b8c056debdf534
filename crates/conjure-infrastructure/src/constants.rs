//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Host names reserved by the dispatcher are defined in
//! `conjure_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "conjure.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "conjure";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "CONJURE";

/// Separator between nested keys in environment variables
///
/// `CONJURE_RESOLUTION__MAX_DEPTH` sets `resolution.max_depth`.
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV_VAR: &str = "CONJURE_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";
