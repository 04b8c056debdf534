//! Domain layer constants
//!
//! Names the host reserves for itself. Infrastructure-specific constants live
//! in `conjure_infrastructure::constants`.

// ============================================================================
// HOST NAMES
// ============================================================================

/// Method a type must define to be invokable as a whole
pub const INVOKE_METHOD: &str = "__invoke";

/// Placeholder type name replaced by the type under construction
pub const SELF_TYPE_NAME: &str = "self";

// ============================================================================
// BUILT-IN TYPE IDENTIFIERS
// ============================================================================

/// Type identifier resolving to the live converter handle
pub const CONVERTER_TYPE: &str = "Converter";

/// Type identifier resolving to the live injector handle
pub const INJECTOR_TYPE: &str = "Injector";
