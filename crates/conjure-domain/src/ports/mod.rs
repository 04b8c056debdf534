//! Domain Port Interfaces
//!
//! Capabilities the dispatcher needs from the host but does not implement
//! itself. Rust has no reflection, so whatever answers "what does this
//! constructor take" and "is A a subtype of B" is injected through these
//! traits.
//!
//! ## Organization
//!
//! - **introspection** - signature lookup and the type hierarchy

/// Signature lookup and subtype queries
pub mod introspection;

pub use introspection::{SignatureProvider, TypeHierarchy, TypeSystem};
