//! Introspection ports
//!
//! Callables carry their own [`Signature`](crate::Signature); classes are
//! described by the host through [`SignatureProvider`]. Subtype checks go
//! through [`TypeHierarchy`] rather than ad hoc runtime checks.

use crate::value_objects::{Constructor, Method, TypeTag};

/// Constructor and method lookup for host types
pub trait SignatureProvider: Send + Sync {
    /// Constructor of a concrete type
    ///
    /// `None` when the type is unknown, abstract, or declares no constructor.
    fn constructor(&self, tag: &TypeTag) -> Option<Constructor>;

    /// Method `name` of `class`, including inherited methods
    fn method(&self, class: &str, name: &str) -> Option<Method>;

    /// Whether the host knows a type by this tag at all
    fn is_known(&self, tag: &TypeTag) -> bool;
}

/// Subtype relation of host types
pub trait TypeHierarchy: Send + Sync {
    /// Whether `class` is `candidate` or extends/implements it, transitively
    fn is_subtype_of(&self, class: &str, candidate: &TypeTag) -> bool;
}

/// Everything the dispatcher needs from the host's type system
pub trait TypeSystem: SignatureProvider + TypeHierarchy {}

impl<T: SignatureProvider + TypeHierarchy + ?Sized> TypeSystem for T {}
