//! Domain Value Objects
//!
//! Plain data describing host values and the shapes of callables.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`TypeTag`] | Primitive category, `self` placeholder or class identifier |
//! | [`Value`] | A dynamically-typed host value |
//! | [`Array`] | Insertion-ordered map keyed by position or name |
//! | [`Signature`] | Ordered parameters plus declared return types |
//! | [`Callable`] | Function value carrying its own signature |
//! | [`ClassDef`] | Constructor, methods and supertypes of a host class |

/// Host callables and call targets
pub mod callable;
/// Host class metadata
pub mod class;
/// Structured collections and argument bags
pub mod array;
/// Formal parameter metadata
pub mod signature;
/// Runtime type tags
pub mod type_tag;
/// Dynamically-typed host values
pub mod value;

pub use array::{ArgumentBag, Array, ArrayKey};
pub use callable::{CallTarget, Callable, CallableRef};
pub use class::{ClassDef, Constructor, Method};
pub use signature::{ParameterSpec, Signature};
pub use type_tag::TypeTag;
pub use value::{ObjectRef, Value};
