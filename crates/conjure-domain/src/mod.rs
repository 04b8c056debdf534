//! Domain Layer - Conjure
//!
//! The host model that the conversion dispatcher and the invoker operate on.
//! Rust has no runtime reflection, so everything a dynamically-typed host
//! would discover at runtime is spelled out here as plain data:
//!
//! | Concept | Type |
//! |---------|------|
//! | Runtime shape of a value | [`TypeTag`] |
//! | Dynamically-typed value | [`Value`] |
//! | Structured collection / argument bag | [`Array`], [`ArgumentBag`] |
//! | Formal parameters and return types | [`ParameterSpec`], [`Signature`] |
//! | Function values and call targets | [`Callable`], [`CallableRef`] |
//! | Class metadata | [`ClassDef`], [`Constructor`], [`Method`] |
//! | Introspection capabilities | [`ports::SignatureProvider`], [`ports::TypeHierarchy`] |
//!
//! The crate has no knowledge of how conversions are dispatched; that lives
//! in `conjure-application`.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::*;
