//! Composition root
//!
//! Builds the injector from configuration and the host's type system.

pub mod bootstrap;

pub use bootstrap::{Container, init_container};
