//! # Conjure
//!
//! A runtime type-conversion dispatcher and reflective argument binder.
//!
//! A [`Converter`] keeps a registry of conversions between [`TypeTag`]s and
//! falls back to constructing classes from argument bags. An [`Injector`]
//! calls functions, methods and invokable objects with arguments bound by
//! name or position, converting each one to the parameter's declared types.
//!
//! ## Example
//!
//! ```
//! use conjure::{
//!     ArgumentBag, Callable, ClassDef, ClassTable, Injector, ParameterSpec, Signature, Value,
//! };
//!
//! struct Clock { time: i64 }
//!
//! let types = ClassTable::new()
//!     .with_class(ClassDef::new("Clock").constructor(
//!         Signature::new().param(ParameterSpec::typed("time", "int").with_default(0)),
//!         |args: Vec<Value>| Ok(Clock { time: (&args[0]).try_into()? }),
//!     ))
//!     .into_shared();
//! let injector = Injector::new(types);
//! injector.register_class("Clock", None, true)?;
//!
//! // `clock` is not in the bag: the cached Clock is injected
//! let uptime = Callable::new(
//!     Signature::new().param(ParameterSpec::typed("clock", "Clock")).returns("int"),
//!     |args| Ok(Value::Int(args[0].expect_object::<Clock>()?.time)),
//! );
//! assert_eq!(injector.call(uptime, ArgumentBag::new())?, Value::Int(0));
//! # Ok::<(), conjure::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Host value model, type tags, signatures, ports and errors
//! - `application` - Converter, argument binder, injector and `ClassTable`
//! - `infrastructure` - Configuration, logging and the bootstrap container

/// Domain layer - host value model and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use conjure_domain::*;
}

/// Application layer - conversion dispatch and invocation
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use conjure_application::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use conjure_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the dispatcher and invoker at the crate root
pub use application::{ClassTable, ConversionFn, Converter, Injector, ResolutionOptions};

// Re-export bootstrap entry points
pub use infrastructure::{Container, init_container};
