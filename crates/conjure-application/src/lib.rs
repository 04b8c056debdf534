//! Application Layer - Conjure
//!
//! Conversion dispatch, argument binding and reflective invocation over the
//! host model defined in `conjure-domain`.
//!
//! ## Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`Converter`] | Registry of conversions and the `convert` dispatcher |
//! | [`Injector`] | Invokes callables and creates instances with bound arguments |
//! | [`ClassTable`] | In-memory implementation of the introspection ports |
//! | [`ResolutionOptions`] | Nesting guard for conversions |
//!
//! Both handles share one context. Nothing is global: every
//! [`Injector::new`] starts from an empty registry holding only the built-in
//! `Converter` and `Injector` registrations.
//!
//! ```
//! use conjure_application::{ClassTable, Injector};
//! use conjure_domain::{ArgumentBag, ClassDef, ParameterSpec, Signature, Value};
//!
//! struct Point { x: i64, y: i64 }
//!
//! let types = ClassTable::new()
//!     .with_class(ClassDef::new("Point").constructor(
//!         Signature::new()
//!             .param(ParameterSpec::typed("x", "int"))
//!             .param(ParameterSpec::typed("y", "int")),
//!         |args: Vec<Value>| Ok(Point { x: (&args[0]).try_into()?, y: (&args[1]).try_into()? }),
//!     ))
//!     .into_shared();
//!
//! let injector = Injector::new(types);
//! let point = injector.create("Point", ArgumentBag::new().with("x", 3).with("y", 4))?;
//! let point = point.downcast_ref::<Point>().expect("a Point");
//! assert_eq!((point.x, point.y), (3, 4));
//! # Ok::<(), conjure_domain::Error>(())
//! ```

mod binder;
mod context;
pub mod converter;
pub mod injector;
pub mod reflection;
pub mod registry;

pub use context::ResolutionOptions;
pub use converter::Converter;
pub use injector::Injector;
pub use reflection::ClassTable;
pub use registry::{ConversionFn, SingletonSlot};
