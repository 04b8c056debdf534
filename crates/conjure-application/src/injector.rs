//! Reflective invocation
//!
//! The [`Injector`] calls anything the host considers callable, binding the
//! argument bag onto the callable's parameters through the converter, and
//! creates instances of registered or constructible types.

use std::sync::{Arc, Weak};

use conjure_domain::constants::{CONVERTER_TYPE, INJECTOR_TYPE};
use conjure_domain::ports::TypeSystem;
use conjure_domain::{
    ArgumentBag, CallTarget, Callable, CallableRef, Error, Method, ObjectRef, Result, Signature,
    TypeTag, Value,
};
use tracing::{debug, trace};

use crate::context::{Context, ResolutionOptions};
use crate::converter::Converter;
use crate::registry::ConversionFn;

/// Handle onto the invoker of a resolution context
///
/// Cloning is cheap; every clone shares the same registry.
#[derive(Clone)]
pub struct Injector {
    context: Arc<Context>,
}

/// A callable reference resolved to something with a signature
enum Resolved {
    Function(Callable),
    Method { target: CallTarget, method: Method },
}

impl Resolved {
    fn signature(&self) -> &Signature {
        match self {
            Self::Function(function) => function.signature(),
            Self::Method { method, .. } => method.signature(),
        }
    }

    fn name(&self) -> String {
        match self {
            Self::Function(function) => function.name().to_string(),
            Self::Method { target, method } => format!("{}::{}", target.type_tag(), method.name()),
        }
    }
}

impl Injector {
    /// Create a context over the host's type system
    pub fn new(types: Arc<dyn TypeSystem>) -> Self {
        Self::with_options(types, ResolutionOptions::default())
    }

    /// Create a context with explicit resolution options
    ///
    /// The `Converter` and `Injector` type identifiers are registered up
    /// front so that callables can ask for the live handles.
    pub fn with_options(types: Arc<dyn TypeSystem>, options: ResolutionOptions) -> Self {
        let injector = Self {
            context: Arc::new(Context::new(types, options)),
        };
        injector.register_builtins();
        debug!(?options, "resolution context created");
        injector
    }

    pub(crate) fn from_context(context: Arc<Context>) -> Self {
        Self { context }
    }

    /// The converter sharing this injector's context
    pub fn converter(&self) -> Converter {
        Converter::from_context(self.context.clone())
    }

    pub fn options(&self) -> ResolutionOptions {
        self.context.options
    }

    /// Register how a class is obtained; see [`Converter::register_class`]
    pub fn register_class<T: Into<TypeTag>>(
        &self,
        tag: T,
        factory: Option<CallableRef>,
        singleton: bool,
    ) -> Result<()> {
        self.converter().register_class(tag, factory, singleton)
    }

    /// Obtain an instance of `tag` from an argument bag
    pub fn create<T: Into<TypeTag>>(&self, tag: T, args: ArgumentBag) -> Result<ObjectRef> {
        let tag = tag.into();
        match self.converter().convert(std::slice::from_ref(&tag), Value::Array(args))? {
            Value::Object(object) => Ok(object),
            other => Err(Error::construction(
                tag,
                format!("conversion produced a {} instead of an object", other.type_tag()),
            )),
        }
    }

    /// Call `callable` with arguments bound from `args`
    ///
    /// Invokable objects and types are called through their invoke method.
    /// An instance method named on a type runs against an instance obtained
    /// with [`create`](Self::create).
    pub fn call<C: Into<CallableRef>>(&self, callable: C, args: ArgumentBag) -> Result<Value> {
        let callable = callable.into();
        trace!(%callable, arguments = args.len(), "calling");
        let converter = self.converter();
        match self.resolve(callable)? {
            Resolved::Function(function) => {
                let bound = converter.bind_arguments(&args, function.signature().params(), None)?;
                function.invoke(bound)
            }
            Resolved::Method { target, method } => {
                let self_tag = target.type_tag();
                let bound =
                    converter.bind_arguments(&args, method.signature().params(), Some(&self_tag))?;
                if method.is_static() {
                    return method.invoke(None, bound);
                }
                let receiver = match target {
                    CallTarget::Object(object) => object,
                    CallTarget::Class(tag) => self.create(tag, ArgumentBag::new())?,
                };
                method.invoke(Some(&receiver), bound)
            }
        }
    }

    /// Call a callable held in a host value
    pub fn call_value(&self, callable: Value, args: ArgumentBag) -> Result<Value> {
        self.call(CallableRef::try_from(callable)?, args)
    }

    /// Signature of whatever `callable` resolves to
    pub fn signature_of(&self, callable: &CallableRef) -> Result<Signature> {
        Ok(self.resolve(callable.clone())?.signature().clone())
    }

    fn resolve(&self, callable: CallableRef) -> Result<Resolved> {
        let resolved = match callable.into_method_form() {
            CallableRef::Function(function) => Resolved::Function(function),
            CallableRef::Method { target, method } => {
                let class_tag = target.type_tag();
                let Some(class) = class_tag.class_name() else {
                    return Err(Error::unsupported_callable(format!(
                        "{class_tag} values have no methods"
                    )));
                };
                let found = self.context.types.method(class, &method).ok_or_else(|| {
                    Error::unsupported_callable(format!("{class}::{method} is not a known method"))
                })?;
                Resolved::Method {
                    target,
                    method: found,
                }
            }
            other => {
                return Err(Error::unsupported_callable(format!("{other} cannot be resolved")));
            }
        };
        if !resolved.signature().is_well_formed() {
            return Err(Error::unsupported_callable(format!(
                "{} declares a variadic parameter before the last one",
                resolved.name()
            )));
        }
        Ok(resolved)
    }

    // Handles hold the context weakly so the table does not keep its own
    // context alive.
    fn register_builtins(&self) {
        let context = Arc::downgrade(&self.context);
        let converter = Callable::new(Signature::new().returns(CONVERTER_TYPE), {
            let context = context.clone();
            move |_| Ok(Value::object(CONVERTER_TYPE, Converter::from_context(upgrade(&context)?)))
        })
        .named("Converter::current");
        let injector = Callable::new(Signature::new().returns(INJECTOR_TYPE), move |_| {
            Ok(Value::object(INJECTOR_TYPE, Injector::from_context(upgrade(&context)?)))
        })
        .named("Injector::current");

        let registry = self.converter();
        registry.install(TypeTag::class(CONVERTER_TYPE), ConversionFn::Factory(converter.into()));
        registry.install(TypeTag::class(INJECTOR_TYPE), ConversionFn::Factory(injector.into()));
    }
}

fn upgrade(context: &Weak<Context>) -> Result<Arc<Context>> {
    context
        .upgrade()
        .ok_or_else(|| Error::internal("resolution context was dropped"))
}
