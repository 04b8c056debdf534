//! Conversion dispatch
//!
//! A value is accepted unchanged when its runtime tag (or, for objects, a
//! supertype) is among the targets. Otherwise the first target with a
//! registered converter for the value's tag wins, and arrays or absent
//! values fall back to constructing the first constructible target class.

use std::sync::Arc;

use conjure_domain::constants::INVOKE_METHOD;
use conjure_domain::{ArgumentBag, CallableRef, Error, ObjectRef, Result, TypeTag, Value};
use tracing::{debug, trace};

use crate::context::Context;
use crate::injector::Injector;
use crate::registry::{ConversionFn, SingletonSlot};

/// Handle onto the conversion registry of a resolution context
///
/// Cloning is cheap; every clone shares the same registry.
#[derive(Clone)]
pub struct Converter {
    context: Arc<Context>,
}

impl Converter {
    pub(crate) fn from_context(context: Arc<Context>) -> Self {
        Self { context }
    }

    /// The injector sharing this converter's context
    pub fn injector(&self) -> Injector {
        Injector::from_context(self.context.clone())
    }

    /// Whether both handles share one context
    pub fn same_context(&self, other: &Converter) -> bool {
        Arc::ptr_eq(&self.context, &other.context)
    }

    /// Register a converter
    ///
    /// The callable takes at most one parameter. Its source tags are that
    /// parameter's types (with `null` when nullable), or `null` when it is
    /// untyped or absent. The target is `target`, or the first declared
    /// non-null return type. A later registration for the same pair wins.
    pub fn register<C: Into<CallableRef>>(
        &self,
        callable: C,
        target: Option<TypeTag>,
    ) -> Result<()> {
        let callable = callable.into();
        let signature = self.injector().signature_of(&callable)?;
        if signature.params().len() > 1 {
            return Err(Error::registration(format!(
                "converter {callable} must accept at most one parameter, it declares {}",
                signature.params().len()
            )));
        }
        let target = match target {
            Some(target) => target,
            None => signature
                .return_types()
                .iter()
                .find(|tag| **tag != TypeTag::Null)
                .cloned()
                .ok_or_else(|| {
                    Error::registration(format!(
                        "converter {callable} declares no return type and no target was given"
                    ))
                })?,
        };
        let sources = match signature.params().first().map(|param| param.types(true)) {
            Some(types) if !types.is_empty() => types,
            _ => vec![TypeTag::Null],
        };

        let mut table = self.context.write_table();
        for source in sources {
            debug!(%source, %target, converter = %callable, "registering converter");
            if table.insert(source.clone(), target.clone(), ConversionFn::Call(callable.clone())) {
                debug!(%source, %target, "replaced previous converter");
            }
        }
        Ok(())
    }

    /// Register how a class is obtained from an argument bag
    ///
    /// Without a factory the class is auto-constructed. With `singleton`, a
    /// call with an empty or absent bag returns one cached instance while a
    /// non-empty bag builds a fresh one and leaves the cache alone.
    pub fn register_class<T: Into<TypeTag>>(
        &self,
        tag: T,
        factory: Option<CallableRef>,
        singleton: bool,
    ) -> Result<()> {
        let tag = tag.into();
        let factory = match factory {
            Some(callable) => ConversionFn::Factory(callable),
            None => self.converter_for(&TypeTag::Null, &tag).ok_or_else(|| {
                Error::construction(
                    tag.clone(),
                    "type is not constructible and no factory was given",
                )
            })?,
        };
        let conversion = if singleton {
            ConversionFn::Singleton(Arc::new(SingletonSlot::new(factory)))
        } else {
            factory
        };
        debug!(%tag, singleton, "registering class");
        self.install(tag, conversion);
        Ok(())
    }

    /// Store `conversion` as the way to obtain `tag` from absent and array values
    pub(crate) fn install(&self, tag: TypeTag, conversion: ConversionFn) {
        let mut table = self.context.write_table();
        table.insert(TypeTag::Null, tag.clone(), conversion.clone());
        table.insert(TypeTag::Array, tag, conversion);
    }

    /// Convert `value` to the first of `targets` it can reach
    ///
    /// An empty target list accepts anything.
    pub fn convert(&self, targets: &[TypeTag], value: Value) -> Result<Value> {
        let _depth = self.context.enter()?;
        if targets.is_empty() {
            return Ok(value);
        }
        if targets.contains(&TypeTag::Callable) && self.is_invocable(&value) {
            return Ok(value);
        }
        let source = value.type_tag();
        if targets.contains(&source) {
            return Ok(value);
        }
        if let Value::Object(object) = &value
            && targets.iter().any(|target| self.is_instance_of(object, target))
        {
            return Ok(value);
        }

        let registered = self.context.read_table().find(&source, targets);
        let conversion = match registered {
            Some(conversion) => conversion,
            None if source.is_construction_source() => self.class_conversion(&source, targets)?,
            None => return Err(Error::conversion_exhausted(source, targets)),
        };
        trace!(%source, ?conversion, "applying conversion");
        self.apply(&conversion, value)
    }

    /// Whether a converter is registered from `value`'s tag to `target`
    ///
    /// Only the registry is consulted: identity and auto-construction
    /// paths that `convert` would take are not reported.
    pub fn can_convert(&self, target: &TypeTag, value: &Value) -> bool {
        self.context.read_table().contains(&value.type_tag(), target)
    }

    /// The conversion from `source` to `target`
    ///
    /// A registered converter if there is one; otherwise auto-construction
    /// when `target` is a constructible class and `source` is `array` or
    /// `null`.
    pub fn converter_for(&self, source: &TypeTag, target: &TypeTag) -> Option<ConversionFn> {
        let registered = self.context.read_table().get(source, target).cloned();
        if registered.is_some() {
            return registered;
        }
        if target.class_name().is_some()
            && source.is_construction_source()
            && self.context.types.constructor(target).is_some()
        {
            return Some(ConversionFn::Construct(target.clone()));
        }
        None
    }

    /// Resolve the first obtainable class target and memoize its conversion
    ///
    /// Primitive targets are skipped even when a parameterless converter
    /// produces them.
    fn class_conversion(&self, source: &TypeTag, targets: &[TypeTag]) -> Result<ConversionFn> {
        let classes = targets.iter().filter(|target| target.class_name().is_some());
        for target in classes {
            if let Some(conversion) = self.converter_for(&TypeTag::Null, target) {
                debug!(%target, ?conversion, "memoizing class conversion");
                self.install(target.clone(), conversion.clone());
                return Ok(conversion);
            }
        }
        let known = targets
            .iter()
            .find(|target| target.class_name().is_some() && self.context.types.is_known(target));
        match known {
            Some(target) => Err(Error::construction(
                target.clone(),
                "type is abstract or not instantiable",
            )),
            None => Err(Error::conversion_exhausted(source.clone(), targets)),
        }
    }

    fn apply(&self, conversion: &ConversionFn, value: Value) -> Result<Value> {
        match conversion {
            ConversionFn::Call(callable) => {
                let args = match value {
                    Value::Null => ArgumentBag::new(),
                    value => ArgumentBag::new().with(0usize, value),
                };
                self.injector().call(callable.clone(), args)
            }
            ConversionFn::Factory(callable) => {
                self.injector().call(callable.clone(), into_bag(value))
            }
            ConversionFn::Construct(tag) => self.construct(tag, into_bag(value)),
            ConversionFn::Singleton(slot) => self.resolve_singleton(slot, value),
        }
    }

    fn construct(&self, tag: &TypeTag, bag: ArgumentBag) -> Result<Value> {
        let constructor = self
            .context
            .types
            .constructor(tag)
            .ok_or_else(|| {
                Error::construction(tag.clone(), "type is abstract or not instantiable")
            })?;
        if !constructor.signature().is_well_formed() {
            return Err(Error::construction(
                tag.clone(),
                "only the last constructor parameter may be variadic",
            ));
        }
        let args = self
            .bind_arguments(&bag, constructor.signature().params(), Some(tag))
            .map_err(|source| {
                Error::construction_with_source(
                    tag.clone(),
                    "constructor arguments could not be bound",
                    source,
                )
            })?;
        debug!(%tag, arguments = args.len(), "constructing");
        Ok(Value::Object(constructor.construct(args)?))
    }

    fn resolve_singleton(&self, slot: &SingletonSlot, value: Value) -> Result<Value> {
        if let Value::Array(bag) = &value
            && !bag.is_empty()
        {
            trace!("building a fresh instance for a non-empty bag");
            return self.apply(slot.factory(), value);
        }
        if let Some(instance) = slot.cached() {
            return Ok(instance);
        }
        let instance = self.apply(slot.factory(), Value::Null)?;
        Ok(slot.fill(instance))
    }

    fn is_invocable(&self, value: &Value) -> bool {
        match value {
            Value::Callable(_) => true,
            Value::Object(object) => self
                .context
                .types
                .method(object.class(), INVOKE_METHOD)
                .is_some(),
            _ => false,
        }
    }

    fn is_instance_of(&self, object: &ObjectRef, target: &TypeTag) -> bool {
        target.class_name().is_some_and(|name| {
            name == object.class() || self.context.types.is_subtype_of(object.class(), target)
        })
    }
}

/// The argument bag an array or absent value stands for
fn into_bag(value: Value) -> ArgumentBag {
    match value {
        Value::Array(bag) => bag,
        Value::Null => ArgumentBag::new(),
        value => ArgumentBag::new().with(0usize, value),
    }
}
