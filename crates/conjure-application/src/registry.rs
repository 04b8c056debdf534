//! Conversion table
//!
//! `(source tag) -> (target tag) -> conversion`, at most one conversion per
//! ordered pair. Target buckets keep insertion order for diagnostics; lookup
//! order is always the caller's target order.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use conjure_domain::{CallableRef, TypeTag, Value};
use indexmap::IndexMap;

/// A registered or synthesized conversion
#[derive(Clone)]
pub enum ConversionFn {
    /// A registered converter; the value is passed as argument 0
    Call(CallableRef),
    /// A class factory; an array value is passed as the whole argument bag
    Factory(CallableRef),
    /// Auto-construction of a class from an argument bag
    Construct(TypeTag),
    /// A caching adapter around another conversion
    Singleton(Arc<SingletonSlot>),
}

impl fmt::Debug for ConversionFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Call(callable) => write!(f, "Call({callable})"),
            Self::Factory(callable) => write!(f, "Factory({callable})"),
            Self::Construct(tag) => write!(f, "Construct({tag})"),
            Self::Singleton(slot) => write!(f, "Singleton({:?})", slot.factory),
        }
    }
}

/// Cached instance of a singleton-registered type
pub struct SingletonSlot {
    factory: ConversionFn,
    cached: Mutex<Option<Value>>,
}

impl SingletonSlot {
    pub(crate) fn new(factory: ConversionFn) -> Self {
        Self {
            factory,
            cached: Mutex::new(None),
        }
    }

    pub(crate) fn factory(&self) -> &ConversionFn {
        &self.factory
    }

    /// Whether an instance has been cached
    pub fn is_filled(&self) -> bool {
        self.cached().is_some()
    }

    pub(crate) fn cached(&self) -> Option<Value> {
        self.cached
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Store `instance` unless another fill got there first; returns the cached one
    pub(crate) fn fill(&self, instance: Value) -> Value {
        self.cached
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(instance)
            .clone()
    }
}

#[derive(Debug, Default)]
pub(crate) struct ConversionTable {
    buckets: HashMap<TypeTag, IndexMap<TypeTag, ConversionFn>>,
}

impl ConversionTable {
    /// Store a conversion, overwriting the pair; returns whether one was replaced
    pub(crate) fn insert(
        &mut self,
        source: TypeTag,
        target: TypeTag,
        conversion: ConversionFn,
    ) -> bool {
        self.buckets
            .entry(source)
            .or_default()
            .insert(target, conversion)
            .is_some()
    }

    pub(crate) fn get(&self, source: &TypeTag, target: &TypeTag) -> Option<&ConversionFn> {
        self.buckets.get(source)?.get(target)
    }

    pub(crate) fn contains(&self, source: &TypeTag, target: &TypeTag) -> bool {
        self.get(source, target).is_some()
    }

    /// First conversion from `source` to any of `targets`, in target order
    pub(crate) fn find(&self, source: &TypeTag, targets: &[TypeTag]) -> Option<ConversionFn> {
        let bucket = self.buckets.get(source)?;
        targets.iter().find_map(|target| bucket.get(target).cloned())
    }
}
