//! Dynamically-typed host values

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::array::Array;
use super::callable::Callable;
use super::type_tag::TypeTag;
use crate::error::{Error, Result};

/// A shared, type-erased instance of a host class
///
/// Cloning shares the instance; equality is identity.
#[derive(Clone)]
pub struct ObjectRef {
    class: Arc<str>,
    instance: Arc<dyn Any + Send + Sync>,
}

impl ObjectRef {
    /// Wrap an instance under its class name
    pub fn new<T: Any + Send + Sync>(class: impl Into<Arc<str>>, instance: T) -> Self {
        Self::from_arc(class, Arc::new(instance))
    }

    /// Wrap an already shared instance
    pub fn from_arc(class: impl Into<Arc<str>>, instance: Arc<dyn Any + Send + Sync>) -> Self {
        Self {
            class: class.into(),
            instance,
        }
    }

    /// Most-derived class name of the instance
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Class tag of the instance
    pub fn type_tag(&self) -> TypeTag {
        TypeTag::Class(self.class.to_string())
    }

    /// Borrow the instance as its concrete Rust type
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.instance.downcast_ref::<T>()
    }

    /// Whether both references point at the same instance
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.instance, &other.instance)
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:p}", self.class, Arc::as_ptr(&self.instance))
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

/// A runtime value of the host
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Absent value
    #[default]
    Null,
    /// Boolean
    Bool(bool),
    /// Signed 64-bit integer
    Int(i64),
    /// 64-bit float
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Structured collection
    Array(Array),
    /// Function value
    Callable(Callable),
    /// Class instance
    Object(ObjectRef),
}

impl Value {
    /// Wrap a Rust value as an instance of `class`
    pub fn object<T: Any + Send + Sync>(class: impl Into<Arc<str>>, instance: T) -> Self {
        Self::Object(ObjectRef::new(class, instance))
    }

    /// Runtime tag: primitive category, `callable`, or the object's class
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Self::Null => TypeTag::Null,
            Self::Bool(_) => TypeTag::Boolean,
            Self::Int(_) => TypeTag::Integer,
            Self::Float(_) => TypeTag::Float,
            Self::String(_) => TypeTag::String,
            Self::Array(_) => TypeTag::Array,
            Self::Callable(_) => TypeTag::Callable,
            Self::Object(object) => object.type_tag(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_callable(&self) -> Option<&Callable> {
        match self {
            Self::Callable(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Self::Object(value) => Some(value),
            _ => None,
        }
    }

    /// Borrow an object value as its concrete Rust type
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_object().and_then(ObjectRef::downcast_ref)
    }

    /// Borrow an object value as `T`, failing with an argument error otherwise
    pub fn expect_object<T: Any>(&self) -> Result<&T> {
        self.downcast_ref::<T>().ok_or_else(|| {
            Error::invalid_argument(format!(
                "expected an instance of {}, got {}",
                std::any::type_name::<T>(),
                self.type_tag()
            ))
        })
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Callable(a), Self::Callable(b)) => a.ptr_eq(b),
            (Self::Object(a), Self::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

macro_rules! impl_from_for_value {
    ($($source:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$source> for Value {
                fn from(value: $source) -> Self {
                    Self::$variant(value.into())
                }
            }
        )*
    };
}

impl_from_for_value! {
    bool => Bool,
    i32 => Int,
    i64 => Int,
    f64 => Float,
    String => String,
    &str => String,
    Array => Array,
    Callable => Callable,
    ObjectRef => Object,
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Self::Array(values.into_iter().collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

fn mismatch(expected: &str, value: &Value) -> Error {
    Error::invalid_argument(format!("expected {expected}, got {}", value.type_tag()))
}

impl TryFrom<&Value> for i64 {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        value.as_int().ok_or_else(|| mismatch("integer", value))
    }
}

impl TryFrom<&Value> for f64 {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        value.as_float().ok_or_else(|| mismatch("float", value))
    }
}

impl TryFrom<&Value> for bool {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        value.as_bool().ok_or_else(|| mismatch("boolean", value))
    }
}

impl TryFrom<&Value> for String {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| mismatch("string", value))
    }
}
