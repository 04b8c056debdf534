//! Host callables and call targets

use std::fmt;
use std::sync::Arc;

use super::signature::Signature;
use super::type_tag::TypeTag;
use super::value::{ObjectRef, Value};
use crate::constants::INVOKE_METHOD;
use crate::error::{Error, Result};

type Body = dyn Fn(Vec<Value>) -> Result<Value> + Send + Sync;

/// A function value that carries its own signature
///
/// Cloning shares the function; equality is identity.
#[derive(Clone)]
pub struct Callable {
    name: Arc<str>,
    signature: Arc<Signature>,
    body: Arc<Body>,
}

impl Callable {
    /// Create an anonymous function value
    pub fn new<F>(signature: Signature, body: F) -> Self
    where
        F: Fn(Vec<Value>) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            name: Arc::from("{closure}"),
            signature: Arc::new(signature),
            body: Arc::new(body),
        }
    }

    /// Give the function a name for diagnostics
    pub fn named(mut self, name: impl Into<Arc<str>>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Call with an already bound argument list
    ///
    /// Trailing omitted parameters receive their declared defaults first.
    pub fn invoke(&self, args: Vec<Value>) -> Result<Value> {
        let args = self.signature.complete_arguments(args)?;
        (self.body)(args)
    }

    /// Whether both values share the same function
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable")
            .field("name", &self.name)
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// Receiver of a method call
#[derive(Debug, Clone, PartialEq)]
pub enum CallTarget {
    /// A bound instance
    Object(ObjectRef),
    /// A type identifier; instance methods get an instance created first
    Class(TypeTag),
}

impl CallTarget {
    /// The class the method is looked up on
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Self::Object(object) => object.type_tag(),
            Self::Class(tag) => tag.clone(),
        }
    }
}

impl From<ObjectRef> for CallTarget {
    fn from(object: ObjectRef) -> Self {
        Self::Object(object)
    }
}

impl From<TypeTag> for CallTarget {
    fn from(tag: TypeTag) -> Self {
        Self::Class(tag)
    }
}

impl From<&str> for CallTarget {
    fn from(name: &str) -> Self {
        Self::Class(TypeTag::class(name))
    }
}

/// Anything the invoker can call
#[derive(Debug, Clone)]
pub enum CallableRef {
    /// A plain function value
    Function(Callable),
    /// An object whose type defines the invoke method
    Invokable(ObjectRef),
    /// A type identifier naming an invokable type
    Class(TypeTag),
    /// A method on an instance or a type
    Method {
        /// Receiver of the call
        target: CallTarget,
        /// Method name
        method: String,
    },
}

impl CallableRef {
    /// Reference a method on an instance or a type
    pub fn method<T: Into<CallTarget>, S: Into<String>>(target: T, method: S) -> Self {
        Self::Method {
            target: target.into(),
            method: method.into(),
        }
    }

    /// Reference an invokable type by name
    pub fn class<S: Into<String>>(name: S) -> Self {
        Self::Class(TypeTag::class(name))
    }

    /// Rewrite invokable objects and types to their invoke method
    pub fn into_method_form(self) -> Self {
        match self {
            Self::Invokable(object) => Self::method(object, INVOKE_METHOD),
            Self::Class(tag) => Self::method(tag, INVOKE_METHOD),
            other => other,
        }
    }
}

impl fmt::Display for CallableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function(callable) => f.write_str(callable.name()),
            Self::Invokable(object) => write!(f, "{}::{INVOKE_METHOD}", object.class()),
            Self::Class(tag) => write!(f, "{tag}::{INVOKE_METHOD}"),
            Self::Method { target, method } => write!(f, "{}::{method}", target.type_tag()),
        }
    }
}

impl From<Callable> for CallableRef {
    fn from(callable: Callable) -> Self {
        Self::Function(callable)
    }
}

impl From<ObjectRef> for CallableRef {
    fn from(object: ObjectRef) -> Self {
        Self::Invokable(object)
    }
}

impl TryFrom<Value> for CallableRef {
    type Error = Error;

    /// Interpret a host value as a callable
    ///
    /// Function values and objects map directly, a string names an invokable
    /// type, and a two-element list `[target, "method"]` names a method.
    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Callable(callable) => Ok(Self::Function(callable)),
            Value::Object(object) => Ok(Self::Invokable(object)),
            Value::String(name) => Ok(Self::Class(TypeTag::parse(&name))),
            Value::Array(pair) if pair.len() == 2 => {
                let target = match pair.get_index(0) {
                    Some(Value::Object(object)) => CallTarget::Object(object.clone()),
                    Some(Value::String(name)) => CallTarget::Class(TypeTag::parse(name)),
                    _ => {
                        return Err(Error::unsupported_callable(
                            "method target must be an object or a type name",
                        ));
                    }
                };
                let method = pair
                    .get_index(1)
                    .and_then(Value::as_str)
                    .ok_or_else(|| Error::unsupported_callable("method name must be a string"))?;
                Ok(Self::method(target, method))
            }
            other => Err(Error::unsupported_callable(format!(
                "a value of type {} is not callable",
                other.type_tag()
            ))),
        }
    }
}
