//! Host class metadata
//!
//! A [`ClassDef`] is what the host's reflection would report about a class:
//! its supertypes, whether it can be instantiated, the constructor signature
//! and the methods it defines.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use super::signature::Signature;
use super::type_tag::TypeTag;
use super::value::{ObjectRef, Value};
use crate::error::{Error, Result};

type ConstructorBody = dyn Fn(Vec<Value>) -> Result<Arc<dyn Any + Send + Sync>> + Send + Sync;
type MethodBody = dyn Fn(Option<&ObjectRef>, Vec<Value>) -> Result<Value> + Send + Sync;

/// Constructor of a concrete class
#[derive(Clone)]
pub struct Constructor {
    class: Arc<str>,
    signature: Arc<Signature>,
    body: Arc<ConstructorBody>,
}

impl Constructor {
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Build an instance from a bound argument list
    pub fn construct(&self, args: Vec<Value>) -> Result<ObjectRef> {
        let args = self.signature.complete_arguments(args)?;
        let instance = (self.body)(args)?;
        Ok(ObjectRef::from_arc(self.class.clone(), instance))
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("class", &self.class)
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// A named method, bound to instances or static
#[derive(Clone)]
pub struct Method {
    name: Arc<str>,
    signature: Arc<Signature>,
    is_static: bool,
    body: Arc<MethodBody>,
}

impl Method {
    /// An instance method; the body receives the receiver
    pub fn instance<F>(name: impl Into<Arc<str>>, signature: Signature, body: F) -> Self
    where
        F: Fn(&ObjectRef, Vec<Value>) -> Result<Value> + Send + Sync + 'static,
    {
        let name = name.into();
        let method_name = name.clone();
        Self {
            name,
            signature: Arc::new(signature),
            is_static: false,
            body: Arc::new(move |receiver: Option<&ObjectRef>, args: Vec<Value>| match receiver {
                Some(receiver) => body(receiver, args),
                None => Err(Error::invalid_argument(format!(
                    "instance method {method_name} called without a receiver"
                ))),
            }),
        }
    }

    /// A static method
    pub fn static_method<F>(name: impl Into<Arc<str>>, signature: Signature, body: F) -> Self
    where
        F: Fn(Vec<Value>) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            signature: Arc::new(signature),
            is_static: true,
            body: Arc::new(move |_: Option<&ObjectRef>, args: Vec<Value>| body(args)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Call with an already bound argument list
    pub fn invoke(&self, receiver: Option<&ObjectRef>, args: Vec<Value>) -> Result<Value> {
        let args = self.signature.complete_arguments(args)?;
        (self.body)(receiver, args)
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Method")
            .field("name", &self.name)
            .field("signature", &self.signature)
            .field("is_static", &self.is_static)
            .finish_non_exhaustive()
    }
}

/// Metadata of a host class or interface
#[derive(Debug, Clone)]
pub struct ClassDef {
    name: Arc<str>,
    parents: Vec<TypeTag>,
    is_abstract: bool,
    constructor: Option<Constructor>,
    methods: IndexMap<String, Method>,
}

impl ClassDef {
    /// A concrete class without a constructor yet
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            parents: Vec::new(),
            is_abstract: false,
            constructor: None,
            methods: IndexMap::new(),
        }
    }

    /// An interface: abstract and never constructible
    pub fn interface(name: impl Into<Arc<str>>) -> Self {
        Self::new(name).abstract_class()
    }

    /// Mark the class abstract
    pub fn abstract_class(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Add a parent class or implemented interface
    pub fn extends<T: Into<TypeTag>>(mut self, parent: T) -> Self {
        self.parents.push(parent.into());
        self
    }

    /// Declare the constructor
    pub fn constructor<T, F>(mut self, signature: Signature, body: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn(Vec<Value>) -> Result<T> + Send + Sync + 'static,
    {
        let body: Arc<ConstructorBody> = Arc::new(move |args: Vec<Value>| {
            let instance: Arc<dyn Any + Send + Sync> = Arc::new(body(args)?);
            Ok(instance)
        });
        self.constructor = Some(Constructor {
            class: self.name.clone(),
            signature: Arc::new(signature),
            body,
        });
        self
    }

    /// Add a method, replacing any of the same name
    pub fn method(mut self, method: Method) -> Self {
        self.methods.insert(method.name().to_string(), method);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_tag(&self) -> TypeTag {
        TypeTag::Class(self.name.to_string())
    }

    pub fn parents(&self) -> &[TypeTag] {
        &self.parents
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    /// The constructor of a concrete class
    ///
    /// Abstract classes report none even if one was declared. A concrete
    /// class without a declared constructor is built from no arguments into
    /// a unit instance.
    pub fn instantiator(&self) -> Option<Constructor> {
        if self.is_abstract {
            return None;
        }
        let constructor = self.constructor.clone().unwrap_or_else(|| Constructor {
            class: self.name.clone(),
            signature: Arc::new(Signature::new()),
            body: Arc::new(|_: Vec<Value>| {
                let instance: Arc<dyn Any + Send + Sync> = Arc::new(());
                Ok(instance)
            }),
        });
        Some(constructor)
    }

    /// A method defined directly on this class
    pub fn own_method(&self, name: &str) -> Option<&Method> {
        self.methods.get(name)
    }
}
