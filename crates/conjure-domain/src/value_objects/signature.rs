//! Formal parameter metadata
//!
//! A [`Signature`] is what a reflective host would report for a callable or
//! constructor: the ordered formal parameters and the declared return types.

use super::type_tag::TypeTag;
use super::value::Value;
use crate::error::{Error, Result};

/// One formal parameter
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpec {
    /// Parameter name, matched against named bag keys
    pub name: String,
    /// 0-based position, matched against positional bag keys
    pub position: usize,
    /// Declared types in declaration order; empty means untyped
    pub accepted_types: Vec<TypeTag>,
    /// Whether `null` is accepted in addition to the declared types
    pub nullable: bool,
    /// Default value, when one is declared
    pub default: Option<Value>,
    /// Whether the parameter collects all remaining arguments
    pub variadic: bool,
}

impl ParameterSpec {
    /// An untyped parameter
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            position: 0,
            accepted_types: Vec::new(),
            nullable: false,
            default: None,
            variadic: false,
        }
    }

    /// A parameter accepting a single type
    pub fn typed<S: Into<String>, T: Into<TypeTag>>(name: S, tag: T) -> Self {
        Self::new(name).or_type(tag)
    }

    /// Add a member to the parameter's union type
    pub fn or_type<T: Into<TypeTag>>(mut self, tag: T) -> Self {
        self.accepted_types.push(tag.into());
        self
    }

    /// Accept `null` as well
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Declare a default value
    pub fn with_default<V: Into<Value>>(mut self, value: V) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Mark the parameter variadic
    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Effective type set of the parameter
    ///
    /// With `with_null`, a nullable single type becomes `[null, T]` and a
    /// nullable union gets `null` appended. Untyped parameters stay empty.
    pub fn types(&self, with_null: bool) -> Vec<TypeTag> {
        let mut types = self.accepted_types.clone();
        if with_null && self.nullable && !types.is_empty() && !types.contains(&TypeTag::Null) {
            if types.len() == 1 {
                types.insert(0, TypeTag::Null);
            } else {
                types.push(TypeTag::Null);
            }
        }
        types
    }
}

/// Ordered parameters plus declared return types
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signature {
    params: Vec<ParameterSpec>,
    return_types: Vec<TypeTag>,
}

impl Signature {
    /// A signature with no parameters and no declared return type
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter; its position is its index
    pub fn param(mut self, mut spec: ParameterSpec) -> Self {
        spec.position = self.params.len();
        self.params.push(spec);
        self
    }

    /// Add a declared return type
    pub fn returns<T: Into<TypeTag>>(mut self, tag: T) -> Self {
        self.return_types.push(tag.into());
        self
    }

    pub fn params(&self) -> &[ParameterSpec] {
        &self.params
    }

    pub fn return_types(&self) -> &[TypeTag] {
        &self.return_types
    }

    /// Whether only the last parameter is variadic, if any is
    pub fn is_well_formed(&self) -> bool {
        self.params
            .iter()
            .rev()
            .skip(1)
            .all(|param| !param.variadic)
    }

    /// Complete a bound argument list the way the host calls a function
    ///
    /// Trailing parameters the binder left out receive their defaults. A
    /// missing parameter without a default is an argument error.
    pub fn complete_arguments(&self, mut args: Vec<Value>) -> Result<Vec<Value>> {
        for param in self.params.iter().skip(args.len()) {
            if param.variadic {
                break;
            }
            match &param.default {
                Some(default) => args.push(default.clone()),
                None => {
                    return Err(Error::invalid_argument(format!(
                        "missing required argument ${} at position {}",
                        param.name, param.position
                    )));
                }
            }
        }
        Ok(args)
    }
}
