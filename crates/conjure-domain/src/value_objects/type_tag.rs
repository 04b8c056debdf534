//! Runtime type tags
//!
//! Primitive categories and class identifiers share one namespace: a
//! converter registered from `integer` and one registered from `Point` live
//! side by side in the same table.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::constants::SELF_TYPE_NAME;

/// Identifies a runtime value shape
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeTag {
    /// The absent value
    Null,
    /// `true` / `false`
    Boolean,
    /// Signed integers
    Integer,
    /// Floating point numbers
    Float,
    /// UTF-8 strings
    String,
    /// Structured collections (lists and maps)
    Array,
    /// Function values and invokable objects
    Callable,
    /// Placeholder for the type whose constructor or method is being bound
    SelfType,
    /// A concrete or abstract class/interface name
    Class(String),
}

impl TypeTag {
    /// Tag for a class or interface name
    pub fn class<S: Into<String>>(name: S) -> Self {
        Self::Class(name.into())
    }

    /// Parse a host type name, honouring the host's aliases
    ///
    /// Unknown names are class identifiers.
    pub fn parse(name: &str) -> Self {
        match name {
            "null" | "NULL" | "void" => Self::Null,
            "bool" | "boolean" => Self::Boolean,
            "int" | "integer" => Self::Integer,
            "float" | "double" => Self::Float,
            "string" => Self::String,
            "array" => Self::Array,
            "callable" => Self::Callable,
            SELF_TYPE_NAME => Self::SelfType,
            other => Self::Class(other.to_string()),
        }
    }

    /// Canonical name of the tag
    pub fn as_str(&self) -> &str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Array => "array",
            Self::Callable => "callable",
            Self::SelfType => SELF_TYPE_NAME,
            Self::Class(name) => name,
        }
    }

    /// The class name, when this tag names a class
    pub fn class_name(&self) -> Option<&str> {
        match self {
            Self::Class(name) => Some(name),
            _ => None,
        }
    }

    /// Whether this tag is one of the fixed primitive categories
    pub fn is_primitive(&self) -> bool {
        !matches!(self, Self::Class(_) | Self::SelfType)
    }

    /// Whether auto-construction may start from a value of this tag
    pub fn is_construction_source(&self) -> bool {
        matches!(self, Self::Array | Self::Null)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for TypeTag {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl From<String> for TypeTag {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl From<&TypeTag> for TypeTag {
    fn from(tag: &TypeTag) -> Self {
        tag.clone()
    }
}
