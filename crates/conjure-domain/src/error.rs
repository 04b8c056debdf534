//! Error handling types

use thiserror::Error;

use crate::value_objects::TypeTag;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Conjure
#[derive(Error, Debug)]
pub enum Error {
    /// A converter could not be registered
    #[error("Registration error: {message}")]
    Registration {
        /// Why the registration was rejected
        message: String,
    },

    /// The value given as a callable does not resolve to a function or method
    #[error("Unsupported callable: {message}")]
    UnsupportedCallable {
        /// Description of the offending callable
        message: String,
    },

    /// No identity, instance-of, registered or synthesized conversion applies
    #[error("Cannot convert {value_type} to any of [{}]", join_tags(.targets))]
    ConversionExhausted {
        /// Runtime tag of the value that failed to convert
        value_type: TypeTag,
        /// Requested target tags, in caller order
        targets: Vec<TypeTag>,
    },

    /// Auto-construction of a type failed
    #[error("Cannot construct {type_tag}: {message}")]
    Construction {
        /// The type being constructed
        type_tag: TypeTag,
        /// Description of the failure
        message: String,
        /// The nested failure, when binding a constructor argument failed
        #[source]
        source: Option<Box<Error>>,
    },

    /// Conversion nesting exceeded the configured guard
    #[error("Resolution depth limit of {limit} exceeded")]
    RecursionLimit {
        /// The configured maximum depth
        limit: usize,
    },

    /// Invalid argument provided to a callable
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

fn join_tags(tags: &[TypeTag]) -> String {
    tags.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

// Resolution error creation methods
impl Error {
    /// Create a registration error
    pub fn registration<S: Into<String>>(message: S) -> Self {
        Self::Registration {
            message: message.into(),
        }
    }

    /// Create an unsupported callable error
    pub fn unsupported_callable<S: Into<String>>(message: S) -> Self {
        Self::UnsupportedCallable {
            message: message.into(),
        }
    }

    /// Create a conversion exhausted error
    pub fn conversion_exhausted(value_type: TypeTag, targets: &[TypeTag]) -> Self {
        Self::ConversionExhausted {
            value_type,
            targets: targets.to_vec(),
        }
    }

    /// Create a construction error
    pub fn construction<S: Into<String>>(type_tag: TypeTag, message: S) -> Self {
        Self::Construction {
            type_tag,
            message: message.into(),
            source: None,
        }
    }

    /// Create a construction error caused by a nested failure
    pub fn construction_with_source<S: Into<String>>(
        type_tag: TypeTag,
        message: S,
        source: Error,
    ) -> Self {
        Self::Construction {
            type_tag,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a recursion limit error
    pub fn recursion_limit(limit: usize) -> Self {
        Self::RecursionLimit { limit }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// Infrastructure error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Create an internal error with source
    pub fn internal_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Internal {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl Error {
    /// The innermost error of a chain of nested construction failures
    ///
    /// Auto-construction wraps the failure of each dependency it could not
    /// build, so the error that actually stopped resolution sits at the
    /// bottom of the chain.
    pub fn root_cause(&self) -> &Error {
        let mut current = self;
        while let Self::Construction {
            source: Some(inner),
            ..
        } = current
        {
            current = inner;
        }
        current
    }
}
