//! Tests for the domain error type

use std::error::Error as _;

use conjure_domain::{Error, TypeTag};

#[test]
fn test_conversion_exhausted_lists_targets() {
    let err = Error::conversion_exhausted(
        TypeTag::Float,
        &[TypeTag::class("Uuid"), TypeTag::String],
    );
    assert_eq!(err.to_string(), "Cannot convert float to any of [Uuid, string]");
}

#[test]
fn test_error_messages() {
    assert_eq!(
        Error::registration("no target").to_string(),
        "Registration error: no target"
    );
    assert_eq!(
        Error::construction(TypeTag::class("Shape"), "type is abstract").to_string(),
        "Cannot construct Shape: type is abstract"
    );
    assert_eq!(
        Error::recursion_limit(8).to_string(),
        "Resolution depth limit of 8 exceeded"
    );
}

#[test]
fn test_construction_source_chain() {
    let inner = Error::conversion_exhausted(TypeTag::Null, &[TypeTag::Integer]);
    let middle = Error::construction_with_source(TypeTag::class("Point"), "bad arguments", inner);
    let outer = Error::construction_with_source(TypeTag::class("Line"), "bad arguments", middle);

    let source = outer.source().expect("outer has a source");
    assert!(source.to_string().starts_with("Cannot construct Point"));
    assert!(matches!(outer.root_cause(), Error::ConversionExhausted { .. }));
}

#[test]
fn test_root_cause_of_leaf_is_itself() {
    let err = Error::invalid_argument("bad");
    assert!(matches!(err.root_cause(), Error::InvalidArgument { .. }));

    let bare = Error::construction(TypeTag::class("Shape"), "abstract");
    assert!(matches!(bare.root_cause(), Error::Construction { .. }));
}

#[test]
fn test_configuration_error_keeps_source() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err = Error::configuration_with_source("cannot read config", io);

    assert_eq!(err.to_string(), "Configuration error: cannot read config");
    assert_eq!(err.source().map(ToString::to_string), Some("missing".to_string()));
}
