//! Tests for argument binding

use conjure_domain::{ArgumentBag, Array, Callable, Error, ParameterSpec, Signature, TypeTag, Value};

use crate::test_utils::*;

/// A callable that returns the argument list it received
fn echo(signature: Signature) -> Callable {
    Callable::new(signature, |args| Ok(Value::Array(Array::list(args))))
}

fn list(values: impl IntoIterator<Item = Value>) -> Value {
    Value::Array(Array::list(values))
}

#[test]
fn test_named_and_positional_keys() {
    let injector = injector();
    let function = echo(
        Signature::new()
            .param(ParameterSpec::typed("a", "int"))
            .param(ParameterSpec::typed("b", "string")),
    );

    let named = injector
        .call(function.clone(), ArgumentBag::new().with("b", "two").with("a", 1))
        .unwrap();
    let positional = injector
        .call(function, ArgumentBag::new().with(0usize, 1).with(1usize, "two"))
        .unwrap();

    assert_eq!(named, list([Value::Int(1), Value::from("two")]));
    assert_eq!(positional, named);
}

#[test]
fn test_name_takes_precedence_over_position() {
    let injector = injector();
    let function = echo(Signature::new().param(ParameterSpec::typed("a", "int")));

    let value = injector
        .call(function, ArgumentBag::new().with(0usize, 1).with("a", 2))
        .unwrap();
    assert_eq!(value, list([Value::Int(2)]));
}

#[test]
fn test_trailing_default_is_filled_by_callee() {
    let injector = injector();
    let function = echo(
        Signature::new()
            .param(ParameterSpec::typed("a", "int"))
            .param(ParameterSpec::typed("b", "int").with_default(10)),
    );

    let defaulted = injector
        .call(function.clone(), ArgumentBag::new().with("a", 5))
        .unwrap();
    let supplied = injector
        .call(function, ArgumentBag::new().with("a", 5).with("b", 99))
        .unwrap();

    assert_eq!(defaulted, list([Value::Int(5), Value::Int(10)]));
    assert_eq!(supplied, list([Value::Int(5), Value::Int(99)]));
}

#[test]
fn test_inner_default_is_emitted_verbatim() {
    let injector = injector();
    // the default is a string although the parameter is an int: it is not converted
    let function = echo(
        Signature::new()
            .param(ParameterSpec::typed("a", "int").with_default("unset"))
            .param(ParameterSpec::typed("b", "int")),
    );

    let value = injector
        .call(function, ArgumentBag::new().with("b", 2))
        .unwrap();
    assert_eq!(value, list([Value::from("unset"), Value::Int(2)]));
}

#[test]
fn test_variadic_expands_array_in_order() {
    let injector = injector();
    let function = echo(Signature::new().param(ParameterSpec::typed("items", "int").variadic()));

    let value = injector
        .call(
            function,
            ArgumentBag::new().with(0usize, Array::list([1, 2, 3])),
        )
        .unwrap();
    assert_eq!(value, list([Value::Int(1), Value::Int(2), Value::Int(3)]));
}

#[test]
fn test_variadic_converts_each_element() {
    let injector = injector();
    injector.converter().register(parse_int(), None).unwrap();
    let function = echo(
        Signature::new()
            .param(ParameterSpec::typed("head", "string"))
            .param(ParameterSpec::typed("rest", "int").variadic()),
    );

    let value = injector
        .call(
            function,
            ArgumentBag::new()
                .with("head", "h")
                .with("rest", Array::list(["1", "2"])),
        )
        .unwrap();
    assert_eq!(value, list([Value::from("h"), Value::Int(1), Value::Int(2)]));
}

#[test]
fn test_absent_variadic_binds_nothing() {
    let injector = injector();
    let function = echo(
        Signature::new()
            .param(ParameterSpec::typed("a", "int"))
            .param(ParameterSpec::new("rest").variadic()),
    );

    let value = injector
        .call(function, ArgumentBag::new().with("a", 1))
        .unwrap();
    assert_eq!(value, list([Value::Int(1)]));
}

#[test]
fn test_missing_required_primitive_fails() {
    let injector = injector();
    let function = echo(Signature::new().param(ParameterSpec::typed("a", "int")));

    let err = injector.call(function, ArgumentBag::new()).unwrap_err();
    match err {
        Error::ConversionExhausted { value_type, .. } => assert_eq!(value_type, TypeTag::Null),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_nullable_parameter_binds_null() {
    let injector = injector();
    let function = echo(Signature::new().param(ParameterSpec::typed("clock", "Clock").nullable()));

    let value = injector.call(function, ArgumentBag::new()).unwrap();
    assert_eq!(value, list([Value::Null]));
}

#[test]
fn test_missing_object_parameter_is_constructed() {
    let injector = injector();
    let function = Callable::new(
        Signature::new().param(ParameterSpec::typed("clock", "Clock")),
        |args| {
            let clock = object_at(&args, 0)?;
            let clock = clock.downcast_ref::<Clock>().map(|clock| clock.time);
            Ok(Value::from(clock))
        },
    );

    assert_eq!(injector.call(function, ArgumentBag::new()).unwrap(), Value::Int(0));
}

#[test]
fn test_untyped_parameter_accepts_anything() {
    let injector = injector();
    let function = echo(Signature::new().param(ParameterSpec::new("anything")));

    let value = injector
        .call(function, ArgumentBag::new().with("anything", 2.5))
        .unwrap();
    assert_eq!(value, list([Value::Float(2.5)]));
}

#[test]
fn test_self_parameter_resolves_to_constructed_type() {
    let injector = injector();
    let parent = injector
        .create("Node", ArgumentBag::new().with("value", 1))
        .unwrap();
    let child = injector
        .create(
            "Node",
            ArgumentBag::new()
                .with("value", 2)
                .with("parent", Array::new().with("value", 3)),
        )
        .unwrap();

    assert!(parent.downcast_ref::<Node>().unwrap().parent.is_none());
    let child = child.downcast_ref::<Node>().unwrap();
    assert_eq!(child.value, 2);
    let grandparent = child.parent.as_ref().unwrap().downcast_ref::<Node>().unwrap();
    assert_eq!(grandparent.value, 3);
}

#[test]
fn test_bind_arguments_directly() {
    let converter = injector().converter();
    let signature = Signature::new()
        .param(ParameterSpec::typed("a", "int"))
        .param(ParameterSpec::typed("b", "int").with_default(10));

    let args = converter
        .bind_arguments(&ArgumentBag::new().with("a", 5), signature.params(), None)
        .unwrap();
    assert_eq!(args, vec![Value::Int(5)]);
}
