//! Tests for callables and call targets

use conjure_domain::{
    Array, CallTarget, Callable, CallableRef, Error, ObjectRef, ParameterSpec, Signature, TypeTag,
    Value,
};

fn double() -> Callable {
    Callable::new(
        Signature::new()
            .param(ParameterSpec::typed("n", "int").with_default(1))
            .returns("int"),
        |args| Ok(Value::Int(i64::try_from(&args[0])? * 2)),
    )
    .named("double")
}

#[test]
fn test_invoke_completes_defaults() {
    let function = double();
    assert_eq!(function.invoke(vec![Value::Int(4)]).unwrap(), Value::Int(8));
    assert_eq!(function.invoke(Vec::new()).unwrap(), Value::Int(2));
}

#[test]
fn test_callable_identity() {
    let function = double();
    let clone = function.clone();
    assert!(function.ptr_eq(&clone));
    assert!(!function.ptr_eq(&double()));
    assert_eq!(Value::Callable(function), Value::Callable(clone));
}

#[test]
fn test_invokables_rewrite_to_method_form() {
    let object = ObjectRef::new("Greeter", ());
    match CallableRef::from(object.clone()).into_method_form() {
        CallableRef::Method { target, method } => {
            assert_eq!(target, CallTarget::Object(object));
            assert_eq!(method, "__invoke");
        }
        other => panic!("unexpected form: {other}"),
    }

    match CallableRef::class("Greeter").into_method_form() {
        CallableRef::Method { target, .. } => {
            assert_eq!(target, CallTarget::Class(TypeTag::class("Greeter")));
        }
        other => panic!("unexpected form: {other}"),
    }
}

#[test]
fn test_display_names_the_callable() {
    assert_eq!(CallableRef::from(double()).to_string(), "double");
    assert_eq!(CallableRef::class("Greeter").to_string(), "Greeter::__invoke");
    assert_eq!(CallableRef::method("Calculator", "add").to_string(), "Calculator::add");
}

#[test]
fn test_values_convert_to_callables() {
    assert!(matches!(
        CallableRef::try_from(Value::Callable(double())),
        Ok(CallableRef::Function(_))
    ));
    assert!(matches!(
        CallableRef::try_from(Value::object("Greeter", ())),
        Ok(CallableRef::Invokable(_))
    ));
    assert!(matches!(
        CallableRef::try_from(Value::from("Greeter")),
        Ok(CallableRef::Class(TypeTag::Class(name))) if name == "Greeter"
    ));
    assert!(matches!(
        CallableRef::try_from(Value::Array(Array::list(["Calculator", "add"]))),
        Ok(CallableRef::Method { method, .. }) if method == "add"
    ));
}

#[test]
fn test_invalid_callable_values() {
    for value in [
        Value::Int(1),
        Value::Array(Array::list([1, 2])),
        Value::Array(Array::list(["Calculator"])),
        Value::Array(Array::list([Value::from("Calculator"), Value::Int(3)])),
    ] {
        assert!(matches!(
            CallableRef::try_from(value),
            Err(Error::UnsupportedCallable { .. })
        ));
    }
}
