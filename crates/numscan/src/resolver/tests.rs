#![allow(clippy::unwrap_used, reason = "tests panic on unexpected state")]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::*;
use crate::error::ErrorCategory;
use pretty_assertions::assert_eq;

fn run<'a>(
    action: Action,
    input: Input<'a>,
    target: Target,
    selectors: &Selectors,
) -> Result<Value<'a>, ConvertError> {
    resolve(
        Payload::Action(action),
        input,
        target,
        &Options::default(),
        selectors,
    )
}

fn message(err: &ConvertError) -> String {
    err.to_string()
}

// === Values ===

#[test]
fn values_pass_through() {
    let value = resolve(
        Payload::Value(Number::Int(3)),
        Input::Str("3"),
        Target::Int,
        &Options::default(),
        &Selectors::raising(),
    )
    .unwrap();
    assert_eq!(value, Value::Number(Number::Int(3)));
}

// === Infinity and NaN ===

#[test]
fn allowed_specials_become_signed_floats() {
    let selectors = Selectors::default();
    let inf = run(Action::InfFound, Input::Str("inf"), Target::Real, &selectors).unwrap();
    assert_eq!(inf, Value::Number(Number::Float(f64::INFINITY)));
    let neg = run(Action::NegInfFound, Input::Str("-inf"), Target::Float, &selectors).unwrap();
    assert_eq!(neg, Value::Number(Number::Float(f64::NEG_INFINITY)));

    let nan = run(Action::NanFound, Input::Str("nan"), Target::Float, &selectors).unwrap();
    let Some(Number::Float(value)) = nan.into_number() else {
        panic!("expected a float");
    };
    assert!(value.is_nan());
    assert!(value.is_sign_positive());

    let neg_nan = run(Action::NegNanFound, Input::Str("-nan"), Target::Float, &selectors).unwrap();
    let Some(Number::Float(value)) = neg_nan.into_number() else {
        panic!("expected a float");
    };
    assert!(value.is_nan());
    assert!(value.is_sign_negative());
}

#[test]
fn raised_infinity_names_the_input() {
    let selectors = Selectors::default().with_inf(Selector::Raise);
    let err = run(Action::InfFound, Input::Str("infinity"), Target::Real, &selectors).unwrap_err();
    assert!(matches!(err, ConvertError::Disallowed(_)));
    assert_eq!(message(&err), "cannot convert 'infinity': infinity is not allowed");
    assert_eq!(err.category(), ErrorCategory::Value);
}

#[test]
fn raised_nan() {
    let selectors = Selectors::default().with_nan(Selector::Raise);
    let err = run(Action::NanFound, Input::Str("NaN"), Target::Float, &selectors).unwrap_err();
    assert_eq!(message(&err), "cannot convert 'NaN': NaN is not allowed");
}

#[test]
fn disallowed_specials_follow_on_fail() {
    let selectors = Selectors::default().with_inf(Selector::Disallowed);
    let value = run(Action::InfFound, Input::Str("inf"), Target::Float, &selectors).unwrap();
    assert_eq!(value, Value::Input(Input::Str("inf")));

    let raising = Selectors::raising().with_nan(Selector::Disallowed);
    let err = run(Action::NanFound, Input::Str("nan"), Target::Float, &raising).unwrap_err();
    assert_eq!(message(&err), "could not convert string to float: 'nan'");
}

#[test]
fn substituted_specials() {
    let selectors = Selectors::default()
        .with_inf(Selector::Constant(Number::Int(0)))
        .with_nan(Selector::UseInput);
    assert_eq!(
        run(Action::NegInfFound, Input::Str("-inf"), Target::Real, &selectors).unwrap(),
        Value::Number(Number::Int(0))
    );
    assert!(run(Action::NanFound, Input::Float(f64::NAN), Target::Real, &selectors)
        .unwrap()
        .is_input());
}

// === Failures ===

#[test]
fn invalid_int_message() {
    let err = run(Action::InvalidInt, Input::Str("12x"), Target::Int, &Selectors::raising())
        .unwrap_err();
    assert!(matches!(err, ConvertError::InvalidSyntax(_)));
    assert_eq!(message(&err), "invalid literal for int() with base 10: '12x'");
}

#[test]
fn invalid_int_message_uses_base() {
    let err = resolve(
        Payload::Action(Action::InvalidInt),
        Input::Bytes(&b"zz"[..]),
        Target::Int,
        &Options::default().with_base(16),
        &Selectors::raising(),
    )
    .unwrap_err();
    assert_eq!(message(&err), "invalid literal for int() with base 16: b'zz'");
}

#[test]
fn invalid_float_message() {
    let err = run(Action::InvalidFloat, Input::Str("1.2.3"), Target::Float, &Selectors::raising())
        .unwrap_err();
    assert_eq!(message(&err), "could not convert string to float: '1.2.3'");
}

#[test]
fn native_special_floats_to_int() {
    let selectors = Selectors::raising();
    let err = run(Action::InfToInt, Input::Float(f64::INFINITY), Target::Int, &selectors)
        .unwrap_err();
    assert!(matches!(err, ConvertError::Overflow(_)));
    assert_eq!(err.category(), ErrorCategory::Overflow);
    assert_eq!(message(&err), "cannot convert float infinity to integer");

    let err = run(Action::NanToInt, Input::Float(f64::NAN), Target::Int, &selectors)
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Value);
    assert_eq!(message(&err), "cannot convert float NaN to integer");
}

#[test]
fn native_special_floats_to_int_substitute() {
    let selectors = Selectors::default().with_on_fail(Selector::Constant(Number::Int(0)));
    assert_eq!(
        run(Action::InfToInt, Input::Float(f64::INFINITY), Target::ForceInt, &selectors).unwrap(),
        Value::Number(Number::Int(0))
    );
}

#[test]
fn failures_substitute() {
    let input = Input::Str("bad");
    let defaults = Selectors::default();
    assert_eq!(
        run(Action::InvalidFloat, input, Target::Float, &defaults).unwrap(),
        Value::Input(input)
    );
    let constant = Selectors::default().with_on_fail(Selector::Constant(Number::Float(0.5)));
    assert_eq!(
        run(Action::InvalidInt, input, Target::Int, &constant).unwrap(),
        Value::Number(Number::Float(0.5))
    );
}

#[test]
fn allowed_on_fail_still_raises() {
    let selectors = Selectors::default().with_on_fail(Selector::Allowed);
    assert!(run(Action::InvalidFloat, Input::Str("x"), Target::Float, &selectors).is_err());
}

// === Type errors ===

#[test]
fn bad_type_messages() {
    let selectors = Selectors::default();
    let err = run(Action::BadTypeInt, Input::Other("list"), Target::Int, &selectors).unwrap_err();
    assert!(matches!(err, ConvertError::TypeMismatch(_)));
    assert_eq!(
        message(&err),
        "int() argument must be a string, a bytes-like object or a real number, not 'list'"
    );
    let err = run(Action::BadTypeFloat, Input::Other("dict"), Target::Float, &selectors)
        .unwrap_err();
    assert_eq!(
        message(&err),
        "float() argument must be a string or a real number, not 'dict'"
    );
}

#[test]
fn type_errors_substitute() {
    let selectors = Selectors::default().with_on_type_error(Selector::UseInput);
    let input = Input::Other("list");
    assert_eq!(
        run(Action::BadTypeFloat, input, Target::Real, &selectors).unwrap(),
        Value::Input(input)
    );
    assert_eq!(
        run(Action::IllegalExplicitBase, Input::Int(4), Target::Int, &selectors).unwrap(),
        Value::Input(Input::Int(4))
    );
}

#[test]
fn illegal_explicit_base_raises_type_error() {
    let err = run(Action::IllegalExplicitBase, Input::Int(4), Target::Int, &Selectors::default())
        .unwrap_err();
    assert!(matches!(err, ConvertError::IllegalExplicitBase));
    assert_eq!(err.category(), ErrorCategory::Type);
}

#[test]
fn invalid_base_ignores_selectors() {
    let selectors = Selectors::default()
        .with_on_fail(Selector::UseInput)
        .with_on_type_error(Selector::UseInput);
    let err = run(Action::InvalidBase, Input::Str("1"), Target::Int, &selectors).unwrap_err();
    assert!(matches!(err, ConvertError::InvalidBase));
}

// === Callbacks ===

#[test]
fn callback_receives_original_input() {
    let selectors = Selectors::default().with_on_fail(Selector::callback(|input| {
        Ok(Number::Int(i64::try_from(input.repr().len()).unwrap()))
    }));
    assert_eq!(
        run(Action::InvalidInt, Input::Str("abc"), Target::Int, &selectors).unwrap(),
        Value::Number(Number::Int(5))
    );
}

#[test]
fn callback_runs_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let selectors = Selectors::default().with_inf(Selector::callback(move |_| {
        counter.fetch_add(1, Ordering::Relaxed);
        Ok(Number::Float(1.0))
    }));
    run(Action::InfFound, Input::Str("inf"), Target::Float, &selectors).unwrap();
    assert_eq!(calls.load(Ordering::Relaxed), 1);
}

#[test]
fn callback_result_validated_for_integer_targets() {
    let integral = Selectors::default().with_on_fail(Selector::callback(|_| Ok(Number::Float(4.0))));
    assert_eq!(
        run(Action::InvalidInt, Input::Str("x"), Target::IntLike, &integral).unwrap(),
        Value::Number(Number::Int(4))
    );

    let fractional =
        Selectors::default().with_on_fail(Selector::callback(|_| Ok(Number::Float(4.5))));
    let err = run(Action::InvalidInt, Input::Str("x"), Target::Int, &fractional).unwrap_err();
    assert!(matches!(err, ConvertError::Callback(_)));
    assert_eq!(message(&err), "callback failed: callback returned 4.5, which is not an integer");
}

#[test]
fn callback_result_widened_for_float_target() {
    let selectors = Selectors::default().with_on_fail(Selector::callback(|_| Ok(Number::Int(2))));
    assert_eq!(
        run(Action::InvalidFloat, Input::Str("x"), Target::Float, &selectors).unwrap(),
        Value::Number(Number::Float(2.0))
    );
    assert_eq!(
        run(Action::InvalidFloat, Input::Str("x"), Target::Real, &selectors).unwrap(),
        Value::Number(Number::Int(2))
    );
}

#[test]
fn callback_failure_is_fatal() {
    let selectors = Selectors::default()
        .with_on_type_error(Selector::callback(|_| Err(CallbackError::type_error("nope"))));
    let err = run(Action::BadTypeInt, Input::Other("set"), Target::Int, &selectors).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Type);
    assert_eq!(message(&err), "callback failed: nope");
    let source = std::error::Error::source(&err).unwrap();
    assert_eq!(source.to_string(), "nope");
}
