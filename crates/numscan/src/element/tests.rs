#![allow(clippy::unwrap_used, reason = "tests panic on unexpected state")]

use super::*;
use crate::error::{CallbackError, ErrorCategory};
use num_bigint::BigInt;
use pretty_assertions::assert_eq;

fn get<E: Element>(text: &str) -> Result<E, ConvertError> {
    extract::<E>(Input::Str(text), &Options::default(), &ElementSelectors::default())
}

// === Integers ===

#[test]
fn integers_in_range() {
    assert_eq!(get::<i8>("-128").unwrap(), i8::MIN);
    assert_eq!(get::<u8>("255").unwrap(), u8::MAX);
    assert_eq!(get::<i64>("9223372036854775807").unwrap(), i64::MAX);
    assert_eq!(get::<u64>("18446744073709551615").unwrap(), u64::MAX);
    assert_eq!(get::<u32>(" 7 ").unwrap(), 7);
}

#[test]
fn integers_out_of_range_raise_overflow() {
    let err = get::<i8>("128").unwrap_err();
    assert!(matches!(err, ConvertError::Overflow(_)));
    assert_eq!(err.category(), ErrorCategory::Overflow);
    assert_eq!(err.to_string(), "128 is out of range for i8");

    assert!(matches!(get::<u16>("-1"), Err(ConvertError::Overflow(_))));
    assert!(matches!(
        get::<u64>("18446744073709551616"),
        Err(ConvertError::Overflow(_))
    ));
}

#[test]
fn integer_elements_use_int_grammar() {
    assert!(matches!(get::<i32>("1.0"), Err(ConvertError::InvalidSyntax(_))));
    let hex = Options::default().with_base(16);
    let value: u8 = extract(Input::Str("ff"), &hex, &ElementSelectors::default()).unwrap();
    assert_eq!(value, 255);
}

#[test]
fn native_floats_truncate_into_integers() {
    let value: i16 = extract(Input::Float(-3.9), &Options::default(), &ElementSelectors::default())
        .unwrap();
    assert_eq!(value, -3);
}

#[test]
fn bigint_input() {
    let big = BigInt::from(1u8) << 70;
    let err = extract::<i64>(Input::BigInt(&big), &Options::default(), &ElementSelectors::default())
        .unwrap_err();
    assert!(matches!(err, ConvertError::Overflow(_)));
}

// === Floats ===

#[test]
fn floats() {
    assert_eq!(get::<f64>("1.5").unwrap(), 1.5);
    assert_eq!(get::<f32>("-0.25").unwrap(), -0.25);
    assert_eq!(get::<f64>("12").unwrap(), 12.0);
    assert!(get::<f64>("inf").unwrap().is_infinite());
    assert!(get::<f32>("nan").unwrap().is_nan());
}

#[test]
fn f32_overflow() {
    assert!(matches!(get::<f32>("1e39"), Err(ConvertError::Overflow(_))));
    assert_eq!(get::<f64>("1e39").unwrap(), 1e39);
}

#[test]
fn huge_integer_does_not_fit_f64() {
    let big = Number::BigInt(BigInt::from(1u8) << 1100);
    assert_eq!(f64::from_number(&big), None);
    assert_eq!(f32::from_number(&big), None);
    assert_eq!(f64::from_number(&Number::Float(f64::INFINITY)), Some(f64::INFINITY));
}

// === Selectors ===

#[test]
fn on_overflow_constant() {
    let selectors = ElementSelectors::default().with_on_overflow(Selector::Constant(Number::Int(-1)));
    let value: i8 = extract(Input::Str("1000"), &Options::default(), &selectors).unwrap();
    assert_eq!(value, -1);
}

#[test]
fn on_overflow_substitute_must_fit() {
    let selectors =
        ElementSelectors::default().with_on_overflow(Selector::Constant(Number::Int(1000)));
    let err = extract::<i8>(Input::Str("1000"), &Options::default(), &selectors).unwrap_err();
    assert!(matches!(err, ConvertError::Overflow(_)));
}

#[test]
fn on_overflow_callback() {
    let selectors = ElementSelectors::default().with_on_overflow(Selector::callback(|input| {
        if input.repr().starts_with("'-") {
            Ok(Number::Int(0))
        } else {
            Ok(Number::Int(255))
        }
    }));
    let options = Options::default();
    assert_eq!(extract::<u8>(Input::Str("-5"), &options, &selectors).unwrap(), 0);
    assert_eq!(extract::<u8>(Input::Str("300"), &options, &selectors).unwrap(), 255);

    let failing = ElementSelectors::default()
        .with_on_overflow(Selector::callback(|_| Err(CallbackError::new("no"))));
    assert!(matches!(
        extract::<u8>(Input::Str("300"), &options, &failing),
        Err(ConvertError::Callback(_))
    ));
}

#[test]
fn on_fail_substitutes_elements() {
    let selectors = ElementSelectors::default()
        .with_selectors(Selectors::raising().with_on_fail(Selector::Constant(Number::Float(2.0))));
    let value: u32 = extract(Input::Str("x"), &Options::default(), &selectors).unwrap();
    assert_eq!(value, 2);
}

#[test]
fn use_input_raises_for_elements() {
    let selectors = ElementSelectors::default().with_selectors(Selectors::default());
    let err = extract::<f64>(Input::Str("x"), &Options::default(), &selectors).unwrap_err();
    assert_eq!(err.to_string(), "could not convert string to float: 'x'");

    let type_input = ElementSelectors::default()
        .with_selectors(Selectors::default().with_on_type_error(Selector::UseInput));
    let err = extract::<i32>(Input::Other("list"), &Options::default(), &type_input).unwrap_err();
    assert!(matches!(err, ConvertError::TypeMismatch(_)));
}
