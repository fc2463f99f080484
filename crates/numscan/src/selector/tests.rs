#![allow(clippy::unwrap_used, reason = "tests panic on unexpected state")]

use super::*;

#[test]
fn defaults() {
    let selectors = Selectors::default();
    assert!(matches!(selectors.inf, Selector::Allowed));
    assert!(matches!(selectors.nan, Selector::Allowed));
    assert!(matches!(selectors.on_fail, Selector::UseInput));
    assert!(matches!(selectors.on_type_error, Selector::Raise));

    let raising = Selectors::raising();
    assert!(matches!(raising.inf, Selector::Allowed));
    assert!(matches!(raising.nan, Selector::Allowed));
    assert!(matches!(raising.on_fail, Selector::Raise));
    assert!(matches!(raising.on_type_error, Selector::Raise));

    let element = ElementSelectors::default();
    assert!(matches!(element.selectors.on_fail, Selector::Raise));
    assert!(matches!(element.on_overflow, Selector::Raise));
}

#[test]
fn builders_replace_one_field() {
    let selectors = Selectors::default()
        .with_nan(Selector::Disallowed)
        .with_on_type_error(Number::Int(0).into());
    assert!(matches!(selectors.inf, Selector::Allowed));
    assert!(matches!(selectors.nan, Selector::Disallowed));
    assert!(matches!(
        selectors.on_type_error,
        Selector::Constant(Number::Int(0))
    ));
}

#[test]
fn substitutes() {
    assert!(!Selector::Allowed.substitutes());
    assert!(!Selector::Raise.substitutes());
    assert!(Selector::UseInput.substitutes());
    assert!(Selector::Constant(Number::Float(1.0)).substitutes());
    assert!(Selector::callback(|_| Ok(Number::Int(1))).substitutes());
}

#[test]
fn debug_hides_callbacks() {
    let callback = Selector::callback(|_| Ok(Number::Int(1)));
    assert_eq!(format!("{callback:?}"), "Callback(..)");
    assert_eq!(
        format!("{:?}", Selector::Constant(Number::Int(2))),
        "Constant(Int(2))"
    );
}

#[test]
fn clones_share_callbacks() {
    let selector = Selector::callback(|input| {
        Err(CallbackError::new(format!("rejected {}", input.repr())))
    });
    let Selector::Callback(original) = &selector else {
        panic!("expected a callback");
    };
    let Selector::Callback(copy) = selector.clone() else {
        panic!("expected a callback");
    };
    assert!(Arc::ptr_eq(original, &copy));
    let err = copy(&Input::Str("x")).unwrap_err();
    assert_eq!(err.message(), "rejected 'x'");
}
