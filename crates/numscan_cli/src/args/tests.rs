#![allow(clippy::unwrap_used, reason = "tests panic on unexpected state")]

use super::*;
use pretty_assertions::assert_eq;

fn parse(args: &[&str]) -> Result<CliArgs, String> {
    let owned: Vec<String> = args.iter().map(ToString::to_string).collect();
    parse_args(&owned)
}

#[test]
fn defaults() {
    let cli = parse(&["12"]).unwrap();
    assert_eq!(cli.target, Target::Real);
    assert_eq!(cli.mode, Mode::Convert);
    assert_eq!(cli.on_fail, OnFail::Raise);
    assert_eq!(cli.values, vec!["12".to_string()]);
    assert_eq!(cli.options(), Options::default());
}

#[test]
fn flag_value_forms() {
    let spaced = parse(&["--target", "int", "--base", "16", "ff"]).unwrap();
    let inline = parse(&["--target=int", "--base=16", "ff"]).unwrap();
    assert_eq!(spaced, inline);
    assert_eq!(spaced.target, Target::Int);
    assert_eq!(spaced.options().base, 16);
}

#[test]
fn switches() {
    let cli = parse(&["--separators", "--coerce", "--no-inf", "--no-nan", "--check"]).unwrap();
    let options = cli.options();
    assert!(options.allow_separators);
    assert!(options.coerce_int_like_float);
    assert!(!options.allow_inf);
    assert!(!options.allow_nan);
    assert_eq!(cli.mode, Mode::Check);
    assert_eq!(cli.check_options().inf, Allow::Disallowed);
    assert!(cli.values.is_empty());
}

#[test]
fn on_fail_policies() {
    assert_eq!(parse(&["--on-fail", "input"]).unwrap().on_fail, OnFail::Input);
    assert_eq!(
        parse(&["--on-fail=-1"]).unwrap().on_fail,
        OnFail::Constant(Number::Int(-1))
    );
    assert_eq!(
        parse(&["--on-fail", "0.5"]).unwrap().on_fail,
        OnFail::Constant(Number::Float(0.5))
    );
    assert!(matches!(
        parse(&["--on-fail", "input"]).unwrap().selectors().on_fail,
        Selector::UseInput
    ));
    assert!(parse(&["--on-fail", "sometimes"]).is_err());
}

#[test]
fn negative_numbers_are_values() {
    let cli = parse(&["-5", "-1e3"]).unwrap();
    assert_eq!(cli.values, vec!["-5".to_string(), "-1e3".to_string()]);
}

#[test]
fn double_dash_ends_options() {
    let cli = parse(&["--query", "--", "--check"]).unwrap();
    assert_eq!(cli.mode, Mode::Query);
    assert_eq!(cli.values, vec!["--check".to_string()]);
}

#[test]
fn errors() {
    assert_eq!(parse(&["--target"]).unwrap_err(), "--target needs a value");
    assert!(parse(&["--target=complex"]).unwrap_err().contains("unknown target"));
    assert_eq!(parse(&["--base", "sixteen"]).unwrap_err(), "invalid base 'sixteen'");
    assert_eq!(parse(&["--verbose"]).unwrap_err(), "unknown option '--verbose'");
}

#[test]
fn check_kind_for_forceint() {
    let cli = parse(&["--target=forceint"]).unwrap();
    assert_eq!(cli.check_kind(), CheckKind::IntLike);
}
