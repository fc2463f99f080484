use super::*;
use pretty_assertions::assert_eq;

#[test]
fn no_leading_zero_is_decimal() {
    assert_eq!(detect_base(b"123"), Some(10));
    assert_eq!(detect_base(b"9"), Some(10));
    assert_eq!(detect_base(b"x12"), Some(10));
    assert_eq!(detect_base(b""), Some(10));
}

#[test]
fn lone_zero_is_decimal() {
    assert_eq!(detect_base(b"0"), Some(10));
}

#[test]
fn prefixes() {
    assert_eq!(detect_base(b"0x1f"), Some(16));
    assert_eq!(detect_base(b"0X1F"), Some(16));
    assert_eq!(detect_base(b"0o17"), Some(8));
    assert_eq!(detect_base(b"0O17"), Some(8));
    assert_eq!(detect_base(b"0b101"), Some(2));
    assert_eq!(detect_base(b"0B101"), Some(2));
    // The prefix alone still names a base; the digit check rejects it later.
    assert_eq!(detect_base(b"0x"), Some(16));
}

#[test]
fn runs_of_zeros_are_decimal() {
    assert_eq!(detect_base(b"00"), Some(10));
    assert_eq!(detect_base(b"0000"), Some(10));
}

#[test]
fn legacy_octal_is_rejected() {
    assert_eq!(detect_base(b"017"), None);
    assert_eq!(detect_base(b"00001"), None);
    assert_eq!(detect_base(b"0.5"), None);
    assert_eq!(detect_base(b"0d1"), None);
}

#[test]
fn strip_matching_prefix() {
    assert_eq!(strip_base_prefix(b"0x1f", 16), b"1f");
    assert_eq!(strip_base_prefix(b"0o17", 8), b"17");
    assert_eq!(strip_base_prefix(b"0b1", 2), b"1");
    assert_eq!(strip_base_prefix(b"0B1", 0), b"1");
}

#[test]
fn strip_leaves_other_prefixes() {
    assert_eq!(strip_base_prefix(b"0b1", 16), b"0b1");
    assert_eq!(strip_base_prefix(b"0x1", 8), b"0x1");
    assert_eq!(strip_base_prefix(b"0x1", 10), b"0x1");
    assert_eq!(strip_base_prefix(b"1f", 16), b"1f");
    assert_eq!(strip_base_prefix(b"0", 16), b"0");
}
