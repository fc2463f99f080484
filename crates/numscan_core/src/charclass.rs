//! Character classification for numeric literals.
//!
//! All predicates look at single ASCII bytes. A non-ASCII byte is never a
//! digit, whitespace, sign, or prefix letter.

/// Returns `true` for `0`-`9`.
#[inline]
pub const fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Returns `true` for space and `\t` through `\r`.
#[inline]
pub const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t'..=b'\r')
}

/// Returns `true` for `+` and `-`.
#[inline]
pub const fn is_sign(b: u8) -> bool {
    matches!(b, b'+' | b'-')
}

/// Returns `true` when `b` is the prefix letter for `base`.
///
/// `x`/`X` belongs to 16, `o`/`O` to 8, `b`/`B` to 2. Base 0 (auto-detect)
/// accepts any of the three.
#[inline]
pub const fn is_base_prefix(b: u8, base: u32) -> bool {
    match b {
        b'x' | b'X' => base == 16 || base == 0,
        b'o' | b'O' => base == 8 || base == 0,
        b'b' | b'B' => base == 2 || base == 0,
        _ => false,
    }
}

/// Base named by a prefix letter, if `b` is one.
#[inline]
pub const fn prefix_base(b: u8) -> Option<u32> {
    match b {
        b'x' | b'X' => Some(16),
        b'o' | b'O' => Some(8),
        b'b' | b'B' => Some(2),
        _ => None,
    }
}

/// Value of `b` as a digit in `base`, or `None`.
///
/// Letters count from 10 in either case, so `z` is 35 and only valid in
/// base 36.
#[inline]
pub fn digit_value(b: u8, base: u32) -> Option<u32> {
    let value = match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'z' => b - b'a' + 10,
        b'A'..=b'Z' => b - b'A' + 10,
        _ => return None,
    };
    let value = u32::from(value);
    (value < base).then_some(value)
}

/// Returns `true` if `b` is a digit in `base`.
#[inline]
pub fn is_valid_digit(b: u8, base: u32) -> bool {
    digit_value(b, base).is_some()
}

/// Returns `true` for `0`-`9`, `a`-`f`, `A`-`F`.
#[inline]
pub const fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

/// Compare `b` against a lowercase ASCII letter, ignoring case.
#[inline]
const fn eq_folded(b: u8, lower: u8) -> bool {
    (b | 0x20) == lower
}

/// Quick check for `inf` or `infinity`, case-insensitive.
///
/// Loop-free: only lengths 3 and 8 can match, anything else is rejected
/// before a single byte is compared.
#[inline]
pub fn is_infinity(s: &[u8]) -> bool {
    match *s {
        [a, b, c] => eq_folded(a, b'i') && eq_folded(b, b'n') && eq_folded(c, b'f'),
        [a, b, c, d, e, f, g, h] => {
            eq_folded(a, b'i')
                && eq_folded(b, b'n')
                && eq_folded(c, b'f')
                && eq_folded(d, b'i')
                && eq_folded(e, b'n')
                && eq_folded(f, b'i')
                && eq_folded(g, b't')
                && eq_folded(h, b'y')
        }
        _ => false,
    }
}

/// Quick check for `nan`, case-insensitive.
#[inline]
pub fn is_nan(s: &[u8]) -> bool {
    match *s {
        [a, b, c] => eq_folded(a, b'n') && eq_folded(b, b'a') && eq_folded(c, b'n'),
        _ => false,
    }
}

/// Trim leading and trailing whitespace.
#[inline]
pub fn trim_whitespace(s: &[u8]) -> &[u8] {
    let start = s.iter().position(|&b| !is_whitespace(b)).unwrap_or(s.len());
    let end = s.iter().rposition(|&b| !is_whitespace(b)).map_or(start, |i| i + 1);
    &s[start..end]
}

/// Split off one leading sign, returning `(negative, rest)`.
#[inline]
pub fn split_sign(s: &[u8]) -> (bool, &[u8]) {
    match s {
        [b'-', rest @ ..] => (true, rest),
        [b'+', rest @ ..] => (false, rest),
        _ => (false, s),
    }
}
