//! Overflow heuristics.
//!
//! Shape-only tests deciding whether [`fast_scan_int`](crate::fast_scan_int)
//! and [`fast_scan_float`](crate::fast_scan_float) can be trusted on a
//! literal. They look at lengths and the exponent, never at digit values, so
//! they are conservative: `true` means "maybe", and the caller goes to the
//! precise path.

use memchr::memchr;

/// Decimal digits that always fit a signed machine-width integer.
#[cfg(target_pointer_width = "64")]
pub const INT_SAFE_DIGITS: usize = 18;

/// Decimal digits that always fit a signed machine-width integer.
#[cfg(not(target_pointer_width = "64"))]
pub const INT_SAFE_DIGITS: usize = 9;

/// Significant digits an `f64` mantissa holds exactly.
pub const FLOAT_SAFE_DIGITS: usize = 15;

/// Largest literal exponent magnitude the fast float scanner accepts.
pub const FLOAT_SAFE_EXPONENT: u64 = 95;

/// Returns `true` if an unsigned decimal digit run may not fit the fast
/// integer accumulator.
#[inline]
pub fn int_might_overflow(s: &[u8]) -> bool {
    s.len() > INT_SAFE_DIGITS
}

/// Returns `true` if a float literal may lose precision or range on the fast
/// path.
///
/// Trips when the mantissa (everything before the exponent marker, minus the
/// decimal point) has more than [`FLOAT_SAFE_DIGITS`] digits, or when the
/// exponent magnitude exceeds [`FLOAT_SAFE_EXPONENT`].
pub fn float_might_overflow(s: &[u8]) -> bool {
    let marker = s.iter().rposition(|&b| b == b'e' || b == b'E');
    let mantissa = marker.map_or(s, |pos| &s[..pos]);
    let digits = mantissa.len() - usize::from(memchr(b'.', mantissa).is_some());
    if digits > FLOAT_SAFE_DIGITS {
        return true;
    }
    match marker {
        Some(pos) => exponent_magnitude(&s[pos + 1..]) > FLOAT_SAFE_EXPONENT,
        None => false,
    }
}

/// Saturating magnitude of a signed exponent's digits.
fn exponent_magnitude(exp: &[u8]) -> u64 {
    let digits = match exp {
        [b'+' | b'-', rest @ ..] => rest,
        _ => exp,
    };
    digits
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .fold(0u64, |acc, &b| {
            acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
        })
}
