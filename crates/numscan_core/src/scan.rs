//! Fast scanners.
//!
//! Unchecked accumulation over literals that a grammar validator has already
//! accepted and an overflow heuristic has already cleared. Feeding them
//! anything else does not panic but produces a meaningless value.

/// Exact-as-possible powers of ten, `POW10[i] == 10^i`.
///
/// Indices past 22 are not exactly representable and carry the usual
/// half-ULP rounding of the literal.
const POW10: [f64; 111] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7,
    1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15,
    1e16, 1e17, 1e18, 1e19, 1e20, 1e21, 1e22, 1e23,
    1e24, 1e25, 1e26, 1e27, 1e28, 1e29, 1e30, 1e31,
    1e32, 1e33, 1e34, 1e35, 1e36, 1e37, 1e38, 1e39,
    1e40, 1e41, 1e42, 1e43, 1e44, 1e45, 1e46, 1e47,
    1e48, 1e49, 1e50, 1e51, 1e52, 1e53, 1e54, 1e55,
    1e56, 1e57, 1e58, 1e59, 1e60, 1e61, 1e62, 1e63,
    1e64, 1e65, 1e66, 1e67, 1e68, 1e69, 1e70, 1e71,
    1e72, 1e73, 1e74, 1e75, 1e76, 1e77, 1e78, 1e79,
    1e80, 1e81, 1e82, 1e83, 1e84, 1e85, 1e86, 1e87,
    1e88, 1e89, 1e90, 1e91, 1e92, 1e93, 1e94, 1e95,
    1e96, 1e97, 1e98, 1e99, 1e100, 1e101, 1e102, 1e103,
    1e104, 1e105, 1e106, 1e107, 1e108, 1e109, 1e110,
];

/// Largest power of ten in [`POW10`].
const MAX_POW10: usize = POW10.len() - 1;

/// Accumulate an unsigned decimal digit run.
///
/// Wraps silently on overflow; callers gate on
/// [`int_might_overflow`](crate::int_might_overflow) first.
#[inline]
pub fn fast_scan_int(s: &[u8]) -> i64 {
    s.iter().fold(0i64, |acc, &b| {
        acc.wrapping_mul(10).wrapping_add(i64::from(b.wrapping_sub(b'0')))
    })
}

/// Accumulate an unsigned float literal.
///
/// Digits on both sides of the decimal point go into one `u64` mantissa,
/// the exponent is adjusted by the fraction length, and the result is a
/// single multiply or divide by a table power of ten. Effective exponents
/// beyond the table clamp to its largest entry.
pub fn fast_scan_float(s: &[u8]) -> f64 {
    let mut mantissa: u64 = 0;
    let mut frac_len: i64 = 0;
    let mut in_fraction = false;
    let mut rest = s;

    while let [b, tail @ ..] = rest {
        match *b {
            b'0'..=b'9' => {
                mantissa = mantissa
                    .wrapping_mul(10)
                    .wrapping_add(u64::from(b - b'0'));
                frac_len += i64::from(in_fraction);
            }
            b'.' => in_fraction = true,
            _ => break,
        }
        rest = tail;
    }

    let exponent = match rest {
        [b'e' | b'E', exp @ ..] => scan_exponent(exp),
        _ => 0,
    };

    #[allow(
        clippy::cast_precision_loss,
        reason = "mantissa is bounded to 15 digits by float_might_overflow"
    )]
    let mantissa = mantissa as f64;
    let effective = exponent.saturating_sub(frac_len);
    let power = POW10[usize::try_from(effective.unsigned_abs())
        .unwrap_or(MAX_POW10)
        .min(MAX_POW10)];
    if effective < 0 {
        mantissa / power
    } else {
        mantissa * power
    }
}

/// Signed exponent digits, saturating.
fn scan_exponent(exp: &[u8]) -> i64 {
    let (negative, digits) = match exp {
        [b'-', rest @ ..] => (true, rest),
        [b'+', rest @ ..] => (false, rest),
        _ => (false, exp),
    };
    let magnitude = digits
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .fold(0i64, |acc, &b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });
    if negative {
        -magnitude
    } else {
        magnitude
    }
}
