//! Grammar validators.
//!
//! Boolean-only checks that a bounded, unsigned range matches one of the
//! numeric literal shapes. None of them compute a value; the fast scanners
//! and the precise fallback do that once a validator has said yes.
//!
//! ```text
//! int        := digit+                      (base 10)
//!             | prefix? based_digit+        (other bases)
//! float      := digit* ('.' digit*)? (('e' | 'E') sign? digit+)?
//!               with at least one digit before the exponent
//! ```

use crate::base::{detect_base, strip_base_prefix};
use crate::charclass::{is_digit, is_sign, is_valid_digit};

/// Forward-only cursor over a literal.
struct Scan<'a> {
    bytes: &'a [u8],
    pos: usize,
}

/// Shape of one run of decimal digits.
#[derive(Clone, Copy, Debug, Default)]
struct DigitRun {
    len: usize,
    trailing_zeros: usize,
    all_zero: bool,
}

impl<'a> Scan<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.pos == self.bytes.len()
    }

    /// Consume `b` if it is next.
    #[inline]
    fn eat(&mut self, b: u8) -> bool {
        let hit = self.peek() == Some(b);
        self.pos += usize::from(hit);
        hit
    }

    /// Consume an exponent marker if it is next.
    #[inline]
    fn eat_exponent_marker(&mut self) -> bool {
        self.eat(b'e') || self.eat(b'E')
    }

    /// Consume an optional sign, returning `true` for `-`.
    #[inline]
    fn eat_sign(&mut self) -> bool {
        match self.peek() {
            Some(b) if is_sign(b) => {
                self.pos += 1;
                b == b'-'
            }
            _ => false,
        }
    }

    /// Consume decimal digits, returning how many were consumed.
    #[inline]
    fn eat_digits(&mut self) -> usize {
        let start = self.pos;
        while self.peek().is_some_and(is_digit) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Consume decimal digits, tracking trailing zeros.
    fn eat_digit_run(&mut self) -> DigitRun {
        let mut run = DigitRun {
            all_zero: true,
            ..DigitRun::default()
        };
        while let Some(b) = self.peek().filter(|&b| is_digit(b)) {
            run.len += 1;
            if b == b'0' {
                run.trailing_zeros += 1;
            } else {
                run.trailing_zeros = 0;
                run.all_zero = false;
            }
            self.pos += 1;
        }
        run
    }

    /// Consume exponent digits into a saturating magnitude.
    ///
    /// Returns `None` if there are no digits.
    fn eat_exponent_magnitude(&mut self) -> Option<u64> {
        let mut magnitude: u64 = 0;
        let mut count = 0;
        while let Some(b) = self.peek().filter(|&b| is_digit(b)) {
            magnitude = magnitude
                .saturating_mul(10)
                .saturating_add(u64::from(b - b'0'));
            count += 1;
            self.pos += 1;
        }
        (count > 0).then_some(magnitude)
    }
}

/// Returns `true` if the whole of `s` is an integer literal in `base`.
///
/// Base 10 accepts plain decimal digits only. Other bases accept an
/// optional matching `0x`/`0o`/`0b` prefix followed by digits valid in that
/// base. Base 0 infers the base first and rejects legacy-octal literals.
pub fn contains_int(s: &[u8], base: u32) -> bool {
    match base {
        10 => !s.is_empty() && s.iter().all(|&b| is_digit(b)),
        0 => match detect_base(s) {
            Some(10) => contains_int(s, 10),
            Some(detected) => contains_based_int(s, detected),
            None => false,
        },
        _ => contains_based_int(s, base),
    }
}

fn contains_based_int(s: &[u8], base: u32) -> bool {
    let digits = strip_base_prefix(s, base);
    !digits.is_empty() && digits.iter().all(|&b| is_valid_digit(b, base))
}

/// Returns `true` if the whole of `s` is a float literal.
///
/// Integer digits and fraction digits are each optional but at least one
/// must be present. An exponent marker must be followed by at least one
/// digit.
pub fn contains_float(s: &[u8]) -> bool {
    let mut scan = Scan::new(s);
    let mut digits = scan.eat_digits();
    if scan.eat(b'.') {
        digits += scan.eat_digits();
    }
    if digits == 0 {
        return false;
    }
    if scan.eat_exponent_marker() {
        scan.eat_sign();
        if scan.eat_digits() == 0 {
            return false;
        }
    }
    scan.at_end()
}

/// Returns `true` if `s` is a float literal whose value is an exact integer.
///
/// Decided from the literal's shape alone: a negative exponent may only
/// eat trailing zeros of the integer part and requires an all-zero
/// fraction; a non-negative exponent must be large enough to shift every
/// significant fraction digit into the integer part. A literal whose digits
/// are all zero is int-like whatever its exponent.
pub fn contains_int_like_float(s: &[u8]) -> bool {
    let mut scan = Scan::new(s);
    let int = scan.eat_digit_run();
    let frac = if scan.eat(b'.') {
        scan.eat_digit_run()
    } else {
        DigitRun {
            all_zero: true,
            ..DigitRun::default()
        }
    };
    if int.len == 0 && frac.len == 0 {
        return false;
    }

    let mut negative_exponent = false;
    let mut exponent: u64 = 0;
    if scan.eat_exponent_marker() {
        negative_exponent = scan.eat_sign();
        match scan.eat_exponent_magnitude() {
            Some(magnitude) => exponent = magnitude,
            None => return false,
        }
    }
    if !scan.at_end() {
        return false;
    }

    if int.all_zero && frac.all_zero {
        return true;
    }
    let significant_fraction = (frac.len - frac.trailing_zeros) as u64;
    if negative_exponent {
        significant_fraction == 0 && exponent <= int.trailing_zeros as u64
    } else {
        exponent >= significant_fraction
    }
}
