//! Precise fallback parsing.
//!
//! Used only when an overflow heuristic says the fast scanners might lose
//! precision or wrap. Arbitrary-width integers come from `num-bigint`;
//! floats from the standard library's correctly rounded parser. Both consume
//! the whole literal or fail.

use num_bigint::BigInt;
use numscan_core::{detect_base, strip_base_prefix};
use tracing::trace;

/// Parse an unsigned integer literal in `base` (0 to infer it).
///
/// Accepts the same optional `0x`/`0o`/`0b` prefix as the grammar. The
/// literal must already have passed `contains_int`.
pub(crate) fn parse_int(literal: &[u8], base: u32) -> Option<BigInt> {
    let base = if base == 0 {
        detect_base(literal)?
    } else {
        base
    };
    let digits = strip_base_prefix(literal, base);
    trace!(len = digits.len(), base, "precise integer parse");
    BigInt::parse_bytes(digits, base)
}

/// Parse an unsigned float literal.
///
/// The literal must already have passed `contains_float`. Values beyond
/// `f64` range come back as infinity.
pub(crate) fn parse_float(literal: &[u8]) -> Option<f64> {
    trace!(len = literal.len(), "precise float parse");
    std::str::from_utf8(literal).ok()?.parse().ok()
}
