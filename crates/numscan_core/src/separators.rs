//! Digit-group separator normalizer.
//!
//! Rewrites a literal such as `1_000_000` or `0x_dead_beef` into the
//! separator-free form the grammar validators expect. Only separators that
//! are legal in place are removed; anything else is left where it is so the
//! grammar check that follows rejects the literal.

use crate::charclass::{is_base_prefix, is_digit, is_hex_digit};

/// The digit-group separator byte.
pub const SEPARATOR: u8 = b'_';

/// How separator validity is judged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeparatorMode {
    /// Decimal text, shared by the integer and float grammars. A separator
    /// must sit between two decimal digits, so `1_e5` keeps its separator.
    Decimal,
    /// Integer text in the given base (0 for auto-detect). Neighbours are
    /// judged with hex-inclusive digit rules, and a separator directly after
    /// a recognised `0x`/`0o`/`0b` prefix is also legal.
    Based(u32),
}

/// Remove valid separators from `bytes` with a single left-compaction pass.
///
/// Returns the new logical length; bytes past it are garbage. Running it
/// again on its own output removes nothing.
pub fn remove_separators(bytes: &mut [u8], mode: SeparatorMode) -> usize {
    let len = bytes.len();
    let mut write = 0;
    for read in 0..len {
        let b = bytes[read];
        // Index `i` is only ever written at iteration `i` or later, so both
        // neighbours still hold their original bytes here.
        if b == SEPARATOR && read > 0 && read + 1 < len && is_removable(bytes, read, mode) {
            continue;
        }
        bytes[write] = b;
        write += 1;
    }
    write
}

/// Returns `true` if the separator at `at` may be removed.
///
/// Precondition: `0 < at < bytes.len() - 1`.
fn is_removable(bytes: &[u8], at: usize, mode: SeparatorMode) -> bool {
    let prev = bytes[at - 1];
    let next = bytes[at + 1];
    match mode {
        SeparatorMode::Decimal => is_digit(prev) && is_digit(next),
        SeparatorMode::Based(base) => {
            // `0_x1`: never between the zero and its prefix letter.
            if at == 1 && prev == b'0' && is_base_prefix(next, base) {
                return false;
            }
            // `0x_1`: directly after the prefix.
            if at == 2 && bytes[0] == b'0' && is_base_prefix(prev, base) {
                return is_hex_digit(next);
            }
            is_hex_digit(prev) && is_hex_digit(next)
        }
    }
}
