//! Base inference for integer literals.
//!
//! Used when the caller asks for auto-detection (base 0). The rules follow
//! the reference grammar: a leading `0x`/`0o`/`0b` names the base, a plain
//! run of zeros is decimal zero, and any other leading zero is a
//! legacy-octal-looking literal that is rejected outright.

use crate::charclass::is_base_prefix;

/// Infer the base of an unsigned integer literal.
///
/// Returns `None` for legacy-octal-style literals such as `017`.
pub fn detect_base(s: &[u8]) -> Option<u32> {
    match s {
        [b'0', second, ..] => match *second {
            b'x' | b'X' => Some(16),
            b'o' | b'O' => Some(8),
            b'b' | b'B' => Some(2),
            _ => s[1..].iter().all(|&b| b == b'0').then_some(10),
        },
        _ => Some(10),
    }
}

/// Strip a `0x`/`0o`/`0b` prefix that matches `base`.
///
/// Anything else, including a prefix for a different base, is returned
/// unchanged.
#[inline]
pub fn strip_base_prefix(s: &[u8], base: u32) -> &[u8] {
    match s {
        [b'0', letter, rest @ ..] if base != 10 && is_base_prefix(*letter, base) => rest,
        _ => s,
    }
}

#[cfg(test)]
mod tests;
