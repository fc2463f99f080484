//! Byte-level numeric literal scanning.
//!
//! Everything in this crate operates on a bounded `&[u8]` range that the
//! caller has already stripped of surrounding whitespace and of its sign.
//! Nothing here allocates except [`ScratchBuffer`] once it outgrows its
//! inline capacity, and nothing here fails with an error: validators return
//! `bool`, scanners trust their input, heuristics say whether the scanners
//! can be trusted.
//!
//! # Layers
//!
//! ```text
//! charclass → separators/base → grammar → overflow → scan
//! ```
//!
//! - [`charclass`]: digit, whitespace, sign and prefix predicates
//! - [`separators`]: digit-group separator normalizer (`1_000` → `1000`)
//! - [`base`]: base inference from `0x`/`0o`/`0b` prefixes
//! - [`grammar`]: integer, float and int-like-float validators
//! - [`overflow`]: shape-only checks that decide if the fast scanners are safe
//! - [`scan`]: unchecked integer and float accumulation

pub mod base;
pub mod charclass;
pub mod grammar;
pub mod overflow;
pub mod scan;
mod scratch;
pub mod separators;

pub use base::{detect_base, strip_base_prefix};
pub use charclass::{is_infinity, is_nan, is_whitespace};
pub use grammar::{contains_float, contains_int, contains_int_like_float};
pub use overflow::{float_might_overflow, int_might_overflow};
pub use scan::{fast_scan_float, fast_scan_int};
pub use scratch::{ScratchBuffer, INLINE_CAPACITY};
pub use separators::{remove_separators, SeparatorMode, SEPARATOR};

/// Base value meaning "infer the base from the literal's prefix".
pub const AUTO_BASE: u32 = 0;

/// Base used when the caller does not ask for one.
pub const DEFAULT_BASE: u32 = 10;
