//! Numeric text classification and conversion.
//!
//! Takes a textual, single-glyph or native numeric input and turns it into an
//! integer or float, reproducing the accept/reject rules of the usual
//! numeric-literal grammar (decimal and based integers, floats, `inf`/`nan`
//! spellings, `_` digit separators).
//!
//! # Pipeline
//!
//! ```text
//! Input ──► Parser (Native | Glyph | Text) ──► evaluate ──► Payload ──► resolve ──► Value
//!              │                                               │
//!              └─ NumberFlags (lazy, cached)                   └─ Action + Selectors
//! ```
//!
//! - [`Parser`] classifies an input once and converts it on demand. Text goes
//!   through the byte-level scanners in `numscan_core`, falling back to
//!   arbitrary-width parsing only when an overflow heuristic trips.
//! - [`evaluate`] combines a parser with a [`Target`] into either a value or a
//!   pending [`Action`].
//! - [`resolve`] applies the caller's [`Selectors`] to an action: raise,
//!   substitute, pass the input through, or delegate to a callback.
//!
//! The convenience entry points in [`api`] run the whole pipeline.

pub mod api;
mod check;
mod element;
mod error;
mod evaluator;
mod fallback;
mod flags;
mod input;
mod number;
mod numerals;
mod options;
mod parser;
mod query;
mod resolver;
mod selector;
mod value;

// Re-export all public types
pub use api::{
    convert, try_float, try_forceint, try_int, try_intlike, try_real, Converter,
};
pub use check::{check, Allow, CheckKind, CheckOptions, Consider};
pub use element::{extract, Element};
pub use error::{CallbackError, CoerceError, ConvertError, ErrorCategory};
pub use evaluator::{evaluate, Action, Payload, Target};
pub use flags::NumberFlags;
pub use input::{CoerceNumber, Input};
pub use number::Number;
pub use numerals::{NumeralTable, UnicodeNumerals};
pub use options::Options;
pub use parser::{GlyphParser, NativeParser, Parser, TextParser};
pub use query::{query_type, NumberKind};
pub use resolver::resolve;
pub use selector::{Callback, ElementSelectors, Selector, Selectors};
pub use value::Value;

pub use numscan_core::ScratchBuffer;

// Size assertions to prevent accidental regressions.
// Flags and options are copied into every parser.
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{NumberFlags, Options};
    const _: () = assert!(std::mem::size_of::<NumberFlags>() == 2);
    // base (4) + five bools (5), padded to 12
    const _: () = assert!(std::mem::size_of::<Options>() == 12);
}
