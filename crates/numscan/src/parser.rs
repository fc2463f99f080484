//! Parser variants.
//!
//! One closed sum type over the three input shapes, each answering the same
//! questions: what is this (`classify`), what sign does it carry, and what is
//! it as an integer or a float. Classification runs lazily on first request
//! and is cached in the parser for its lifetime.
//!
//! - [`NativeParser`]: the input is already a number, or can coerce itself
//!   into one.
//! - [`GlyphParser`]: the input is one non-ASCII character denoting a
//!   numeral, looked up in a [`NumeralTable`].
//! - [`TextParser`]: the input is a byte range run through the grammar
//!   validators and scanners.

mod glyph;
mod native;
mod text;

pub use glyph::GlyphParser;
pub use native::NativeParser;
pub use text::TextParser;

use numscan_core::ScratchBuffer;

use crate::error::CoerceError;
use crate::flags::NumberFlags;
use crate::input::Input;
use crate::number::Number;
use crate::numerals::NumeralTable;
use crate::options::Options;

/// Classifier and converter for one input.
#[derive(Debug)]
pub enum Parser<'a> {
    Native(NativeParser<'a>),
    Glyph(GlyphParser),
    Text(TextParser<'a>),
}

impl<'a> Parser<'a> {
    /// Pick the parser for `input`.
    ///
    /// Returns `None` for [`Input::Other`], which is not numeric in any
    /// sense. `scratch` is only written when separators need removing.
    pub fn new(
        input: Input<'a>,
        options: &Options,
        scratch: &'a mut ScratchBuffer,
        numerals: &dyn NumeralTable,
    ) -> Option<Self> {
        let parser = match input {
            Input::Int(_) | Input::BigInt(_) | Input::Float(_) | Input::Custom(_) => {
                Self::Native(NativeParser::new(input))
            }
            Input::Char(c) => match ascii_bytes(c) {
                Some(bytes) => Self::Text(TextParser::new(bytes, options, scratch)),
                None => Self::Glyph(GlyphParser::new(c, options, numerals)),
            },
            Input::Str(s) => match single_glyph(s) {
                Some(c) => Self::Glyph(GlyphParser::new(c, options, numerals)),
                None => Self::Text(TextParser::new(s.as_bytes(), options, scratch)),
            },
            Input::Bytes(bytes) => Self::Text(TextParser::new(bytes, options, scratch)),
            Input::Other(_) => return None,
        };
        Some(parser)
    }

    /// Classification flags, computed on first call.
    pub fn classify(&self) -> NumberFlags {
        match self {
            Self::Native(p) => p.classify(),
            Self::Glyph(p) => p.classify(),
            Self::Text(p) => p.classify(),
        }
    }

    /// The value carries a negative sign (including `-0.0` and `-nan`).
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Native(p) => p.is_negative(),
            Self::Glyph(_) => false,
            Self::Text(p) => p.is_negative(),
        }
    }

    /// Integer value, if the input classified as an integer.
    pub fn as_int(&self) -> Option<Number> {
        match self {
            Self::Native(p) => p.as_int(),
            Self::Glyph(p) => p.as_int(),
            Self::Text(p) => p.as_int(),
        }
    }

    /// Float value, if the input classified as any number.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Native(p) => p.as_float(),
            Self::Glyph(p) => p.as_float(),
            Self::Text(p) => p.as_float(),
        }
    }

    /// The native value, unchanged, for pass-through conversions.
    pub fn native_number(&self) -> Option<Number> {
        match self {
            Self::Native(p) => p.number(),
            Self::Glyph(_) | Self::Text(_) => None,
        }
    }

    /// Failure of a user-defined coercion, if one ran and failed.
    pub fn errored(&self) -> Option<&CoerceError> {
        match self {
            Self::Native(p) => p.errored(),
            Self::Glyph(_) | Self::Text(_) => None,
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Self::Native(_))
    }

    /// Text or glyph input, the only kinds an explicit base applies to.
    pub fn is_textual(&self) -> bool {
        !self.is_native()
    }
}

/// Every ASCII byte, so a `char` input can be viewed as a one-byte slice.
static ASCII: [u8; 128] = {
    let mut table = [0u8; 128];
    let mut i = 0;
    while i < table.len() {
        #[allow(clippy::cast_possible_truncation, reason = "i < 128")]
        {
            table[i] = i as u8;
        }
        i += 1;
    }
    table
};

fn ascii_bytes(c: char) -> Option<&'static [u8]> {
    let i = usize::try_from(u32::from(c)).ok()?;
    ASCII.get(i..=i)
}

/// The only character of `s`, if it is a single non-ASCII character.
fn single_glyph(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_ascii() => Some(c),
        _ => None,
    }
}
