//! Parser for a single Unicode numeral character.

use std::cell::Cell;

use numscan_core::{AUTO_BASE, DEFAULT_BASE};

use crate::flags::NumberFlags;
use crate::number::Number;
use crate::numerals::NumeralTable;
use crate::options::Options;

/// Parser for a single numeral glyph such as `٣`, `²` or `½`.
///
/// Values are looked up once at construction. A glyph never carries a sign
/// and never denotes infinity or NaN.
#[derive(Debug)]
pub struct GlyphParser {
    glyph: char,
    digit: Option<u32>,
    numeric: Option<f64>,
    base: u32,
    enabled: bool,
    flags: Cell<NumberFlags>,
}

impl GlyphParser {
    pub fn new(glyph: char, options: &Options, numerals: &dyn NumeralTable) -> Self {
        Self {
            glyph,
            digit: numerals.digit(glyph),
            numeric: numerals.numeric(glyph),
            base: options.base,
            enabled: options.allow_glyph_numerals,
            flags: Cell::new(NumberFlags::UNSET),
        }
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    /// Integer value of the glyph's digit, if it is a digit in the base.
    fn digit_in_base(&self) -> Option<u32> {
        let limit = if self.base == AUTO_BASE {
            DEFAULT_BASE
        } else {
            self.base
        };
        self.digit.filter(|&d| d < limit)
    }

    pub fn classify(&self) -> NumberFlags {
        let cached = self.flags.get();
        if cached.is_set() {
            return cached;
        }
        let kind = if !self.enabled {
            NumberFlags::INVALID
        } else if self.digit_in_base().is_some() {
            NumberFlags::INTEGER
        } else if let Some(value) = self.numeric {
            NumberFlags::for_float(value)
        } else {
            NumberFlags::INVALID
        };
        let flags = kind | NumberFlags::FROM_GLYPH;
        self.flags.set(flags);
        flags
    }

    pub fn as_int(&self) -> Option<Number> {
        if !self.classify().is_integer() {
            return None;
        }
        self.digit_in_base().map(|d| Number::Int(i64::from(d)))
    }

    pub fn as_float(&self) -> Option<f64> {
        if self.classify().is_invalid() {
            return None;
        }
        self.numeric
    }
}
