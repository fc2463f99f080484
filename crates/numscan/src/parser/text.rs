//! Parser for numeric text and byte strings.

use std::cell::Cell;

use memchr::memchr;
use numscan_core::charclass::{split_sign, trim_whitespace};
use numscan_core::{
    contains_float, contains_int, contains_int_like_float, fast_scan_float, fast_scan_int,
    float_might_overflow, int_might_overflow, is_infinity, is_nan, ScratchBuffer, SeparatorMode,
    DEFAULT_BASE, SEPARATOR,
};

use crate::fallback;
use crate::flags::NumberFlags;
use crate::number::Number;
use crate::options::Options;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Special {
    Infinity,
    Nan,
}

/// Parser for a textual literal.
///
/// Construction trims whitespace, splits off one sign, spots `inf`/`nan`
/// spellings and removes digit separators into the scratch buffer when
/// enabled. What is left, the body, is what the grammar validators see.
#[derive(Debug)]
pub struct TextParser<'a> {
    body: &'a [u8],
    negative: bool,
    special: Option<Special>,
    base: u32,
    flags: Cell<NumberFlags>,
}

impl<'a> TextParser<'a> {
    pub fn new(text: &'a [u8], options: &Options, scratch: &'a mut ScratchBuffer) -> Self {
        let (negative, unsigned) = split_sign(trim_whitespace(text));

        let special = if options.allow_inf && is_infinity(unsigned) {
            Some(Special::Infinity)
        } else if options.allow_nan && is_nan(unsigned) {
            Some(Special::Nan)
        } else {
            None
        };

        let body = if special.is_none()
            && options.allow_separators
            && memchr(SEPARATOR, unsigned).is_some()
        {
            let mode = if options.base == DEFAULT_BASE {
                SeparatorMode::Decimal
            } else {
                SeparatorMode::Based(options.base)
            };
            scratch.load(unsigned);
            scratch.remove_separators(mode);
            let scratch: &'a ScratchBuffer = scratch;
            scratch.as_bytes()
        } else {
            unsigned
        };

        Self {
            body,
            negative,
            special,
            base: options.base,
            flags: Cell::new(NumberFlags::UNSET),
        }
    }

    /// The literal after trimming, sign removal and separator removal.
    pub fn body(&self) -> &'a [u8] {
        self.body
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn classify(&self) -> NumberFlags {
        let cached = self.flags.get();
        if cached.is_set() {
            return cached;
        }
        let kind = match self.special {
            Some(Special::Infinity) => NumberFlags::FLOAT | NumberFlags::INFINITY,
            Some(Special::Nan) => NumberFlags::FLOAT | NumberFlags::NAN,
            None if contains_int(self.body, self.base) => NumberFlags::INTEGER,
            None if self.base == DEFAULT_BASE && contains_float(self.body) => {
                if self.is_int_like() {
                    NumberFlags::FLOAT | NumberFlags::INT_LIKE
                } else {
                    NumberFlags::FLOAT
                }
            }
            None => NumberFlags::INVALID,
        };
        let flags = kind | NumberFlags::FROM_TEXT;
        self.flags.set(flags);
        flags
    }

    /// Shape says integral; a literal that might overflow must also parse
    /// to a finite value.
    fn is_int_like(&self) -> bool {
        contains_int_like_float(self.body)
            && (!float_might_overflow(self.body)
                || fallback::parse_float(self.body).is_some_and(f64::is_finite))
    }

    pub fn as_int(&self) -> Option<Number> {
        if !self.classify().is_integer() {
            return None;
        }
        let magnitude = if self.base == DEFAULT_BASE && !int_might_overflow(self.body) {
            Number::Int(fast_scan_int(self.body))
        } else {
            Number::from_bigint(fallback::parse_int(self.body, self.base)?)
        };
        Some(if self.negative {
            magnitude.negate()
        } else {
            magnitude
        })
    }

    pub fn as_float(&self) -> Option<f64> {
        let flags = self.classify();
        let magnitude = if flags.contains(NumberFlags::INFINITY) {
            f64::INFINITY
        } else if flags.contains(NumberFlags::NAN) {
            f64::NAN
        } else if flags.is_integer() && self.base != DEFAULT_BASE {
            return self.as_int().map(|number| number.to_f64());
        } else if flags.is_integer() || flags.is_float() {
            if float_might_overflow(self.body) {
                fallback::parse_float(self.body)?
            } else {
                fast_scan_float(self.body)
            }
        } else {
            return None;
        };
        Some(if self.negative {
            -magnitude
        } else {
            magnitude
        })
    }
}
