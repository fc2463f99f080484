//! Number classification flags.
//!
//! `NumberFlags` describe what an input *is*: which numeric kind it matched,
//! what special value it holds, and where it came from. A parser computes
//! them once and caches them; the evaluator and checks only ever read them.
//!
//! After classification exactly one of `INTEGER`, `FLOAT`, `INVALID` is set.
//! `INT_LIKE`, `INFINITY` and `NAN` each imply `FLOAT`.

use bitflags::bitflags;

bitflags! {
    /// Classification of one input.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct NumberFlags: u16 {
        // === Kind Flags (bits 0-7) ===
        // What the input matched.

        /// Matches the integer grammar, or is a native integer.
        const INTEGER = 1 << 0;
        /// Matches the float grammar, or is a native float.
        const FLOAT = 1 << 1;
        /// Matches nothing numeric.
        const INVALID = 1 << 2;
        /// A float whose value is finite and equal to its own floor.
        const INT_LIKE = 1 << 3;
        /// Positive or negative infinity.
        const INFINITY = 1 << 4;
        /// Not-a-number.
        const NAN = 1 << 5;

        // === Origin Flags (bits 8-11) ===
        // Which parser produced the classification.

        /// Parsed from a text buffer.
        const FROM_TEXT = 1 << 8;
        /// Resolved from a single numeral glyph.
        const FROM_GLYPH = 1 << 9;
        /// Read from a native numeric value.
        const FROM_NATIVE = 1 << 10;
        /// Native value obtained through a user-defined coercion.
        const USER_DEFINED = 1 << 11;

        // === Sentinel ===

        /// Classification has not run yet.
        const UNSET = 1 << 15;
    }
}

impl NumberFlags {
    /// The three mutually exclusive kind flags.
    pub const KIND_MASK: Self = Self::from_bits_truncate(
        Self::INTEGER.bits() | Self::FLOAT.bits() | Self::INVALID.bits(),
    );

    /// Flags that describe a special float value.
    pub const SPECIAL_MASK: Self =
        Self::from_bits_truncate(Self::INFINITY.bits() | Self::NAN.bits());

    /// Flags naming the origin of a classification.
    pub const ORIGIN_MASK: Self = Self::from_bits_truncate(
        Self::FROM_TEXT.bits()
            | Self::FROM_GLYPH.bits()
            | Self::FROM_NATIVE.bits()
            | Self::USER_DEFINED.bits(),
    );

    /// Float classification for a value, adding `INFINITY`, `NAN` or
    /// `INT_LIKE` as appropriate.
    pub fn for_float(value: f64) -> Self {
        if value.is_infinite() {
            Self::FLOAT | Self::INFINITY
        } else if value.is_nan() {
            Self::FLOAT | Self::NAN
        } else if value == value.floor() {
            Self::FLOAT | Self::INT_LIKE
        } else {
            Self::FLOAT
        }
    }

    /// Check if classification has run.
    #[inline]
    pub const fn is_set(self) -> bool {
        !self.contains(Self::UNSET)
    }

    /// Check if the input matched nothing numeric.
    #[inline]
    pub const fn is_invalid(self) -> bool {
        self.contains(Self::INVALID)
    }

    /// Check if the input is an integer.
    #[inline]
    pub const fn is_integer(self) -> bool {
        self.contains(Self::INTEGER)
    }

    /// Check if the input is a float of any sort.
    #[inline]
    pub const fn is_float(self) -> bool {
        self.contains(Self::FLOAT)
    }

    /// Check if the input is a float that converts to an integer losslessly.
    #[inline]
    pub const fn is_int_like(self) -> bool {
        self.contains(Self::INT_LIKE)
    }

    /// Check if the input is infinity or NaN.
    #[inline]
    pub const fn is_special(self) -> bool {
        self.intersects(Self::SPECIAL_MASK)
    }

    /// Check if the input came from a native numeric value.
    #[inline]
    pub const fn is_native(self) -> bool {
        self.contains(Self::FROM_NATIVE)
    }

    /// Kind flags only, with origin and modifiers stripped.
    #[inline]
    pub const fn kind(self) -> Self {
        self.intersection(Self::KIND_MASK)
    }
}
