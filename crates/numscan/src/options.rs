//! Conversion options.

use numscan_core::{AUTO_BASE, DEFAULT_BASE};

/// Per-call conversion options.
///
/// Immutable for the duration of one conversion. Build from
/// [`Options::default`] with the chained `with_*` methods:
///
/// ```
/// use numscan::Options;
///
/// let options = Options::default().with_base(16).with_allow_separators(true);
/// assert_eq!(options.base, 16);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Options {
    /// Integer base: 2 through 36, or 0 to infer it from the prefix.
    pub base: u32,
    /// Accept `_` digit-group separators.
    pub allow_separators: bool,
    /// Return an integer for floats that are exactly integral.
    pub coerce_int_like_float: bool,
    /// Recognise `nan` spellings in text.
    pub allow_nan: bool,
    /// Recognise `inf`/`infinity` spellings in text.
    pub allow_inf: bool,
    /// Accept single non-ASCII numeral glyphs.
    pub allow_glyph_numerals: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            allow_separators: false,
            coerce_int_like_float: false,
            allow_nan: true,
            allow_inf: true,
            allow_glyph_numerals: true,
        }
    }
}

impl Options {
    #[must_use]
    pub const fn with_base(mut self, base: u32) -> Self {
        self.base = base;
        self
    }

    #[must_use]
    pub const fn with_allow_separators(mut self, allow: bool) -> Self {
        self.allow_separators = allow;
        self
    }

    #[must_use]
    pub const fn with_coerce_int_like_float(mut self, coerce: bool) -> Self {
        self.coerce_int_like_float = coerce;
        self
    }

    #[must_use]
    pub const fn with_allow_nan(mut self, allow: bool) -> Self {
        self.allow_nan = allow;
        self
    }

    #[must_use]
    pub const fn with_allow_inf(mut self, allow: bool) -> Self {
        self.allow_inf = allow;
        self
    }

    #[must_use]
    pub const fn with_allow_glyph_numerals(mut self, allow: bool) -> Self {
        self.allow_glyph_numerals = allow;
        self
    }

    /// Same options with the base put back to 10.
    ///
    /// Float-producing targets ignore the base.
    #[must_use]
    pub const fn with_default_base(self) -> Self {
        self.with_base(DEFAULT_BASE)
    }

    /// The caller asked for something other than base 10.
    #[inline]
    pub const fn has_explicit_base(&self) -> bool {
        self.base != DEFAULT_BASE
    }

    /// Base is 0 or within 2..=36.
    #[inline]
    pub const fn base_is_valid(&self) -> bool {
        self.base == AUTO_BASE || (self.base >= 2 && self.base <= 36)
    }
}
