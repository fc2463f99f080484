//! Non-converting checks.
//!
//! [`check`] answers "would this convert?" without producing a value or an
//! error. It runs the same parsers as conversion but only reads their
//! classification flags.

use numscan_core::{ScratchBuffer, DEFAULT_BASE};

use crate::flags::NumberFlags;
use crate::input::Input;
use crate::numerals::UnicodeNumerals;
use crate::options::Options;
use crate::parser::Parser;

/// What to check for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CheckKind {
    /// Any integer or float.
    Real,
    /// A float. Int-shaped text counts unless the check is strict.
    Float,
    /// An integer, honouring the check's base for text.
    Int,
    /// An integer, or a float that is exactly integral.
    IntLike,
}

/// Where infinity or NaN is accepted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Allow {
    Allowed,
    Disallowed,
    /// Only spelled out in text.
    TextOnly,
    /// Only as a native float value.
    #[default]
    NumberOnly,
}

impl Allow {
    fn text(self) -> bool {
        matches!(self, Self::Allowed | Self::TextOnly)
    }

    fn native(self) -> bool {
        matches!(self, Self::Allowed | Self::NumberOnly)
    }
}

/// Which inputs may pass at all.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Consider {
    #[default]
    Both,
    /// Text and glyphs only; native numbers always fail.
    TextOnly,
    /// Native numbers only; text always fails.
    NumberOnly,
}

/// Options for [`check`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CheckOptions {
    pub inf: Allow,
    pub nan: Allow,
    pub consider: Consider,
    /// Int-shaped text is not a float.
    pub strict: bool,
    /// Base for [`CheckKind::Int`] on text; other kinds use base 10.
    pub base: u32,
    pub allow_separators: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            inf: Allow::default(),
            nan: Allow::default(),
            consider: Consider::default(),
            strict: false,
            base: DEFAULT_BASE,
            allow_separators: false,
        }
    }
}

impl CheckOptions {
    #[must_use]
    pub const fn with_inf(mut self, inf: Allow) -> Self {
        self.inf = inf;
        self
    }

    #[must_use]
    pub const fn with_nan(mut self, nan: Allow) -> Self {
        self.nan = nan;
        self
    }

    #[must_use]
    pub const fn with_consider(mut self, consider: Consider) -> Self {
        self.consider = consider;
        self
    }

    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

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

    /// Conversion options the parsers should see for `kind`.
    fn parse_options(&self, kind: CheckKind) -> Options {
        let base = if kind == CheckKind::Int {
            self.base
        } else {
            DEFAULT_BASE
        };
        Options::default()
            .with_base(base)
            .with_allow_separators(self.allow_separators)
            .with_allow_inf(self.inf.text())
            .with_allow_nan(self.nan.text())
    }
}

/// Whether `input` passes as `kind`.
///
/// Never fails: non-numeric inputs, invalid bases and failed user-defined
/// coercions all answer `false`.
pub fn check(input: Input<'_>, kind: CheckKind, options: &CheckOptions) -> bool {
    let considered = match options.consider {
        Consider::Both => true,
        Consider::TextOnly => !input.is_numeric(),
        Consider::NumberOnly => input.is_numeric(),
    };
    if !considered {
        return false;
    }

    let parse_options = options.parse_options(kind);
    if !parse_options.base_is_valid() {
        return false;
    }
    let mut scratch = ScratchBuffer::new();
    let Some(parser) = Parser::new(input, &parse_options, &mut scratch, &UnicodeNumerals) else {
        return false;
    };
    if parser.errored().is_some() {
        return false;
    }
    let flags = parser.classify();
    if flags.is_invalid() {
        return false;
    }
    if flags.is_special() {
        let float_kind = matches!(kind, CheckKind::Real | CheckKind::Float);
        return float_kind && special_allowed(flags, options);
    }

    let native = flags.is_native();
    match kind {
        CheckKind::Real => true,
        CheckKind::Float => flags.is_float() || (!native && !options.strict),
        CheckKind::Int => flags.is_integer(),
        CheckKind::IntLike => flags.is_integer() || flags.is_int_like(),
    }
}

fn special_allowed(flags: NumberFlags, options: &CheckOptions) -> bool {
    let allow = if flags.contains(NumberFlags::INFINITY) {
        options.inf
    } else {
        options.nan
    };
    if flags.is_native() {
        allow.native()
    } else {
        allow.text()
    }
}
