//! Conversion entry points.
//!
//! Each function runs the whole pipeline for one input: pick a parser,
//! evaluate it against a target, resolve the outcome with the caller's
//! selectors. The free functions allocate a fresh [`ScratchBuffer`] per call;
//! [`Converter`] keeps one around for repeated conversions.
//!
//! ```
//! use numscan::{try_real, Number, Options, Selectors, Value};
//!
//! let options = Options::default().with_allow_separators(true);
//! let value = try_real("1_000", &options, &Selectors::default())?;
//! assert_eq!(value, Value::Number(Number::Int(1000)));
//! # Ok::<(), numscan::ConvertError>(())
//! ```

use numscan_core::ScratchBuffer;

use crate::error::ConvertError;
use crate::evaluator::{evaluate, Target};
use crate::input::Input;
use crate::numerals::{NumeralTable, UnicodeNumerals};
use crate::options::Options;
use crate::parser::Parser;
use crate::resolver::resolve;
use crate::selector::Selectors;
use crate::value::Value;

/// Convert `input` to `target`.
pub fn convert<'a>(
    input: Input<'a>,
    target: Target,
    options: &Options,
    selectors: &Selectors,
) -> Result<Value<'a>, ConvertError> {
    let mut scratch = ScratchBuffer::new();
    convert_with(input, target, options, selectors, &mut scratch, &UnicodeNumerals)
}

/// Integer when the input is one, float otherwise.
pub fn try_real<'a>(
    input: impl Into<Input<'a>>,
    options: &Options,
    selectors: &Selectors,
) -> Result<Value<'a>, ConvertError> {
    convert(input.into(), Target::Real, options, selectors)
}

pub fn try_float<'a>(
    input: impl Into<Input<'a>>,
    options: &Options,
    selectors: &Selectors,
) -> Result<Value<'a>, ConvertError> {
    convert(input.into(), Target::Float, options, selectors)
}

/// Integer grammar only, honouring `options.base`.
pub fn try_int<'a>(
    input: impl Into<Input<'a>>,
    options: &Options,
    selectors: &Selectors,
) -> Result<Value<'a>, ConvertError> {
    convert(input.into(), Target::Int, options, selectors)
}

/// Integers, and floats truncated toward zero.
pub fn try_forceint<'a>(
    input: impl Into<Input<'a>>,
    options: &Options,
    selectors: &Selectors,
) -> Result<Value<'a>, ConvertError> {
    convert(input.into(), Target::ForceInt, options, selectors)
}

/// Integers, and floats that are exactly integral.
pub fn try_intlike<'a>(
    input: impl Into<Input<'a>>,
    options: &Options,
    selectors: &Selectors,
) -> Result<Value<'a>, ConvertError> {
    convert(input.into(), Target::IntLike, options, selectors)
}

/// Run the pipeline with a caller-owned buffer and numeral table.
pub(crate) fn convert_with<'a>(
    input: Input<'a>,
    target: Target,
    options: &Options,
    selectors: &Selectors,
    scratch: &mut ScratchBuffer,
    numerals: &dyn NumeralTable,
) -> Result<Value<'a>, ConvertError> {
    let options = effective_options(options, target);
    let payload = {
        let parser = Parser::new(input, &options, scratch, numerals);
        evaluate(parser.as_ref(), target, &options)?
    };
    resolve(payload, input, target, &options, selectors)
}

/// The base only applies to integer targets.
pub(crate) fn effective_options(options: &Options, target: Target) -> Options {
    if target.is_integer() {
        *options
    } else {
        options.with_default_base()
    }
}

/// Converter with a reusable scratch buffer.
///
/// The buffer is reset before every conversion, so one converter can walk
/// any number of inputs without reallocating for long separator-bearing
/// text. A converter is not meant to be shared between threads; give each
/// thread its own.
#[derive(Debug)]
pub struct Converter<T: NumeralTable = UnicodeNumerals> {
    options: Options,
    selectors: Selectors,
    numerals: T,
    scratch: ScratchBuffer,
}

impl Converter {
    pub fn new(options: Options, selectors: Selectors) -> Self {
        Self::with_numerals(options, selectors, UnicodeNumerals)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(Options::default(), Selectors::default())
    }
}

impl<T: NumeralTable> Converter<T> {
    /// Converter resolving glyphs through `numerals`.
    pub fn with_numerals(options: Options, selectors: Selectors, numerals: T) -> Self {
        Self {
            options,
            selectors,
            numerals,
            scratch: ScratchBuffer::new(),
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn selectors(&self) -> &Selectors {
        &self.selectors
    }

    pub fn convert<'a>(
        &mut self,
        input: impl Into<Input<'a>>,
        target: Target,
    ) -> Result<Value<'a>, ConvertError> {
        self.scratch.reset();
        convert_with(
            input.into(),
            target,
            &self.options,
            &self.selectors,
            &mut self.scratch,
            &self.numerals,
        )
    }

    /// Convert every input, stopping at the first raised error.
    pub fn convert_all<'a, I>(
        &mut self,
        inputs: I,
        target: Target,
    ) -> Result<Vec<Value<'a>>, ConvertError>
    where
        I: IntoIterator,
        I::Item: Into<Input<'a>>,
    {
        inputs
            .into_iter()
            .map(|input| self.convert(input, target))
            .collect()
    }
}
