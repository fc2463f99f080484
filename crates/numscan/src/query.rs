//! Type query.

use numscan_core::ScratchBuffer;

use crate::evaluator::{evaluate, Payload, Target};
use crate::input::Input;
use crate::number::Number;
use crate::numerals::UnicodeNumerals;
use crate::options::Options;
use crate::parser::Parser;

/// The kind of number a conversion produces.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NumberKind {
    Int,
    Float,
}

/// What a `Real` conversion of `input` would produce, without producing it.
///
/// Infinity and NaN count as floats when `options` recognises them. `None`
/// when the conversion would fail.
pub fn query_type(input: Input<'_>, options: &Options) -> Option<NumberKind> {
    let options = options.with_default_base();
    let mut scratch = ScratchBuffer::new();
    let parser = Parser::new(input, &options, &mut scratch, &UnicodeNumerals);
    match evaluate(parser.as_ref(), Target::Real, &options).ok()? {
        Payload::Value(Number::Float(_)) => Some(NumberKind::Float),
        Payload::Value(_) => Some(NumberKind::Int),
        Payload::Action(action) if action.is_infinity() || action.is_nan() => {
            Some(NumberKind::Float)
        }
        Payload::Action(_) => None,
    }
}
