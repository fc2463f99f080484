//! Classification-and-conversion evaluator.
//!
//! Combines a [`Parser`] with a requested [`Target`] into a [`Payload`]: a
//! finished number, or an [`Action`] naming the condition the resolver must
//! decide about. Nothing here consults the caller's selectors.

use tracing::trace;

use crate::error::ConvertError;
use crate::flags::NumberFlags;
use crate::number::Number;
use crate::options::Options;
use crate::parser::Parser;

/// What kind of number the caller wants back.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// Integer if the input is an integer, float otherwise.
    Real,
    Float,
    /// Integer grammar only; native floats truncate.
    Int,
    /// Integers and floats that are exactly integral.
    IntLike,
    /// Integers and any finite float, truncated toward zero.
    ForceInt,
}

impl Target {
    /// Produces an integer on success.
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Int | Self::IntLike | Self::ForceInt)
    }
}

/// A condition the resolver must turn into a value or an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    NanFound,
    NegNanFound,
    InfFound,
    NegInfFound,
    /// Content does not form an integer of the requested kind.
    InvalidInt,
    /// Native infinity where an integer was requested.
    InfToInt,
    /// Native NaN where an integer was requested.
    NanToInt,
    /// Content does not form a float.
    InvalidFloat,
    /// Base outside 0 and 2..=36.
    InvalidBase,
    /// Explicit base given for a non-text input or a non-`Int` target.
    IllegalExplicitBase,
    /// Input is not a number, text or glyph, and an integer was requested.
    BadTypeInt,
    /// Input is not a number, text or glyph, and a float was requested.
    BadTypeFloat,
}

impl Action {
    pub const fn is_infinity(self) -> bool {
        matches!(self, Self::InfFound | Self::NegInfFound)
    }

    pub const fn is_nan(self) -> bool {
        matches!(self, Self::NanFound | Self::NegNanFound)
    }

    pub const fn is_type_error(self) -> bool {
        matches!(
            self,
            Self::BadTypeInt | Self::BadTypeFloat | Self::IllegalExplicitBase
        )
    }
}

/// Result of evaluation: a number, or a pending action.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    Value(Number),
    Action(Action),
}

impl From<Number> for Payload {
    fn from(number: Number) -> Self {
        Self::Value(number)
    }
}

impl From<Action> for Payload {
    fn from(action: Action) -> Self {
        Self::Action(action)
    }
}

/// Evaluate `parser` against `target`.
///
/// `parser` is `None` when the input had no numeric shape at all. The only
/// error returned directly is the type mismatch from a failed user-defined
/// coercion; every other condition becomes an [`Action`].
pub fn evaluate(
    parser: Option<&Parser<'_>>,
    target: Target,
    options: &Options,
) -> Result<Payload, ConvertError> {
    if target.is_integer() {
        let base_forbidden = target != Target::Int || !parser.is_some_and(Parser::is_textual);
        if options.has_explicit_base() && base_forbidden {
            return Ok(Action::IllegalExplicitBase.into());
        }
        if !options.base_is_valid() {
            return Ok(Action::InvalidBase.into());
        }
    }

    let Some(parser) = parser else {
        return Ok(if target.is_integer() {
            Action::BadTypeInt
        } else {
            Action::BadTypeFloat
        }
        .into());
    };
    if let Some(err) = parser.errored() {
        return Err(ConvertError::TypeMismatch(err.to_string()));
    }

    let flags = parser.classify();
    trace!(?target, ?flags, "evaluate");
    Ok(match target {
        Target::Real => evaluate_real(parser, flags, options),
        Target::Float => evaluate_float(parser, flags),
        Target::Int => evaluate_int(parser, flags),
        Target::IntLike => evaluate_int_like(parser, flags),
        Target::ForceInt => evaluate_force_int(parser, flags),
    })
}

fn special_action(parser: &Parser<'_>, flags: NumberFlags) -> Option<Action> {
    let negative = parser.is_negative();
    if flags.contains(NumberFlags::INFINITY) {
        Some(if negative {
            Action::NegInfFound
        } else {
            Action::InfFound
        })
    } else if flags.contains(NumberFlags::NAN) {
        Some(if negative {
            Action::NegNanFound
        } else {
            Action::NanFound
        })
    } else {
        None
    }
}

fn evaluate_real(parser: &Parser<'_>, flags: NumberFlags, options: &Options) -> Payload {
    if flags.is_invalid() {
        return Action::InvalidFloat.into();
    }
    if options.coerce_int_like_float && flags.is_int_like() {
        return parser
            .as_float()
            .and_then(Number::from_f64_integral)
            .map_or(Action::InvalidFloat.into(), Payload::Value);
    }
    if let Some(action) = special_action(parser, flags) {
        return action.into();
    }
    if let Some(number) = parser.native_number() {
        return number.into();
    }
    let number = if flags.is_integer() {
        parser.as_int()
    } else {
        parser.as_float().map(Number::Float)
    };
    number.map_or(Action::InvalidFloat.into(), Payload::Value)
}

fn evaluate_float(parser: &Parser<'_>, flags: NumberFlags) -> Payload {
    if flags.is_invalid() {
        return Action::InvalidFloat.into();
    }
    if let Some(action) = special_action(parser, flags) {
        return action.into();
    }
    parser
        .as_float()
        .map_or(Action::InvalidFloat.into(), |value| Number::Float(value).into())
}

fn evaluate_int(parser: &Parser<'_>, flags: NumberFlags) -> Payload {
    let number = if flags.is_integer() {
        parser.as_int()
    } else if parser.is_native() && flags.is_float() {
        // Native floats truncate; infinity and NaN fall through to failure.
        parser.as_float().and_then(Number::from_f64_truncated)
    } else {
        None
    };
    number.map_or_else(|| int_failure(parser, flags), Payload::Value)
}

fn evaluate_int_like(parser: &Parser<'_>, flags: NumberFlags) -> Payload {
    let number = if flags.is_integer() {
        parser.as_int()
    } else if flags.is_int_like() {
        parser.as_float().and_then(Number::from_f64_integral)
    } else {
        None
    };
    number.map_or_else(|| int_failure(parser, flags), Payload::Value)
}

fn evaluate_force_int(parser: &Parser<'_>, flags: NumberFlags) -> Payload {
    let number = if flags.is_integer() {
        parser.as_int()
    } else if flags.is_float() {
        parser.as_float().and_then(Number::from_f64_truncated)
    } else {
        None
    };
    number.map_or_else(|| int_failure(parser, flags), Payload::Value)
}

/// Why an integer conversion produced nothing.
fn int_failure(parser: &Parser<'_>, flags: NumberFlags) -> Payload {
    let action = if !parser.is_native() {
        Action::InvalidInt
    } else if flags.contains(NumberFlags::INFINITY) {
        Action::InfToInt
    } else if flags.contains(NumberFlags::NAN) {
        Action::NanToInt
    } else {
        Action::InvalidInt
    };
    action.into()
}
