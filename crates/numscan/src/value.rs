//! Final conversion results.

use std::fmt;

use crate::input::Input;
use crate::number::Number;

/// What a conversion hands back: a number, or the original input when the
/// caller chose to pass failures through.
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'a> {
    Number(Number),
    Input(Input<'a>),
}

impl<'a> Value<'a> {
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Number(number) => Some(number),
            Self::Input(_) => None,
        }
    }

    pub fn into_number(self) -> Option<Number> {
        match self {
            Self::Number(number) => Some(number),
            Self::Input(_) => None,
        }
    }

    /// The input was returned unchanged.
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Input(_))
    }

    pub fn as_input(&self) -> Option<&Input<'a>> {
        match self {
            Self::Input(input) => Some(input),
            Self::Number(_) => None,
        }
    }
}

impl From<Number> for Value<'_> {
    fn from(number: Number) -> Self {
        Self::Number(number)
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => fmt::Display::fmt(number, f),
            Self::Input(input) => f.write_str(&input.repr()),
        }
    }
}
