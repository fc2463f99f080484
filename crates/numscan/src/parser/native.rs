//! Parser over native numbers and user-defined coercions.

use std::cell::{Cell, OnceCell};

use num_traits::Signed;
use tracing::trace;

use crate::error::CoerceError;
use crate::flags::NumberFlags;
use crate::input::Input;
use crate::number::Number;

/// Parser for values that are already numeric.
///
/// A user-defined value is coerced at most once, on first use. Its failure
/// classifies the input `INVALID` and is reported through
/// [`errored`](Self::errored) as a type error, never as a parse error.
#[derive(Debug)]
pub struct NativeParser<'a> {
    input: Input<'a>,
    coerced: OnceCell<Result<Number, CoerceError>>,
    flags: Cell<NumberFlags>,
}

impl<'a> NativeParser<'a> {
    /// `input` should be one of the numeric [`Input`] variants; anything
    /// else classifies `INVALID`.
    pub fn new(input: Input<'a>) -> Self {
        Self {
            input,
            coerced: OnceCell::new(),
            flags: Cell::new(NumberFlags::UNSET),
        }
    }

    fn coerced(&self) -> Option<&Result<Number, CoerceError>> {
        match self.input {
            Input::Custom(value) => Some(self.coerced.get_or_init(|| {
                let result = value.coerce();
                trace!(
                    type_name = value.type_name(),
                    ok = result.is_ok(),
                    "user-defined coercion"
                );
                result
            })),
            _ => None,
        }
    }

    pub fn classify(&self) -> NumberFlags {
        let cached = self.flags.get();
        if cached.is_set() {
            return cached;
        }
        let flags = match self.input {
            Input::Int(_) | Input::BigInt(_) => NumberFlags::INTEGER,
            Input::Float(value) => NumberFlags::for_float(value),
            Input::Custom(_) => {
                let kind = match self.coerced() {
                    Some(Ok(Number::Float(value))) => NumberFlags::for_float(*value),
                    Some(Ok(_)) => NumberFlags::INTEGER,
                    Some(Err(_)) | None => NumberFlags::INVALID,
                };
                kind | NumberFlags::USER_DEFINED
            }
            _ => NumberFlags::INVALID,
        } | NumberFlags::FROM_NATIVE;
        self.flags.set(flags);
        flags
    }

    /// The numeric value, after coercion for user-defined inputs.
    pub fn number(&self) -> Option<Number> {
        match self.input {
            Input::Int(value) => Some(Number::Int(value)),
            Input::BigInt(value) => Some(Number::from_bigint(value.clone())),
            Input::Float(value) => Some(Number::Float(value)),
            Input::Custom(_) => self.coerced()?.as_ref().ok().cloned(),
            _ => None,
        }
    }

    pub fn is_negative(&self) -> bool {
        match self.input {
            Input::Int(value) => value < 0,
            Input::BigInt(value) => value.is_negative(),
            Input::Float(value) => value.is_sign_negative(),
            Input::Custom(_) => match self.coerced() {
                Some(Ok(Number::Int(value))) => *value < 0,
                Some(Ok(Number::BigInt(value))) => value.is_negative(),
                Some(Ok(Number::Float(value))) => value.is_sign_negative(),
                Some(Err(_)) | None => false,
            },
            _ => false,
        }
    }

    pub fn as_int(&self) -> Option<Number> {
        self.number().filter(Number::is_integer)
    }

    pub fn as_float(&self) -> Option<f64> {
        self.number().map(|number| number.to_f64())
    }

    pub fn errored(&self) -> Option<&CoerceError> {
        self.coerced()?.as_ref().err()
    }
}
