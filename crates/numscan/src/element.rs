//! Fixed-width element extraction.
//!
//! [`extract`] converts one input into a primitive numeric element, as a bulk
//! array fill would: integers through the `Int` target, floats through the
//! `Float` target, and a value that does not fit the element type handled by
//! the overflow selector.

use tracing::debug;

use crate::api::convert;
use crate::error::ConvertError;
use crate::evaluator::Target;
use crate::input::Input;
use crate::number::Number;
use crate::options::Options;
use crate::selector::{ElementSelectors, Selector, Selectors};
use crate::value::Value;

mod sealed {
    pub trait Sealed {}
}

/// A primitive numeric type [`extract`] can produce.
pub trait Element: Copy + sealed::Sealed {
    /// Type name used in overflow messages.
    const NAME: &'static str;
    /// Conversion target used to produce the element.
    const TARGET: Target;

    /// The element for `number`, if it is in range.
    fn from_number(number: &Number) -> Option<Self>;
}

macro_rules! int_element {
    ($($ty:ty),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl Element for $ty {
            const NAME: &'static str = stringify!($ty);
            const TARGET: Target = Target::Int;

            fn from_number(number: &Number) -> Option<Self> {
                match number {
                    Number::Int(value) => Self::try_from(*value).ok(),
                    Number::BigInt(value) => Self::try_from(value).ok(),
                    Number::Float(value) => {
                        Number::from_f64_integral(*value).as_ref().and_then(Self::from_number)
                    }
                }
            }
        }
    )*};
}

int_element!(i8, i16, i32, i64, u8, u16, u32, u64);

impl sealed::Sealed for f64 {}

impl Element for f64 {
    const NAME: &'static str = "f64";
    const TARGET: Target = Target::Float;

    fn from_number(number: &Number) -> Option<Self> {
        let value = number.to_f64();
        // A finite integer too large for f64 does not fit.
        (value.is_finite() || number.is_float()).then_some(value)
    }
}

impl sealed::Sealed for f32 {}

impl Element for f32 {
    const NAME: &'static str = "f32";
    const TARGET: Target = Target::Float;

    fn from_number(number: &Number) -> Option<Self> {
        let wide = f64::from_number(number)?;
        #[allow(clippy::cast_possible_truncation, reason = "range is checked below")]
        let narrow = wide as f32;
        (narrow.is_finite() || !wide.is_finite()).then_some(narrow)
    }
}

/// Convert `input` to the element type `E`.
///
/// [`Selector::UseInput`] cannot produce an element, so wherever it is
/// configured the underlying error is raised instead.
pub fn extract<E: Element>(
    input: Input<'_>,
    options: &Options,
    selectors: &ElementSelectors,
) -> Result<E, ConvertError> {
    let policy = without_use_input(&selectors.selectors);
    let number = match convert(input, E::TARGET, options, &policy)? {
        Value::Number(number) => number,
        Value::Input(input) => {
            return Err(ConvertError::TypeMismatch(format!(
                "cannot store {} as {}",
                input.repr(),
                E::NAME
            )))
        }
    };
    match E::from_number(&number) {
        Some(element) => Ok(element),
        None => resolve_overflow(input, &number, &selectors.on_overflow),
    }
}

fn resolve_overflow<E: Element>(
    input: Input<'_>,
    number: &Number,
    selector: &Selector,
) -> Result<E, ConvertError> {
    let substitute = match selector {
        Selector::Constant(value) => value.clone(),
        Selector::Callback(callback) => callback(&input).map_err(ConvertError::Callback)?,
        Selector::Allowed | Selector::Disallowed | Selector::Raise | Selector::UseInput => {
            return Err(out_of_range::<E>(number));
        }
    };
    debug!(%number, %substitute, element = E::NAME, "substituting for out-of-range element");
    E::from_number(&substitute).ok_or_else(|| out_of_range::<E>(&substitute))
}

fn out_of_range<E: Element>(number: &Number) -> ConvertError {
    ConvertError::Overflow(format!("{number} is out of range for {}", E::NAME))
}

fn without_use_input(selectors: &Selectors) -> Selectors {
    let raise_instead = |selector: &Selector| match selector {
        Selector::UseInput => Selector::Raise,
        other => other.clone(),
    };
    Selectors {
        inf: raise_instead(&selectors.inf),
        nan: raise_instead(&selectors.nan),
        on_fail: raise_instead(&selectors.on_fail),
        on_type_error: raise_instead(&selectors.on_type_error),
    }
}

#[cfg(test)]
mod tests;
