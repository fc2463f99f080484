//! Policy-driven resolution of evaluator actions.
//!
//! Maps every [`Action`] to a final [`Value`] or a [`ConvertError`] using the
//! caller's [`Selectors`]. Raised errors carry the same category and message
//! shape as the standard `int()`/`float()` constructors. Callback results
//! are re-validated against the target; a callback failure is final.

use tracing::debug;

use crate::error::{CallbackError, ConvertError};
use crate::evaluator::{Action, Payload, Target};
use crate::input::Input;
use crate::number::Number;
use crate::options::Options;
use crate::selector::{Selector, Selectors};
use crate::value::Value;

/// Turn a payload into the final value for `input`.
pub fn resolve<'a>(
    payload: Payload,
    input: Input<'a>,
    target: Target,
    options: &Options,
    selectors: &Selectors,
) -> Result<Value<'a>, ConvertError> {
    let action = match payload {
        Payload::Value(number) => return Ok(Value::Number(number)),
        Payload::Action(action) => action,
    };
    let ctx = Context {
        input,
        target,
        options,
    };
    match action {
        Action::InfFound | Action::NegInfFound => ctx.special(action, &selectors.inf, selectors),
        Action::NanFound | Action::NegNanFound => ctx.special(action, &selectors.nan, selectors),
        Action::InvalidInt | Action::InfToInt | Action::NanToInt | Action::InvalidFloat => {
            ctx.apply(action, &selectors.on_fail)
        }
        Action::BadTypeInt | Action::BadTypeFloat | Action::IllegalExplicitBase => {
            ctx.apply(action, &selectors.on_type_error)
        }
        Action::InvalidBase => Err(ctx.error(action)),
    }
}

struct Context<'o, 'a> {
    input: Input<'a>,
    target: Target,
    options: &'o Options,
}

impl<'a> Context<'_, 'a> {
    /// Infinity or NaN under its own selector.
    fn special(
        &self,
        action: Action,
        selector: &Selector,
        selectors: &Selectors,
    ) -> Result<Value<'a>, ConvertError> {
        match selector {
            Selector::Allowed => Ok(Value::Number(Number::Float(special_value(action)))),
            Selector::Disallowed => {
                let failure = if self.target.is_integer() {
                    Action::InvalidInt
                } else {
                    Action::InvalidFloat
                };
                self.apply(failure, &selectors.on_fail)
            }
            _ => self.apply(action, selector),
        }
    }

    /// Apply a raising or substituting selector.
    fn apply(&self, action: Action, selector: &Selector) -> Result<Value<'a>, ConvertError> {
        match selector {
            Selector::Allowed | Selector::Disallowed | Selector::Raise => {
                let err = self.error(action);
                debug!(?action, error = %err, "raising");
                Err(err)
            }
            Selector::UseInput => {
                debug!(?action, "returning input unchanged");
                Ok(Value::Input(self.input))
            }
            Selector::Constant(number) => {
                debug!(?action, %number, "substituting constant");
                Ok(Value::Number(number.clone()))
            }
            Selector::Callback(callback) => {
                debug!(?action, "invoking callback");
                let number = callback(&self.input).map_err(ConvertError::Callback)?;
                validate_callback_result(number, self.target).map(Value::Number)
            }
        }
    }

    /// The error `action` raises.
    fn error(&self, action: Action) -> ConvertError {
        let input = &self.input;
        match action {
            Action::InfFound | Action::NegInfFound => ConvertError::Disallowed(format!(
                "cannot convert {}: infinity is not allowed",
                input.repr()
            )),
            Action::NanFound | Action::NegNanFound => ConvertError::Disallowed(format!(
                "cannot convert {}: NaN is not allowed",
                input.repr()
            )),
            Action::InvalidInt => ConvertError::InvalidSyntax(format!(
                "invalid literal for int() with base {}: {}",
                self.options.base,
                input.repr()
            )),
            Action::InfToInt => {
                ConvertError::Overflow("cannot convert float infinity to integer".to_string())
            }
            Action::NanToInt => {
                ConvertError::InvalidSyntax("cannot convert float NaN to integer".to_string())
            }
            Action::InvalidFloat => ConvertError::InvalidSyntax(format!(
                "could not convert string to float: {}",
                input.repr()
            )),
            Action::InvalidBase => ConvertError::InvalidBase,
            Action::IllegalExplicitBase => ConvertError::IllegalExplicitBase,
            Action::BadTypeInt => ConvertError::TypeMismatch(format!(
                "int() argument must be a string, a bytes-like object or a real number, not '{}'",
                input.type_name()
            )),
            Action::BadTypeFloat => ConvertError::TypeMismatch(format!(
                "float() argument must be a string or a real number, not '{}'",
                input.type_name()
            )),
        }
    }
}

fn special_value(action: Action) -> f64 {
    match action {
        Action::InfFound => f64::INFINITY,
        Action::NegInfFound => f64::NEG_INFINITY,
        Action::NegNanFound => -f64::NAN,
        _ => f64::NAN,
    }
}

/// Check a callback's number against what `target` promises.
fn validate_callback_result(number: Number, target: Target) -> Result<Number, ConvertError> {
    match (target, number) {
        (Target::Real, number) => Ok(number),
        (Target::Float, number) => Ok(number.into_float()),
        (_, Number::Float(value)) => Number::from_f64_integral(value).ok_or_else(|| {
            ConvertError::Callback(CallbackError::new(format!(
                "callback returned {}, which is not an integer",
                Number::Float(value)
            )))
        }),
        (_, number) => Ok(number),
    }
}

#[cfg(test)]
mod tests;
