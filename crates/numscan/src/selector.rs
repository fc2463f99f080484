//! Per-condition failure policies.
//!
//! A [`Selector`] says what to hand back when a particular condition comes
//! up: infinity, NaN, a conversion failure, a type mismatch, or (for
//! element extraction) a value that does not fit the element type.

use std::fmt;
use std::sync::Arc;

use crate::error::CallbackError;
use crate::input::Input;
use crate::number::Number;

/// Caller-supplied replacement function, given the original input.
pub type Callback = Arc<dyn Fn(&Input<'_>) -> Result<Number, CallbackError> + Send + Sync>;

/// What to do when a condition is found.
#[derive(Clone)]
pub enum Selector {
    /// Return the special value itself. Only meaningful for infinity and
    /// NaN; elsewhere it behaves like [`Raise`](Self::Raise).
    Allowed,
    /// Treat the special value as a conversion failure. Only meaningful for
    /// infinity and NaN; elsewhere it behaves like [`Raise`](Self::Raise).
    Disallowed,
    /// Report the condition as an error.
    Raise,
    /// Return the original input unchanged.
    UseInput,
    /// Return this value.
    Constant(Number),
    /// Call this function with the original input and return its result.
    Callback(Callback),
}

impl Selector {
    /// Wrap a closure as a [`Selector::Callback`].
    pub fn callback<F>(f: F) -> Self
    where
        F: Fn(&Input<'_>) -> Result<Number, CallbackError> + Send + Sync + 'static,
    {
        Self::Callback(Arc::new(f))
    }

    /// Substitutes a value instead of reporting anything.
    pub fn substitutes(&self) -> bool {
        matches!(self, Self::UseInput | Self::Constant(_) | Self::Callback(_))
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allowed => f.write_str("Allowed"),
            Self::Disallowed => f.write_str("Disallowed"),
            Self::Raise => f.write_str("Raise"),
            Self::UseInput => f.write_str("UseInput"),
            Self::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Self::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

impl From<Number> for Selector {
    fn from(value: Number) -> Self {
        Self::Constant(value)
    }
}

/// Selectors for the four conversion conditions.
///
/// Defaults: infinity and NaN allowed, failures return the input,
/// type mismatches raise.
#[derive(Clone, Debug)]
pub struct Selectors {
    pub inf: Selector,
    pub nan: Selector,
    pub on_fail: Selector,
    pub on_type_error: Selector,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            inf: Selector::Allowed,
            nan: Selector::Allowed,
            on_fail: Selector::UseInput,
            on_type_error: Selector::Raise,
        }
    }
}

impl Selectors {
    /// Failures and type mismatches raise; infinity and NaN are allowed.
    pub fn raising() -> Self {
        Self {
            inf: Selector::Allowed,
            nan: Selector::Allowed,
            on_fail: Selector::Raise,
            on_type_error: Selector::Raise,
        }
    }

    #[must_use]
    pub fn with_inf(mut self, selector: Selector) -> Self {
        self.inf = selector;
        self
    }

    #[must_use]
    pub fn with_nan(mut self, selector: Selector) -> Self {
        self.nan = selector;
        self
    }

    #[must_use]
    pub fn with_on_fail(mut self, selector: Selector) -> Self {
        self.on_fail = selector;
        self
    }

    #[must_use]
    pub fn with_on_type_error(mut self, selector: Selector) -> Self {
        self.on_type_error = selector;
        self
    }
}

/// Selectors for element extraction, adding the overflow condition.
///
/// [`Selector::UseInput`] cannot produce an element and raises instead.
#[derive(Clone, Debug)]
pub struct ElementSelectors {
    pub selectors: Selectors,
    pub on_overflow: Selector,
}

impl Default for ElementSelectors {
    fn default() -> Self {
        Self {
            selectors: Selectors::raising(),
            on_overflow: Selector::Raise,
        }
    }
}

impl ElementSelectors {
    #[must_use]
    pub fn with_selectors(mut self, selectors: Selectors) -> Self {
        self.selectors = selectors;
        self
    }

    #[must_use]
    pub fn with_on_overflow(mut self, selector: Selector) -> Self {
        self.on_overflow = selector;
        self
    }
}

#[cfg(test)]
mod tests;
