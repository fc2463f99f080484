//! Conversion errors.
//!
//! Every failure that reaches a caller is a [`ConvertError`]. Messages follow
//! the shape of the familiar `int()`/`float()` constructor errors, and
//! [`ConvertError::category`] names the exception class each one mirrors.

use thiserror::Error;

/// The broad class of a conversion error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Bad content (a `ValueError` in the usual taxonomy).
    Value,
    /// Value out of range (an `OverflowError`).
    Overflow,
    /// Wrong kind of input (a `TypeError`).
    Type,
}

/// A conversion failure raised by a [`Selector::Raise`](crate::Selector).
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Content does not match the requested kind's grammar.
    #[error("{0}")]
    InvalidSyntax(String),

    /// Content matches the grammar but is out of range.
    #[error("{0}")]
    Overflow(String),

    /// Input is not numeric, textual or a glyph, or its coercion failed.
    #[error("{0}")]
    TypeMismatch(String),

    /// An explicit base was given for an input or target that forbids one.
    #[error("int() can't convert non-string with explicit base")]
    IllegalExplicitBase,

    /// The base is neither 0 nor within 2..=36.
    #[error("int() base must be >= 2 and <= 36, or 0")]
    InvalidBase,

    /// Infinity or NaN was found where the caller asked to raise on it.
    #[error("{0}")]
    Disallowed(String),

    /// A selector callback failed or returned something unusable.
    #[error("callback failed: {0}")]
    Callback(#[source] CallbackError),
}

impl ConvertError {
    /// Exception class this error mirrors.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidSyntax(_) | Self::InvalidBase | Self::Disallowed(_) => {
                ErrorCategory::Value
            }
            Self::Overflow(_) => ErrorCategory::Overflow,
            Self::TypeMismatch(_) | Self::IllegalExplicitBase => ErrorCategory::Type,
            Self::Callback(err) => err.category,
        }
    }
}

/// Failure reported by a selector callback.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct CallbackError {
    message: String,
    category: ErrorCategory,
}

impl CallbackError {
    /// A value-class failure with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            category: ErrorCategory::Value,
        }
    }

    /// A type-class failure, for callbacks returning something non-numeric.
    pub fn type_error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            category: ErrorCategory::Type,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn category(&self) -> ErrorCategory {
        self.category
    }
}

/// Failure of a user-defined numeric coercion.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct CoerceError {
    message: String,
}

impl CoerceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
