//! Input value model.
//!
//! [`Input`] is the boundary with the calling program: it already says whether
//! a value is native numeric, textual, or something else entirely. The engine
//! never inspects host type tags itself.

use std::fmt::{self, Write as _};

use num_bigint::BigInt;

use crate::error::CoerceError;
use crate::number::Number;

/// A user-defined value that can produce a number on request.
///
/// The coercion runs at most once per conversion. A failure is reported as
/// a type mismatch, never as a parse error.
pub trait CoerceNumber: fmt::Debug {
    /// Name used in type-mismatch messages.
    fn type_name(&self) -> &str;

    fn coerce(&self) -> Result<Number, CoerceError>;
}

/// One value to classify or convert.
#[derive(Clone, Copy, Debug)]
pub enum Input<'a> {
    /// Native machine integer.
    Int(i64),
    /// Native arbitrary-width integer.
    BigInt(&'a BigInt),
    /// Native float.
    Float(f64),
    /// Numeric through a user-defined coercion.
    Custom(&'a dyn CoerceNumber),
    /// A single character.
    Char(char),
    /// Text.
    Str(&'a str),
    /// Raw bytes, treated as ASCII text.
    Bytes(&'a [u8]),
    /// Anything else, carrying its type name for error messages.
    Other(&'a str),
}

impl Input<'_> {
    /// Native numeric value, primitive or coerced.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Int(_) | Self::BigInt(_) | Self::Float(_) | Self::Custom(_)
        )
    }

    /// Text, bytes or a single character.
    pub fn is_textual(&self) -> bool {
        matches!(self, Self::Char(_) | Self::Str(_) | Self::Bytes(_))
    }

    /// Type name as it appears in error messages.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Int(_) | Self::BigInt(_) => "int",
            Self::Float(_) => "float",
            Self::Custom(value) => value.type_name(),
            Self::Char(_) | Self::Str(_) => "str",
            Self::Bytes(_) => "bytes",
            Self::Other(name) => name,
        }
    }

    /// Quoted, escaped rendering for error messages.
    pub fn repr(&self) -> String {
        match self {
            Self::Int(value) => value.to_string(),
            Self::BigInt(value) => value.to_string(),
            Self::Float(value) => Number::Float(*value).to_string(),
            Self::Custom(value) => format!("{value:?}"),
            Self::Char(c) => repr_str(c.encode_utf8(&mut [0; 4])),
            Self::Str(s) => repr_str(s),
            Self::Bytes(bytes) => repr_bytes(bytes),
            Self::Other(name) => format!("<{name} object>"),
        }
    }
}

impl PartialEq for Input<'_> {
    /// Identity comparison: floats compare by bit pattern and custom values
    /// by address, so an input always equals itself.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::BigInt(a), Self::BigInt(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Custom(a), Self::Custom(b)) => std::ptr::addr_eq(*a, *b),
            (Self::Char(a), Self::Char(b)) => a == b,
            (Self::Str(a), Self::Str(b)) | (Self::Other(a), Self::Other(b)) => a == b,
            (Self::Bytes(a), Self::Bytes(b)) => a == b,
            _ => false,
        }
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(value: &'a str) -> Self {
        Self::Str(value)
    }
}

impl<'a> From<&'a [u8]> for Input<'a> {
    fn from(value: &'a [u8]) -> Self {
        Self::Bytes(value)
    }
}

impl From<char> for Input<'_> {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<i64> for Input<'_> {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Input<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<'a> From<&'a BigInt> for Input<'a> {
    fn from(value: &'a BigInt) -> Self {
        Self::BigInt(value)
    }
}

fn repr_str(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\x{:02x}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

fn repr_bytes(bytes: &[u8]) -> String {
    let quote = if bytes.contains(&b'\'') && !bytes.contains(&b'"') {
        b'"'
    } else {
        b'\''
    };
    let mut out = String::with_capacity(bytes.len() + 3);
    out.push('b');
    out.push(char::from(quote));
    for &b in bytes {
        match b {
            b'\\' => out.push_str("\\\\"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            b if b == quote => {
                out.push('\\');
                out.push(char::from(b));
            }
            b' '..=b'~' => out.push(char::from(b)),
            b => {
                let _ = write!(out, "\\x{b:02x}");
            }
        }
    }
    out.push(char::from(quote));
    out
}
