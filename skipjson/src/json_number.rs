// SPDX-License-Identifier: Apache-2.0

use alloc::format;
use core::str::FromStr;

use crate::int_parser::parse_i64;
use crate::parse_error::ParseError;
use crate::token::{Kind, Token};

/// A parsed JSON number.
///
/// Which variant a literal becomes depends on where it appears: array
/// elements are read as [`Number::Integer`], object values as
/// [`Number::Float`]. The same text `1` is therefore `Integer(1)` inside
/// `[1]` and `Float(1.0)` inside `{"a":1}`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    /// Produced by array parsing.
    Integer(i64),
    /// Produced by object parsing.
    Float(f64),
}

impl Number {
    /// Reads a Number token's payload as an integer, the array-mode rule.
    ///
    /// A payload with a `.` or one that overflows `i64` is a syntax error
    /// blaming the token.
    pub fn integer_from_token(token: &Token) -> Result<Self, ParseError> {
        let text = number_payload(token)?;
        parse_i64(text.as_bytes())
            .map(Number::Integer)
            .map_err(|_| ParseError::syntax(token))
    }

    /// Reads a Number token's payload as a float, the object-mode rule.
    ///
    /// Accepts `1`, `1.5`, `.5` and `1.`; a lone `.` is a syntax error.
    pub fn float_from_token(token: &Token) -> Result<Self, ParseError> {
        let text = number_payload(token)?;
        f64::from_str(text)
            .map(Number::Float)
            .map_err(|_| ParseError::syntax(token))
    }

    /// The integer value; floats are never narrowed.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(val) => Some(*val),
            Number::Float(_) => None,
        }
    }

    /// The value as `f64`. Integers widen, possibly losing precision.
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(val) => *val as f64,
            Number::Float(val) => *val,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    pub fn is_float(&self) -> bool {
        !self.is_integer()
    }
}

fn number_payload(token: &Token) -> Result<&str, ParseError> {
    match (token.kind(), token.payload()) {
        (Kind::Number, Some(text)) => Ok(text),
        _ => Err(ParseError::syntax(token)),
    }
}

impl From<i64> for Number {
    fn from(val: i64) -> Self {
        Number::Integer(val)
    }
}

impl From<f64> for Number {
    fn from(val: f64) -> Self {
        Number::Float(val)
    }
}

impl core::fmt::Display for Number {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Number::Integer(val) => write!(f, "{val}"),
            Number::Float(val) => {
                let text = format!("{val}");
                // Keep a `.` on whole floats so they stay visibly floats
                if text.bytes().all(|b| b.is_ascii_digit() || b == b'-') {
                    write!(f, "{text}.0")
                } else {
                    f.write_str(&text)
                }
            }
        }
    }
}
