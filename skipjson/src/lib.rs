// SPDX-License-Identifier: Apache-2.0

//! A small JSON reader built from a lexer and two mutually recursive
//! structural parsers.
//!
//! Text is first split into a [`Token`] stream. [`parse_array`] and
//! [`parse_object`] then build the value tree; a nested container is handed
//! to a recursive parse over its own sub-slice of the stream and the outer
//! parser resumes right after it.
//!
//! The accepted dialect is intentionally not full JSON:
//!
//! * strings may use `"` or `'` and are taken verbatim, without escapes
//! * numbers are digits with at most one `.`, no sign or exponent
//! * the root must be an array or an object
//! * numbers inside arrays are integers, numbers inside objects are floats
//!
//! ```
//! use skipjson::{parse_array_from_str, parse_object_from_str, Number, Value};
//!
//! let array = parse_array_from_str("[1, [2, 3]]").unwrap();
//! assert_eq!(array[0], Value::Number(Number::Integer(1)));
//!
//! let object = parse_object_from_str("{'delay': 1}").unwrap();
//! assert_eq!(object["delay"], Value::Number(Number::Float(1.0)));
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

mod cursor;
pub use cursor::{skip_scan, Cursor};

mod int_parser;

mod json_number;
pub use json_number::Number;

mod lexer;
pub use lexer::{tokenize, Lexer};

mod parse_error;
pub use parse_error::ParseError;

mod parser;
pub use parser::{parse_array, parse_object};

mod slice_input_buffer;

mod token;
pub use token::{Kind, Token};

mod value;
pub use value::{Array, Object, Value};

/// Lexes `text` and parses it as an array.
pub fn parse_array_from_str(text: &str) -> Result<Array, ParseError> {
    parse_array(&tokenize(text)?)
}

/// Lexes `text` and parses it as an object.
pub fn parse_object_from_str(text: &str) -> Result<Object, ParseError> {
    parse_object(&tokenize(text)?)
}

/// Parses an already decoded character sequence as an array.
pub fn parse_array_from_chars(chars: &[char]) -> Result<Array, ParseError> {
    parse_array(&Lexer::from_chars(chars).tokenize()?)
}

/// Parses an already decoded character sequence as an object.
pub fn parse_object_from_chars(chars: &[char]) -> Result<Object, ParseError> {
    parse_object(&Lexer::from_chars(chars).tokenize()?)
}

/// Parses `text` as whichever container its first token opens.
///
/// Convenience on top of the per-kind entry points. Any other first token
/// is a syntax error, as is empty input.
pub fn parse(text: &str) -> Result<Value, ParseError> {
    let tokens = tokenize(text)?;
    match tokens.first().map(Token::kind) {
        Some(Kind::ArrayStart) => parse_array(&tokens).map(Value::Array),
        Some(Kind::ObjectStart) => parse_object(&tokens).map(Value::Object),
        _ => Err(ParseError::unterminated(&tokens)),
    }
}
