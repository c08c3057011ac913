// SPDX-License-Identifier: Apache-2.0

//! Array and object parsers.
//!
//! Each parser walks one token range with its own [`Cursor`]. A nested
//! array or object is not walked by the outer loop: the cursor delegates it
//! to a fresh recursive parse over the nested sub-slice and the outer loop
//! carries on after the nested close token. Nesting depth is therefore
//! bounded only by the call stack.

use log::trace;

use crate::cursor::Cursor;
use crate::json_number::Number;
use crate::parse_error::ParseError;
use crate::token::{Kind, Token};
use crate::value::{Array, Object, Value};

/// How a Number token is read in the current container.
#[derive(Clone, Copy, Debug, PartialEq)]
enum NumberMode {
    Integer,
    Float,
}

/// Parses a token range that starts with `[` into an [`Array`].
///
/// Numbers become [`Number::Integer`]; a fractional literal is a syntax
/// error here.
pub fn parse_array(tokens: &[Token]) -> Result<Array, ParseError> {
    let mut cursor = Cursor::new(tokens);
    expect(cursor.current()?, Kind::ArrayStart)?;
    cursor.advance();

    let mut array = Array::new();
    if cursor.current()?.kind() == Kind::ArrayEnd {
        return Ok(array);
    }

    while !cursor.is_exhausted() {
        array.push(parse_value(&mut cursor, NumberMode::Integer)?);
        cursor.advance();

        let token = cursor.current()?;
        match token.kind() {
            Kind::ArrayEnd => {
                trace!("Array of {} items", array.len());
                return Ok(array);
            }
            Kind::Comma => cursor.advance(),
            _ => return Err(ParseError::syntax(token)),
        }
    }

    Err(ParseError::unterminated(tokens))
}

/// Parses a token range that starts with `{` into an [`Object`].
///
/// Numbers become [`Number::Float`]. A repeated key keeps its last value.
/// A `}` where a key is expected closes the object, which makes `{}` valid.
pub fn parse_object(tokens: &[Token]) -> Result<Object, ParseError> {
    let mut cursor = Cursor::new(tokens);
    expect(cursor.current()?, Kind::ObjectStart)?;
    cursor.advance();

    let mut object = Object::new();
    while !cursor.is_exhausted() {
        let token = cursor.current()?;
        if token.kind() == Kind::ObjectEnd {
            break;
        }
        expect(token, Kind::String)?;
        let key = token.payload().unwrap_or_default();
        cursor.advance();

        expect(cursor.current()?, Kind::Colon)?;
        cursor.advance();

        let value = parse_value(&mut cursor, NumberMode::Float)?;
        object.insert(key, value);
        cursor.advance();

        let token = cursor.current()?;
        match token.kind() {
            Kind::ObjectEnd => break,
            Kind::Comma => cursor.advance(),
            _ => return Err(ParseError::syntax(token)),
        }
    }

    // Only a `}` ends the loop early; running out of tokens is an error
    if cursor.is_exhausted() {
        return Err(ParseError::unterminated(tokens));
    }
    trace!("Object of {} entries", object.len());
    Ok(object)
}

/// Reads the value under the cursor. On return the cursor rests on the
/// value's last token, which for a nested structure is its close token.
fn parse_value(cursor: &mut Cursor<'_>, numbers: NumberMode) -> Result<Value, ParseError> {
    let token = cursor.current()?;
    let value = match token.kind() {
        Kind::ArrayStart => {
            let nested = cursor.delegate(Kind::ArrayStart, Kind::ArrayEnd)?;
            Value::Array(parse_array(nested)?)
        }
        Kind::ObjectStart => {
            let nested = cursor.delegate(Kind::ObjectStart, Kind::ObjectEnd)?;
            Value::Object(parse_object(nested)?)
        }
        Kind::Boolean => Value::Boolean(token.payload() == Some("true")),
        Kind::String => Value::String(token.payload().unwrap_or_default().into()),
        Kind::Number => Value::Number(match numbers {
            NumberMode::Integer => Number::integer_from_token(token)?,
            NumberMode::Float => Number::float_from_token(token)?,
        }),
        Kind::Null => Value::Null,
        _ => return Err(ParseError::syntax(token)),
    };
    Ok(value)
}

fn expect(token: &Token, kind: Kind) -> Result<(), ParseError> {
    if token.kind() == kind {
        Ok(())
    } else {
        Err(ParseError::syntax(token))
    }
}
