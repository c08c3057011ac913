// SPDX-License-Identifier: Apache-2.0

//! Character-level lexer.
//!
//! Splits JSON text into an ordered token stream in a single forward pass.
//! This dialect is deliberately loose: strings may be quoted with `"` or `'`
//! and are taken verbatim (no escape processing), numbers are digits with at
//! most one `.` (no sign or exponent), and only `\n`, space and `\t` count
//! as whitespace.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use log::{debug, trace};

use crate::parse_error::ParseError;
use crate::slice_input_buffer::{InputBuffer, SliceInputBuffer};
use crate::token::{Kind, Token};

/// Lexer over one input text.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    chars: Cow<'a, [char]>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer for the given text.
    pub fn new(text: &str) -> Lexer<'static> {
        Lexer {
            chars: Cow::Owned(text.chars().collect()),
        }
    }

    /// Creates a lexer over an already decoded character sequence.
    pub fn from_chars(chars: &'a [char]) -> Self {
        Self {
            chars: Cow::Borrowed(chars),
        }
    }

    /// Runs the lexer to completion.
    ///
    /// Either every character is accounted for and the full stream is
    /// returned, or the first offending character is reported as
    /// [`ParseError::Lex`].
    pub fn tokenize(self) -> Result<Vec<Token>, ParseError> {
        let mut input = SliceInputBuffer::new(&self.chars);
        let mut tokens = Vec::new();

        while let Ok(c) = input.consume_char() {
            let position = input.current_pos() - 1;
            let token = match c {
                '\n' | ' ' | '\t' => continue,
                '{' => Token::structural(Kind::ObjectStart),
                '}' => Token::structural(Kind::ObjectEnd),
                '[' => Token::structural(Kind::ArrayStart),
                ']' => Token::structural(Kind::ArrayEnd),
                ',' => Token::structural(Kind::Comma),
                ':' => Token::structural(Kind::Colon),
                '"' | '\'' => Token::string(scan_string(&mut input, c)?),
                '.' | '0'..='9' => Token::number(scan_number(&mut input, c)),
                't' if input.consume_literal("rue") => Token::boolean(true),
                'f' if input.consume_literal("alse") => Token::boolean(false),
                'n' if input.consume_literal("ull") => Token::null(),
                other => return ParseError::lex(position, other),
            };
            trace!("{} at {}", token, position);
            tokens.push(token);
        }

        debug!("Lexed {} tokens", tokens.len());
        Ok(tokens)
    }
}

/// Lexes `text` into a token stream.
pub fn tokenize(text: &str) -> Result<Vec<Token>, ParseError> {
    Lexer::new(text).tokenize()
}

// The opening quote has been consumed; the same quote character closes the
// string and everything between is kept as-is.
fn scan_string(input: &mut SliceInputBuffer<'_>, quote: char) -> Result<String, ParseError> {
    let mut text = String::new();
    loop {
        match input.consume_char() {
            Ok(c) if c == quote => return Ok(text),
            Ok(c) => text.push(c),
            Err(_) => {
                // At least the opening quote was consumed
                let (position, c) = input.last_consumed().unwrap_or((0, quote));
                return ParseError::lex(position, c);
            }
        }
    }
}

// Accumulates digits and the first `.`; the first character that fits
// neither is pushed back to start the next token.
fn scan_number(input: &mut SliceInputBuffer<'_>, first: char) -> String {
    let mut text = String::new();
    text.push(first);
    let mut seen_dot = first == '.';
    loop {
        match input.consume_char() {
            Ok(c) if c.is_ascii_digit() => text.push(c),
            Ok('.') if !seen_dot => {
                seen_dot = true;
                text.push('.');
            }
            Ok(_) => {
                input.step_back();
                return text;
            }
            Err(_) => return text,
        }
    }
}
