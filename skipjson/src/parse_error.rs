// SPDX-License-Identifier: Apache-2.0

use crate::token::Token;

/// Errors that can occur during lexing or parsing.
///
/// The first error aborts the whole parse; no partial value is ever
/// returned alongside it.
#[derive(Clone, Debug, PartialEq)]
pub enum ParseError {
    /// The lexer found a character it cannot classify, or a string or
    /// literal that was cut short or misspelled.
    Lex {
        /// Character index (not byte offset) into the input.
        position: usize,
        character: char,
    },
    /// The token stream does not match the grammar at this point. Premature
    /// end of input and unterminated structures report the first token of
    /// the stream being parsed.
    Syntax {
        /// `None` only when the stream was empty and there was nothing to blame.
        token: Option<Token>,
    },
}

impl ParseError {
    pub(crate) fn lex<T>(position: usize, character: char) -> Result<T, Self> {
        Err(ParseError::Lex {
            position,
            character,
        })
    }

    pub(crate) fn syntax(token: &Token) -> Self {
        ParseError::Syntax {
            token: Some(token.clone()),
        }
    }

    /// Error for a stream that ended before its structure was closed.
    pub(crate) fn unterminated(tokens: &[Token]) -> Self {
        ParseError::Syntax {
            token: tokens.first().cloned(),
        }
    }

    /// The offending token of a syntax error.
    pub fn token(&self) -> Option<&Token> {
        match self {
            ParseError::Syntax { token } => token.as_ref(),
            ParseError::Lex { .. } => None,
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::Lex {
                position,
                character,
            } => write!(
                f,
                "Error in json at position {position} with char: '{character}'."
            ),
            ParseError::Syntax { token: Some(token) } => {
                write!(f, "Error in json at part: {token}")
            }
            ParseError::Syntax { token: None } => {
                write!(f, "Error in json at part: <end of input>")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}
